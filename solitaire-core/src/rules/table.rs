//! The stacks of one game session and the table-level move queries.
//!
//! `Stack` owns its cards; the rules only ever read them. The host engine
//! mutates stacks through `push`, `pop`, `take` and friends after it has
//! asked `Table::can_drop` whether a move is legal.

use std::fmt;

use strum::IntoEnumIterator;

use crate::rules::acceptance::{accepts, can_move_cards};
use crate::rules::cards::{Card, CardView, Suit};
use crate::rules::error::{Error, Result};
use crate::rules::rule::{AcceptGate, BaseRank, Limit, MoveLimit, StackRule};

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum StackId {
    Talon,
    Waste,
    Foundation(usize),
    Row(usize),
    Reserve(usize),
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum StackRole {
    Talon,
    Waste,
    Foundation,
    Row,
    Reserve,
}

impl StackId {
    pub fn role(self) -> StackRole {
        match self {
            Self::Talon => StackRole::Talon,
            Self::Waste => StackRole::Waste,
            Self::Foundation(_) => StackRole::Foundation,
            Self::Row(_) => StackRole::Row,
            Self::Reserve(_) => StackRole::Reserve,
        }
    }
}

impl fmt::Display for StackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Talon => write!(f, "talon"),
            Self::Waste => write!(f, "waste"),
            Self::Foundation(i) => write!(f, "foundation {}", i + 1),
            Self::Row(i) => write!(f, "row {}", i + 1),
            Self::Reserve(i) => write!(f, "reserve {}", i + 1),
        }
    }
}

/// How the host should spread a stack's cards on screen. Carries no rule
/// meaning.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Fan {
    #[default]
    Squared,
    Vertical,
    /// Fan downwards for this many cards, then sideways.
    VerticalThenHorizontal(usize),
}

#[derive(Clone, Debug)]
pub struct Stack {
    id: StackId,
    rule: StackRule,
    fan: Fan,
    cards: Vec<Card>,
    // Face-down cards always sit at the bottom.
    face_down: usize,
}

impl Stack {
    pub fn new(id: StackId, rule: StackRule) -> Self {
        Self {
            id,
            rule,
            fan: Fan::default(),
            cards: Vec::new(),
            face_down: 0,
        }
    }

    #[must_use]
    pub fn with_fan(mut self, fan: Fan) -> Self {
        self.fan = fan;
        self
    }

    pub fn id(&self) -> StackId {
        self.id
    }

    pub fn rule(&self) -> &StackRule {
        &self.rule
    }

    pub fn fan(&self) -> Fan {
        self.fan
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn face_down(&self) -> usize {
        self.face_down
    }

    pub fn face_up_cards(&self) -> &[Card] {
        &self.cards[self.face_down..]
    }

    pub fn top_is_face_down(&self) -> bool {
        !self.cards.is_empty() && self.face_down == self.cards.len()
    }

    /// The top `n` cards, bottom card first.
    pub fn top_n(&self, n: usize) -> Option<&[Card]> {
        let start = self.cards.len().checked_sub(n)?;
        Some(&self.cards[start..])
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn push_face_down(&mut self, card: Card) -> Result<()> {
        if self.face_down != self.cards.len() {
            return Err(Error::FaceDownOverFaceUp(self.id));
        }
        self.cards.push(card);
        self.face_down += 1;
        Ok(())
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub fn pop(&mut self) -> Option<Card> {
        let card = self.cards.pop()?;
        self.face_down = self.face_down.min(self.cards.len());
        Some(card)
    }

    /// Remove the top `n` cards, keeping their order.
    pub fn take(&mut self, n: usize) -> Option<Vec<Card>> {
        let start = self.cards.len().checked_sub(n)?;
        let taken = self.cards.split_off(start);
        self.face_down = self.face_down.min(self.cards.len());
        Some(taken)
    }

    /// Turn the top card face up. Returns false when it already was.
    pub fn flip_top(&mut self) -> bool {
        if self.top_is_face_down() {
            self.face_down -= 1;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.face_down = 0;
    }

    /// Whether this stack takes `incoming`, ignoring table-wide context.
    pub fn accepts(&self, incoming: &[Card]) -> bool {
        !self.top_is_face_down() && accepts(&self.cards, &self.rule, incoming)
    }

    /// Whether the top `n` cards may be picked up, ignoring table-wide
    /// context.
    pub fn can_move(&self, n: usize) -> bool {
        n <= self.face_up_cards().len()
            && self
                .top_n(n)
                .is_some_and(|pile| can_move_cards(&self.cards, &self.rule, pile))
    }
}

impl CardView for Stack {
    fn view(&self) -> &[Card] {
        &self.cards
    }
}

/// Which stacks a game uses and the rule for each.
#[derive(Clone, Debug)]
pub struct Layout {
    pub rows: usize,
    pub row_rule: StackRule,
    pub row_fan: Fan,
    pub foundations: Vec<StackRule>,
    pub reserves: usize,
    pub talon_rule: StackRule,
    pub waste: bool,
}

impl Layout {
    pub fn new(rows: usize, row_rule: StackRule) -> Self {
        Self {
            rows,
            row_rule,
            row_fan: Fan::Vertical,
            foundations: Vec::new(),
            reserves: 0,
            talon_rule: StackRule::closed(),
            waste: false,
        }
    }

    #[must_use]
    pub fn with_foundations(mut self, foundations: Vec<StackRule>) -> Self {
        self.foundations = foundations;
        self
    }

    /// One Ace-to-King foundation per suit and deck, grouped by suit.
    #[must_use]
    pub fn with_suit_foundations(self, decks: u8) -> Self {
        let foundations = Suit::iter()
            .flat_map(|suit| (0..decks).map(move |_| StackRule::suit_foundation(suit)))
            .collect();
        self.with_foundations(foundations)
    }

    #[must_use]
    pub fn with_reserves(mut self, reserves: usize) -> Self {
        self.reserves = reserves;
        self
    }

    #[must_use]
    pub fn with_talon_rule(mut self, talon_rule: StackRule) -> Self {
        self.talon_rule = talon_rule;
        self
    }

    #[must_use]
    pub fn with_waste(mut self) -> Self {
        self.waste = true;
        self
    }

    #[must_use]
    pub fn with_row_fan(mut self, row_fan: Fan) -> Self {
        self.row_fan = row_fan;
        self
    }
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Move {
    pub from: StackId,
    pub to: StackId,
    pub ncards: usize,
}

#[derive(Clone, Debug)]
pub struct Table {
    talon: Stack,
    waste: Option<Stack>,
    foundations: Vec<Stack>,
    rows: Vec<Stack>,
    reserves: Vec<Stack>,
}

impl Table {
    pub fn new(layout: &Layout) -> Self {
        Self {
            talon: Stack::new(StackId::Talon, layout.talon_rule.clone()),
            waste: layout
                .waste
                .then(|| Stack::new(StackId::Waste, StackRule::open())),
            foundations: layout
                .foundations
                .iter()
                .enumerate()
                .map(|(i, rule)| Stack::new(StackId::Foundation(i), rule.clone()))
                .collect(),
            rows: (0..layout.rows)
                .map(|i| {
                    Stack::new(StackId::Row(i), layout.row_rule.clone()).with_fan(layout.row_fan)
                })
                .collect(),
            reserves: (0..layout.reserves)
                .map(|i| Stack::new(StackId::Reserve(i), StackRule::reserve()))
                .collect(),
        }
    }

    pub fn talon(&self) -> &Stack {
        &self.talon
    }

    pub fn waste(&self) -> Option<&Stack> {
        self.waste.as_ref()
    }

    pub fn foundations(&self) -> &[Stack] {
        &self.foundations
    }

    pub fn rows(&self) -> &[Stack] {
        &self.rows
    }

    pub fn reserves(&self) -> &[Stack] {
        &self.reserves
    }

    pub fn stack(&self, id: StackId) -> Option<&Stack> {
        match id {
            StackId::Talon => Some(&self.talon),
            StackId::Waste => self.waste.as_ref(),
            StackId::Foundation(i) => self.foundations.get(i),
            StackId::Row(i) => self.rows.get(i),
            StackId::Reserve(i) => self.reserves.get(i),
        }
    }

    pub fn stack_mut(&mut self, id: StackId) -> Result<&mut Stack> {
        let stack = match id {
            StackId::Talon => Some(&mut self.talon),
            StackId::Waste => self.waste.as_mut(),
            StackId::Foundation(i) => self.foundations.get_mut(i),
            StackId::Row(i) => self.rows.get_mut(i),
            StackId::Reserve(i) => self.reserves.get_mut(i),
        };
        stack.ok_or(Error::NoSuchStack(id))
    }

    /// Every stack: talon, waste, foundations, rows, then reserves.
    pub fn stacks(&self) -> impl Iterator<Item = &Stack> {
        std::iter::once(&self.talon)
            .chain(self.waste.iter())
            .chain(self.foundations.iter())
            .chain(self.rows.iter())
            .chain(self.reserves.iter())
    }

    pub fn card_count(&self) -> usize {
        self.stacks().map(Stack::len).sum()
    }

    pub fn free_reserves(&self) -> usize {
        self.reserves.iter().filter(|stack| stack.is_empty()).count()
    }

    pub fn empty_rows(&self) -> usize {
        self.rows.iter().filter(|stack| stack.is_empty()).count()
    }

    /// Resolve a stack's move limit against the table. `target_len` is the
    /// size of the stack the pile would land on.
    fn move_limit(&self, rule: &StackRule, target_len: usize) -> Limit {
        if rule.max_move != MoveLimit::FreeCells {
            return rule.max_move.fixed();
        }

        let max_move = self.free_reserves() + 1;
        if rule.base_rank != BaseRank::Any {
            return Limit::AtMost(max_move);
        }
        let mut free_rows = self.empty_rows();
        if target_len == 0 {
            free_rows = free_rows.saturating_sub(1);
        }
        let doubled = u32::try_from(free_rows)
            .ok()
            .and_then(|shift| max_move.checked_shl(shift))
            .unwrap_or(usize::MAX);
        Limit::AtMost(doubled)
    }

    /// Whether the top `n` cards of `from` may be picked up.
    pub fn can_move(&self, from: StackId, n: usize) -> bool {
        let Some(source) = self.stack(from) else {
            return false;
        };
        source.can_move(n) && self.move_limit(source.rule(), 1).allows(n)
    }

    /// Whether the top `n` cards of `from` may be dropped onto `to`.
    pub fn can_drop(&self, from: StackId, n: usize, to: StackId) -> bool {
        if from == to || !self.can_move(from, n) {
            return false;
        }
        let (Some(source), Some(target)) = (self.stack(from), self.stack(to)) else {
            return false;
        };
        if target.rule().gate == AcceptGate::TalonEmpty && !self.talon.is_empty() {
            return false;
        }
        if !self.move_limit(source.rule(), target.len()).allows(n) {
            return false;
        }
        source
            .top_n(n)
            .is_some_and(|pile| target.accepts(pile))
    }

    /// Every legal drag-and-drop move, in stack order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for source in self.stacks() {
            for ncards in 1..=source.face_up_cards().len() {
                if !self.can_move(source.id(), ncards) {
                    continue;
                }
                for target in self.stacks() {
                    if self.can_drop(source.id(), ncards, target.id()) {
                        moves.push(Move {
                            from: source.id(),
                            to: target.id(),
                            ncards,
                        });
                    }
                }
            }
        }
        moves
    }
}
