use std::fmt;

use bitflags::bitflags;
use itertools::Itertools;
use rand::Rng;
use tracing::debug;

use crate::rules::cards::{Card, Deck, CARDS_PER_DECK};
use crate::rules::deal::{self, DealStep, ShuffleHook};
use crate::rules::error::Result;
use crate::rules::fill::{self, FillAction, FillRule, TalonDeal};
use crate::rules::highlight::HighlightRule;
use crate::rules::hint::{compute_hints, Hint, HintStyle};
use crate::rules::table::{Layout, StackId, Table};
use crate::rules::win::WinCondition;

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GameId(pub u32);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct GameType: u32 {
        const OneDeck  = 0b00_0001;
        const TwoDeck  = 0b00_0010;
        const Spider   = 0b00_0100;
        const FreeCell = 0b00_1000;
        /// All cards are dealt face up.
        const Open     = 0b01_0000;
        /// Invented for the collection rather than a traditional game.
        const Original = 0b10_0000;
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter_names().map(|(name, _)| name).join(" | "))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum SkillLevel {
    #[strum(serialize = "balanced")]
    Balanced,
    #[strum(serialize = "mostly luck")]
    MostlyLuck,
    #[strum(serialize = "mostly skill")]
    MostlySkill,
}

#[derive(Clone, Debug)]
pub struct GameInfo {
    pub id: GameId,
    pub name: &'static str,
    pub alt_names: &'static [&'static str],
    pub kind: GameType,
    pub decks: u8,
    pub skill: SkillLevel,
}

impl GameInfo {
    pub fn new(id: u32, name: &'static str, kind: GameType, decks: u8, skill: SkillLevel) -> Self {
        Self {
            id: GameId(id),
            name,
            alt_names: &[],
            kind,
            decks,
            skill,
        }
    }

    #[must_use]
    pub fn with_alt_names(mut self, alt_names: &'static [&'static str]) -> Self {
        self.alt_names = alt_names;
        self
    }

    /// Whether `name` is this game's name or one of its alternatives,
    /// ignoring case.
    pub fn answers_to(&self, name: &str) -> bool {
        std::iter::once(self.name)
            .chain(self.alt_names.iter().copied())
            .any(|candidate| candidate.eq_ignore_ascii_case(name))
    }
}

/// Everything that distinguishes one game from another: its stacks, how
/// they are dealt, and how play is judged.
#[derive(Clone, Debug)]
pub struct GameDef {
    pub info: GameInfo,
    pub layout: Layout,
    pub shuffle: ShuffleHook,
    pub deal: Vec<DealStep>,
    pub talon: TalonDeal,
    pub fill: FillRule,
    pub win: WinCondition,
    pub hint: HintStyle,
    pub highlight: HighlightRule,
}

impl GameDef {
    pub fn new(info: GameInfo, layout: Layout) -> Self {
        Self {
            info,
            layout,
            shuffle: ShuffleHook::None,
            deal: vec![DealStep::rows(true)],
            talon: TalonDeal::None,
            fill: FillRule::None,
            win: WinCondition::AllOnFoundations,
            hint: HintStyle::Default,
            highlight: HighlightRule::SameRankOrNeighbour,
        }
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShuffleHook) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn with_deal(mut self, deal: Vec<DealStep>) -> Self {
        self.deal = deal;
        self
    }

    #[must_use]
    pub fn with_talon(mut self, talon: TalonDeal) -> Self {
        self.talon = talon;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: FillRule) -> Self {
        self.fill = fill;
        self
    }

    #[must_use]
    pub fn with_win(mut self, win: WinCondition) -> Self {
        self.win = win;
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: HintStyle) -> Self {
        self.hint = hint;
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, highlight: HighlightRule) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn id(&self) -> GameId {
        self.info.id
    }

    pub fn name(&self) -> &'static str {
        self.info.name
    }

    pub fn total_cards(&self) -> usize {
        CARDS_PER_DECK * usize::from(self.info.decks)
    }

    pub fn new_table(&self) -> Table {
        Table::new(&self.layout)
    }

    /// Shuffle fresh decks with `rng` and deal them.
    pub fn deal(&self, rng: &mut impl Rng) -> Result<Table> {
        self.deal_deck(Deck::shuffled(self.info.decks, rng))
    }

    /// Deal an already shuffled deck. The shuffle hook still applies.
    pub fn deal_deck(&self, mut deck: Deck) -> Result<Table> {
        self.shuffle.apply(&mut deck);
        let mut table = self.new_table();
        deal::load_talon(&mut table, deck)?;
        deal::run(&mut table, &self.deal)?;
        debug!(
            game = %self.info.id,
            name = self.info.name,
            talon = table.talon().len(),
            "dealt"
        );
        Ok(table)
    }

    pub fn is_won(&self, table: &Table) -> bool {
        self.win.is_won(table, self.total_cards())
    }

    pub fn hints(&self, table: &Table) -> Vec<Hint> {
        compute_hints(table, self.hint)
    }

    pub fn pending_fill(&self, table: &Table) -> Option<FillAction> {
        fill::pending_fill(table, self.fill, self.talon)
    }

    pub fn deal_targets(&self, table: &Table) -> Vec<StackId> {
        fill::deal_targets(table, self.talon)
    }

    pub fn highlight(&self, a: Card, b: Card) -> bool {
        self.highlight.matches(a, b)
    }
}
