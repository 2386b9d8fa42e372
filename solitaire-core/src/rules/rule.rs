//! Configuration values describing how a single stack behaves.
//!
//! A `StackRule` is fixed when a game variant is defined and never changes
//! afterwards. Everything variant-specific about accepting and giving up
//! cards is expressed by picking values from the small enums below.

use crate::rules::cards::{Card, Color, Rank, Suit};

/// Rank an empty stack requires for its first card.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BaseRank {
    Any,
    Rank(Rank),
    /// An empty stack never accepts cards.
    None,
}

impl BaseRank {
    pub fn admits(self, rank: Rank) -> bool {
        match self {
            Self::Any => true,
            Self::Rank(base) => base == rank,
            Self::None => false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
    Unconstrained,
}

impl Direction {
    pub fn step(self) -> Option<i16> {
        match self {
            Self::Down => Some(-1),
            Self::Up => Some(1),
            Self::Unconstrained => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorConstraint {
    None,
    Same,
    Alternating,
}

impl ColorConstraint {
    pub fn holds(self, lower: Color, upper: Color) -> bool {
        match self {
            Self::None => true,
            Self::Same => lower == upper,
            Self::Alternating => lower != upper,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SuitConstraint {
    None,
    Same,
}

impl SuitConstraint {
    pub fn holds(self, lower: Suit, upper: Suit) -> bool {
        match self {
            Self::None => true,
            Self::Same => lower == upper,
        }
    }
}

/// Whether a card of the same rank as the top card may be placed on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EqualRank {
    Disallowed,
    /// Allowed, still subject to the color and suit constraints.
    Allowed,
    /// Allowed whatever the color and suit constraints say.
    AnySuit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Limit {
    Unlimited,
    AtMost(usize),
}

impl Limit {
    pub fn allows(self, n: usize) -> bool {
        match self {
            Self::Unlimited => true,
            Self::AtMost(max) => n <= max,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveLimit {
    Unlimited,
    AtMost(usize),
    /// Supermove: the cap depends on free reserves and empty rows, so it can
    /// only be resolved against a table.
    FreeCells,
}

impl MoveLimit {
    /// The part of the limit that does not depend on the table.
    pub fn fixed(self) -> Limit {
        match self {
            Self::Unlimited | Self::FreeCells => Limit::Unlimited,
            Self::AtMost(max) => Limit::AtMost(max),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AcceptGate {
    Always,
    TalonEmpty,
}

/// The relation between a card and the card placed directly on top of it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BuildRule {
    pub direction: Direction,
    /// Wraparound for rank arithmetic, e.g. 13 lets an Ace follow a King.
    pub modulus: Option<u8>,
    pub color: ColorConstraint,
    pub suit: SuitConstraint,
}

impl BuildRule {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            modulus: None,
            color: ColorConstraint::None,
            suit: SuitConstraint::None,
        }
    }

    /// Build by rank alone; no color or suit requirement.
    pub fn rank(direction: Direction) -> Self {
        Self::new(direction)
    }

    pub fn same_suit(direction: Direction) -> Self {
        Self::new(direction).with_suit(SuitConstraint::Same)
    }

    pub fn alternate_color(direction: Direction) -> Self {
        Self::new(direction).with_color(ColorConstraint::Alternating)
    }

    pub fn unconstrained() -> Self {
        Self::new(Direction::Unconstrained)
    }

    #[must_use]
    pub fn with_modulus(mut self, modulus: u8) -> Self {
        self.modulus = Some(modulus);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ColorConstraint) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_suit(mut self, suit: SuitConstraint) -> Self {
        self.suit = suit;
        self
    }

    pub fn colors_match(&self, lower: Card, upper: Card) -> bool {
        self.color.holds(lower.color(), upper.color()) && self.suit.holds(lower.suit, upper.suit)
    }

    /// True when `upper` is exactly one step from `lower` in this rule's
    /// direction. Always true for an unconstrained direction.
    pub fn rank_follows(&self, lower: Rank, upper: Rank) -> bool {
        match self.direction.step() {
            None => true,
            Some(step) => lower.offset(step, self.modulus) == Some(upper),
        }
    }

    /// `upper` may lie directly on `lower`.
    pub fn follows(&self, lower: Card, upper: Card) -> bool {
        self.colors_match(lower, upper) && self.rank_follows(lower.rank, upper.rank)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackRule {
    pub base_rank: BaseRank,
    pub build: BuildRule,
    pub equal_rank: EqualRank,
    /// Every card entering the stack must have this suit.
    pub suit: Option<Suit>,
    /// Rule a pile leaving the stack must satisfy. `None` lets only single
    /// cards (and the whole stack, when enabled) go.
    pub movable: Option<BuildRule>,
    pub whole_stack_moves: bool,
    pub max_move: MoveLimit,
    pub max_accept: Limit,
    pub max_cards: Limit,
    /// Cards that must stay behind when a pile is taken away.
    pub min_cards: usize,
    pub gate: AcceptGate,
}

impl StackRule {
    /// A tableau row building with `build`. Piles that follow the same rule
    /// are movable, one card at a time unless a larger `max_move` is set.
    pub fn row(build: BuildRule) -> Self {
        Self {
            base_rank: BaseRank::Any,
            build,
            equal_rank: EqualRank::Disallowed,
            suit: None,
            movable: Some(build),
            whole_stack_moves: false,
            max_move: MoveLimit::AtMost(1),
            max_accept: Limit::Unlimited,
            max_cards: Limit::Unlimited,
            min_cards: 0,
            gate: AcceptGate::Always,
        }
    }

    /// A foundation starting at Ace and building with `build`, one card at a
    /// time, up to a full suit.
    pub fn foundation(build: BuildRule) -> Self {
        Self {
            base_rank: BaseRank::Rank(Rank::Ace),
            build,
            equal_rank: EqualRank::Disallowed,
            suit: None,
            movable: None,
            whole_stack_moves: false,
            max_move: MoveLimit::AtMost(1),
            max_accept: Limit::AtMost(1),
            max_cards: Limit::AtMost(13),
            min_cards: 0,
            gate: AcceptGate::Always,
        }
    }

    /// An Ace-to-King foundation for a single suit.
    pub fn suit_foundation(suit: Suit) -> Self {
        Self::foundation(BuildRule::same_suit(Direction::Up)).with_suit(suit)
    }

    /// A free cell: holds any one card.
    pub fn reserve() -> Self {
        Self {
            base_rank: BaseRank::Any,
            build: BuildRule::unconstrained(),
            equal_rank: EqualRank::Disallowed,
            suit: None,
            movable: None,
            whole_stack_moves: false,
            max_move: MoveLimit::AtMost(1),
            max_accept: Limit::AtMost(1),
            max_cards: Limit::AtMost(1),
            min_cards: 0,
            gate: AcceptGate::Always,
        }
    }

    /// Accepts nothing and gives up nothing.
    pub fn closed() -> Self {
        Self {
            base_rank: BaseRank::None,
            build: BuildRule::unconstrained(),
            equal_rank: EqualRank::Disallowed,
            suit: None,
            movable: None,
            whole_stack_moves: false,
            max_move: MoveLimit::AtMost(0),
            max_accept: Limit::AtMost(0),
            max_cards: Limit::Unlimited,
            min_cards: 0,
            gate: AcceptGate::Always,
        }
    }

    /// Accepts nothing by drag but gives up its top card, like a waste pile.
    pub fn open() -> Self {
        Self::closed().with_max_move(MoveLimit::AtMost(1))
    }

    #[must_use]
    pub fn with_base_rank(mut self, base_rank: BaseRank) -> Self {
        self.base_rank = base_rank;
        self
    }

    #[must_use]
    pub fn with_equal_rank(mut self, equal_rank: EqualRank) -> Self {
        self.equal_rank = equal_rank;
        self
    }

    #[must_use]
    pub fn with_suit(mut self, suit: Suit) -> Self {
        self.suit = Some(suit);
        self
    }

    #[must_use]
    pub fn with_movable(mut self, movable: Option<BuildRule>) -> Self {
        self.movable = movable;
        self
    }

    #[must_use]
    pub fn with_whole_stack_moves(mut self) -> Self {
        self.whole_stack_moves = true;
        self
    }

    #[must_use]
    pub fn with_max_move(mut self, max_move: MoveLimit) -> Self {
        self.max_move = max_move;
        self
    }

    #[must_use]
    pub fn with_max_accept(mut self, max_accept: Limit) -> Self {
        self.max_accept = max_accept;
        self
    }

    #[must_use]
    pub fn with_max_cards(mut self, max_cards: Limit) -> Self {
        self.max_cards = max_cards;
        self
    }

    #[must_use]
    pub fn with_min_cards(mut self, min_cards: usize) -> Self {
        self.min_cards = min_cards;
        self
    }

    #[must_use]
    pub fn with_gate(mut self, gate: AcceptGate) -> Self {
        self.gate = gate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card;

    #[test]
    fn base_rank_test() {
        assert!(BaseRank::Any.admits(Rank::Five));
        assert!(BaseRank::Rank(Rank::King).admits(Rank::King));
        assert!(!BaseRank::Rank(Rank::King).admits(Rank::Queen));
        assert!(!BaseRank::None.admits(Rank::King));
    }

    #[test]
    fn follows_test() {
        let ac = BuildRule::alternate_color(Direction::Down);
        assert!(ac.follows(card!("8S"), card!("7H")));
        assert!(!ac.follows(card!("8S"), card!("7C")));
        assert!(!ac.follows(card!("8S"), card!("6H")));

        let ss = BuildRule::same_suit(Direction::Up);
        assert!(ss.follows(card!("AH"), card!("2H")));
        assert!(!ss.follows(card!("AH"), card!("2D")));
        assert!(!ss.follows(card!("KH"), card!("AH")));
        assert!(ss.with_modulus(13).follows(card!("KH"), card!("AH")));

        let any = BuildRule::unconstrained();
        assert!(any.follows(card!("2C"), card!("JD")));
    }

    #[test]
    fn limit_test() {
        assert!(Limit::Unlimited.allows(usize::MAX));
        assert!(Limit::AtMost(1).allows(1));
        assert!(!Limit::AtMost(1).allows(2));
        assert!(!Limit::AtMost(0).allows(1));
        assert_eq!(MoveLimit::FreeCells.fixed(), Limit::Unlimited);
        assert_eq!(MoveLimit::AtMost(3).fixed(), Limit::AtMost(3));
    }
}
