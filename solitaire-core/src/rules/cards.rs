use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use rand::prelude::{Rng, SliceRandom};
use static_assertions::const_assert;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, FromRepr};

use crate::rules::error::{Error, Result};

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Spades = 1,
    Hearts = 2,
    Diamonds = 3,
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
}

impl Suit {
    pub fn color(self) -> Color {
        match self {
            Self::Clubs | Self::Spades => Color::Black,
            Self::Hearts | Self::Diamonds => Color::Red,
        }
    }

    fn symbol(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
        }
    }
}

/// Card ranks, Ace low. The discriminant is the ordinal used by every rank
/// comparison, including round-the-corner arithmetic.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Deuce = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

pub const RANKS_PER_SUIT: u8 = 13;
pub const CARDS_PER_DECK: usize = 52;

const_assert!(Rank::King as u8 + 1 == RANKS_PER_SUIT);
const_assert!(RANKS_PER_SUIT as usize * 4 == CARDS_PER_DECK);

impl Rank {
    /// The rank `step` places away from this one. With a modulus the result
    /// wraps (King + 1 is Ace under modulus 13); without one, stepping off
    /// either end yields `None`.
    pub fn offset(self, step: i16, modulus: Option<u8>) -> Option<Self> {
        let next = self as i16 + step;
        let next = match modulus {
            Some(modulus) if modulus > 0 => next.rem_euclid(i16::from(modulus)),
            _ => next,
        };
        u8::try_from(next).ok().and_then(Self::from_repr)
    }

    pub fn distance(self, other: Self) -> u8 {
        (self as u8).abs_diff(other as u8)
    }

    fn symbol(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::Deuce => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn color(self) -> Color {
        self.suit.color()
    }

    /// Convert a shorthand identifier into a card. Panics if the identifier
    /// is incorrect. This exists only for test-writing; use `str::parse`
    /// anywhere the input is not trusted.
    ///
    /// ```
    /// # use solitaire_core::prelude::{Card, Suit, Rank};
    /// let a = Card::from_ident("KH");
    /// let b = Card {
    ///     rank: Rank::King,
    ///     suit: Suit::Hearts,
    /// };
    /// assert_eq!(a, b);
    /// ```
    pub fn from_ident(ident: &str) -> Self {
        match ident.parse() {
            Ok(card) => card,
            Err(err) => panic!("{err}"),
        }
    }
}

impl FromStr for Card {
    type Err = Error;

    fn from_str(ident: &str) -> Result<Self> {
        let invalid = || Error::InvalidCard(ident.to_owned());

        let mut chars = ident.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let rank = match rank.to_ascii_uppercase() {
            'A' => Rank::Ace,
            '2' => Rank::Deuce,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            _ => return Err(invalid()),
        };

        let suit = match suit.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'S' => Suit::Spades,
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            _ => return Err(invalid()),
        };

        Ok(Self { rank, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[macro_export]
macro_rules! card {
    ($ident:literal) => {
        $crate::rules::cards::Card::from_ident($ident)
    };
}

pub trait CardView {
    fn view(&self) -> &[Card];
}

impl CardView for [Card] {
    fn view(&self) -> &[Card] {
        self
    }
}

impl CardView for Vec<Card> {
    fn view(&self) -> &[Card] {
        self
    }
}

/// The cards of one or more shuffled decks. The top of the deck is the end
/// of the vector, so `draw` hands cards out in dealing order.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

lazy_static! {
    static ref BASE_DECK_CARDS: Vec<Card> = {
        let mut cards = Vec::with_capacity(CARDS_PER_DECK);
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card { rank, suit });
            }
        }
        cards
    };
}

impl Deck {
    pub fn base_deck() -> Self {
        Self {
            cards: BASE_DECK_CARDS.clone(),
        }
    }

    pub fn standard(decks: u8) -> Self {
        let mut cards = Vec::with_capacity(CARDS_PER_DECK * usize::from(decks));
        for _ in 0..decks {
            cards.extend_from_slice(&BASE_DECK_CARDS);
        }
        Self { cards }
    }

    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    pub fn shuffled(decks: u8, rng: &mut impl Rng) -> Self {
        let mut deck = Self::standard(decks);
        deck.shuffle(rng);
        deck
    }

    /// Move the first card of `rank`, counting from the bottom, to the top
    /// so that it is the next card drawn. Returns whether such a card was
    /// found.
    pub fn raise_first(&mut self, rank: Rank) -> bool {
        let Some(index) = self.cards.iter().position(|card| card.rank == rank) else {
            return false;
        };
        let card = self.cards.remove(index);
        self.cards.push(card);
        true
    }

    pub fn peek_top_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl CardView for Deck {
    fn view(&self) -> &[Card] {
        &self.cards
    }
}

/// An ordered run of cards, bottom card first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    cards: Vec<Card>,
}

impl Sequence {
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Convert a series of shorthand identifiers into a `Sequence`.
    /// Panics if the input is incorrect. This exists only for test-writing.
    ///
    /// ```
    /// # use solitaire_core::prelude::{Suit, Rank, Card, Sequence};
    /// let cards = Sequence::from_idents("KH TD JS 2C");
    /// assert_eq!(cards.nth(2), Some(Card {
    ///     rank: Rank::Jack,
    ///     suit: Suit::Spades,
    /// }));
    /// ```
    pub fn from_idents(idents: &str) -> Self {
        idents
            .split_ascii_whitespace()
            .map(Card::from_ident)
            .collect()
    }

    pub fn nth(&self, n: usize) -> Option<Card> {
        self.cards.get(n).copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[macro_export]
macro_rules! cards {
    ($ident:literal) => {
        $crate::rules::cards::Sequence::from_idents($ident)
    };
}

impl From<&[Card]> for Sequence {
    fn from(value: &[Card]) -> Self {
        Self {
            cards: Vec::from(value),
        }
    }
}

impl std::iter::FromIterator<Card> for Sequence {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl CardView for Sequence {
    fn view(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn base_deck_test() {
        let mut seen = HashSet::new();
        let deck = Deck::base_deck();
        for card in deck.cards {
            seen.insert(card);
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn double_deck_test() {
        let mut rng = SmallRng::seed_from_u64(7);
        let deck = Deck::shuffled(2, &mut rng);
        assert_eq!(deck.count(), 104);
        let distinct: HashSet<_> = deck.view().iter().collect();
        assert_eq!(distinct.len(), 52);
    }

    #[test]
    fn deck_draw_test() {
        let mut seen = HashSet::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut deck = Deck::shuffled(1, &mut rng);
        for _ in 0..52 {
            seen.insert(deck.draw());
        }
        assert_eq!(seen.len(), 52);
        assert_eq!(deck.count(), 0);
        assert_eq!(deck.peek_top_card(), None);
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn raise_first_test() {
        let mut deck = Deck::from(cards!("KS 2H KD 9C").view().to_vec());
        assert!(deck.raise_first(Rank::King));
        assert_eq!(deck.view(), cards!("2H KD 9C KS").view());
        assert!(!deck.raise_first(Rank::Queen));
    }

    #[test]
    fn parse_test() {
        assert_eq!("td".parse::<Card>().unwrap(), card!("TD"));
        assert!("1S".parse::<Card>().is_err());
        assert!("KX".parse::<Card>().is_err());
        assert!("KHS".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
        assert_eq!(card!("QC").to_string(), "QC");
    }

    #[test]
    fn color_test() {
        assert_eq!(card!("AS").color(), Color::Black);
        assert_eq!(card!("AC").color(), Color::Black);
        assert_eq!(card!("AH").color(), Color::Red);
        assert_eq!(card!("AD").color(), Color::Red);
    }

    #[test]
    fn offset_test() {
        assert_eq!(Rank::Seven.offset(-1, None), Some(Rank::Six));
        assert_eq!(Rank::King.offset(1, None), None);
        assert_eq!(Rank::Ace.offset(-1, None), None);
        assert_eq!(Rank::King.offset(1, Some(13)), Some(Rank::Ace));
        assert_eq!(Rank::Ace.offset(-1, Some(13)), Some(Rank::King));
        assert_eq!(Rank::Four.distance(Rank::Six), 2);
    }
}
