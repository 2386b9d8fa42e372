//! Which pairs of cards the host lights up when the player clicks one.

use crate::rules::cards::{Card, RANKS_PER_SUIT};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HighlightRule {
    /// Same rank, or adjacent ranks of one suit.
    SameRankOrSuitNeighbour,
    /// Opposite colors, same or adjacent rank.
    AltColorSameOrNeighbour,
    SameRankOrNeighbour,
    /// Adjacent ranks, King next to Ace.
    WrappingNeighbour,
    Neighbour,
    AltColorNeighbour,
}

impl HighlightRule {
    /// Symmetric in `a` and `b`.
    pub fn matches(self, a: Card, b: Card) -> bool {
        let distance = a.rank.distance(b.rank);
        match self {
            Self::SameRankOrSuitNeighbour => {
                distance == 0 || (a.suit == b.suit && distance == 1)
            }
            Self::AltColorSameOrNeighbour => a.color() != b.color() && distance <= 1,
            Self::SameRankOrNeighbour => distance <= 1,
            Self::WrappingNeighbour => {
                let modulus = Some(RANKS_PER_SUIT);
                a.rank.offset(1, modulus) == Some(b.rank)
                    || b.rank.offset(1, modulus) == Some(a.rank)
            }
            Self::Neighbour => distance == 1,
            Self::AltColorNeighbour => a.color() != b.color() && distance == 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card;

    #[test]
    fn same_rank_or_suit_neighbour_test() {
        let rule = HighlightRule::SameRankOrSuitNeighbour;
        assert!(rule.matches(card!("7S"), card!("7H")));
        assert!(rule.matches(card!("7S"), card!("8S")));
        assert!(!rule.matches(card!("7S"), card!("8H")));
    }

    #[test]
    fn color_rules_test() {
        assert!(HighlightRule::AltColorSameOrNeighbour.matches(card!("7S"), card!("7D")));
        assert!(HighlightRule::AltColorSameOrNeighbour.matches(card!("6H"), card!("7C")));
        assert!(!HighlightRule::AltColorSameOrNeighbour.matches(card!("6C"), card!("7C")));

        assert!(HighlightRule::AltColorNeighbour.matches(card!("8D"), card!("9S")));
        assert!(!HighlightRule::AltColorNeighbour.matches(card!("9D"), card!("9S")));
    }

    #[test]
    fn neighbour_rules_test() {
        assert!(HighlightRule::SameRankOrNeighbour.matches(card!("QC"), card!("QC")));
        assert!(HighlightRule::SameRankOrNeighbour.matches(card!("QC"), card!("JD")));
        assert!(!HighlightRule::Neighbour.matches(card!("QC"), card!("QD")));
        assert!(!HighlightRule::Neighbour.matches(card!("KC"), card!("AD")));
        assert!(HighlightRule::WrappingNeighbour.matches(card!("KC"), card!("AD")));
        assert!(HighlightRule::WrappingNeighbour.matches(card!("AD"), card!("KC")));
        assert!(!HighlightRule::WrappingNeighbour.matches(card!("QC"), card!("AD")));
    }

    #[test]
    fn symmetric_test() {
        let rules = [
            HighlightRule::SameRankOrSuitNeighbour,
            HighlightRule::AltColorSameOrNeighbour,
            HighlightRule::SameRankOrNeighbour,
            HighlightRule::WrappingNeighbour,
            HighlightRule::Neighbour,
            HighlightRule::AltColorNeighbour,
        ];
        let pairs = [("KS", "AH"), ("5D", "6D"), ("9C", "9H"), ("2S", "3H")];
        for rule in rules {
            for (a, b) in pairs {
                assert_eq!(
                    rule.matches(Card::from_ident(a), Card::from_ident(b)),
                    rule.matches(Card::from_ident(b), Card::from_ident(a))
                );
            }
        }
    }
}
