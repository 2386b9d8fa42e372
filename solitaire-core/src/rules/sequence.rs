//! Sequence classification: does a run of cards form a unit that may be
//! dragged as one?

use itertools::Itertools;

use crate::rules::cards::Card;
use crate::rules::rule::{BuildRule, Direction};

/// Decide whether `cards` (bottom card first) may be moved as a group under
/// `rule`.
///
/// With an unconstrained direction the run must either share one rank or be
/// a same-suit run descending by exactly one rank per card, without wrapping.
/// Otherwise every adjacent pair must satisfy the rule's color, suit and rank
/// step, wrapping at the rule's modulus.
pub fn is_movable_sequence(cards: &[Card], rule: &BuildRule) -> bool {
    match cards {
        [] => false,
        [_] => true,
        _ if rule.direction == Direction::Unconstrained => {
            is_same_rank_pile(cards) || is_same_suit_sequence(cards)
        }
        _ => cards
            .iter()
            .tuple_windows()
            .all(|(lower, upper)| rule.follows(*lower, *upper)),
    }
}

pub fn is_same_rank_pile(cards: &[Card]) -> bool {
    match cards.first() {
        None => false,
        Some(first) => cards.iter().all(|card| card.rank == first.rank),
    }
}

/// Same suit, descending one rank at a time, no wraparound.
pub fn is_same_suit_sequence(cards: &[Card]) -> bool {
    run_follows(cards, &BuildRule::same_suit(Direction::Down))
}

pub fn is_rank_sequence(cards: &[Card], direction: Direction, modulus: Option<u8>) -> bool {
    let mut rule = BuildRule::rank(direction);
    rule.modulus = modulus;
    run_follows(cards, &rule)
}

pub fn is_alternate_color_sequence(
    cards: &[Card],
    direction: Direction,
    modulus: Option<u8>,
) -> bool {
    let mut rule = BuildRule::alternate_color(direction);
    rule.modulus = modulus;
    run_follows(cards, &rule)
}

fn run_follows(cards: &[Card], rule: &BuildRule) -> bool {
    !cards.is_empty()
        && cards
            .iter()
            .tuple_windows()
            .all(|(lower, upper)| rule.follows(*lower, *upper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards;
    use crate::rules::cards::{CardView, Sequence};

    fn movable(idents: &str, rule: &BuildRule) -> bool {
        is_movable_sequence(Sequence::from_idents(idents).view(), rule)
    }

    #[test]
    fn empty_and_single_test() {
        let rule = BuildRule::alternate_color(Direction::Down);
        assert!(!movable("", &rule));
        assert!(movable("QD", &rule));
        assert!(movable("QD", &BuildRule::unconstrained()));
    }

    #[test]
    fn unconstrained_same_rank_test() {
        let rule = BuildRule::unconstrained();
        assert!(movable("7S 7H", &rule));
        assert!(movable("7C 7C 7D", &rule));
        assert!(!movable("7C 6D", &rule));
    }

    #[test]
    fn unconstrained_same_suit_run_test() {
        let rule = BuildRule::unconstrained();
        assert!(movable("7S 6S 5S", &rule));
        assert!(!movable("7S 6H 5S", &rule));
        assert!(!movable("5S 6S 7S", &rule));
        assert!(!movable("7S 5S", &rule));
        assert!(!movable("AS KS", &rule));
    }

    #[test]
    fn alternate_color_test() {
        let rule = BuildRule::alternate_color(Direction::Down);
        assert!(movable("9H 8S 7D 6C", &rule));
        assert!(!movable("9H 8D", &rule));
        assert!(!movable("9H 7S", &rule));
        assert!(!movable("AH KS", &rule));
        assert!(movable("AH KS", &rule.with_modulus(13)));
    }

    #[test]
    fn rank_sequence_test() {
        assert!(is_rank_sequence(
            cards!("QH KC AS 2D").view(),
            Direction::Up,
            Some(13)
        ));
        assert!(!is_rank_sequence(
            cards!("QH KC AS").view(),
            Direction::Up,
            None
        ));
        assert!(is_alternate_color_sequence(
            cards!("5H 4S").view(),
            Direction::Down,
            None
        ));
        assert!(!is_same_suit_sequence(&[]));
    }

    #[test]
    fn idempotent_test() {
        let rule = BuildRule::unconstrained();
        let run = cards!("KD QD JD TD");
        let first = is_movable_sequence(run.view(), &rule);
        for _ in 0..8 {
            assert_eq!(is_movable_sequence(run.view(), &rule), first);
        }
        assert!(first);
    }
}
