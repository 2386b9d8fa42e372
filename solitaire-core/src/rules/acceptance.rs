//! Stack acceptance: may a stack receive a pile, and may it give one up?
//!
//! Both checks are pure functions of the stack's cards, its rule and the
//! pile in question. Anything that needs the rest of the table (free cells,
//! the talon, face-down cards) is layered on top by `Table`.

use tracing::trace;

use crate::rules::cards::Card;
use crate::rules::rule::{EqualRank, StackRule};
use crate::rules::sequence::is_movable_sequence;

/// Decide whether a stack currently holding `stack` (bottom card first) may
/// receive `incoming` under `rule`.
pub fn accepts(stack: &[Card], rule: &StackRule, incoming: &[Card]) -> bool {
    let Some(&bottom) = incoming.first() else {
        return false;
    };

    if !rule.max_accept.allows(incoming.len()) {
        trace!(incoming = incoming.len(), "rejected: pile larger than max_accept");
        return false;
    }
    if !rule.max_cards.allows(stack.len() + incoming.len()) {
        trace!(
            held = stack.len(),
            incoming = incoming.len(),
            "rejected: stack would exceed max_cards"
        );
        return false;
    }
    if let Some(suit) = rule.suit {
        if incoming.iter().any(|card| card.suit != suit) {
            trace!(%suit, "rejected: foundation takes a single suit");
            return false;
        }
    }

    let Some(&top) = stack.last() else {
        let admitted = rule.base_rank.admits(bottom.rank);
        if !admitted {
            trace!(card = %bottom, "rejected: base rank not met");
        }
        return admitted;
    };

    if rule.equal_rank == EqualRank::AnySuit && top.rank == bottom.rank {
        return true;
    }
    if !rule.build.colors_match(top, bottom) {
        trace!(%top, card = %bottom, "rejected: color or suit mismatch");
        return false;
    }
    if rule.build.rank_follows(top.rank, bottom.rank) {
        return true;
    }
    if rule.equal_rank == EqualRank::Allowed && top.rank == bottom.rank {
        return true;
    }

    trace!(%top, card = %bottom, "rejected: rank does not follow");
    false
}

/// Decide whether `pile`, the top cards of `stack`, may be picked up under
/// `rule`. Supermove limits are not resolved here; see `Table::can_move`.
pub fn can_move_cards(stack: &[Card], rule: &StackRule, pile: &[Card]) -> bool {
    if pile.is_empty() || !stack.ends_with(pile) {
        return false;
    }
    if !rule.max_move.fixed().allows(pile.len()) {
        trace!(pile = pile.len(), "rejected: pile larger than max_move");
        return false;
    }
    if stack.len() - pile.len() < rule.min_cards {
        trace!(
            held = stack.len(),
            min_cards = rule.min_cards,
            "rejected: stack must keep its minimum"
        );
        return false;
    }

    if pile.len() == 1 || (rule.whole_stack_moves && pile.len() == stack.len()) {
        return true;
    }
    match &rule.movable {
        Some(movable) => is_movable_sequence(pile, movable),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::cards::{CardView, Rank, Suit};
    use crate::cards;
    use crate::rules::rule::{BaseRank, BuildRule, ColorConstraint, Direction, Limit, MoveLimit};

    fn king_row() -> StackRule {
        StackRule::row(BuildRule::alternate_color(Direction::Down))
            .with_base_rank(BaseRank::Rank(Rank::King))
    }

    #[test]
    fn empty_stack_base_rank_test() {
        let rule = king_row();
        assert!(accepts(&[], &rule, cards!("KH").view()));
        assert!(!accepts(&[], &rule, cards!("QH").view()));

        let any = rule.clone().with_base_rank(BaseRank::Any);
        assert!(accepts(&[], &any, cards!("QH").view()));

        let none = rule.with_base_rank(BaseRank::None);
        assert!(!accepts(&[], &none, cards!("KH").view()));
    }

    #[test]
    fn empty_incoming_test() {
        assert!(!accepts(cards!("8S").view(), &king_row(), &[]));
        assert!(!can_move_cards(cards!("8S").view(), &king_row(), &[]));
    }

    #[test]
    fn alternating_color_test() {
        let rule = king_row();
        assert!(accepts(cards!("8S").view(), &rule, cards!("7H").view()));
        assert!(!accepts(cards!("8S").view(), &rule, cards!("7S").view()));
        assert!(!accepts(cards!("8S").view(), &rule, cards!("9H").view()));
    }

    #[test]
    fn same_color_test() {
        let rule = StackRule::row(BuildRule::rank(Direction::Down).with_color(ColorConstraint::Same));
        assert!(accepts(cards!("8S").view(), &rule, cards!("7C").view()));
        assert!(!accepts(cards!("8S").view(), &rule, cards!("7D").view()));
    }

    #[test]
    fn equal_rank_any_suit_test() {
        let rule = StackRule::row(BuildRule::same_suit(Direction::Down))
            .with_equal_rank(EqualRank::AnySuit);
        assert!(accepts(cards!("8S").view(), &rule, cards!("8H").view()));
        assert!(accepts(cards!("8S").view(), &rule, cards!("7S").view()));
        assert!(!accepts(cards!("8S").view(), &rule, cards!("7H").view()));
    }

    #[test]
    fn equal_rank_constrained_test() {
        let rule = StackRule::row(BuildRule::alternate_color(Direction::Down))
            .with_equal_rank(EqualRank::Allowed);
        assert!(accepts(cards!("8S").view(), &rule, cards!("8H").view()));
        assert!(!accepts(cards!("8S").view(), &rule, cards!("8C").view()));
        assert!(accepts(cards!("8S").view(), &rule, cards!("7D").view()));

        let disallowed = rule.with_equal_rank(EqualRank::Disallowed);
        assert!(!accepts(cards!("8S").view(), &disallowed, cards!("8H").view()));
    }

    #[test]
    fn round_the_corner_test() {
        let rule = StackRule::row(BuildRule::rank(Direction::Up).with_modulus(13));
        assert!(accepts(cards!("KS").view(), &rule, cards!("AD").view()));
        assert!(accepts(cards!("QS").view(), &rule, cards!("KD").view()));
        assert!(!accepts(cards!("KS").view(), &rule, cards!("2D").view()));
    }

    #[test]
    fn capacity_test() {
        let rule = StackRule::row(BuildRule::rank(Direction::Up).with_modulus(13))
            .with_max_cards(Limit::AtMost(3));
        assert!(accepts(cards!("JS QS").view(), &rule, cards!("KD").view()));
        assert!(!accepts(cards!("TS JS QS").view(), &rule, cards!("KD").view()));

        let single = StackRule::row(BuildRule::same_suit(Direction::Down))
            .with_max_accept(Limit::AtMost(1));
        assert!(accepts(cards!("9H").view(), &single, cards!("8H").view()));
        assert!(!accepts(cards!("9H").view(), &single, cards!("8H 7H").view()));
    }

    #[test]
    fn suit_foundation_test() {
        let rule = StackRule::suit_foundation(Suit::Hearts);
        assert!(accepts(&[], &rule, cards!("AH").view()));
        assert!(!accepts(&[], &rule, cards!("AS").view()));
        assert!(accepts(cards!("AH 2H").view(), &rule, cards!("3H").view()));
        assert!(!accepts(cards!("AH 2H").view(), &rule, cards!("3D").view()));
        assert!(!accepts(cards!("AH").view(), &rule, cards!("2H 3H").view()));
    }

    #[test]
    fn reserve_test() {
        let rule = StackRule::reserve();
        assert!(accepts(&[], &rule, cards!("9C").view()));
        assert!(!accepts(cards!("9C").view(), &rule, cards!("8D").view()));
        assert!(!accepts(&[], &StackRule::closed(), cards!("9C").view()));
    }

    #[test]
    fn move_sequence_test() {
        let rule = StackRule::row(BuildRule::unconstrained()).with_max_move(MoveLimit::Unlimited);
        let stack = cards!("2C 9S 8S 7S");
        assert!(can_move_cards(stack.view(), &rule, cards!("8S 7S").view()));
        assert!(can_move_cards(stack.view(), &rule, cards!("9S 8S 7S").view()));
        assert!(!can_move_cards(stack.view(), &rule, stack.view()));
        // not the top of the stack
        assert!(!can_move_cards(stack.view(), &rule, cards!("9S 8S").view()));
    }

    #[test]
    fn move_limits_test() {
        let rule = StackRule::row(BuildRule::alternate_color(Direction::Down));
        let stack = cards!("9H 8S 7D");
        assert!(can_move_cards(stack.view(), &rule, cards!("7D").view()));
        assert!(!can_move_cards(stack.view(), &rule, cards!("8S 7D").view()));

        let keep_one = StackRule::open().with_min_cards(1);
        assert!(can_move_cards(cards!("QS KD").view(), &keep_one, cards!("KD").view()));
        assert!(!can_move_cards(cards!("KD").view(), &keep_one, cards!("KD").view()));

        assert!(!can_move_cards(
            cards!("KD").view(),
            &StackRule::closed(),
            cards!("KD").view()
        ));
    }

    #[test]
    fn whole_stack_test() {
        let rule = StackRule::row(BuildRule::alternate_color(Direction::Down))
            .with_movable(None)
            .with_whole_stack_moves()
            .with_max_move(MoveLimit::Unlimited);
        let stack = cards!("4C 9H 2S");
        assert!(can_move_cards(stack.view(), &rule, cards!("2S").view()));
        assert!(!can_move_cards(stack.view(), &rule, cards!("9H 2S").view()));
        assert!(can_move_cards(stack.view(), &rule, stack.view()));
    }

    #[test]
    fn single_card_always_movable_test() {
        let rule = StackRule::row(BuildRule::same_suit(Direction::Down)).with_movable(None);
        assert!(can_move_cards(cards!("3D 9C").view(), &rule, cards!("9C").view()));
    }
}
