//! Games dealt one card at a time into rows headed by a court card, with
//! two ranks of foundations above them.

use crate::rules::cards::Rank;
use crate::rules::deal::{DealStep, RowSelect, ShuffleHook};
use crate::rules::fill::TalonDeal;
use crate::rules::game::{GameDef, GameInfo, GameType, SkillLevel};
use crate::rules::highlight::HighlightRule;
use crate::rules::hint::HintStyle;
use crate::rules::rule::{
    AcceptGate, BaseRank, BuildRule, Direction, Limit, MoveLimit, StackRule,
};
use crate::rules::table::{Fan, Layout};
use crate::rules::win::WinCondition;

/// A rank foundation of `cards` cards that never gives cards back.
fn foundation(build: BuildRule, base: Rank, cards: usize) -> StackRule {
    StackRule::foundation(build)
        .with_base_rank(BaseRank::Rank(base))
        .with_max_cards(Limit::AtMost(cards))
        .with_max_move(MoveLimit::AtMost(0))
}

fn eight_each(first: &StackRule, second: &StackRule) -> Vec<StackRule> {
    let mut foundations = vec![first.clone(); 8];
    foundations.extend(std::iter::repeat(second.clone()).take(8));
    foundations
}

/// The court card raised to the top of the deck opens the first row; the
/// rest arrive one talon click at a time.
fn royal_type(info: GameInfo, layout: Layout, court: Rank) -> GameDef {
    GameDef::new(info, layout.with_row_fan(Fan::VerticalThenHorizontal(16)))
        .with_shuffle(ShuffleHook::RaiseFirst(court))
        .with_deal(vec![DealStep::Row {
            rows: RowSelect::First(1),
            face_up: true,
        }])
        .with_talon(TalonDeal::OpenRowOn(court))
        .with_hint(HintStyle::DeepestDrop)
        .with_highlight(HighlightRule::AltColorNeighbour)
}

pub fn salic_law() -> GameDef {
    let queens = foundation(BuildRule::unconstrained(), Rank::Queen, 1);
    let aces = foundation(BuildRule::rank(Direction::Up), Rank::Ace, 11);
    royal_type(
        GameInfo::new(299, "Salic Law", GameType::TwoDeck, 2, SkillLevel::MostlyLuck),
        Layout::new(8, StackRule::open()).with_foundations(eight_each(&queens, &aces)),
        Rank::King,
    )
    .with_win(WinCondition::FoundationsHold {
        skip: 8,
        cards: 11,
        talon_empty: false,
    })
}

pub fn laggard_lady() -> GameDef {
    let up = foundation(BuildRule::rank(Direction::Up), Rank::Six, 6);
    let down = foundation(
        BuildRule::rank(Direction::Down).with_modulus(13),
        Rank::Five,
        6,
    );
    // One card on top of the Queen, and only once the talon is gone.
    let row_rule = StackRule::open()
        .with_max_accept(Limit::AtMost(1))
        .with_max_cards(Limit::AtMost(2))
        .with_min_cards(1)
        .with_gate(AcceptGate::TalonEmpty);
    royal_type(
        GameInfo::new(523, "Laggard Lady", GameType::TwoDeck, 2, SkillLevel::Balanced),
        Layout::new(8, row_rule).with_foundations(eight_each(&up, &down)),
        Rank::Queen,
    )
    .with_win(WinCondition::FoundationsHold {
        skip: 0,
        cards: 6,
        talon_empty: true,
    })
}
