//! Spider relatives without a talon to speak of: piles move as same-rank
//! stacks or same-suit runs, and a game is won once every row is a full
//! suit.

use crate::rules::cards::Rank;
use crate::rules::deal::{DealStep, RowSelect};
use crate::rules::fill::{FillRule, TalonDeal};
use crate::rules::game::{GameDef, GameInfo, GameType, SkillLevel};
use crate::rules::highlight::HighlightRule;
use crate::rules::rule::{BaseRank, BuildRule, Direction, EqualRank, Limit, MoveLimit, StackRule};
use crate::rules::table::Layout;
use crate::rules::win::WinCondition;

const SUIT_RUN: WinCondition = WinCondition::RowsEmptyOrSuitRun { cards: 13 };

/// Down by suit, or onto a card of the same rank.
fn curds_row(base_rank: BaseRank) -> StackRule {
    StackRule::row(BuildRule::same_suit(Direction::Down))
        .with_base_rank(base_rank)
        .with_equal_rank(EqualRank::AnySuit)
        .with_movable(Some(BuildRule::unconstrained()))
        .with_max_move(MoveLimit::Unlimited)
}

/// Down regardless of suit, or onto a card of the same rank.
fn arachnida_row() -> StackRule {
    StackRule::row(BuildRule::rank(Direction::Down))
        .with_equal_rank(EqualRank::Allowed)
        .with_movable(Some(BuildRule::unconstrained()))
        .with_max_move(MoveLimit::Unlimited)
}

fn face_up_rounds(rounds: usize) -> Vec<DealStep> {
    vec![DealStep::rows(true); rounds]
}

pub fn curds_and_whey() -> GameDef {
    GameDef::new(
        GameInfo::new(
            294,
            "Curds and Whey",
            GameType::Spider | GameType::Open,
            1,
            SkillLevel::MostlySkill,
        ),
        Layout::new(13, curds_row(BaseRank::Rank(Rank::King))),
    )
    .with_deal(face_up_rounds(4))
    .with_win(SUIT_RUN)
    .with_highlight(HighlightRule::SameRankOrSuitNeighbour)
}

fn muffet_deal() -> Vec<DealStep> {
    let mut deal = face_up_rounds(4);
    deal.push(DealStep::Row {
        rows: RowSelect::Ends,
        face_up: true,
    });
    deal.push(DealStep::rows(true));
    deal
}

pub fn miss_muffet() -> GameDef {
    GameDef::new(
        GameInfo::new(
            349,
            "Miss Muffet",
            GameType::Spider | GameType::Open,
            1,
            SkillLevel::MostlySkill,
        ),
        Layout::new(10, curds_row(BaseRank::Rank(Rank::King))),
    )
    .with_deal(muffet_deal())
    .with_win(SUIT_RUN)
    .with_highlight(HighlightRule::SameRankOrSuitNeighbour)
}

pub fn nordic() -> GameDef {
    GameDef::new(
        GameInfo::new(
            352,
            "Nordic",
            GameType::Spider | GameType::Open | GameType::Original,
            1,
            SkillLevel::MostlySkill,
        ),
        Layout::new(10, curds_row(BaseRank::Any)),
    )
    .with_deal(muffet_deal())
    .with_win(SUIT_RUN)
    .with_highlight(HighlightRule::SameRankOrSuitNeighbour)
}

/// Ten rows over a single discard foundation that swallows completed
/// suits.
fn arachnida_type(info: GameInfo, row_rule: StackRule) -> GameDef {
    let mut deal = vec![DealStep::rows(false); 4];
    deal.push(DealStep::Row {
        rows: RowSelect::First(4),
        face_up: false,
    });
    deal.push(DealStep::rows(true));

    GameDef::new(
        info,
        Layout::new(10, row_rule)
            .with_foundations(vec![StackRule::closed().with_max_cards(Limit::AtMost(104))]),
    )
    .with_deal(deal)
    .with_talon(TalonDeal::DealRow {
        needs_filled_rows: true,
    })
    .with_fill(FillRule::ClearRuns { len: 13 })
    .with_win(SUIT_RUN)
    .with_highlight(HighlightRule::SameRankOrNeighbour)
}

pub fn arachnida() -> GameDef {
    arachnida_type(
        GameInfo::new(348, "Arachnida", GameType::Spider, 2, SkillLevel::MostlySkill),
        arachnida_row(),
    )
}

pub fn harvestman() -> GameDef {
    arachnida_type(
        GameInfo::new(
            534,
            "Harvestman",
            GameType::Spider | GameType::Original,
            2,
            SkillLevel::MostlySkill,
        ),
        curds_row(BaseRank::Any),
    )
}
