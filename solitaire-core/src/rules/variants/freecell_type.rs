//! Two-deck free cell games dealt in King-headed rows.

use crate::rules::cards::Rank;
use crate::rules::deal::{DealStep, ShuffleHook};
use crate::rules::game::{GameDef, GameInfo, GameType, SkillLevel};
use crate::rules::highlight::HighlightRule;
use crate::rules::hint::HintStyle;
use crate::rules::rule::{BaseRank, BuildRule, Direction, MoveLimit, StackRule};
use crate::rules::table::{Fan, Layout};

const FAN: Fan = Fan::VerticalThenHorizontal(16);

fn ac_row(base_rank: BaseRank) -> StackRule {
    StackRule::row(BuildRule::alternate_color(Direction::Down)).with_base_rank(base_rank)
}

/// Rows that move piles as large as the free cells allow.
fn supermove_row() -> StackRule {
    ac_row(BaseRank::None).with_max_move(MoveLimit::FreeCells)
}

fn king_split(aces_to_foundations: bool) -> Vec<DealStep> {
    vec![DealStep::KingSplit {
        aces_to_foundations,
    }]
}

fn katzenschwanz_type(info: GameInfo, rows: usize, reserves: usize, row_rule: StackRule) -> GameDef {
    GameDef::new(
        info,
        Layout::new(rows, row_rule)
            .with_row_fan(FAN)
            .with_reserves(reserves)
            .with_suit_foundations(2),
    )
    .with_deal(king_split(false))
    .with_hint(HintStyle::KeepRowsOccupied)
    .with_highlight(HighlightRule::AltColorNeighbour)
}

pub fn cats_tail() -> GameDef {
    katzenschwanz_type(
        GameInfo::new(
            141,
            "Cat's Tail",
            GameType::FreeCell | GameType::Open,
            2,
            SkillLevel::MostlySkill,
        )
        .with_alt_names(&["Der Katzenschwanz"]),
        9,
        8,
        ac_row(BaseRank::None),
    )
}

pub fn snake() -> GameDef {
    katzenschwanz_type(
        GameInfo::new(
            142,
            "Snake",
            GameType::FreeCell | GameType::Open,
            2,
            SkillLevel::MostlySkill,
        )
        .with_alt_names(&["Die Schlange"]),
        9,
        7,
        supermove_row(),
    )
    .with_deal(king_split(true))
}

pub fn kings() -> GameDef {
    katzenschwanz_type(
        GameInfo::new(
            279,
            "Kings",
            GameType::FreeCell | GameType::Open,
            2,
            SkillLevel::MostlySkill,
        ),
        8,
        8,
        supermove_row(),
    )
    .with_shuffle(ShuffleHook::RaiseFirst(Rank::King))
}

pub fn retinue() -> GameDef {
    katzenschwanz_type(
        GameInfo::new(
            286,
            "Retinue",
            GameType::FreeCell | GameType::Open | GameType::Original,
            2,
            SkillLevel::MostlySkill,
        ),
        8,
        8,
        supermove_row(),
    )
    .with_shuffle(ShuffleHook::RaiseFirst(Rank::King))
    .with_deal(king_split(true))
}

pub fn deep() -> GameDef {
    katzenschwanz_type(
        GameInfo::new(
            442,
            "Deep",
            GameType::FreeCell | GameType::Open | GameType::Original,
            2,
            SkillLevel::MostlySkill,
        ),
        8,
        8,
        ac_row(BaseRank::Any),
    )
    .with_deal(vec![DealStep::rows(true); 13])
}
