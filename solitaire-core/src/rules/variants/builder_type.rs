//! Rank builders without free cells: the Dumfries family plays from an
//! open talon, German Patience turns cards onto a waste, and the Trusty
//! Twelve family refills empty rows from the talon.

use crate::rules::deal::DealStep;
use crate::rules::fill::{FillRule, TalonDeal};
use crate::rules::game::{GameDef, GameInfo, GameType, SkillLevel};
use crate::rules::highlight::HighlightRule;
use crate::rules::hint::HintStyle;
use crate::rules::rule::{BuildRule, Direction, EqualRank, Limit, MoveLimit, StackRule};
use crate::rules::table::Layout;
use crate::rules::win::WinCondition;

/// Down in alternating colors or onto an equal rank of the other color.
/// Single cards or the whole row move.
fn dumfries_row() -> StackRule {
    StackRule::row(BuildRule::alternate_color(Direction::Down))
        .with_equal_rank(EqualRank::Allowed)
        .with_movable(None)
        .with_whole_stack_moves()
        .with_max_move(MoveLimit::Unlimited)
}

fn dumfries_type(info: GameInfo, rows: usize) -> GameDef {
    let decks = info.decks;
    GameDef::new(
        info,
        Layout::new(rows, dumfries_row())
            .with_suit_foundations(decks)
            .with_talon_rule(StackRule::open()),
    )
    .with_deal(vec![DealStep::rows(true), DealStep::FlipTalon])
    .with_talon(TalonDeal::Open)
    .with_highlight(HighlightRule::AltColorSameOrNeighbour)
}

pub fn dumfries() -> GameDef {
    dumfries_type(
        GameInfo::new(311, "Dumfries", GameType::OneDeck, 1, SkillLevel::MostlySkill),
        8,
    )
}

pub fn galloway() -> GameDef {
    dumfries_type(
        GameInfo::new(312, "Galloway", GameType::OneDeck, 1, SkillLevel::MostlySkill),
        7,
    )
}

pub fn robin() -> GameDef {
    dumfries_type(
        GameInfo::new(
            313,
            "Robin",
            GameType::TwoDeck | GameType::Original,
            2,
            SkillLevel::MostlySkill,
        ),
        12,
    )
}

/// Up regardless of suit, King wrapping to Ace, thirteen cards at most.
fn german_type(info: GameInfo, rows: usize) -> GameDef {
    let row_rule = StackRule::row(BuildRule::rank(Direction::Up).with_modulus(13))
        .with_max_cards(Limit::AtMost(13));
    GameDef::new(info, Layout::new(rows, row_rule).with_waste())
        .with_deal(vec![DealStep::rows(true), DealStep::ToWaste(1)])
        .with_talon(TalonDeal::ToWaste)
        .with_win(WinCondition::RowsFull { cards: 13 })
        .with_highlight(HighlightRule::WrappingNeighbour)
}

pub fn german_patience() -> GameDef {
    german_type(
        GameInfo::new(414, "German Patience", GameType::TwoDeck, 2, SkillLevel::MostlySkill),
        8,
    )
}

pub fn bavarian_patience() -> GameDef {
    german_type(
        GameInfo::new(415, "Bavarian Patience", GameType::TwoDeck, 2, SkillLevel::MostlySkill),
        10,
    )
}

fn trusty_type(info: GameInfo, rows: usize, build: BuildRule) -> GameDef {
    GameDef::new(info, Layout::new(rows, StackRule::row(build)))
        .with_fill(FillRule::RefillRows)
        .with_win(WinCondition::TalonEmpty)
        .with_hint(HintStyle::SingleCardRelocation)
        .with_highlight(HighlightRule::Neighbour)
}

pub fn trusty_twelve() -> GameDef {
    trusty_type(
        GameInfo::new(480, "Trusty Twelve", GameType::OneDeck, 1, SkillLevel::Balanced),
        12,
        BuildRule::rank(Direction::Down),
    )
}

pub fn knotty_nines() -> GameDef {
    trusty_type(
        GameInfo::new(481, "Knotty Nines", GameType::OneDeck, 1, SkillLevel::Balanced),
        9,
        BuildRule::rank(Direction::Down),
    )
}

pub fn sweet_sixteen() -> GameDef {
    trusty_type(
        GameInfo::new(482, "Sweet Sixteen", GameType::OneDeck, 1, SkillLevel::Balanced),
        16,
        BuildRule::alternate_color(Direction::Down),
    )
    .with_highlight(HighlightRule::AltColorNeighbour)
}
