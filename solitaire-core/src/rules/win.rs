use crate::rules::sequence::is_same_suit_sequence;
use crate::rules::table::{Stack, Table};

/// When a game counts as won.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WinCondition {
    /// Every row is empty or holds exactly `cards` cards in one same-suit
    /// descending run.
    RowsEmptyOrSuitRun { cards: usize },
    /// Talon and waste are used up and every occupied row holds exactly
    /// `cards` cards.
    RowsFull { cards: usize },
    TalonEmpty,
    AllOnFoundations,
    /// The foundations from index `skip` on each hold exactly `cards` cards.
    FoundationsHold {
        skip: usize,
        cards: usize,
        talon_empty: bool,
    },
}

impl WinCondition {
    pub fn is_won(self, table: &Table, total_cards: usize) -> bool {
        match self {
            Self::RowsEmptyOrSuitRun { cards } => table.rows().iter().all(|row| {
                row.is_empty()
                    || (row.len() == cards
                        && row.face_down() == 0
                        && is_same_suit_sequence(row.face_up_cards()))
            }),
            Self::RowsFull { cards } => {
                table.talon().is_empty()
                    && table.waste().map_or(true, Stack::is_empty)
                    && table
                        .rows()
                        .iter()
                        .all(|row| row.is_empty() || row.len() == cards)
            }
            Self::TalonEmpty => table.talon().is_empty(),
            Self::AllOnFoundations => {
                table.foundations().iter().map(Stack::len).sum::<usize>() == total_cards
            }
            Self::FoundationsHold {
                skip,
                cards,
                talon_empty,
            } => {
                (!talon_empty || table.talon().is_empty())
                    && table
                        .foundations()
                        .iter()
                        .skip(skip)
                        .all(|foundation| foundation.len() == cards)
            }
        }
    }
}
