//! Deal sequences: how a shuffled deck becomes the opening position.

use crate::rules::cards::{Deck, Rank};
use crate::rules::error::{Error, Result};
use crate::rules::table::{StackId, Table};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowSelect {
    All,
    First(usize),
    /// The first and the last row.
    Ends,
}

impl RowSelect {
    fn indices(&self, rows: usize) -> Vec<usize> {
        match self {
            Self::All => (0..rows).collect(),
            Self::First(n) => (0..rows.min(*n)).collect(),
            Self::Ends if rows > 1 => vec![0, rows - 1],
            Self::Ends => (0..rows).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DealStep {
    /// One card to each selected row, stopping early if the talon runs dry.
    Row { rows: RowSelect, face_up: bool },
    /// Turn cards from the talon onto the waste.
    ToWaste(usize),
    /// Turn the talon's top card face up.
    FlipTalon,
    /// Deal the whole talon into the rows, opening the next row whenever a
    /// King turns up and the current one already holds cards. Aces go to
    /// their suit's foundation pair instead when `aces_to_foundations` is set.
    KingSplit { aces_to_foundations: bool },
}

impl DealStep {
    pub fn rows(face_up: bool) -> Self {
        Self::Row {
            rows: RowSelect::All,
            face_up,
        }
    }
}

/// Rearrangement applied to the shuffled deck before dealing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShuffleHook {
    None,
    /// Bring the first card of this rank to the top so it is dealt first.
    RaiseFirst(Rank),
}

impl ShuffleHook {
    pub fn apply(self, deck: &mut Deck) {
        if let Self::RaiseFirst(rank) = self {
            deck.raise_first(rank);
        }
    }
}

/// Move the deck onto the talon, face down, top card last.
pub fn load_talon(table: &mut Table, deck: Deck) -> Result<()> {
    let talon = table.stack_mut(StackId::Talon)?;
    for card in deck.into_cards() {
        talon.push_face_down(card)?;
    }
    Ok(())
}

pub fn run(table: &mut Table, steps: &[DealStep]) -> Result<()> {
    for step in steps {
        match step {
            DealStep::Row { rows, face_up } => deal_row(table, rows, *face_up)?,
            DealStep::ToWaste(n) => {
                for _ in 0..*n {
                    let card = table
                        .stack_mut(StackId::Talon)?
                        .pop()
                        .ok_or(Error::TalonExhausted)?;
                    table.stack_mut(StackId::Waste)?.push(card);
                }
            }
            DealStep::FlipTalon => {
                table.stack_mut(StackId::Talon)?.flip_top();
            }
            DealStep::KingSplit {
                aces_to_foundations,
            } => king_split(table, *aces_to_foundations)?,
        }
    }
    Ok(())
}

fn deal_row(table: &mut Table, rows: &RowSelect, face_up: bool) -> Result<()> {
    for i in rows.indices(table.rows().len()) {
        let Some(card) = table.stack_mut(StackId::Talon)?.pop() else {
            break;
        };
        let row = table.stack_mut(StackId::Row(i))?;
        if face_up {
            row.push(card);
        } else {
            row.push_face_down(card)?;
        }
    }
    Ok(())
}

fn king_split(table: &mut Table, aces_to_foundations: bool) -> Result<()> {
    let last_row = table.rows().len().saturating_sub(1);
    let mut row = 0;

    while let Some(card) = table.stack_mut(StackId::Talon)?.pop() {
        if aces_to_foundations && card.rank == Rank::Ace {
            let first = card.suit as usize * 2;
            let target = [first, first + 1].into_iter().find(|&i| {
                table
                    .foundations()
                    .get(i)
                    .is_some_and(|foundation| foundation.is_empty())
            });
            if let Some(i) = target {
                table.stack_mut(StackId::Foundation(i))?.push(card);
                continue;
            }
        }
        if card.rank == Rank::King && table.rows().get(row).is_some_and(|r| !r.is_empty()) {
            row = (row + 1).min(last_row);
        }
        table.stack_mut(StackId::Row(row))?.push(card);
    }
    Ok(())
}
