//! Advisory move suggestions. Scores only order the hints; they mean
//! nothing on their own.

use std::cmp::Reverse;

use crate::rules::table::{Move, Stack, StackId, StackRole, Table};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HintStyle {
    #[default]
    Default,
    /// Only lone cards in the rows move, preferably onto taller rows.
    SingleCardRelocation,
    /// Never suggest a move that leaves a row empty.
    KeepRowsOccupied,
    /// Foundation drops from deeper stacks come first.
    DeepestDrop,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hint {
    pub score: u32,
    pub from: StackId,
    pub to: StackId,
    pub ncards: usize,
}

const DROP_SCORE: u32 = 9000;
const BUILD_SCORE: u32 = 6000;
const RELOCATE_SCORE: u32 = 5000;
const EMPTY_TARGET_SCORE: u32 = 3000;
const EXPOSE_BONUS: u32 = 500;
const CLEAR_ROW_BONUS: u32 = 300;

/// All hints for `table`, best first. Ties are ordered by source, then
/// target, then pile size.
pub fn compute_hints(table: &Table, style: HintStyle) -> Vec<Hint> {
    let mut hints = match style {
        HintStyle::SingleCardRelocation => relocation_hints(table),
        _ => table
            .legal_moves()
            .into_iter()
            .filter_map(|mv| score_move(table, style, mv))
            .collect(),
    };
    hints.sort_by_key(|hint| (Reverse(hint.score), hint.from, hint.to, hint.ncards));
    hints
}

fn relocation_hints(table: &Table) -> Vec<Hint> {
    let mut hints = Vec::new();
    for source in table.rows().iter().filter(|row| row.len() == 1) {
        let Some(card) = source.top() else {
            continue;
        };
        for target in table.rows() {
            if !table.can_drop(source.id(), 1, target.id()) {
                continue;
            }
            let base = if target.len() > 1 {
                BUILD_SCORE
            } else {
                RELOCATE_SCORE
            };
            hints.push(Hint {
                score: base + card.rank as u32,
                from: source.id(),
                to: target.id(),
                ncards: 1,
            });
        }
    }
    hints
}

fn score_move(table: &Table, style: HintStyle, mv: Move) -> Option<Hint> {
    let source = table.stack(mv.from)?;
    let target = table.stack(mv.to)?;
    let from_role = mv.from.role();
    let to_role = mv.to.role();
    if from_role == StackRole::Foundation {
        return None;
    }

    let empties_row = from_role == StackRole::Row && mv.ncards == source.len();
    if style == HintStyle::KeepRowsOccupied && empties_row {
        return None;
    }

    let score = if to_role == StackRole::Foundation {
        let depth = if style == HintStyle::DeepestDrop {
            u32::try_from(source.len()).unwrap_or(u32::MAX)
        } else {
            0
        };
        DROP_SCORE.saturating_add(depth)
    } else if target.is_empty() {
        if mv.ncards == source.len() && from_role == to_role {
            return None;
        }
        EMPTY_TARGET_SCORE + pile_score(mv.ncards)
    } else {
        let mut score = BUILD_SCORE + pile_score(mv.ncards);
        if exposes_face_down(source, mv.ncards) {
            score += EXPOSE_BONUS;
        }
        if empties_row {
            score += CLEAR_ROW_BONUS;
        }
        score
    };

    Some(Hint {
        score,
        from: mv.from,
        to: mv.to,
        ncards: mv.ncards,
    })
}

fn pile_score(ncards: usize) -> u32 {
    u32::try_from(ncards.min(99)).unwrap_or(99) * 10
}

fn exposes_face_down(source: &Stack, ncards: usize) -> bool {
    source.face_down() > 0 && source.len() - ncards == source.face_down()
}
