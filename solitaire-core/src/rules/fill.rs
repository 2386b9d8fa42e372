//! Automatic actions the host performs between moves, and what a click on
//! the talon deals where. Everything here only inspects the table; the host
//! carries the actions out.

use crate::rules::cards::Rank;
use crate::rules::sequence::is_same_suit_sequence;
use crate::rules::table::{StackId, Table};

/// What a click on the talon does.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TalonDeal {
    /// The talon is only used for the opening deal (or refills).
    None,
    /// The talon's top card is face up and playable; it turns over by itself.
    Open,
    /// One card onto every row. With `needs_filled_rows`, only while no row
    /// is empty.
    DealRow { needs_filled_rows: bool },
    /// One card onto the waste.
    ToWaste,
    /// One card into the rows: a card of `base` rank opens the next empty
    /// row, anything else lands on the last occupied row.
    OpenRowOn(Rank),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FillRule {
    None,
    /// An empty row takes the talon's top card.
    RefillRows,
    /// A row whose top `len` cards form a same-suit run gives them to the
    /// first foundation.
    ClearRuns { len: usize },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FillAction {
    Flip(StackId),
    Move {
        from: StackId,
        to: StackId,
        ncards: usize,
    },
}

/// The next automatic action due on `table`, if any. Exposed face-down
/// cards are turned first.
pub fn pending_fill(table: &Table, fill: FillRule, talon: TalonDeal) -> Option<FillAction> {
    if let Some(row) = table.rows().iter().find(|row| row.top_is_face_down()) {
        return Some(FillAction::Flip(row.id()));
    }
    if talon == TalonDeal::Open && table.talon().top_is_face_down() {
        return Some(FillAction::Flip(StackId::Talon));
    }

    match fill {
        FillRule::None => None,
        FillRule::RefillRows => {
            if table.talon().is_empty() {
                return None;
            }
            let row = table.rows().iter().find(|row| row.is_empty())?;
            Some(FillAction::Move {
                from: StackId::Talon,
                to: row.id(),
                ncards: 1,
            })
        }
        FillRule::ClearRuns { len } => {
            if table.foundations().is_empty() {
                return None;
            }
            let row = table.rows().iter().find(|row| {
                row.face_up_cards().len() >= len
                    && row.top_n(len).is_some_and(is_same_suit_sequence)
            })?;
            Some(FillAction::Move {
                from: row.id(),
                to: StackId::Foundation(0),
                ncards: len,
            })
        }
    }
}

/// Stacks that receive one card each when the talon is clicked, in dealing
/// order. Empty when the talon cannot deal.
pub fn deal_targets(table: &Table, talon: TalonDeal) -> Vec<StackId> {
    let available = table.talon().len();
    if available == 0 {
        return Vec::new();
    }

    match talon {
        TalonDeal::None | TalonDeal::Open => Vec::new(),
        TalonDeal::DealRow { needs_filled_rows } => {
            if needs_filled_rows && table.empty_rows() > 0 {
                return Vec::new();
            }
            table
                .rows()
                .iter()
                .take(available)
                .map(|row| row.id())
                .collect()
        }
        TalonDeal::ToWaste => table
            .waste()
            .map(|waste| vec![waste.id()])
            .unwrap_or_default(),
        TalonDeal::OpenRowOn(base) => {
            let occupied = table.rows().iter().filter(|row| !row.is_empty()).count();
            let opens = table.talon().top().is_some_and(|card| card.rank == base);
            let index = if opens {
                Some(occupied)
            } else {
                occupied.checked_sub(1)
            };
            index
                .filter(|&i| i < table.rows().len())
                .map(|i| vec![StackId::Row(i)])
                .unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::cards::{CardView, Sequence};
    use crate::rules::rule::{BuildRule, Direction, StackRule};
    use crate::rules::table::Layout;

    fn table(rows: usize, waste: bool) -> Table {
        let mut layout = Layout::new(rows, StackRule::row(BuildRule::rank(Direction::Down)))
            .with_foundations(vec![StackRule::closed()]);
        if waste {
            layout = layout.with_waste();
        }
        Table::new(&layout)
    }

    fn fill(table: &mut Table, id: StackId, idents: &str) {
        let stack = table.stack_mut(id).unwrap();
        for card in Sequence::from_idents(idents).view() {
            stack.push(*card);
        }
    }

    fn fill_talon(table: &mut Table, idents: &str) {
        let talon = table.stack_mut(StackId::Talon).unwrap();
        for card in Sequence::from_idents(idents).view() {
            talon.push_face_down(*card).unwrap();
        }
    }

    #[test]
    fn flip_first_test() {
        let mut table = table(2, false);
        fill(&mut table, StackId::Row(0), "5C");
        table
            .stack_mut(StackId::Row(1))
            .unwrap()
            .push_face_down(crate::card!("9D"))
            .unwrap();
        fill_talon(&mut table, "2H");
        assert_eq!(
            pending_fill(&table, FillRule::RefillRows, TalonDeal::None),
            Some(FillAction::Flip(StackId::Row(1)))
        );
    }

    #[test]
    fn open_talon_flip_test() {
        let mut table = table(1, false);
        fill(&mut table, StackId::Row(0), "5C");
        fill_talon(&mut table, "2H 3H");
        assert_eq!(
            pending_fill(&table, FillRule::None, TalonDeal::Open),
            Some(FillAction::Flip(StackId::Talon))
        );
        assert_eq!(pending_fill(&table, FillRule::None, TalonDeal::None), None);
    }

    #[test]
    fn refill_rows_test() {
        let mut table = table(3, false);
        fill(&mut table, StackId::Row(0), "5C");
        assert_eq!(pending_fill(&table, FillRule::RefillRows, TalonDeal::None), None);

        fill_talon(&mut table, "2H");
        assert_eq!(
            pending_fill(&table, FillRule::RefillRows, TalonDeal::None),
            Some(FillAction::Move {
                from: StackId::Talon,
                to: StackId::Row(1),
                ncards: 1
            })
        );
    }

    #[test]
    fn clear_runs_test() {
        let mut table = table(2, false);
        fill(&mut table, StackId::Row(0), "KD QD JD TD 9D 8D 7D 6D 5D 4D 3D 2D");
        fill(&mut table, StackId::Row(1), "3S KH QH JH TH 9H 8H 7H 6H 5H 4H 3H 2H AH");
        let rule = FillRule::ClearRuns { len: 13 };
        assert_eq!(
            pending_fill(&table, rule, TalonDeal::None),
            Some(FillAction::Move {
                from: StackId::Row(1),
                to: StackId::Foundation(0),
                ncards: 13
            })
        );

        table.stack_mut(StackId::Row(1)).unwrap().take(13);
        table.stack_mut(StackId::Row(0)).unwrap().push(crate::card!("AS"));
        assert_eq!(pending_fill(&table, rule, TalonDeal::None), None);
    }

    #[test]
    fn deal_row_targets_test() {
        let mut table = table(3, false);
        let deal = TalonDeal::DealRow {
            needs_filled_rows: true,
        };
        assert!(deal_targets(&table, deal).is_empty());

        fill_talon(&mut table, "2H 3H");
        fill(&mut table, StackId::Row(0), "5C");
        fill(&mut table, StackId::Row(1), "5C");
        assert!(deal_targets(&table, deal).is_empty());
        assert_eq!(
            deal_targets(
                &table,
                TalonDeal::DealRow {
                    needs_filled_rows: false
                }
            ),
            vec![StackId::Row(0), StackId::Row(1)]
        );

        fill(&mut table, StackId::Row(2), "5C");
        assert_eq!(
            deal_targets(&table, deal),
            vec![StackId::Row(0), StackId::Row(1)]
        );
    }

    #[test]
    fn to_waste_targets_test() {
        let mut table = table(1, true);
        assert!(deal_targets(&table, TalonDeal::ToWaste).is_empty());
        fill_talon(&mut table, "2H");
        assert_eq!(deal_targets(&table, TalonDeal::ToWaste), vec![StackId::Waste]);
        assert!(deal_targets(&table, TalonDeal::None).is_empty());
    }

    #[test]
    fn open_row_targets_test() {
        let mut table = table(3, false);
        let deal = TalonDeal::OpenRowOn(Rank::King);
        fill(&mut table, StackId::Row(0), "KC 4D");

        fill_talon(&mut table, "9S");
        assert_eq!(deal_targets(&table, deal), vec![StackId::Row(0)]);

        fill_talon(&mut table, "KS");
        assert_eq!(deal_targets(&table, deal), vec![StackId::Row(1)]);

        fill(&mut table, StackId::Row(1), "KH");
        fill(&mut table, StackId::Row(2), "KD");
        assert!(deal_targets(&table, deal).is_empty());
    }
}
