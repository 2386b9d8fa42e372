pub use crate::rules::acceptance::{accepts, can_move_cards};
pub use crate::rules::cards::{Card, CardView, Color, Deck, Rank, Sequence, Suit};
pub use crate::rules::deal::{DealStep, RowSelect, ShuffleHook};
pub use crate::rules::error::{Error, Result};
pub use crate::rules::fill::{FillAction, FillRule, TalonDeal};
pub use crate::rules::game::{GameDef, GameId, GameInfo, GameType, SkillLevel};
pub use crate::rules::highlight::HighlightRule;
pub use crate::rules::hint::{compute_hints, Hint, HintStyle};
pub use crate::rules::registry::GameRegistry;
pub use crate::rules::rule::{
    AcceptGate, BaseRank, BuildRule, ColorConstraint, Direction, EqualRank, Limit, MoveLimit,
    StackRule, SuitConstraint,
};
pub use crate::rules::sequence::is_movable_sequence;
pub use crate::rules::table::{Fan, Layout, Move, Stack, StackId, StackRole, Table};
pub use crate::rules::win::WinCondition;
