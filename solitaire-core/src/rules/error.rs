use thiserror::Error;

use crate::rules::game::GameId;
use crate::rules::table::StackId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("`{0}` is not a card identifier")]
    InvalidCard(String),
    #[error("game {0} is already registered")]
    DuplicateGame(GameId),
    #[error("no game matches `{0}`")]
    UnknownGame(String),
    #[error("{0} does not exist on this table")]
    NoSuchStack(StackId),
    #[error("cannot place a face-down card over face-up cards on {0}")]
    FaceDownOverFaceUp(StackId),
    #[error("the talon ran out of cards")]
    TalonExhausted,
}

pub type Result<T> = std::result::Result<T, Error>;
