pub mod acceptance;
pub mod cards;
pub mod deal;
pub mod error;
pub mod fill;
pub mod game;
pub mod highlight;
pub mod hint;
pub mod registry;
pub mod rule;
pub mod sequence;
pub mod table;
pub mod variants;
pub mod win;
