//! The built-in game catalog.

mod builder_type;
mod freecell_type;
mod royal_type;
mod spider_type;

pub use builder_type::{
    bavarian_patience, dumfries, galloway, german_patience, knotty_nines, robin, sweet_sixteen,
    trusty_twelve,
};
pub use freecell_type::{cats_tail, deep, kings, retinue, snake};
pub use royal_type::{laggard_lady, salic_law};
pub use spider_type::{arachnida, curds_and_whey, harvestman, miss_muffet, nordic};

use crate::rules::game::GameDef;

pub fn all() -> Vec<GameDef> {
    vec![
        curds_and_whey(),
        miss_muffet(),
        nordic(),
        arachnida(),
        harvestman(),
        dumfries(),
        galloway(),
        robin(),
        german_patience(),
        bavarian_patience(),
        trusty_twelve(),
        knotty_nines(),
        sweet_sixteen(),
        cats_tail(),
        snake(),
        kings(),
        retinue(),
        deep(),
        salic_law(),
        laggard_lady(),
    ]
}
