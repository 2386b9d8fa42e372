use std::ops::Add;

use anyhow::Result;
use clap::Subcommand;
use rand::prelude::*;
use rayon::prelude::*;
use tracing::info;

use solitaire_core::prelude::{GameDef, GameRegistry, StackRole};

#[derive(Debug, Subcommand)]
pub enum CliCommands {
    /// How often the opening position of a game offers a move
    Hints {
        /// Numeric id or name of the game
        game: String,

        /// Run on a single thread (for profiling)
        #[arg(long = "single-threaded", default_value = "false")]
        single_threaded: bool,

        /// Deal this many games, in thousands
        #[arg(short = 'i', long = "iterations", default_value = "10")]
        iterations: u64,
    },
}

#[derive(Copy, Clone, Debug, Default)]
struct HintTally {
    deals: u64,
    playable: u64,
    hints: u64,
    foundation_drops: u64,
    pending_fills: u64,
}

impl Add for HintTally {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            deals: self.deals + other.deals,
            playable: self.playable + other.playable,
            hints: self.hints + other.hints,
            foundation_drops: self.foundation_drops + other.foundation_drops,
            pending_fills: self.pending_fills + other.pending_fills,
        }
    }
}

fn tally_deal(game: &GameDef, seed: u64) -> Result<HintTally> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let table = game.deal(&mut rng)?;
    let hints = game.hints(&table);

    Ok(HintTally {
        deals: 1,
        playable: u64::from(!hints.is_empty()),
        hints: hints.len() as u64,
        foundation_drops: hints
            .iter()
            .filter(|hint| hint.to.role() == StackRole::Foundation)
            .count() as u64,
        pending_fills: u64::from(game.pending_fill(&table).is_some()),
    })
}

fn generate_hint_stats(game: &GameDef, single_threaded: bool, iterations: u64) -> Result<HintTally> {
    if single_threaded {
        (0..iterations).try_fold(HintTally::default(), |tally, seed| {
            Ok(tally + tally_deal(game, seed)?)
        })
    } else {
        (0..iterations)
            .into_par_iter()
            .map(|seed| tally_deal(game, seed))
            .try_reduce(HintTally::default, |left, right| Ok(left + right))
    }
}

#[allow(clippy::cast_precision_loss)]
fn print_hint_stats(game: &GameDef, tally: HintTally) {
    let deals = tally.deals.max(1) as f64;
    println!(
        "Over {} deals of {} {}:",
        tally.deals,
        game.id(),
        game.name()
    );
    println!(
        " - {:>6.2}% of opening positions offer a move",
        tally.playable as f64 / deals * 100.0
    );
    println!(" - {:>7.2} hints per deal", tally.hints as f64 / deals);
    println!(
        " - {:>7.2} foundation drops per deal",
        tally.foundation_drops as f64 / deals
    );
    println!(
        " - {:>6.2}% of deals start with an automatic action",
        tally.pending_fills as f64 / deals * 100.0
    );
}

pub fn run(registry: &GameRegistry, command: &CliCommands) -> Result<()> {
    match command {
        CliCommands::Hints {
            game,
            single_threaded,
            iterations,
        } => {
            let game = registry.lookup(game)?;
            let iterations = iterations * 1_000;
            info!(game = %game.id(), iterations, "gathering hint statistics");
            let tally = generate_hint_stats(game, *single_threaded, iterations)?;
            print_hint_stats(game, tally);
            Ok(())
        }
    }
}
