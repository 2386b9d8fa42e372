use anyhow::Result;
use clap::Args;
use itertools::Itertools;
use rand::prelude::*;

use solitaire_core::prelude::{FillAction, GameDef, GameRegistry, Stack, StackId, Table};

#[derive(Debug, Args)]
pub struct DealArgs {
    /// Numeric id or name of the game
    game: String,

    /// Seed for the shuffle; a random one is picked when absent
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Show at most this many hints
    #[arg(long = "hints", default_value = "5")]
    hints: usize,
}

fn render_stack(stack: &Stack) -> String {
    let face_down = std::iter::repeat("##".to_owned()).take(stack.face_down());
    let face_up = stack.face_up_cards().iter().map(ToString::to_string);
    face_down.chain(face_up).join(" ")
}

fn print_table(table: &Table) {
    for stack in table.stacks() {
        if stack.id() == StackId::Talon {
            println!("{:>14}: {} card(s)", stack.id().to_string(), stack.len());
        } else {
            println!("{:>14}: {}", stack.id().to_string(), render_stack(stack));
        }
    }
}

fn describe_fill(table: &Table, action: FillAction) -> String {
    match action {
        FillAction::Flip(id) => format!("flip the top card of {id}"),
        FillAction::Move { from, to, ncards } => {
            let cards = table
                .stack(from)
                .and_then(|stack| stack.top_n(ncards))
                .map(|cards| cards.iter().join(" "))
                .unwrap_or_default();
            format!("move {cards} from {from} to {to}")
        }
    }
}

fn print_hints(game: &GameDef, table: &Table, limit: usize) {
    let hints = game.hints(table);
    if hints.is_empty() {
        println!("No moves available.");
        return;
    }
    println!("Hints ({} in total):", hints.len());
    for hint in hints.iter().take(limit) {
        println!(
            " - {:>5}  {} card(s) from {} to {}",
            hint.score, hint.ncards, hint.from, hint.to
        );
    }
}

pub fn run(registry: &GameRegistry, args: &DealArgs) -> Result<()> {
    let game = registry.lookup(&args.game)?;
    let seed = args.seed.unwrap_or_else(|| thread_rng().gen());
    let mut rng = SmallRng::seed_from_u64(seed);
    let table = game.deal(&mut rng)?;

    println!("{} {} (seed {seed})", game.id(), game.name());
    print_table(&table);

    if let Some(action) = game.pending_fill(&table) {
        println!("Automatic: {}", describe_fill(&table, action));
    }
    let targets = game.deal_targets(&table);
    if !targets.is_empty() {
        println!("The talon deals to {}", targets.iter().join(", "));
    }
    if game.is_won(&table) {
        println!("Already won!");
    }
    print_hints(game, &table, args.hints);

    Ok(())
}
