use anyhow::Result;
use clap::Subcommand;
use itertools::Itertools;

use solitaire_core::prelude::{
    BaseRank, BuildRule, ColorConstraint, Direction, GameDef, GameRegistry, Limit, MoveLimit,
    StackRule, SuitConstraint,
};

#[derive(Debug, Subcommand)]
pub enum CliCommands {
    /// List every game with its id
    List,
    /// Describe the stacks and rules of one game
    Show {
        /// Numeric id or name of the game
        game: String,
    },
}

fn list(registry: &GameRegistry) {
    let name_width = registry
        .iter()
        .map(|game| game.name().len())
        .max()
        .unwrap_or_default();
    for game in registry.iter() {
        println!(
            "{:>5}  {:name_width$}  {} deck(s)  {}",
            game.id().to_string(),
            game.name(),
            game.info.decks,
            game.info.kind,
        );
    }
}

fn describe_build(build: &BuildRule) -> String {
    let direction = match build.direction {
        Direction::Down => "down",
        Direction::Up => "up",
        Direction::Unconstrained => return "any order".to_owned(),
    };
    let mut parts = vec![direction.to_owned()];
    match build.color {
        ColorConstraint::None => {}
        ColorConstraint::Same => parts.push("same color".to_owned()),
        ColorConstraint::Alternating => parts.push("alternating colors".to_owned()),
    }
    if build.suit == SuitConstraint::Same {
        parts.push("same suit".to_owned());
    }
    if let Some(modulus) = build.modulus {
        parts.push(format!("wrapping at {modulus}"));
    }
    parts.join(", ")
}

fn describe_limit(limit: Limit) -> String {
    match limit {
        Limit::Unlimited => "unlimited".to_owned(),
        Limit::AtMost(n) => n.to_string(),
    }
}

fn describe_rule(rule: &StackRule) -> String {
    let base = match rule.base_rank {
        BaseRank::Any => "any".to_owned(),
        BaseRank::Rank(rank) => rank.to_string(),
        BaseRank::None => "none".to_owned(),
    };
    let max_move = match rule.max_move {
        MoveLimit::FreeCells => "free cells".to_owned(),
        other => describe_limit(other.fixed()),
    };
    let mut description = format!(
        "base {base}; builds {}; moves {max_move}; accepts {}; holds {}",
        describe_build(&rule.build),
        describe_limit(rule.max_accept),
        describe_limit(rule.max_cards),
    );
    if let Some(suit) = rule.suit {
        description.push_str(&format!("; suit {suit}"));
    }
    description
}

fn show(game: &GameDef) {
    let info = &game.info;
    println!("{} {}", info.id, info.name);
    if !info.alt_names.is_empty() {
        println!("  also known as {}", info.alt_names.iter().join(", "));
    }
    println!("  {} | {} deck(s) | {}", info.kind, info.decks, info.skill);

    let layout = &game.layout;
    println!("  rows ({}): {}", layout.rows, describe_rule(&layout.row_rule));
    for (rule, group) in &layout.foundations.iter().group_by(|rule| *rule) {
        println!("  foundations ({}): {}", group.count(), describe_rule(rule));
    }
    if layout.reserves > 0 {
        println!("  reserves: {}", layout.reserves);
    }
    if layout.waste {
        println!("  waste");
    }
    println!("  deal: {:?}", game.deal);
    println!("  talon: {:?}", game.talon);
    println!("  fill: {:?}", game.fill);
    println!("  won when: {:?}", game.win);
}

pub fn run(registry: &GameRegistry, command: &CliCommands) -> Result<()> {
    match command {
        CliCommands::List => list(registry),
        CliCommands::Show { game } => show(registry.lookup(game)?),
    }
    Ok(())
}
