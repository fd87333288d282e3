//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::collections::BTreeMap;

use colored::Colorize;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::core::LevelCriterion;
use crate::error::Result;

pub mod add_criterion;
pub mod add_level;
pub mod compare;
pub mod completions;
pub mod filter;
pub mod health;
pub mod list;
pub mod overview;
pub mod search;
pub mod seed;
pub mod show;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::List(args) => list::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Search(args) => search::run(ctx, args),
        Commands::Filter(args) => filter::run(ctx, args),
        Commands::Compare(args) => compare::run(ctx, args),
        Commands::Overview(args) => overview::run(ctx, args),
        Commands::AddLevel(args) => add_level::run(ctx, args),
        Commands::AddCriterion(args) => add_criterion::run(ctx, args),
        Commands::Seed(args) => seed::run(ctx, args),
        Commands::Health(args) => health::run(ctx, args),
        Commands::Completions(args) => completions::run(args),
    }
}

/// Print criteria grouped under their category, indented by `indent` spaces.
pub(crate) fn print_criteria(criteria: &[LevelCriterion], indent: usize) {
    let pad = " ".repeat(indent);
    if criteria.is_empty() {
        println!("{pad}{}", "(no criteria)".dimmed());
        return;
    }

    let mut by_category: BTreeMap<&str, Vec<&LevelCriterion>> = BTreeMap::new();
    for criterion in criteria {
        by_category
            .entry(criterion.category.as_str())
            .or_default()
            .push(criterion);
    }

    for (category, entries) in by_category {
        println!("{pad}{}", category.bold());
        for criterion in entries {
            println!(
                "{pad}  {} {}",
                format!("{}:", criterion.sub_category).cyan(),
                criterion.description.as_deref().unwrap_or("-")
            );
        }
    }
}
