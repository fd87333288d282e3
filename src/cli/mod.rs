//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

/// Ladder - browse, search and compare an engineering leveling matrix
#[derive(Parser, Debug)]
#[command(name = "ladder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit JSON envelopes for machine consumption
    #[arg(long, short = 'm', visible_alias = "machine", global = true)]
    pub robot: bool,

    /// SQLite database path (`:memory:` for a throwaway store)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Config file path (default: ~/.config/ladder/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every level with its criteria
    List(commands::list::ListArgs),

    /// Show one level in detail
    Show(commands::show::ShowArgs),

    /// Free-text search across levels and criteria
    Search(commands::search::SearchArgs),

    /// Show levels with criteria restricted by category / sub-category
    Filter(commands::filter::FilterArgs),

    /// Compare two to four levels side by side
    Compare(commands::compare::CompareArgs),

    /// Summarize categories, sub-categories and level groups
    Overview(commands::overview::OverviewArgs),

    /// Create an engineering level
    AddLevel(commands::add_level::AddLevelArgs),

    /// Attach a criterion to a level
    AddCriterion(commands::add_criterion::AddCriterionArgs),

    /// Load the sample leveling matrix
    Seed(commands::seed::SeedArgs),

    /// Check that the store is reachable and consistent
    Health(commands::health::HealthArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}
