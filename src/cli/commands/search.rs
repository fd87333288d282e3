//! ladder search - Free-text search across levels and criteria

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_robot, render_highlights, robot_ok};
use crate::core::SearchResult;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive, matched literally)
    pub query: String,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let results = ctx.matrix().search_levels(&args.query)?;

    if ctx.robot_mode {
        emit_robot(&robot_ok(&results))
    } else {
        search_human(&args.query, &results);
        Ok(())
    }
}

fn search_human(query: &str, results: &[SearchResult]) {
    if results.is_empty() {
        println!("{} {}", "No matches for".dimmed(), query.trim());
        return;
    }

    for result in results {
        println!(
            "{} {} {}",
            result.level_id.green().bold(),
            format!("[{} / {}]", result.category, result.sub_category).cyan(),
            result.level_title.dimmed()
        );
        println!("    {}", render_highlights(&result.match_snippet));
    }

    println!();
    println!("{} {} results", "Found:".dimmed(), results.len());
}
