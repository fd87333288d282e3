//! ladder list - List every level with its criteria

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_robot, robot_ok, truncate};
use crate::core::LevelWithCriteria;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print each level's criteria under its row
    #[arg(long, short)]
    pub criteria: bool,
}

pub fn run(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let levels = ctx.matrix().get_all_levels()?;

    if ctx.robot_mode {
        emit_robot(&robot_ok(&levels))
    } else {
        list_human(&levels, args);
        Ok(())
    }
}

fn list_human(levels: &[LevelWithCriteria], args: &ListArgs) {
    if levels.is_empty() {
        println!("{}", "No levels found".dimmed());
        println!();
        println!("Load the sample matrix with: ladder seed");
        return;
    }

    println!(
        "{:10} {:24} {:8} {}",
        "ID".bold(),
        "JOB TITLE".bold(),
        "CRITERIA".bold(),
        "SUMMARY".bold()
    );
    println!("{}", "─".repeat(84).dimmed());

    for entry in levels {
        let level = &entry.level;
        println!(
            "{:10} {:24} {:8} {}",
            level.id.green(),
            truncate(level.job_title.as_deref().unwrap_or("-"), 24),
            entry.criteria.len(),
            truncate(level.one_sentence_description.as_deref().unwrap_or("-"), 40).dimmed()
        );
        if args.criteria {
            super::print_criteria(&entry.criteria, 4);
        }
    }

    println!();
    println!("{} {} levels", "Total:".dimmed(), levels.len());
}
