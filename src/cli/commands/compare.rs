//! ladder compare - Compare two to four levels side by side

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_robot, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Level ids in display order
    #[arg(required = true, num_args = 2..=4, value_name = "ID")]
    pub level_ids: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &CompareArgs) -> Result<()> {
    let levels = ctx.matrix().compare_levels(&args.level_ids)?;

    if ctx.robot_mode {
        return emit_robot(&robot_ok(&levels));
    }

    let missing: Vec<&str> = args
        .level_ids
        .iter()
        .map(String::as_str)
        .filter(|id| !levels.iter().any(|level| level.id() == *id))
        .collect();

    for entry in &levels {
        println!("{}", format!("== {} ==", entry.id()).green().bold());
        if let Some(summary) = entry.level.one_sentence_description.as_deref() {
            println!("{}", summary.dimmed());
        }
        super::print_criteria(&entry.criteria, 2);
        println!();
    }

    if !missing.is_empty() {
        println!("{} {}", "Skipped unknown levels:".yellow(), missing.join(", "));
    }
    Ok(())
}
