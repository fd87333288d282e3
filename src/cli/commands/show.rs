//! ladder show - Show one level in detail

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::core::{LevelTrack, LevelWithCriteria};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Level id (e.g. L3, EM1, "L1/L2")
    pub id: String,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let level = ctx.matrix().get_level_by_id(&args.id)?;

    if ctx.robot_mode {
        return emit_robot(&robot_ok(&level));
    }

    match level {
        Some(level) => show_human(&level),
        None => {
            println!("{} {}", "Level not found:".yellow(), args.id);
            println!("List available levels with: ladder list");
        }
    }
    Ok(())
}

fn show_human(entry: &LevelWithCriteria) {
    let level = &entry.level;
    let mut layout = HumanLayout::new();
    layout
        .title(&format!("{} - {}", level.id, level.title))
        .kv(
            "Track",
            LevelTrack::classify(&level.id).map_or("-", |track| track.as_str()),
        )
        .kv_opt("Job title", level.job_title.as_deref())
        .kv_opt("Summary", level.one_sentence_description.as_deref())
        .kv_opt("Scope", level.scope_of_influence_summary.as_deref())
        .kv_opt("Ownership", level.ownership_summary.as_deref())
        .kv_opt("Trajectory", level.trajectory_notes.as_deref())
        .kv("Created", &level.created_at.to_rfc3339())
        .blank()
        .section("Criteria");
    emit_human(layout);

    super::print_criteria(&entry.criteria, 0);
}
