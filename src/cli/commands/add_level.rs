//! ladder add-level - Create an engineering level

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_robot, robot_ok};
use crate::core::NewEngineeringLevel;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct AddLevelArgs {
    /// Unique level id (e.g. L4, TL2)
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub job_title: Option<String>,

    /// One-sentence description of the level
    #[arg(long)]
    pub description: Option<String>,

    /// Scope of influence summary
    #[arg(long)]
    pub scope: Option<String>,

    /// Ownership summary
    #[arg(long)]
    pub ownership: Option<String>,

    /// Trajectory / progression notes
    #[arg(long)]
    pub trajectory: Option<String>,
}

impl AddLevelArgs {
    fn to_input(&self) -> NewEngineeringLevel {
        NewEngineeringLevel {
            id: self.id.clone(),
            title: self.title.clone(),
            job_title: self.job_title.clone(),
            one_sentence_description: self.description.clone(),
            scope_of_influence_summary: self.scope.clone(),
            ownership_summary: self.ownership.clone(),
            trajectory_notes: self.trajectory.clone(),
        }
    }
}

pub fn run(ctx: &AppContext, args: &AddLevelArgs) -> Result<()> {
    let level = ctx.matrix().create_engineering_level(&args.to_input())?;

    if ctx.robot_mode {
        return emit_robot(&robot_ok(&level));
    }

    println!("{} {}", "✓ Created level".green(), level.id.bold());
    Ok(())
}
