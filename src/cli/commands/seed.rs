//! ladder seed - Load the sample leveling matrix

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_robot, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SeedArgs {}

pub fn run(ctx: &AppContext, _args: &SeedArgs) -> Result<()> {
    let summary = ctx.matrix().seed_database()?;

    if ctx.robot_mode {
        return emit_robot(&robot_ok(&summary));
    }

    println!(
        "{} {} levels, {} criteria",
        "✓ Seeded".green(),
        summary.levels,
        summary.criteria
    );
    Ok(())
}
