//! ladder health - Store liveness and counts

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct HealthArgs {}

pub fn run(ctx: &AppContext, _args: &HealthArgs) -> Result<()> {
    let report = ctx.matrix().health()?;

    if ctx.robot_mode {
        return emit_robot(&robot_ok(&report));
    }

    let status = if report.integrity_ok {
        report.status.green().to_string()
    } else {
        report.status.red().to_string()
    };

    let mut layout = HumanLayout::new();
    layout
        .title("Ladder health")
        .kv("Status", &status)
        .kv("Database", &ctx.config.database.path.display().to_string())
        .kv("Schema version", &report.schema_version.to_string())
        .kv("Levels", &report.levels.to_string())
        .kv("Criteria", &report.criteria.to_string())
        .kv("Checked at", &report.timestamp.to_rfc3339());
    emit_human(layout);
    Ok(())
}
