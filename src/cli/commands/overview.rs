//! ladder overview - Taxonomy and level groups

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct OverviewArgs {}

pub fn run(ctx: &AppContext, _args: &OverviewArgs) -> Result<()> {
    let overview = ctx.matrix().get_matrix_overview()?;

    if ctx.robot_mode {
        return emit_robot(&robot_ok(&overview));
    }

    let mut layout = HumanLayout::new();
    layout.title("Leveling matrix").section("Categories");
    if overview.categories.is_empty() {
        layout.push_line("(none)".dimmed().to_string());
    }
    for category in &overview.categories {
        let subs = overview
            .sub_categories
            .get(category)
            .map(|subs| subs.join(", "))
            .unwrap_or_default();
        layout.kv(category, &subs);
    }

    let groups = &overview.level_groups;
    layout
        .blank()
        .section("Levels")
        .kv("All", &overview.level_ids.join(", "))
        .kv("IC", &groups.ic.join(", "))
        .kv("TL", &groups.tl.join(", "))
        .kv("EM", &groups.em.join(", "));
    emit_human(layout);
    Ok(())
}
