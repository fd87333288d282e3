//! ladder add-criterion - Attach a criterion to a level

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_robot, robot_ok};
use crate::core::NewLevelCriterion;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct AddCriterionArgs {
    /// Id of the owning level
    #[arg(long = "level", value_name = "ID")]
    pub level_id: String,

    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub sub_category: String,

    #[arg(long)]
    pub description: Option<String>,
}

pub fn run(ctx: &AppContext, args: &AddCriterionArgs) -> Result<()> {
    let input = NewLevelCriterion::new(
        args.level_id.as_str(),
        args.category.as_str(),
        args.sub_category.as_str(),
        args.description.as_deref(),
    );
    let criterion = ctx.matrix().create_level_criterion(&input)?;

    if ctx.robot_mode {
        return emit_robot(&robot_ok(&criterion));
    }

    println!(
        "{} #{} {} / {} on {}",
        "✓ Created criterion".green(),
        criterion.id,
        criterion.category,
        criterion.sub_category,
        criterion.engineering_level_id.bold()
    );
    Ok(())
}
