//! ladder filter - Levels with criteria restricted by taxonomy

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_robot, robot_ok};
use crate::error::Result;
use crate::search::CriteriaFilter;

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Keep criteria in this category (repeatable)
    #[arg(long = "category", short = 'c', value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Keep criteria in this sub-category (repeatable)
    #[arg(long = "sub-category", short = 's', value_name = "SUB_CATEGORY")]
    pub sub_categories: Vec<String>,
}

impl FilterArgs {
    fn to_filter(&self) -> CriteriaFilter {
        CriteriaFilter::new()
            .with_categories(self.categories.iter().cloned())
            .with_sub_categories(self.sub_categories.iter().cloned())
    }
}

pub fn run(ctx: &AppContext, args: &FilterArgs) -> Result<()> {
    let filter = args.to_filter();
    let levels = ctx.matrix().get_filtered_levels(&filter)?;

    if ctx.robot_mode {
        return emit_robot(&robot_ok(&levels));
    }

    if levels.is_empty() {
        println!("{}", "No levels found".dimmed());
        return Ok(());
    }

    for entry in &levels {
        println!("{} {}", entry.id().green().bold(), entry.level.title.dimmed());
        super::print_criteria(&entry.criteria, 2);
        println!();
    }
    Ok(())
}
