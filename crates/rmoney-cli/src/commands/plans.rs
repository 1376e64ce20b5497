use clap::Args;
use serde_json::Value;

use rmoney_core::fees::plans::plan_summaries;

use crate::config::{self, FEE_SCHEDULE_ENV};

/// Arguments for printing the fee schedule
#[derive(Args)]
pub struct FeeScheduleArgs {
    /// YAML or JSON file overriding statutory rates
    #[arg(long, env = FEE_SCHEDULE_ENV)]
    pub fee_schedule: Option<String>,
}

pub fn run_plans() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(plan_summaries())?)
}

pub fn run_fee_schedule(args: FeeScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule = config::load_fee_schedule(args.fee_schedule.as_deref())?;
    Ok(serde_json::to_value(schedule)?)
}
