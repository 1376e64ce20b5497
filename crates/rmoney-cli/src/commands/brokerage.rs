use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use rmoney_core::display::EquityCostDisplay;
use rmoney_core::fees::equity::{self, EquityTradeInput};
use rmoney_core::fees::PricingPlan;

use crate::config::{self, FEE_SCHEDULE_ENV};
use crate::input;

/// Pricing plan selector for `--plan`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlanArg {
    Starter,
    Professional,
    Enterprise,
}

impl From<PlanArg> for PricingPlan {
    fn from(arg: PlanArg) -> Self {
        match arg {
            PlanArg::Starter => PricingPlan::Starter,
            PlanArg::Professional => PricingPlan::Professional,
            PlanArg::Enterprise => PricingPlan::Enterprise,
        }
    }
}

/// Arguments for equity delivery charges
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct EquityCostsArgs {
    /// Number of shares
    #[arg(long)]
    pub quantity: Option<i64>,

    /// Price per share in rupees
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Flat brokerage per order in rupees
    #[arg(long, conflicts_with = "plan")]
    pub brokerage: Option<Decimal>,

    /// Take the brokerage from a pricing plan (default: starter)
    #[arg(long, value_enum)]
    pub plan: Option<PlanArg>,

    /// YAML or JSON file overriding statutory rates
    #[arg(long, env = FEE_SCHEDULE_ENV)]
    pub fee_schedule: Option<String>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_equity_costs(
    args: EquityCostsArgs,
    display: bool,
) -> Result<Value, Box<dyn std::error::Error>> {
    let trade: EquityTradeInput = match input::read_input(args.input.as_deref())? {
        Some(trade) => trade,
        None => EquityTradeInput {
            quantity: args
                .quantity
                .ok_or("--quantity is required (or provide --input)")?,
            price_per_share: args
                .price
                .ok_or("--price is required (or provide --input)")?,
            brokerage_flat_fee: args.brokerage.unwrap_or_else(|| {
                PricingPlan::from(args.plan.unwrap_or(PlanArg::Starter)).brokerage_per_order()
            }),
        },
    };

    let schedule = config::load_fee_schedule(args.fee_schedule.as_deref())?;
    let report = equity::equity_costs_report(&trade, &schedule)?;

    let mut value = serde_json::to_value(&report)?;
    if display {
        value["display"] = serde_json::to_value(EquityCostDisplay::from(&report.result))?;
    }
    Ok(value)
}
