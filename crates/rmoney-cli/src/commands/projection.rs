use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use rmoney_core::display::ProjectionDisplay;
use rmoney_core::projection::lumpsum::{self, LumpsumInput};
use rmoney_core::projection::sip::{self, SipInput};

use crate::input;

/// Arguments for a SIP projection
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SipArgs {
    /// Monthly contribution in rupees
    #[arg(long, alias = "monthly")]
    pub monthly_amount: Option<Decimal>,

    /// Investment period in years
    #[arg(long)]
    pub years: Option<i32>,

    /// Expected annual return in percent (e.g. 12 for 12%)
    #[arg(long, alias = "returns")]
    pub annual_return: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for a lumpsum projection
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LumpsumArgs {
    /// One-time investment in rupees
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Investment period in years
    #[arg(long)]
    pub years: Option<i32>,

    /// Expected annual return in percent (e.g. 12 for 12%)
    #[arg(long, alias = "returns")]
    pub annual_return: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_sip(args: SipArgs, display: bool) -> Result<Value, Box<dyn std::error::Error>> {
    let sip_input: SipInput = match input::read_input(args.input.as_deref())? {
        Some(data) => data,
        None => SipInput {
            monthly_amount: args
                .monthly_amount
                .ok_or("--monthly-amount is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
            annual_return_percent: args
                .annual_return
                .ok_or("--annual-return is required (or provide --input)")?,
        },
    };

    let report = sip::sip_projection_report(&sip_input)?;
    let mut value = serde_json::to_value(&report)?;
    if display {
        value["display"] = serde_json::to_value(ProjectionDisplay::from(&report.result))?;
    }
    Ok(value)
}

pub fn run_lumpsum(args: LumpsumArgs, display: bool) -> Result<Value, Box<dyn std::error::Error>> {
    let lump_input: LumpsumInput = match input::read_input(args.input.as_deref())? {
        Some(data) => data,
        None => LumpsumInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
            annual_return_percent: args
                .annual_return
                .ok_or("--annual-return is required (or provide --input)")?,
        },
    };

    let report = lumpsum::lumpsum_projection_report(&lump_input)?;
    let mut value = serde_json::to_value(&report)?;
    if display {
        value["display"] = serde_json::to_value(ProjectionDisplay::from(&report.result))?;
    }
    Ok(value)
}
