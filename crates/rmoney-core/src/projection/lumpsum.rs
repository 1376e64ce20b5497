use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::RMoneyError;
use crate::projection::{return_warnings, validate_horizon};
use crate::time_value::{fv_lump_sum, monthly_rate};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::RMoneyResult;

/// A single up-front investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumpsumInput {
    pub principal: Money,
    pub years: i32,
    pub annual_return_percent: Percent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumpsumProjection {
    pub monthly_rate: Rate,
    pub total_months: u64,
    pub future_value: Money,
    pub total_invested: Money,
    pub total_gains: Money,
}

/// Grow a lump sum monthly at the same rate convention as the SIP calculator.
pub fn compute_lumpsum_projection(input: &LumpsumInput) -> RMoneyResult<LumpsumProjection> {
    if input.principal <= Decimal::ZERO {
        return Err(RMoneyError::invalid("principal", "principal must be > 0"));
    }
    let total_months = validate_horizon(input.years, input.annual_return_percent)?;

    let rate = monthly_rate(input.annual_return_percent);
    let future_value = fv_lump_sum(input.principal, rate, total_months)?;
    let total_gains = future_value - input.principal;

    tracing::debug!(total_months, %future_value, "computed lumpsum projection");

    Ok(LumpsumProjection {
        monthly_rate: rate,
        total_months,
        future_value,
        total_invested: input.principal,
        total_gains,
    })
}

pub fn lumpsum_projection_report(
    input: &LumpsumInput,
) -> RMoneyResult<ComputationOutput<LumpsumProjection>> {
    let start = Instant::now();
    let projection = compute_lumpsum_projection(input)?;
    let warnings = return_warnings(input.annual_return_percent);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Lumpsum future value compounded monthly: P * (1+i)^n, i = annual% / 1200",
        input,
        warnings,
        elapsed,
        projection,
    ))
}
