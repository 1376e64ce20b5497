use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::RMoneyError;
use crate::projection::{return_warnings, validate_horizon};
use crate::time_value::{fv_annuity_due, monthly_rate};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::RMoneyResult;

/// A recurring monthly investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_amount: Money,
    pub years: i32,
    /// Expected annual return in percent (12 = 12% p.a.)
    pub annual_return_percent: Percent,
}

/// Projected corpus of a SIP. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipProjection {
    pub monthly_rate: Rate,
    pub total_months: u64,
    pub future_value: Money,
    pub total_invested: Money,
    pub total_gains: Money,
}

/// Project a SIP forward, contributions at the start of each month.
pub fn compute_sip_projection(input: &SipInput) -> RMoneyResult<SipProjection> {
    if input.monthly_amount <= Decimal::ZERO {
        return Err(RMoneyError::invalid(
            "monthly_amount",
            "monthly_amount must be > 0",
        ));
    }
    let total_months = validate_horizon(input.years, input.annual_return_percent)?;

    let rate = monthly_rate(input.annual_return_percent);

    let total_invested = input
        .monthly_amount
        .checked_mul(Decimal::from(total_months))
        .ok_or_else(|| RMoneyError::overflow("SIP total invested"))?;
    // Zero rate: the annuity factor degenerates to n, so FV is exactly the sum paid in
    let future_value = if rate.is_zero() {
        total_invested
    } else {
        fv_annuity_due(input.monthly_amount, rate, total_months)?
    };
    let total_gains = future_value - total_invested;

    tracing::debug!(
        total_months,
        %future_value,
        %total_gains,
        "computed SIP projection"
    );

    Ok(SipProjection {
        monthly_rate: rate,
        total_months,
        future_value,
        total_invested,
        total_gains,
    })
}

/// SIP projection in the standard output envelope.
pub fn sip_projection_report(input: &SipInput) -> RMoneyResult<ComputationOutput<SipProjection>> {
    let start = Instant::now();
    let projection = compute_sip_projection(input)?;
    let warnings = return_warnings(input.annual_return_percent);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "SIP future value as annuity-due: P * [((1+i)^n - 1) / i] * (1+i), i = annual% / 1200",
        input,
        warnings,
        elapsed,
        projection,
    ))
}
