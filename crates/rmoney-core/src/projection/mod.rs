pub mod lumpsum;
pub mod sip;

pub use lumpsum::{compute_lumpsum_projection, LumpsumInput, LumpsumProjection};
pub use sip::{compute_sip_projection, SipInput, SipProjection};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::RMoneyError;
use crate::time_value::MONTHS_PER_YEAR;
use crate::types::Percent;
use crate::RMoneyResult;

/// Expected returns above this draw an advisory warning.
const HIGH_RETURN_PERCENT: Decimal = dec!(30);

/// Validate the horizon and rate, returning the number of monthly periods.
fn validate_horizon(years: i32, annual_return_percent: Percent) -> RMoneyResult<u64> {
    if years <= 0 {
        return Err(RMoneyError::invalid("years", "years must be > 0"));
    }
    if annual_return_percent < Decimal::ZERO {
        return Err(RMoneyError::invalid(
            "annual_return_percent",
            "annual_return_percent must be >= 0",
        ));
    }
    Ok(years as u64 * MONTHS_PER_YEAR as u64)
}

fn return_warnings(annual_return_percent: Percent) -> Vec<String> {
    let mut warnings = Vec::new();
    if annual_return_percent.is_zero() {
        warnings.push("Zero expected return: future value equals amount invested".into());
    } else if annual_return_percent > HIGH_RETURN_PERCENT {
        warnings.push(format!(
            "Expected return of {annual_return_percent}% p.a. is unusually high"
        ));
    }
    warnings
}
