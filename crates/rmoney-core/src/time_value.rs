use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::error::RMoneyError;
use crate::types::{Money, Percent, Rate};
use crate::RMoneyResult;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Convert an annual percentage (12 = 12% p.a.) into the monthly decimal rate
/// used by the projection calculators: `pct / 100 / 12`.
pub fn monthly_rate(annual_percent: Percent) -> Rate {
    annual_percent / dec!(100) / Decimal::from(MONTHS_PER_YEAR)
}

/// Compute (1 + r)^n by exponentiation by squaring with an integer exponent
/// (avoids Decimal::powd drift, and the work is O(log n) for any horizon).
pub fn compound(rate: Rate, n: u64) -> RMoneyResult<Decimal> {
    (Decimal::ONE + rate)
        .checked_powu(n)
        .ok_or_else(|| RMoneyError::overflow(format!("compounding {rate} over {n} periods")))
}

/// Future value of a level annuity-due (payment at the start of each period):
/// FV = pmt * [((1+r)^n - 1) / r] * (1+r)
///
/// A zero rate is the limiting case FV = pmt * n; it is never divided through.
pub fn fv_annuity_due(pmt: Money, rate: Rate, n: u64) -> RMoneyResult<Money> {
    let periods = Decimal::from(n);
    if rate.is_zero() {
        return pmt
            .checked_mul(periods)
            .ok_or_else(|| RMoneyError::overflow("annuity contributions"));
    }

    let growth = compound(rate, n)?;
    (growth - Decimal::ONE)
        .checked_div(rate)
        .and_then(|annuity| annuity.checked_mul(Decimal::ONE + rate))
        .and_then(|factor| pmt.checked_mul(factor))
        .ok_or_else(|| RMoneyError::overflow("annuity-due future value"))
}

/// Future value of a single amount: FV = pv * (1+r)^n
pub fn fv_lump_sum(pv: Money, rate: Rate, n: u64) -> RMoneyResult<Money> {
    if rate.is_zero() {
        return Ok(pv);
    }
    let growth = compound(rate, n)?;
    pv.checked_mul(growth)
        .ok_or_else(|| RMoneyError::overflow("lump sum future value"))
}
