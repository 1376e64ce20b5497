use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::RMoneyError;
use crate::fees::plans::PricingPlan;
use crate::fees::schedule::FeeSchedule;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::RMoneyResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A single equity delivery trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityTradeInput {
    /// Number of shares. Signed so that a form-entered negative is rejected
    /// as invalid input rather than failing deserialization.
    pub quantity: i64,
    pub price_per_share: Money,
    pub brokerage_flat_fee: Money,
}

/// Itemized charges for one trade. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityCostBreakdown {
    pub trade_value: Money,
    pub brokerage: Money,
    pub securities_transaction_tax: Money,
    pub exchange_charges: Money,
    pub goods_and_services_tax: Money,
    pub regulatory_charges: Money,
    pub stamp_duty: Money,
    pub total_charges: Money,
}

impl EquityTradeInput {
    /// Build a trade priced at the flat brokerage of a pricing plan.
    pub fn for_plan(quantity: i64, price_per_share: Money, plan: PricingPlan) -> Self {
        Self {
            quantity,
            price_per_share,
            brokerage_flat_fee: plan.brokerage_per_order(),
        }
    }

    fn validate(&self) -> RMoneyResult<()> {
        if self.quantity <= 0 {
            return Err(RMoneyError::invalid("quantity", "quantity must be > 0"));
        }
        if self.price_per_share <= Decimal::ZERO {
            return Err(RMoneyError::invalid(
                "price_per_share",
                "price_per_share must be > 0",
            ));
        }
        if self.brokerage_flat_fee < Decimal::ZERO {
            return Err(RMoneyError::invalid(
                "brokerage_flat_fee",
                "brokerage_flat_fee must be >= 0",
            ));
        }
        Ok(())
    }
}

impl EquityCostBreakdown {
    /// Charges excluding brokerage (the statutory and exchange levies).
    pub fn statutory_charges(&self) -> Money {
        self.total_charges - self.brokerage
    }
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Itemized costs under the default fee schedule.
pub fn compute_equity_costs(input: &EquityTradeInput) -> RMoneyResult<EquityCostBreakdown> {
    compute_equity_costs_with(input, &FeeSchedule::default())
}

/// Itemized costs under an explicit fee schedule.
///
/// GST is levied on brokerage plus the unrounded exchange charges only.
pub fn compute_equity_costs_with(
    input: &EquityTradeInput,
    schedule: &FeeSchedule,
) -> RMoneyResult<EquityCostBreakdown> {
    input.validate()?;
    schedule.validate()?;

    let trade_value = Decimal::from(input.quantity)
        .checked_mul(input.price_per_share)
        .ok_or_else(|| RMoneyError::overflow("trade value"))?;
    let brokerage = input.brokerage_flat_fee;

    let securities_transaction_tax = trade_value * schedule.stt_rate;
    let exchange_charges = trade_value * schedule.exchange_charge_rate;
    let goods_and_services_tax = brokerage
        .checked_add(exchange_charges)
        .ok_or_else(|| RMoneyError::overflow("GST base"))?
        * schedule.gst_rate;
    let regulatory_charges = trade_value * schedule.regulatory_charge_rate;
    let stamp_duty = trade_value * schedule.stamp_duty_rate;

    let total_charges = [
        brokerage,
        securities_transaction_tax,
        exchange_charges,
        goods_and_services_tax,
        regulatory_charges,
        stamp_duty,
    ]
    .iter()
    .try_fold(Decimal::ZERO, |acc, c| acc.checked_add(*c))
    .ok_or_else(|| RMoneyError::overflow("total charges"))?;

    tracing::debug!(
        quantity = input.quantity,
        %trade_value,
        %total_charges,
        "computed equity costs"
    );

    Ok(EquityCostBreakdown {
        trade_value: trade_value.normalize(),
        brokerage: brokerage.normalize(),
        securities_transaction_tax: securities_transaction_tax.normalize(),
        exchange_charges: exchange_charges.normalize(),
        goods_and_services_tax: goods_and_services_tax.normalize(),
        regulatory_charges: regulatory_charges.normalize(),
        stamp_duty: stamp_duty.normalize(),
        total_charges: total_charges.normalize(),
    })
}

/// Cost breakdown wrapped in the standard output envelope, with advisory
/// warnings for orders where the flat fee dominates.
pub fn equity_costs_report(
    input: &EquityTradeInput,
    schedule: &FeeSchedule,
) -> RMoneyResult<ComputationOutput<EquityCostBreakdown>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let breakdown = compute_equity_costs_with(input, schedule)?;

    if breakdown.brokerage.is_zero() {
        warnings.push("No brokerage applied; only statutory charges are included".into());
    } else if breakdown.brokerage > breakdown.trade_value * dec!(0.01) {
        warnings.push(format!(
            "Flat brokerage of {} exceeds 1% of trade value {}",
            breakdown.brokerage, breakdown.trade_value
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Equity delivery charges: STT, exchange, GST on (brokerage + exchange), SEBI, stamp duty",
        &serde_json::json!({
            "trade": input,
            "fee_schedule": schedule,
        }),
        warnings,
        elapsed,
        breakdown,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_trade() -> EquityTradeInput {
        EquityTradeInput {
            quantity: 100,
            price_per_share: dec!(1000),
            brokerage_flat_fee: dec!(20),
        }
    }

    #[test]
    fn test_reference_trade_itemization() {
        let b = compute_equity_costs(&reference_trade()).unwrap();
        assert_eq!(b.trade_value, dec!(100000));
        assert_eq!(b.brokerage, dec!(20));
        assert_eq!(b.securities_transaction_tax, dec!(100));
        assert_eq!(b.exchange_charges, dec!(3.25));
        assert_eq!(b.goods_and_services_tax, dec!(4.185));
        assert_eq!(b.regulatory_charges, dec!(0.1));
        assert_eq!(b.stamp_duty, dec!(3));
        assert_eq!(b.total_charges, dec!(130.535));
    }

    #[test]
    fn test_gst_uses_unrounded_exchange_charges() {
        // 7 * 333 = 2331; exchange = 0.0757575, not 0.08
        let input = EquityTradeInput {
            quantity: 7,
            price_per_share: dec!(333),
            brokerage_flat_fee: dec!(20),
        };
        let b = compute_equity_costs(&input).unwrap();
        assert_eq!(b.exchange_charges, dec!(0.0757575));
        assert_eq!(b.goods_and_services_tax, (dec!(20) + dec!(0.0757575)) * dec!(0.18));
    }

    #[test]
    fn test_total_at_least_brokerage() {
        let b = compute_equity_costs(&reference_trade()).unwrap();
        assert!(b.total_charges >= b.brokerage);
        assert_eq!(b.statutory_charges(), b.total_charges - dec!(20));
    }

    #[test]
    fn test_zero_brokerage_allowed() {
        let mut input = reference_trade();
        input.brokerage_flat_fee = Decimal::ZERO;
        let b = compute_equity_costs(&input).unwrap();
        assert_eq!(b.brokerage, Decimal::ZERO);
        assert_eq!(b.goods_and_services_tax, dec!(3.25) * dec!(0.18));
    }

    #[test]
    fn test_for_plan_uses_tier_brokerage() {
        let input = EquityTradeInput::for_plan(100, dec!(1000), PricingPlan::Enterprise);
        let b = compute_equity_costs(&input).unwrap();
        assert_eq!(b.brokerage, dec!(10));
        assert_eq!(b.goods_and_services_tax, dec!(13.25) * dec!(0.18));
    }

    #[test]
    fn test_custom_schedule() {
        let schedule = FeeSchedule {
            stt_rate: dec!(0.00025),
            ..FeeSchedule::default()
        };
        let b = compute_equity_costs_with(&reference_trade(), &schedule).unwrap();
        assert_eq!(b.securities_transaction_tax, dec!(25));
    }

    #[test]
    fn test_invalid_schedule_rejected() {
        let schedule = FeeSchedule {
            exchange_charge_rate: dec!(-1),
            ..FeeSchedule::default()
        };
        assert!(compute_equity_costs_with(&reference_trade(), &schedule).is_err());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut input = reference_trade();
        input.quantity = 0;
        match compute_equity_costs(&input) {
            Err(RMoneyError::InvalidInput { field, .. }) => assert_eq!(field, "quantity"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut input = reference_trade();
        input.price_per_share = dec!(-5);
        match compute_equity_costs(&input) {
            Err(RMoneyError::InvalidInput { field, .. }) => assert_eq!(field, "price_per_share"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_brokerage_rejected() {
        let mut input = reference_trade();
        input.brokerage_flat_fee = dec!(-1);
        assert!(compute_equity_costs(&input).is_err());
    }

    #[test]
    fn test_trade_value_overflow_is_error() {
        let input = EquityTradeInput {
            quantity: i64::MAX,
            price_per_share: Decimal::MAX,
            brokerage_flat_fee: dec!(20),
        };
        assert!(matches!(
            compute_equity_costs(&input),
            Err(RMoneyError::ArithmeticOverflow { .. })
        ));
    }

    #[test]
    fn test_report_warns_when_brokerage_dominates() {
        let input = EquityTradeInput {
            quantity: 1,
            price_per_share: dec!(100),
            brokerage_flat_fee: dec!(20),
        };
        let out = equity_costs_report(&input, &FeeSchedule::default()).unwrap();
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("exceeds 1%"));
    }

    #[test]
    fn test_report_no_warnings_for_reference_trade() {
        let out = equity_costs_report(&reference_trade(), &FeeSchedule::default()).unwrap();
        assert!(out.warnings.is_empty());
        assert_eq!(out.result.trade_value, dec!(100000));
        assert_eq!(out.assumptions["trade"]["quantity"], 100);
    }
}
