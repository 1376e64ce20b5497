//! Presentation helpers. Calculators return unrounded values; rounding to
//! 2 dp for charges and whole rupees for projections happens only here.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::Money;

pub const CURRENCY_SYMBOL: &str = "₹";

/// Round a charge to paise (4.185 -> 4.19).
pub fn round_charge(amount: Money) -> Money {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a projected value to whole rupees.
pub fn round_whole(amount: Money) -> Money {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// `₹1,161,695` style string with `dp` decimal places.
pub fn format_rupees(amount: Money, dp: u32) -> String {
    let rounded = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.*}", dp as usize, rounded.abs());
    let (whole, fraction) = match text.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    match fraction {
        Some(f) => format!("{sign}{CURRENCY_SYMBOL}{grouped}.{f}"),
        None => format!("{sign}{CURRENCY_SYMBOL}{grouped}"),
    }
}

#[cfg(feature = "brokerage")]
mod equity {
    use super::*;
    use crate::fees::EquityCostBreakdown;

    /// Cost breakdown as shown on the calculator card.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct EquityCostDisplay {
        pub trade_value: String,
        pub brokerage: String,
        pub securities_transaction_tax: String,
        pub exchange_charges: String,
        pub goods_and_services_tax: String,
        pub regulatory_charges: String,
        pub stamp_duty: String,
        pub total_charges: String,
    }

    impl From<&EquityCostBreakdown> for EquityCostDisplay {
        fn from(b: &EquityCostBreakdown) -> Self {
            let show = |v: Money| format_rupees(v, 2);
            Self {
                trade_value: show(b.trade_value),
                brokerage: show(b.brokerage),
                securities_transaction_tax: show(b.securities_transaction_tax),
                exchange_charges: show(b.exchange_charges),
                goods_and_services_tax: show(b.goods_and_services_tax),
                regulatory_charges: show(b.regulatory_charges),
                stamp_duty: show(b.stamp_duty),
                total_charges: show(b.total_charges),
            }
        }
    }
}

#[cfg(feature = "brokerage")]
pub use equity::EquityCostDisplay;

#[cfg(feature = "projection")]
mod projection {
    use super::*;
    use crate::projection::{LumpsumProjection, SipProjection};

    /// Projection totals in whole rupees.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ProjectionDisplay {
        pub total_invested: String,
        pub future_value: String,
        pub total_gains: String,
    }

    impl ProjectionDisplay {
        fn new(invested: Money, future_value: Money, gains: Money) -> Self {
            Self {
                total_invested: format_rupees(invested, 0),
                future_value: format_rupees(future_value, 0),
                total_gains: format_rupees(gains, 0),
            }
        }
    }

    impl From<&SipProjection> for ProjectionDisplay {
        fn from(p: &SipProjection) -> Self {
            Self::new(p.total_invested, p.future_value, p.total_gains)
        }
    }

    impl From<&LumpsumProjection> for ProjectionDisplay {
        fn from(p: &LumpsumProjection) -> Self {
            Self::new(p.total_invested, p.future_value, p.total_gains)
        }
    }
}

#[cfg(feature = "projection")]
pub use projection::ProjectionDisplay;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_charge_midpoint_up() {
        assert_eq!(round_charge(dec!(4.185)), dec!(4.19));
        assert_eq!(round_charge(dec!(130.535)), dec!(130.54));
        assert_eq!(round_charge(dec!(0.1)), dec!(0.10));
    }

    #[test]
    fn test_round_whole() {
        assert_eq!(round_whole(dec!(1161695.3817)), dec!(1161695));
        assert_eq!(round_whole(dec!(0.5)), dec!(1));
    }

    #[test]
    fn test_format_rupees_grouping() {
        assert_eq!(format_rupees(dec!(1161695.38), 0), "₹1,161,695");
        assert_eq!(format_rupees(dec!(100000), 2), "₹100,000.00");
        assert_eq!(format_rupees(dec!(999), 0), "₹999");
        assert_eq!(format_rupees(dec!(4.185), 2), "₹4.19");
        assert_eq!(format_rupees(Decimal::ZERO, 0), "₹0");
    }

    #[test]
    fn test_format_rupees_negative() {
        assert_eq!(format_rupees(dec!(-1234.5), 2), "-₹1,234.50");
    }

    #[cfg(feature = "brokerage")]
    #[test]
    fn test_equity_display_matches_card() {
        use crate::fees::{compute_equity_costs, EquityTradeInput};

        let b = compute_equity_costs(&EquityTradeInput {
            quantity: 100,
            price_per_share: dec!(1000),
            brokerage_flat_fee: dec!(20),
        })
        .unwrap();
        let d = EquityCostDisplay::from(&b);
        assert_eq!(d.trade_value, "₹100,000.00");
        assert_eq!(d.securities_transaction_tax, "₹100.00");
        assert_eq!(d.exchange_charges, "₹3.25");
        assert_eq!(d.goods_and_services_tax, "₹4.19");
        assert_eq!(d.regulatory_charges, "₹0.10");
        assert_eq!(d.stamp_duty, "₹3.00");
        assert_eq!(d.total_charges, "₹130.54");
    }
}
