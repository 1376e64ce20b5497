use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RMoneyError;
use crate::types::Rate;
use crate::RMoneyResult;

/// Statutory and exchange levies applied to an equity delivery trade.
///
/// Brokerages revise these periodically, so they are carried as data rather
/// than literals. Every rate is a decimal fraction of trade value except
/// `gst_rate`, which applies to brokerage plus exchange charges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    /// Securities transaction tax (delivery): 0.1%
    pub stt_rate: Rate,
    /// Exchange transaction charge: 0.00325%
    pub exchange_charge_rate: Rate,
    /// GST on brokerage + exchange charges: 18%
    pub gst_rate: Rate,
    /// SEBI turnover fee: ₹10 per crore
    pub regulatory_charge_rate: Rate,
    /// Stamp duty on the buy side: 0.003%
    pub stamp_duty_rate: Rate,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            stt_rate: dec!(0.001),
            exchange_charge_rate: dec!(0.0000325),
            gst_rate: dec!(0.18),
            regulatory_charge_rate: dec!(0.000001),
            stamp_duty_rate: dec!(0.00003),
        }
    }
}

impl FeeSchedule {
    /// Reject any rate outside `[0, 1]`.
    pub fn validate(&self) -> RMoneyResult<()> {
        let rates = [
            ("stt_rate", self.stt_rate),
            ("exchange_charge_rate", self.exchange_charge_rate),
            ("gst_rate", self.gst_rate),
            ("regulatory_charge_rate", self.regulatory_charge_rate),
            ("stamp_duty_rate", self.stamp_duty_rate),
        ];
        for (field, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(RMoneyError::invalid(
                    field,
                    format!("rate must be between 0 and 1, got {rate}"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_is_valid() {
        assert!(FeeSchedule::default().validate().is_ok());
    }

    #[test]
    fn test_negative_rate_rejected() {
        let schedule = FeeSchedule {
            stamp_duty_rate: dec!(-0.0001),
            ..FeeSchedule::default()
        };
        match schedule.validate() {
            Err(RMoneyError::InvalidInput { field, .. }) => assert_eq!(field, "stamp_duty_rate"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_rate_above_one_rejected() {
        let schedule = FeeSchedule {
            gst_rate: dec!(18),
            ..FeeSchedule::default()
        };
        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let schedule: FeeSchedule = serde_json::from_str(r#"{ "stt_rate": "0.00025" }"#).unwrap();
        assert_eq!(schedule.stt_rate, dec!(0.00025));
        assert_eq!(schedule.gst_rate, dec!(0.18));
        assert_eq!(schedule.stamp_duty_rate, dec!(0.00003));
    }
}
