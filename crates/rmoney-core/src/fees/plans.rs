use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Subscription tiers from the pricing table. Each fixes a flat brokerage
/// per executed order across equity, F&O and currency segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingPlan {
    Starter,
    Professional,
    Enterprise,
}

/// Flattened view of a plan for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub plan: PricingPlan,
    pub name: String,
    pub monthly_subscription: Money,
    pub brokerage_per_order: Money,
}

impl PricingPlan {
    pub const ALL: [PricingPlan; 3] = [
        PricingPlan::Starter,
        PricingPlan::Professional,
        PricingPlan::Enterprise,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PricingPlan::Starter => "Starter",
            PricingPlan::Professional => "Professional",
            PricingPlan::Enterprise => "Enterprise",
        }
    }

    pub fn brokerage_per_order(self) -> Money {
        match self {
            PricingPlan::Starter => dec!(20),
            PricingPlan::Professional => dec!(15),
            PricingPlan::Enterprise => dec!(10),
        }
    }

    pub fn monthly_subscription(self) -> Money {
        match self {
            PricingPlan::Starter => dec!(0),
            PricingPlan::Professional => dec!(499),
            PricingPlan::Enterprise => dec!(1999),
        }
    }

    pub fn summary(self) -> PlanSummary {
        PlanSummary {
            plan: self,
            name: self.name().to_string(),
            monthly_subscription: self.monthly_subscription(),
            brokerage_per_order: self.brokerage_per_order(),
        }
    }
}

/// Every plan, cheapest subscription first.
pub fn plan_summaries() -> Vec<PlanSummary> {
    PricingPlan::ALL.iter().map(|p| p.summary()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brokerage_tiers() {
        assert_eq!(PricingPlan::Starter.brokerage_per_order(), dec!(20));
        assert_eq!(PricingPlan::Professional.brokerage_per_order(), dec!(15));
        assert_eq!(PricingPlan::Enterprise.brokerage_per_order(), dec!(10));
    }

    #[test]
    fn test_higher_tiers_cost_more_and_charge_less() {
        let plans = plan_summaries();
        assert_eq!(plans.len(), 3);
        for pair in plans.windows(2) {
            assert!(pair[1].monthly_subscription > pair[0].monthly_subscription);
            assert!(pair[1].brokerage_per_order < pair[0].brokerage_per_order);
        }
    }

    #[test]
    fn test_plan_serde_lowercase() {
        let json = serde_json::to_string(&PricingPlan::Professional).unwrap();
        assert_eq!(json, "\"professional\"");
        let plan: PricingPlan = serde_json::from_str("\"enterprise\"").unwrap();
        assert_eq!(plan, PricingPlan::Enterprise);
    }
}
