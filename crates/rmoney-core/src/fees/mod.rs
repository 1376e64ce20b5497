pub mod equity;
pub mod plans;
pub mod schedule;

pub use equity::{compute_equity_costs, compute_equity_costs_with, EquityCostBreakdown, EquityTradeInput};
pub use plans::PricingPlan;
pub use schedule::FeeSchedule;
