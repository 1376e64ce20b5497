pub mod brokerage;
pub mod plans;
pub mod projection;
