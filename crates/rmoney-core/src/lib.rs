pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "brokerage")]
pub mod fees;

#[cfg(feature = "projection")]
pub mod projection;

#[cfg(feature = "display")]
pub mod display;

pub use error::RMoneyError;
pub use types::*;

/// Standard result type for all rmoney calculators
pub type RMoneyResult<T> = Result<T, RMoneyError>;
