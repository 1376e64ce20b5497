use std::path::Path;

use rmoney_core::fees::FeeSchedule;
use rmoney_core::RMoneyError;

use crate::input;

/// Environment variable naming a fee schedule file, read by clap on
/// `--fee-schedule`.
pub const FEE_SCHEDULE_ENV: &str = "RMONEY_FEE_SCHEDULE";

/// Load the fee schedule from `path`, or fall back to the built-in rates.
/// `.yaml`/`.yml` files are parsed as YAML, anything else as JSON. Omitted
/// fields keep their default rate.
pub fn load_fee_schedule(path: Option<&str>) -> Result<FeeSchedule, RMoneyError> {
    let Some(path) = path else {
        return Ok(FeeSchedule::default());
    };

    let contents = input::file::read_text(path).map_err(|e| RMoneyError::Config(e.to_string()))?;
    let schedule = parse_fee_schedule(&contents, is_yaml(path))
        .map_err(|e| RMoneyError::Config(format!("'{path}': {e}")))?;
    schedule.validate()?;

    tracing::debug!(path, ?schedule, "loaded fee schedule");
    Ok(schedule)
}

fn is_yaml(path: &str) -> bool {
    matches!(
        Path::new(path).extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn parse_fee_schedule(
    contents: &str,
    yaml: bool,
) -> Result<FeeSchedule, Box<dyn std::error::Error>> {
    if yaml {
        Ok(serde_yaml::from_str(contents)?)
    } else {
        Ok(serde_json::from_str(contents)?)
    }
}
