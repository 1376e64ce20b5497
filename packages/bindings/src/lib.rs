use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use rmoney_core::display::{EquityCostDisplay, ProjectionDisplay};
use rmoney_core::fees::equity::{self, EquityTradeInput};
use rmoney_core::fees::plans::plan_summaries;
use rmoney_core::fees::{FeeSchedule, PricingPlan};
use rmoney_core::projection::lumpsum::{self, LumpsumInput};
use rmoney_core::projection::sip::{self, SipInput};
use rmoney_core::types::Money;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Brokerage
// ---------------------------------------------------------------------------

/// Form payload for the brokerage card. Either `brokerage_flat_fee` or
/// `plan` may be given; neither means the Starter tier.
#[derive(Deserialize)]
struct EquityRequest {
    quantity: i64,
    price_per_share: Money,
    #[serde(default)]
    brokerage_flat_fee: Option<Money>,
    #[serde(default)]
    plan: Option<PricingPlan>,
    #[serde(default)]
    fee_schedule: Option<FeeSchedule>,
}

#[napi]
pub fn compute_equity_costs(input_json: String) -> NapiResult<String> {
    let req: EquityRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let trade = EquityTradeInput {
        quantity: req.quantity,
        price_per_share: req.price_per_share,
        brokerage_flat_fee: req.brokerage_flat_fee.unwrap_or_else(|| {
            req.plan
                .unwrap_or(PricingPlan::Starter)
                .brokerage_per_order()
        }),
    };
    let schedule = req.fee_schedule.unwrap_or_default();

    let report = equity::equity_costs_report(&trade, &schedule).map_err(to_napi_error)?;
    let mut value = serde_json::to_value(&report).map_err(to_napi_error)?;
    value["display"] =
        serde_json::to_value(EquityCostDisplay::from(&report.result)).map_err(to_napi_error)?;
    serde_json::to_string(&value).map_err(to_napi_error)
}

#[napi]
pub fn pricing_plans() -> NapiResult<String> {
    serde_json::to_string(&plan_summaries()).map_err(to_napi_error)
}

#[napi]
pub fn default_fee_schedule() -> NapiResult<String> {
    serde_json::to_string(&FeeSchedule::default()).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_sip_projection(input_json: String) -> NapiResult<String> {
    let input: SipInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let report = sip::sip_projection_report(&input).map_err(to_napi_error)?;
    let mut value = serde_json::to_value(&report).map_err(to_napi_error)?;
    value["display"] =
        serde_json::to_value(ProjectionDisplay::from(&report.result)).map_err(to_napi_error)?;
    serde_json::to_string(&value).map_err(to_napi_error)
}

#[napi]
pub fn compute_lumpsum_projection(input_json: String) -> NapiResult<String> {
    let input: LumpsumInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let report = lumpsum::lumpsum_projection_report(&input).map_err(to_napi_error)?;
    let mut value = serde_json::to_value(&report).map_err(to_napi_error)?;
    value["display"] =
        serde_json::to_value(ProjectionDisplay::from(&report.result)).map_err(to_napi_error)?;
    serde_json::to_string(&value).map_err(to_napi_error)
}
