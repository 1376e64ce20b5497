use serde_json::Value;

use super::scalar_text;

/// Headline field per calculator, in priority order.
const PRIORITY_KEYS: [&str; 3] = ["total_charges", "future_value", "brokerage_per_order"];

/// Print just the headline number, preferring the rounded display string
/// when `--display` was given.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_text(value));
}

fn minimal_text(value: &Value) -> String {
    let display = value.get("display");
    let result_obj = value.get("result").unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in PRIORITY_KEYS {
            let shown = display.and_then(|d| d.get(key)).or_else(|| map.get(key));
            if let Some(val) = shown.filter(|v| !v.is_null()) {
                return scalar_text(val);
            }
        }
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, scalar_text(val));
        }
    }

    scalar_text(result_obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prefers_total_charges() {
        let v = json!({ "result": { "trade_value": "100000", "total_charges": "130.535" } });
        assert_eq!(minimal_text(&v), "130.535");
    }

    #[test]
    fn test_prefers_display_string() {
        let v = json!({
            "result": { "future_value": "1161695.3817" },
            "display": { "future_value": "₹1,161,695" }
        });
        assert_eq!(minimal_text(&v), "₹1,161,695");
    }

    #[test]
    fn test_falls_back_to_first_field() {
        let v = json!({ "stt_rate": "0.001" });
        assert_eq!(minimal_text(&v), "stt_rate: 0.001");
    }
}
