use serde_json::Value;
use std::io;

use super::scalar_text;

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    for record in csv_records(value) {
        let _ = wtr.write_record(&record);
    }
    let _ = wtr.flush();
}

/// Rows for a report envelope (`field,value[,display]`), an array of plans
/// (one column per key) or a flat object.
fn csv_records(value: &Value) -> Vec<Vec<String>> {
    match value {
        Value::Object(map) => {
            let display = map.get("display").and_then(Value::as_object);
            let fields = match map.get("result") {
                Some(Value::Object(result)) => result,
                _ => map,
            };
            let mut header = vec!["field".to_string(), "value".to_string()];
            if display.is_some() {
                header.push("display".to_string());
            }
            let mut rows = vec![header];
            for (key, val) in fields {
                let mut row = vec![key.clone(), scalar_text(val)];
                if let Some(d) = display {
                    row.push(d.get(key).map(scalar_text).unwrap_or_default());
                }
                rows.push(row);
            }
            rows
        }
        Value::Array(arr) => array_records(arr),
        _ => vec![vec![scalar_text(value)]],
    }
}

fn array_records(arr: &[Value]) -> Vec<Vec<String>> {
    let Some(Value::Object(first)) = arr.first() else {
        return arr.iter().map(|v| vec![scalar_text(v)]).collect();
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut rows = vec![headers.clone()];
    for map in arr.iter().filter_map(Value::as_object) {
        rows.push(
            headers
                .iter()
                .map(|h| map.get(h).map(scalar_text).unwrap_or_default())
                .collect(),
        );
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_report_rows_with_display() {
        let v = json!({
            "result": { "future_value": "1161695.38" },
            "display": { "future_value": "₹1,161,695" },
            "warnings": []
        });
        assert_eq!(
            csv_records(&v),
            vec![
                vec!["field", "value", "display"],
                vec!["future_value", "1161695.38", "₹1,161,695"],
            ]
        );
    }

    #[test]
    fn test_plan_rows() {
        let v = json!([
            { "name": "Starter", "brokerage_per_order": "20" },
            { "name": "Enterprise", "brokerage_per_order": "10" }
        ]);
        let rows = csv_records(&v);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][rows[0].iter().position(|h| h == "name").unwrap()], "Enterprise");
    }
}
