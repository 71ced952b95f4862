use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: the year summary answers with its net total, the schedule with
/// its annual total, the advisor with the suggested type; anything else falls
/// back to the first field of the result object.
pub fn print_minimal(value: &Value) {
    // Try to extract the "result" envelope
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        // Year summary: the net income after taxes, out of the totals block.
        if let Some(net) = map
            .get("totals")
            .and_then(|t| t.get("net_income"))
            .filter(|v| !v.is_null())
        {
            println!("{}", format_minimal(net));
            return;
        }

        // Flat headline fields, in priority order.
        let priority_keys = [
            "annual_total",
            "type",
            "timing_difference",
            "cash_net_after_all",
        ];
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    // Not an object, just print directly
    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
