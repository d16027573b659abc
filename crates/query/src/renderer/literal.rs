use model::core::{
    utils::quote_single,
    value::{Value, iso_timestamp},
};

/// Renders a parameter value as a literal token of the filter grammar.
///
/// - booleans and numbers: bare text (`true`, `20`, `1.5`)
/// - strings: single-quoted, `'` escaped as `\'`
/// - null: `null`
/// - timestamps: `'2021-01-01 00:00:00.000Z'`
/// - arrays and objects: single-quoted JSON, `'` escaped as `\'`
pub fn literal(value: &Value) -> String {
    match value {
        Value::Boolean(v) => v.to_string(),
        Value::Int(v) => v.to_string(),
        Value::Uint(v) => v.to_string(),
        Value::Float(v) => number(*v),
        Value::String(v) => quote_single(v),
        Value::Null => "null".to_string(),
        Value::Timestamp(v) => quote_single(&iso_timestamp(v).replacen('T', " ", 1)),
        Value::Json(json) => match json {
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                quote_single(&json.to_string())
            }
            scalar => literal(&Value::from(scalar.clone())),
        },
    }
}

fn number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        let text = if v > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if v == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else {
        v.to_string()
    }
}
