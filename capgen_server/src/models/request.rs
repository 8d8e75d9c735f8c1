use capgen::CaptionRequest;
use serde_json::{Map, Value};

use crate::utils::CaptionError;

/// Build a [`CaptionRequest`] from a parsed body using loose truthiness:
/// `null`, `false`, `0`, and `""` count as missing, while any other value is
/// rendered to text the way a template literal would.
///
/// A `null` body can't be destructured at all and is an internal error.
/// Other non-object bodies simply have no fields.
pub fn parse_caption_request(body: Value) -> Result<CaptionRequest, CaptionError> {
    let fields = match body {
        Value::Null => {
            return Err(CaptionError::Internal(
                "Cannot destructure a null request body".to_string(),
            ));
        }
        Value::Object(fields) => fields,
        _ => Map::new(),
    };
    let field = |name: &str| {
        fields
            .get(name)
            .filter(|value| is_truthy(value))
            .map(to_template_string)
            .ok_or(CaptionError::BadRequest)
    };
    Ok(CaptionRequest {
        topic: field("topic")?,
        platform: field("platform")?,
        style: field("style")?,
        length: field("length")?,
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn to_template_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            // Whole floats print without a fractional part.
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        // Array elements join with commas, and null elements render empty.
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                item => to_template_string(item),
            })
            .collect::<Vec<String>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
