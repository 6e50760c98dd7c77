use serde_json::Value;

use crate::Error;

/// Converts a structured request body to its wire form: a JSON object body
/// is replaced by its JSON string serialization, anything else passes
/// through untouched.
pub fn transform_request(body: Value) -> Result<Value, Error> {
    match body {
        Value::Object(map) => Ok(Value::String(serde_json::to_string(&map)?)),
        other => Ok(other),
    }
}

/// Converts a wire response body back to structured form: a string body is
/// parsed as JSON on a best-effort basis, keeping the original string when
/// it is not valid JSON. Anything else passes through untouched.
pub fn transform_response(body: Value) -> Value {
    if let Value::String(text) = &body {
        if let Ok(parsed) = serde_json::from_str(text) {
            return parsed;
        }
    }
    body
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_object_becomes_json_string() {
        let body = transform_request(json!({"a": 1})).unwrap();
        assert_eq!(body, json!(r#"{"a":1}"#));
    }

    #[test]
    fn request_string_passes_through() {
        let body = transform_request(json!("a=1")).unwrap();
        assert_eq!(body, json!("a=1"));
    }

    #[test]
    fn response_json_string_is_parsed() {
        let body = transform_response(json!(r#"{"a":1}"#));
        assert_eq!(body, json!({"a": 1}));
    }

    #[test]
    fn response_plain_string_is_kept() {
        let body = transform_response(json!("not json"));
        assert_eq!(body, json!("not json"));
    }

    #[test]
    fn response_non_string_passes_through() {
        let body = transform_response(json!({"a": 1}));
        assert_eq!(body, json!({"a": 1}));
    }

    #[test]
    fn request_then_response_round_trips_an_object() {
        let body = transform_request(json!({"a": [1, 2]})).unwrap();
        assert_eq!(transform_response(body), json!({"a": [1, 2]}));
    }
}
