use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

use crate::core::models::ChatRequest;
use crate::errors::HandlerError;

/// Pulls the request document out of a Lambda event.
///
/// API Gateway proxy events carry it as a string `body` (optionally base64
/// encoded). Direct invocations either pass an object `body` or are the
/// request themselves.
pub fn extract_body(event: &Value) -> Result<Value, HandlerError> {
    let Some(object) = event.as_object() else {
        return Err(HandlerError::InvalidRequest(
            "event payload must be a JSON object".to_string(),
        ));
    };

    let Some(body) = object.get("body") else {
        return Ok(event.clone());
    };

    match body {
        Value::Null => Ok(json!({})),
        Value::Object(_) => Ok(body.clone()),
        Value::String(text) => {
            if is_base64_encoded(event) {
                let bytes = STANDARD.decode(text.trim())?;
                Ok(serde_json::from_slice(&bytes)?)
            } else {
                Ok(serde_json::from_str(text)?)
            }
        }
        _ => Err(HandlerError::InvalidRequest(
            "body must be a JSON object or string".to_string(),
        )),
    }
}

fn is_base64_encoded(event: &Value) -> bool {
    event
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

pub fn parse_chat_request(event: &Value) -> Result<ChatRequest, HandlerError> {
    let body = extract_body(event)?;
    if !body.is_object() {
        return Err(HandlerError::InvalidRequest(
            "request body must be a JSON object".to_string(),
        ));
    }
    Ok(serde_json::from_value(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_body_from_proxy_string() {
        let event = json!({ "body": "{\"text\":\"Hola\"}" });
        assert_eq!(extract_body(&event).unwrap(), json!({ "text": "Hola" }));
    }

    #[test]
    fn test_extract_body_base64_encoded() {
        let encoded = STANDARD.encode("{\"sessionId\":\"s1\"}");
        let event = json!({ "body": encoded, "isBase64Encoded": true });
        assert_eq!(extract_body(&event).unwrap(), json!({ "sessionId": "s1" }));
    }

    #[test]
    fn test_extract_body_direct_invocation() {
        let event = json!({ "text": "hi" });
        assert_eq!(extract_body(&event).unwrap(), event);
    }

    #[test]
    fn test_extract_body_null_is_empty_object() {
        let event = json!({ "body": null });
        assert_eq!(extract_body(&event).unwrap(), json!({}));
    }

    #[test]
    fn test_extract_body_rejects_non_object_event() {
        let err = extract_body(&json!("just a string")).unwrap_err();
        assert!(matches!(err, HandlerError::InvalidRequest(_)));
    }

    #[test]
    fn test_parse_chat_request_rejects_array_body() {
        let event = json!({ "body": "[1,2,3]" });
        let err = parse_chat_request(&event).unwrap_err();
        assert!(matches!(err, HandlerError::InvalidRequest(_)));
    }
}
