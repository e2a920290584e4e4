//! Response envelope builders shared by both handlers.

use serde_json::{Value, json};

use crate::errors::HandlerError;

// ============================================================================
// Success Responses
// ============================================================================

/// Returns a 200 OK response with a `{"message": ..}` body and no headers.
#[must_use]
pub fn ok_message(message: &str) -> Value {
    json!({
        "statusCode": 200,
        "body": json!({ "message": message }).to_string()
    })
}

/// Returns a 200 OK response with a JSON body and content-type header.
#[must_use]
pub fn ok_json(body: &Value) -> Value {
    json!({
        "statusCode": 200,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

// ============================================================================
// Error Responses
// ============================================================================

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}

/// Same as [`err_response`] but carries the JSON content-type header.
#[must_use]
pub fn err_json(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "error": message }).to_string()
    })
}

/// Maps a handler failure onto its structured JSON error envelope.
#[must_use]
pub fn from_error(error: &HandlerError) -> Value {
    err_json(error.status_code(), &error.public_message())
}
