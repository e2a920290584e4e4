use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};

use crate::errors::HandlerError;

pub const DEFAULT_SESSION_ID: &str = "default-session";
pub const INSERT_RECORD_ID: &str = "123";
pub const INSERT_RECORD_MESSAGE: &str = "Hello from Lambda!";

// Padding optional, stray low bits tolerated.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Fixed record written by the insert handler. Every invocation overwrites the same key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertRecord {
    pub id: String,
    pub message: String,
}

impl Default for InsertRecord {
    fn default() -> Self {
        Self {
            id: INSERT_RECORD_ID.to_string(),
            message: INSERT_RECORD_MESSAGE.to_string(),
        }
    }
}

/// Incoming chat payload after defaults are applied.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "non_empty")]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub voice: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub image: Option<String>,
}

impl ChatRequest {
    #[must_use]
    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or(DEFAULT_SESSION_ID)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// One-line description for logs: the session and payload sizes, never
    /// the payloads themselves.
    #[must_use]
    pub fn log_summary(&self) -> String {
        let len = |field: &Option<String>| field.as_ref().map_or(0, String::len);
        format!(
            "session_id={} text_chars={} image_bytes_b64={} voice_bytes_b64={}",
            self.session_id(),
            self.text().chars().count(),
            len(&self.image),
            len(&self.voice)
        )
    }

    /// Decodes the base64 image payload, if one was sent.
    ///
    /// Whitespace (MIME line wrapping) is ignored, padding is optional and the
    /// URL-safe alphabet is accepted alongside the standard one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if the payload still is not base64.
    pub fn decode_image(&self) -> Result<Option<Vec<u8>>, HandlerError> {
        self.image
            .as_deref()
            .map(decode_lenient_base64)
            .transpose()
    }
}

pub fn decode_lenient_base64(encoded: &str) -> Result<Vec<u8>, HandlerError> {
    let normalized: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    Ok(LENIENT_BASE64.decode(normalized)?)
}

// Null and empty strings count as absent.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// One persisted chat interaction, keyed by `sessionId` with `timestamp` as sort attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatLogEntry {
    pub session_id: String,
    pub timestamp: i64,
    pub user_text: String,
    pub translated_text: String,
    pub sentiment: String,
    pub image_labels: Vec<String>,
    pub bot_response: String,
}

/// Body returned to the caller on a successful chat invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub reply: String,
    pub sentiment: String,
    pub image_labels: Vec<String>,
}
