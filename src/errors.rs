use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to translate text: {0}")]
    TranslationError(String),

    #[error("Failed to detect sentiment: {0}")]
    SentimentError(String),

    #[error("Failed to detect image labels: {0}")]
    LabelError(String),

    #[error("Failed to generate reply: {0}")]
    GenerationError(String),

    #[error("Failed to write to DynamoDB: {0}")]
    StoreError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl HandlerError {
    /// HTTP status code reported to the caller for this failure.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::InvalidRequest(_) => 400,
            HandlerError::TranslationError(_)
            | HandlerError::SentimentError(_)
            | HandlerError::LabelError(_)
            | HandlerError::GenerationError(_) => 502,
            HandlerError::StoreError(_) | HandlerError::ConfigError(_) => 500,
        }
    }

    /// Message safe to put in a response body. Upstream error details stay in the logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            HandlerError::InvalidRequest(detail) => format!("Invalid request: {detail}"),
            HandlerError::TranslationError(_) => "Could not translate text".to_string(),
            HandlerError::SentimentError(_) => "Could not analyze sentiment".to_string(),
            HandlerError::LabelError(_) => "Could not analyze image".to_string(),
            HandlerError::GenerationError(_) => "Could not generate a reply".to_string(),
            HandlerError::StoreError(_) => "Could not write to DynamoDB".to_string(),
            HandlerError::ConfigError(_) => "Internal configuration error".to_string(),
        }
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(error: serde_json::Error) -> Self {
        HandlerError::InvalidRequest(format!("malformed JSON: {error}"))
    }
}

impl From<base64::DecodeError> for HandlerError {
    fn from(error: base64::DecodeError) -> Self {
        HandlerError::InvalidRequest(format!("malformed base64: {error}"))
    }
}
