use async_trait::async_trait;
use aws_sdk_comprehend::Client as ComprehendClient;
use aws_sdk_comprehend::error::DisplayErrorContext;
use aws_sdk_comprehend::types::LanguageCode;
use tracing::debug;

use super::SentimentAnalyzer;
use crate::errors::HandlerError;

/// Label reported for empty input, which Comprehend refuses to analyze.
pub const EMPTY_TEXT_SENTIMENT: &str = "NEUTRAL";

/// Amazon Comprehend backed [`SentimentAnalyzer`].
#[derive(Debug, Clone)]
pub struct AwsSentimentAnalyzer {
    client: ComprehendClient,
}

impl AwsSentimentAnalyzer {
    #[must_use]
    pub fn new(shared_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: ComprehendClient::new(shared_config),
        }
    }
}

#[async_trait]
impl SentimentAnalyzer for AwsSentimentAnalyzer {
    async fn detect_sentiment(&self, text: &str, language: &str) -> Result<String, HandlerError> {
        if text.trim().is_empty() {
            debug!("Empty text, skipping Comprehend call");
            return Ok(EMPTY_TEXT_SENTIMENT.to_string());
        }

        let output = self
            .client
            .detect_sentiment()
            .text(text)
            .language_code(LanguageCode::from(language))
            .send()
            .await
            .map_err(|e| HandlerError::SentimentError(DisplayErrorContext(&e).to_string()))?;

        output
            .sentiment()
            .map(|s| s.as_str().to_string())
            .ok_or_else(|| {
                HandlerError::SentimentError("Comprehend returned no sentiment".to_string())
            })
    }
}
