use async_trait::async_trait;
use aws_sdk_translate::Client as TranslateClient;
use aws_sdk_translate::error::DisplayErrorContext;
use tracing::debug;

use super::Translator;
use crate::errors::HandlerError;

/// Amazon Translate backed [`Translator`].
#[derive(Debug, Clone)]
pub struct AwsTranslator {
    client: TranslateClient,
}

impl AwsTranslator {
    #[must_use]
    pub fn new(shared_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: TranslateClient::new(shared_config),
        }
    }
}

#[async_trait]
impl Translator for AwsTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, HandlerError> {
        let output = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(source_language)
            .target_language_code(target_language)
            .send()
            .await
            .map_err(|e| HandlerError::TranslationError(DisplayErrorContext(&e).to_string()))?;

        let translated = output.translated_text().to_string();
        debug!(
            input_chars = text.chars().count(),
            output_chars = translated.chars().count(),
            "Translated text to {}",
            target_language
        );

        Ok(translated)
    }
}
