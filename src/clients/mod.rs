//! Capability interfaces for the managed services the handlers call, plus
//! their AWS-backed implementations.
//!
//! Handlers only see the traits; binaries construct the AWS clients once at
//! process start and tests substitute in-memory fakes.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::HandlerError;

pub mod comprehend;
pub mod dynamodb;
pub mod rekognition;
pub mod translate;

pub use comprehend::AwsSentimentAnalyzer;
pub use dynamodb::DynamoItemStore;
pub use rekognition::AwsImageLabeler;
pub use translate::AwsTranslator;

/// Source language code that asks the translator to detect the language itself.
pub const SOURCE_LANGUAGE_AUTO: &str = "auto";

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, HandlerError>;
}

#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    /// Returns a categorical label such as `POSITIVE` or `NEUTRAL`.
    async fn detect_sentiment(&self, text: &str, language: &str) -> Result<String, HandlerError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageLabel {
    pub name: String,
    pub confidence: f32,
}

#[async_trait]
pub trait ImageLabeler: Send + Sync {
    /// Labels come back in the order the service ranked them.
    async fn detect_labels(
        &self,
        image: &[u8],
        max_labels: i32,
        min_confidence: f32,
    ) -> Result<Vec<ImageLabel>, HandlerError>;
}

/// Upsert of a single JSON object into a named table.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn put_item(&self, table: &str, item: Value) -> Result<(), HandlerError>;
}
