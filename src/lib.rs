//! Chatlog - two AWS Lambda functions gluing managed services together.
//!
//! 1. An insert Lambda that upserts a fixed record into a DynamoDB table
//! 2. A chat Lambda that translates the user's text, detects its sentiment,
//!    labels an optional image, produces a reply and logs the exchange
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - Amazon Translate, Comprehend and Rekognition for analysis
//! - DynamoDB for persistence
//! - Tokio for async runtime
//!
//! Each managed service sits behind a trait in [`clients`], so handlers take
//! their collaborators as explicit arguments and tests run against fakes.
//!
//! # Example
//!
//! ```no_run
//! use chatlog::chat::{ChatServices, handler};
//! use chatlog::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     chatlog::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let shared_config = aws_config::from_env().load().await;
//!     let services = ChatServices::from_aws(config, &shared_config);
//!     let services = &services;
//!
//!     lambda_runtime::run(lambda_runtime::service_fn(
//!         move |event: lambda_runtime::LambdaEvent<serde_json::Value>| async move {
//!             handler(services, event).await
//!         },
//!     ))
//!     .await
//! }
//! ```

pub mod api;
pub mod chat;
pub mod clients;
pub mod core;
pub mod errors;
pub mod insert;

pub use errors::HandlerError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at process start.
///
/// # Example
///
/// ```
/// chatlog::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
