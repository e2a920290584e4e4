//! Multimodal chat Lambda handler.

use std::sync::Arc;

use chrono::Utc;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::pipeline;
use super::reply::{ReplyGenerator, SimulatedReplyGenerator};
use crate::api::{helpers, parsing};
use crate::clients::{
    AwsImageLabeler, AwsSentimentAnalyzer, AwsTranslator, DynamoItemStore, ImageLabeler,
    ItemStore, SentimentAnalyzer, Translator,
};
use crate::core::config::AppConfig;

pub use self::function_handler as handler;

/// Clients and settings shared by every invocation of the chat function.
///
/// Built once at process start and borrowed by each invocation.
#[derive(Clone)]
pub struct ChatServices {
    pub config: AppConfig,
    pub translator: Arc<dyn Translator>,
    pub sentiment: Arc<dyn SentimentAnalyzer>,
    pub labeler: Arc<dyn ImageLabeler>,
    pub generator: Arc<dyn ReplyGenerator>,
    pub store: Arc<dyn ItemStore>,
}

impl ChatServices {
    /// Wires the AWS-backed clients and the simulated reply generator.
    #[must_use]
    pub fn from_aws(config: AppConfig, shared_config: &aws_config::SdkConfig) -> Self {
        Self {
            config,
            translator: Arc::new(AwsTranslator::new(shared_config)),
            sentiment: Arc::new(AwsSentimentAnalyzer::new(shared_config)),
            labeler: Arc::new(AwsImageLabeler::new(shared_config)),
            generator: Arc::new(SimulatedReplyGenerator),
            store: Arc::new(DynamoItemStore::new(shared_config)),
        }
    }
}

/// Lambda handler for the chat entrypoint.
///
/// # Errors
///
/// Never returns `Err`; every failure is reported as a structured error
/// envelope instead.
#[tracing::instrument(level = "info", skip(services, event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    services: &ChatServices,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle_chat(services, &event.payload).await)
}

/// Parses the event, runs the pipeline and builds the response envelope.
pub async fn handle_chat(services: &ChatServices, payload: &Value) -> Value {
    let request = match parsing::parse_chat_request(payload) {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to parse chat request: {}", e);
            return helpers::from_error(&e);
        }
    };
    info!("Chat Lambda received request: {}", request.log_summary());

    let timestamp = Utc::now().timestamp_millis();
    match pipeline::run_chat(services, &request, timestamp).await {
        Ok(reply) => match serde_json::to_value(&reply) {
            Ok(body) => helpers::ok_json(&body),
            Err(e) => {
                error!("Failed to serialize chat reply: {}", e);
                helpers::err_json(500, "Internal error")
            }
        },
        Err(e) => {
            error!(session_id = %request.session_id(), "Chat pipeline failed: {}", e);
            helpers::from_error(&e)
        }
    }
}
