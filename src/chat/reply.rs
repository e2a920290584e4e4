//! Conversational reply generation.
//!
//! The deployed function has no generative model wired in; replies come from
//! [`SimulatedReplyGenerator`]. A real model client only needs to implement
//! [`ReplyGenerator`].

use async_trait::async_trait;

use crate::errors::HandlerError;

/// Everything the reply is allowed to depend on.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyContext {
    pub text: String,
    pub image_labels: Vec<String>,
    pub sentiment: String,
}

#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn generate(&self, context: &ReplyContext) -> Result<String, HandlerError>;
}

/// Renders a fixed template instead of calling a model.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedReplyGenerator;

#[async_trait]
impl ReplyGenerator for SimulatedReplyGenerator {
    async fn generate(&self, context: &ReplyContext) -> Result<String, HandlerError> {
        Ok(render_simulated_reply(context))
    }
}

#[must_use]
pub fn render_simulated_reply(context: &ReplyContext) -> String {
    format!(
        "Simulated Bedrock reply based on text: \"{}\" and image labels: [{}] with sentiment: {}",
        context.text,
        context.image_labels.join(", "),
        context.sentiment
    )
}
