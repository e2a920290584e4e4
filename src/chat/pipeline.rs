//! The chat pipeline: translate, analyze sentiment, label the image, generate
//! a reply, then persist the interaction.
//!
//! Every step returns a `Result`; the first failure stops the pipeline and is
//! handed back to the handler for mapping onto an error envelope.

use futures::future::try_join;
use tracing::{debug, info};

use super::handler::ChatServices;
use super::reply::ReplyContext;
use crate::clients::{ImageLabeler, SOURCE_LANGUAGE_AUTO, SentimentAnalyzer, Translator};
use crate::core::models::{ChatLogEntry, ChatReply, ChatRequest};
use crate::errors::HandlerError;

/// Intermediate results of the three analysis steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub translated_text: String,
    pub sentiment: String,
    pub image_labels: Vec<String>,
}

/// Step 1. Empty text is passed through without calling the translator.
pub async fn translate_text(
    translator: &dyn Translator,
    text: &str,
    target_language: &str,
) -> Result<String, HandlerError> {
    if text.is_empty() {
        return Ok(String::new());
    }
    translator
        .translate(text, SOURCE_LANGUAGE_AUTO, target_language)
        .await
}

/// Step 2.
pub async fn analyze_sentiment(
    analyzer: &dyn SentimentAnalyzer,
    text: &str,
    language: &str,
) -> Result<String, HandlerError> {
    analyzer.detect_sentiment(text, language).await
}

/// Step 3. No image means no labels and no labeler call.
pub async fn label_image(
    labeler: &dyn ImageLabeler,
    image: Option<&[u8]>,
    max_labels: i32,
    min_confidence: f32,
) -> Result<Vec<String>, HandlerError> {
    let Some(bytes) = image else {
        return Ok(Vec::new());
    };
    let labels = labeler
        .detect_labels(bytes, max_labels, min_confidence)
        .await?;
    for label in &labels {
        debug!(name = %label.name, confidence = label.confidence, "Image label");
    }
    Ok(labels.into_iter().map(|label| label.name).collect())
}

/// Runs steps 1-3, either strictly in order or with labelling running
/// alongside the translate/sentiment chain.
pub async fn analyze(
    services: &ChatServices,
    text: &str,
    image: Option<&[u8]>,
) -> Result<Analysis, HandlerError> {
    let config = &services.config;
    let language = config.target_language.as_str();

    let text_branch = async {
        let translated =
            translate_text(services.translator.as_ref(), text, language).await?;
        debug!(translated = %translated, "Translation step complete");
        let sentiment =
            analyze_sentiment(services.sentiment.as_ref(), &translated, language).await?;
        debug!(sentiment = %sentiment, "Sentiment step complete");
        Ok::<_, HandlerError>((translated, sentiment))
    };
    let label_branch = label_image(
        services.labeler.as_ref(),
        image,
        config.label_max_count,
        config.label_min_confidence,
    );

    let ((translated_text, sentiment), image_labels) = if config.concurrent_analysis {
        try_join(text_branch, label_branch).await?
    } else {
        let text_result = text_branch.await?;
        (text_result, label_branch.await?)
    };

    Ok(Analysis {
        translated_text,
        sentiment,
        image_labels,
    })
}

/// Runs the whole pipeline for one request and returns the reply body.
///
/// # Errors
///
/// Returns the first failing step's error. Nothing is persisted unless all
/// earlier steps succeeded.
pub async fn run_chat(
    services: &ChatServices,
    request: &ChatRequest,
    timestamp: i64,
) -> Result<ChatReply, HandlerError> {
    let image = request.decode_image()?;
    if request.voice.is_some() {
        debug!("Voice payload present; not processed");
    }

    let user_text = request.text();
    let analysis = analyze(services, user_text, image.as_deref()).await?;

    let bot_response = services
        .generator
        .generate(&ReplyContext {
            text: analysis.translated_text.clone(),
            image_labels: analysis.image_labels.clone(),
            sentiment: analysis.sentiment.clone(),
        })
        .await?;

    let entry = ChatLogEntry {
        session_id: request.session_id().to_string(),
        timestamp,
        user_text: user_text.to_string(),
        translated_text: analysis.translated_text,
        sentiment: analysis.sentiment.clone(),
        image_labels: analysis.image_labels.clone(),
        bot_response: bot_response.clone(),
    };
    let item = serde_json::to_value(&entry)
        .map_err(|e| HandlerError::StoreError(format!("Failed to serialize chat log: {e}")))?;
    services
        .store
        .put_item(&services.config.chat_log_table_name, item)
        .await?;

    info!(
        session_id = %entry.session_id,
        labels = entry.image_labels.len(),
        "Chat log persisted"
    );

    Ok(ChatReply {
        reply: bot_response,
        sentiment: analysis.sentiment,
        image_labels: analysis.image_labels,
    })
}
