//! In-memory fakes for the capability traits. Each fake records its calls.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chatlog::HandlerError;
use chatlog::chat::ChatServices;
use chatlog::chat::reply::SimulatedReplyGenerator;
use chatlog::clients::{ImageLabel, ImageLabeler, ItemStore, SentimentAnalyzer, Translator};
use chatlog::core::config::AppConfig;
use serde_json::Value;

#[derive(Default)]
pub struct FakeTranslator {
    pub reply: String,
    pub fail: bool,
    pub calls: Mutex<Vec<(String, String, String)>>,
}

impl FakeTranslator {
    pub fn returning(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            ..Self::default()
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, HandlerError> {
        self.calls.lock().unwrap().push((
            text.to_string(),
            source_language.to_string(),
            target_language.to_string(),
        ));
        if self.fail {
            return Err(HandlerError::TranslationError("service down".to_string()));
        }
        Ok(self.reply.clone())
    }
}

#[derive(Default)]
pub struct FakeSentiment {
    pub label: String,
    pub fail: bool,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl FakeSentiment {
    pub fn returning(label: &str) -> Arc<Self> {
        Arc::new(Self {
            label: label.to_string(),
            ..Self::default()
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SentimentAnalyzer for FakeSentiment {
    async fn detect_sentiment(&self, text: &str, language: &str) -> Result<String, HandlerError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), language.to_string()));
        if self.fail {
            return Err(HandlerError::SentimentError("service down".to_string()));
        }
        Ok(self.label.clone())
    }
}

#[derive(Default)]
pub struct FakeLabeler {
    pub labels: Vec<String>,
    pub fail: bool,
    pub calls: Mutex<Vec<(Vec<u8>, i32, f32)>>,
}

impl FakeLabeler {
    pub fn returning(labels: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            labels: labels.iter().map(|l| (*l).to_string()).collect(),
            ..Self::default()
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageLabeler for FakeLabeler {
    async fn detect_labels(
        &self,
        image: &[u8],
        max_labels: i32,
        min_confidence: f32,
    ) -> Result<Vec<ImageLabel>, HandlerError> {
        self.calls
            .lock()
            .unwrap()
            .push((image.to_vec(), max_labels, min_confidence));
        if self.fail {
            return Err(HandlerError::LabelError("service down".to_string()));
        }
        Ok(self
            .labels
            .iter()
            .map(|name| ImageLabel {
                name: name.clone(),
                confidence: 99.0,
            })
            .collect())
    }
}

#[derive(Default)]
pub struct FakeStore {
    pub fail: bool,
    pub items: Mutex<Vec<(String, Value)>>,
}

impl FakeStore {
    pub fn working() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    pub fn items(&self) -> Vec<(String, Value)> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl ItemStore for FakeStore {
    async fn put_item(&self, table: &str, item: Value) -> Result<(), HandlerError> {
        if self.fail {
            return Err(HandlerError::StoreError(
                "ConditionalCheckFailed".to_string(),
            ));
        }
        self.items.lock().unwrap().push((table.to_string(), item));
        Ok(())
    }
}

pub struct ChatFixture {
    pub translator: Arc<FakeTranslator>,
    pub sentiment: Arc<FakeSentiment>,
    pub labeler: Arc<FakeLabeler>,
    pub store: Arc<FakeStore>,
}

impl ChatFixture {
    pub fn new() -> Self {
        Self {
            translator: FakeTranslator::returning("Hello"),
            sentiment: FakeSentiment::returning("POSITIVE"),
            labeler: FakeLabeler::returning(&[]),
            store: FakeStore::working(),
        }
    }

    pub fn services(&self) -> ChatServices {
        self.services_with(AppConfig::default())
    }

    pub fn services_with(&self, config: AppConfig) -> ChatServices {
        ChatServices {
            config,
            translator: self.translator.clone(),
            sentiment: self.sentiment.clone(),
            labeler: self.labeler.clone(),
            generator: Arc::new(SimulatedReplyGenerator),
            store: self.store.clone(),
        }
    }
}

/// Wraps a request document the way API Gateway delivers it.
pub fn proxy_event(body: &Value) -> Value {
    serde_json::json!({ "body": body.to_string() })
}

pub fn status_of(response: &Value) -> u64 {
    response["statusCode"].as_u64().unwrap()
}

pub fn body_of(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
}
