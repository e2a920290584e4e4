use std::env;
use std::str::FromStr;

use crate::errors::HandlerError;

pub const DEFAULT_EXAMPLE_TABLE: &str = "ExampleTable";
pub const DEFAULT_CHAT_LOG_TABLE: &str = "ChatLogs";
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";
pub const DEFAULT_LABEL_MAX_COUNT: i32 = 5;
pub const DEFAULT_LABEL_MIN_CONFIDENCE: f32 = 70.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub example_table_name: String,
    pub chat_log_table_name: String,
    pub target_language: String,
    pub label_max_count: i32,
    pub label_min_confidence: f32,
    pub concurrent_analysis: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            example_table_name: DEFAULT_EXAMPLE_TABLE.to_string(),
            chat_log_table_name: DEFAULT_CHAT_LOG_TABLE.to_string(),
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            label_max_count: DEFAULT_LABEL_MAX_COUNT,
            label_min_confidence: DEFAULT_LABEL_MIN_CONFIDENCE,
            concurrent_analysis: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, HandlerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Unset or blank
    /// variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HandlerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            example_table_name: get("EXAMPLE_TABLE_NAME").unwrap_or(defaults.example_table_name),
            chat_log_table_name: get("CHAT_LOG_TABLE_NAME")
                .unwrap_or(defaults.chat_log_table_name),
            target_language: get("TARGET_LANGUAGE_CODE").unwrap_or(defaults.target_language),
            label_max_count: parse_var("LABEL_MAX_COUNT", get("LABEL_MAX_COUNT"))?
                .unwrap_or(defaults.label_max_count),
            label_min_confidence: parse_var("LABEL_MIN_CONFIDENCE", get("LABEL_MIN_CONFIDENCE"))?
                .unwrap_or(defaults.label_min_confidence),
            concurrent_analysis: parse_var(
                "CHAT_CONCURRENT_ANALYSIS",
                get("CHAT_CONCURRENT_ANALYSIS").map(|v| v.to_ascii_lowercase()),
            )?
            .unwrap_or(defaults.concurrent_analysis),
        })
    }
}

fn parse_var<T>(name: &str, raw: Option<String>) -> Result<Option<T>, HandlerError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.map(|v| {
        v.trim()
            .parse::<T>()
            .map_err(|e| HandlerError::ConfigError(format!("{}: {}", name, e)))
    })
    .transpose()
}
