use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Value;
use tracing::debug;

use super::ItemStore;
use crate::errors::HandlerError;

/// DynamoDB backed [`ItemStore`]. Writes are unconditional `PutItem` upserts.
#[derive(Debug, Clone)]
pub struct DynamoItemStore {
    client: DynamoClient,
}

impl DynamoItemStore {
    #[must_use]
    pub fn new(shared_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: DynamoClient::new(shared_config),
        }
    }
}

#[async_trait]
impl ItemStore for DynamoItemStore {
    async fn put_item(&self, table: &str, item: Value) -> Result<(), HandlerError> {
        let attributes = to_item(item)?;
        debug!(table = %table, attributes = attributes.len(), "Writing item");

        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(attributes))
            .send()
            .await
            .map_err(|e| HandlerError::StoreError(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }
}

/// Converts a JSON object into a DynamoDB item.
pub fn to_item(item: Value) -> Result<HashMap<String, AttributeValue>, HandlerError> {
    match item {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(k, v)| (k, to_attribute_value(v)))
            .collect()),
        other => Err(HandlerError::StoreError(format!(
            "item must be a JSON object, got {other}"
        ))),
    }
}

#[must_use]
pub fn to_attribute_value(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(items) => {
            AttributeValue::L(items.into_iter().map(to_attribute_value).collect())
        }
        Value::Object(map) => AttributeValue::M(
            map.into_iter()
                .map(|(k, v)| (k, to_attribute_value(v)))
                .collect(),
        ),
    }
}
