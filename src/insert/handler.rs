//! Insert-record Lambda handler: writes one fixed record and reports the outcome.

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use crate::api::helpers;
use crate::clients::{DynamoItemStore, ItemStore};
use crate::core::config::AppConfig;
use crate::core::models::InsertRecord;

pub use self::function_handler as handler;

pub const INSERT_SUCCESS_MESSAGE: &str = "Data inserted successfully!";
pub const INSERT_FAILURE_MESSAGE: &str = "Could not write to DynamoDB";

#[derive(Clone)]
pub struct InsertServices {
    pub config: AppConfig,
    pub store: Arc<dyn ItemStore>,
}

impl InsertServices {
    #[must_use]
    pub fn from_aws(config: AppConfig, shared_config: &aws_config::SdkConfig) -> Self {
        Self {
            config,
            store: Arc::new(DynamoItemStore::new(shared_config)),
        }
    }
}

/// Lambda handler for the insert entrypoint. The event payload is ignored.
///
/// # Errors
///
/// Never returns `Err`; a failed write becomes a 500 envelope.
#[tracing::instrument(level = "info", skip(services, event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    services: &InsertServices,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(insert_record(services).await)
}

/// Single upsert attempt; no retries.
pub async fn insert_record(services: &InsertServices) -> Value {
    let record = InsertRecord::default();
    let table = &services.config.example_table_name;

    let item = match serde_json::to_value(&record) {
        Ok(item) => item,
        Err(e) => {
            error!("Failed to serialize record: {}", e);
            return helpers::err_response(500, INSERT_FAILURE_MESSAGE);
        }
    };

    match services.store.put_item(table, item).await {
        Ok(()) => {
            info!(table = %table, id = %record.id, "Record inserted");
            helpers::ok_message(INSERT_SUCCESS_MESSAGE)
        }
        Err(e) => {
            error!(table = %table, "DynamoDB Error: {}", e);
            helpers::err_response(500, INSERT_FAILURE_MESSAGE)
        }
    }
}
