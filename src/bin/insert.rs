use chatlog::core::config::AppConfig;
use chatlog::insert::{InsertServices, handler};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    chatlog::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let shared_config = aws_config::from_env().load().await;
    let services = InsertServices::from_aws(config, &shared_config);
    let services = &services;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(services, event).await
    }))
    .await
}
