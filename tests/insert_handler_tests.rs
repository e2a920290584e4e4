mod common;

use chatlog::core::config::AppConfig;
use chatlog::insert::InsertServices;
use chatlog::insert::handler::insert_record;
use common::{FakeStore, body_of, status_of};
use serde_json::json;

#[tokio::test]
async fn test_insert_writes_fixed_record() {
    let store = FakeStore::working();
    let services = InsertServices {
        config: AppConfig::default(),
        store: store.clone(),
    };

    let response = insert_record(&services).await;

    assert_eq!(status_of(&response), 200);
    assert!(response.get("headers").is_none());
    assert_eq!(
        body_of(&response),
        json!({ "message": "Data inserted successfully!" })
    );

    let items = store.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].0, "ExampleTable");
    assert_eq!(
        items[0].1,
        json!({ "id": "123", "message": "Hello from Lambda!" })
    );
}

#[tokio::test]
async fn test_repeated_inserts_target_same_key() {
    let store = FakeStore::working();
    let services = InsertServices {
        config: AppConfig::default(),
        store: store.clone(),
    };

    insert_record(&services).await;
    insert_record(&services).await;

    let items = store.items();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|(_, item)| item["id"] == "123"));
}

#[tokio::test]
async fn test_insert_store_failure_returns_500() {
    let store = FakeStore::failing();
    let services = InsertServices {
        config: AppConfig::default(),
        store: store.clone(),
    };

    let response = insert_record(&services).await;

    assert_eq!(status_of(&response), 500);
    assert_eq!(
        body_of(&response),
        json!({ "error": "Could not write to DynamoDB" })
    );
    assert!(store.items().is_empty());
}

#[tokio::test]
async fn test_insert_uses_configured_table() {
    let store = FakeStore::working();
    let services = InsertServices {
        config: AppConfig {
            example_table_name: "example-prod".to_string(),
            ..AppConfig::default()
        },
        store: store.clone(),
    };

    insert_record(&services).await;

    assert_eq!(store.items()[0].0, "example-prod");
}
