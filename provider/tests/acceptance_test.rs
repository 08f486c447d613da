//! Acceptance tests against a live NetBox
//!
//! These tests require a running NetBox instance.
//! Set NETBOX_HOST and NETBOX_TOKEN environment variables to run.

use serde_json::{Value, json};
use terraform_provider_netbox::{AttributeMap, NetBoxProvider};

fn attrs(value: Value) -> AttributeMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

/// Provider configured from the environment
fn live_provider() -> NetBoxProvider {
    let mut provider = NetBoxProvider::new();
    provider
        .configure(AttributeMap::new())
        .expect("NETBOX_HOST must be set");
    provider
}

#[tokio::test]
#[ignore] // Requires running NetBox instance
async fn test_validate_token() {
    let provider = live_provider();
    provider
        .client()
        .expect("configured")
        .validate_token()
        .await
        .expect("Token rejected");
}

#[tokio::test]
#[ignore]
async fn test_rir_lifecycle() {
    let provider = live_provider();

    let state = provider
        .create_resource("netbox_ipam_rir", attrs(json!({"name": "acctest-rir", "slug": "acctest-rir"})))
        .await
        .expect("Failed to create RIR");
    assert_eq!(state["slug"], json!("acctest-rir"));

    let state = provider
        .update_resource(
            "netbox_ipam_rir",
            attrs(json!({"name": "acctest-rir-renamed", "slug": "acctest-rir"})),
            state,
        )
        .await
        .expect("Failed to update RIR");
    assert_eq!(state["name"], json!("acctest-rir-renamed"));

    provider
        .delete_resource("netbox_ipam_rir", state.clone())
        .await
        .expect("Failed to delete RIR");
    let gone = provider
        .read_resource("netbox_ipam_rir", state)
        .await
        .expect("Failed to refresh RIR");
    assert!(gone.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_available_prefix_from_container() {
    let provider = live_provider();

    let parent = provider
        .create_resource(
            "netbox_ipam_prefix",
            attrs(json!({"prefix": "198.18.0.0/16", "status": "container", "description": "acctest"})),
        )
        .await
        .expect("Failed to create container prefix");
    let parent_id: u64 = parent["id"]
        .as_str()
        .and_then(|id| id.parse().ok())
        .expect("numeric id");

    let child = provider
        .create_resource(
            "netbox_ipam_available_prefix",
            attrs(json!({"prefix_id": parent_id, "prefix_length": 24})),
        )
        .await
        .expect("Failed to allocate prefix");
    println!("Allocated {}", child["prefix"]);

    let free = provider
        .read_data_source("netbox_ipam_available_prefixes", attrs(json!({"prefix_id": parent_id})))
        .await
        .expect("Failed to list available prefixes");
    assert!(free["prefixes"].as_array().is_some_and(|p| !p.is_empty()));

    provider
        .delete_resource("netbox_ipam_available_prefix", child)
        .await
        .expect("Failed to delete allocated prefix");
    provider
        .delete_resource("netbox_ipam_prefix", parent)
        .await
        .expect("Failed to delete container prefix");
}
