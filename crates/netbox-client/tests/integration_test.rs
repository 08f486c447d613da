//! Integration tests for NetBox client
//!
//! These tests require a running NetBox instance.
//! Set NETBOX_HOST (API base URL, e.g. http://localhost:8001/api) and NETBOX_TOKEN to run.

use netbox_client::{NetBoxClient, WritablePrefix, WritableVrf};

fn live_client() -> NetBoxClient {
    let url = std::env::var("NETBOX_HOST")
        .unwrap_or_else(|_| "http://localhost:8001/api".to_string());
    let token = std::env::var("NETBOX_TOKEN")
        .expect("NETBOX_TOKEN environment variable must be set");

    NetBoxClient::new(url, Some(token)).expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Requires running NetBox instance
async fn test_validate_token() {
    let client = live_client();
    client.validate_token().await.expect("Token rejected");
}

#[tokio::test]
#[ignore]
async fn test_query_prefixes() {
    let client = live_client();

    let prefixes = client
        .query_prefixes(&[], true)
        .await
        .expect("Failed to query prefixes");

    println!("Found {} prefixes", prefixes.len());
}

#[tokio::test]
#[ignore]
async fn test_prefix_lifecycle_with_available_prefix() {
    let client = live_client();

    let parent = client
        .create_prefix(&WritablePrefix {
            prefix: Some("10.254.0.0/16".to_string()),
            status: Some("container".to_string()),
            description: Some("netbox-client integration test".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create prefix");

    let child = client
        .create_available_prefix(parent.id, 24)
        .await
        .expect("Failed to allocate child prefix");
    assert!(child.prefix.starts_with("10.254."));
    assert!(child.prefix.ends_with("/24"));

    client.delete_prefix(child.id).await.expect("Failed to delete child");
    client.delete_prefix(parent.id).await.expect("Failed to delete parent");

    let gone = client.get_prefix(parent.id).await;
    assert!(gone.is_err_and(|e| e.is_not_found()));
}

#[tokio::test]
#[ignore]
async fn test_vrf_patch_description() {
    let client = live_client();

    let vrf = client
        .create_vrf(&WritableVrf {
            name: Some("netbox-client-it".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create VRF");

    let updated = client
        .update_vrf(
            vrf.id,
            &WritableVrf {
                description: Some("patched".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to patch VRF");
    assert_eq!(updated.name, "netbox-client-it");
    assert_eq!(updated.description, "patched");

    client.delete_vrf(vrf.id).await.expect("Failed to delete VRF");
}
