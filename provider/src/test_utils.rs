//! Test utilities for provider unit tests
//!
//! Fixtures for the mock NetBox client and helpers that drive an adapter
//! the way the provider does: defaults applied, computed values planned from
//! prior state.

use crate::resource_data::{AttributeMap, ResourceData};
use crate::resources::Resource;
use netbox_client::{ChoiceField, MockNetBoxClient, Prefix, Site, Vrf};
use serde_json::Value;

pub const TEST_BASE_URL: &str = "http://test-netbox/api";

pub fn mock_client() -> MockNetBoxClient {
    MockNetBoxClient::new(TEST_BASE_URL)
}

/// Turn a `json!` object literal into an attribute map
pub fn attrs(value: Value) -> AttributeMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

/// Configuration as the provider hands it to an adapter
pub fn planned(resource: &dyn Resource, config: Value, prior: &AttributeMap) -> AttributeMap {
    let schema = resource.schema();
    let mut config = attrs(config);
    schema.apply_defaults(&mut config);
    schema.plan(&config, prior)
}

pub async fn create(resource: &dyn Resource, client: &MockNetBoxClient, config: Value) -> ResourceData {
    let mut d = ResourceData::from_config(planned(resource, config, &AttributeMap::new()));
    resource.create(client, &mut d).await.expect("create should succeed");
    d
}

pub async fn update(
    resource: &dyn Resource,
    client: &MockNetBoxClient,
    prior: &AttributeMap,
    config: Value,
) -> ResourceData {
    let mut d = ResourceData::new(planned(resource, config, prior), prior.clone());
    resource.update(client, &mut d).await.expect("update should succeed");
    d
}

/// Plain refresh: no configuration, only prior state
pub async fn refresh(resource: &dyn Resource, client: &MockNetBoxClient, prior: &AttributeMap) -> ResourceData {
    let mut d = ResourceData::new(AttributeMap::new(), prior.clone());
    resource.read(client, &mut d).await.expect("read should succeed");
    d
}

pub fn create_test_prefix(id: u64, cidr: &str) -> Prefix {
    Prefix {
        id,
        url: format!("{}/ipam/prefixes/{}/", TEST_BASE_URL, id),
        display: cidr.to_string(),
        family: Some(if cidr.contains(':') {
            ChoiceField::new(6, "IPv6")
        } else {
            ChoiceField::new(4, "IPv4")
        }),
        prefix: cidr.to_string(),
        status: Some(ChoiceField::new("active".to_string(), "Active")),
        ..Default::default()
    }
}

pub fn create_test_site(id: u64, name: &str) -> Site {
    Site {
        id,
        url: format!("{}/dcim/sites/{}/", TEST_BASE_URL, id),
        display: name.to_string(),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        status: Some(ChoiceField::new("active".to_string(), "Active")),
        ..Default::default()
    }
}

pub fn create_test_vrf(id: u64, name: &str, rd: Option<&str>) -> Vrf {
    Vrf {
        id,
        url: format!("{}/ipam/vrfs/{}/", TEST_BASE_URL, id),
        display: name.to_string(),
        name: name.to_string(),
        rd: rd.map(str::to_string),
        enforce_unique: true,
        ..Default::default()
    }
}
