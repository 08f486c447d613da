//! `netbox_circuits_provider`

use crate::error::ProviderError;
use crate::helpers::{expand_custom_fields, expand_tags, flatten_custom_fields, flatten_tags, non_empty};
use crate::resource_data::ResourceData;
use crate::resources::{Resource, api_failed, delete_result, read_failed};
use crate::schema::{Attribute, Schema, custom_fields, tags};
use async_trait::async_trait;
use netbox_client::{NetBoxClientTrait, WritableCircuitProvider};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CircuitProviderConfig {
    name: Option<String>,
    slug: Option<String>,
    asn: Option<u64>,
    account: Option<String>,
    admin_contact: Option<String>,
    comments: Option<String>,
    noc_contact: Option<String>,
    portal_url: Option<String>,
    tags: Option<Vec<Value>>,
    custom_fields: Option<BTreeMap<String, String>>,
}

pub struct CircuitProviderResource;

#[async_trait]
impl Resource for CircuitProviderResource {
    fn type_name(&self) -> &'static str {
        "netbox_circuits_provider"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute("name", Attribute::string().required())
            .attribute("slug", Attribute::string().required())
            .attribute("asn", Attribute::int())
            .attribute("account", Attribute::string())
            .attribute("admin_contact", Attribute::string())
            .attribute("comments", Attribute::string())
            .attribute("noc_contact", Attribute::string())
            .attribute("portal_url", Attribute::string())
            .attribute("tags", tags())
            .attribute("custom_fields", custom_fields())
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: CircuitProviderConfig = d.decode()?;
        let request = WritableCircuitProvider {
            name: cfg.name,
            slug: cfg.slug,
            asn: cfg.asn.map(Some),
            account: cfg.account,
            portal_url: cfg.portal_url,
            noc_contact: cfg.noc_contact,
            admin_contact: cfg.admin_contact,
            comments: cfg.comments,
            tags: cfg.tags.as_deref().map(expand_tags),
            custom_fields: cfg.custom_fields.as_ref().map(expand_custom_fields),
        };

        let provider = client
            .create_circuit_provider(&request)
            .await
            .map_err(|e| api_failed("Unable to create circuit provider", e))?;
        d.set_id(provider.id);
        info!("Created circuit provider {} (ID: {})", provider.name, provider.id);

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let provider = match client.get_circuit_provider(id).await {
            Ok(provider) => provider,
            Err(e) => return read_failed(d, "circuit provider", e),
        };

        d.set("name", provider.name.as_str());
        d.set("slug", provider.slug.as_str());
        d.set_if_some("asn", provider.asn);
        d.set_if_some("account", non_empty(&provider.account));
        d.set_if_some("admin_contact", non_empty(&provider.admin_contact));
        d.set_if_some("comments", non_empty(&provider.comments));
        d.set_if_some("noc_contact", non_empty(&provider.noc_contact));
        d.set_if_some("portal_url", non_empty(&provider.portal_url));
        d.set("tags", flatten_tags(&provider.tags));
        if !provider.custom_fields.is_empty() {
            d.set("custom_fields", flatten_custom_fields(&provider.custom_fields));
        }
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let cfg: CircuitProviderConfig = d.decode()?;
        let request = WritableCircuitProvider {
            name: d.changed_or_default("name", cfg.name),
            slug: d.changed_or_default("slug", cfg.slug),
            asn: d.changed("asn", cfg.asn),
            account: d.changed_or_default("account", cfg.account),
            portal_url: d.changed_or_default("portal_url", cfg.portal_url),
            noc_contact: d.changed_or_default("noc_contact", cfg.noc_contact),
            admin_contact: d.changed_or_default("admin_contact", cfg.admin_contact),
            comments: d.changed_or_default("comments", cfg.comments),
            tags: d.changed_or_default("tags", cfg.tags.as_deref().map(expand_tags)),
            custom_fields: d.changed_or_default(
                "custom_fields",
                cfg.custom_fields.as_ref().map(expand_custom_fields),
            ),
        };

        client
            .update_circuit_provider(id, &request)
            .await
            .map_err(|e| api_failed("Unable to update circuit provider", e))?;
        info!("Updated circuit provider {}", id);

        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_circuit_provider(id).await;
        delete_result(d, "circuit provider", result)
    }
}
