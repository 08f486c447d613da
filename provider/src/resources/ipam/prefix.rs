//! `netbox_ipam_prefix`

use crate::choices::PREFIX_STATUSES;
use crate::error::ProviderError;
use crate::helpers::{
    choice_value, expand_custom_fields, expand_tags, flatten_custom_fields, flatten_tags, nested_id,
    non_empty,
};
use crate::resource_data::ResourceData;
use crate::resources::{Resource, api_failed, delete_result, read_failed};
use crate::schema::{Attribute, Schema, custom_fields, tags};
use crate::validation::Validator;
use async_trait::async_trait;
use netbox_client::{NetBoxClientTrait, WritablePrefix};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PrefixConfig {
    prefix: Option<String>,
    description: Option<String>,
    site_id: Option<u64>,
    vrf_id: Option<u64>,
    tenant_id: Option<u64>,
    vlan_id: Option<u64>,
    status: Option<String>,
    role_id: Option<u64>,
    is_pool: Option<bool>,
    tags: Option<Vec<Value>>,
    custom_fields: Option<BTreeMap<String, String>>,
}

pub struct PrefixResource;

#[async_trait]
impl Resource for PrefixResource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_prefix"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute(
                "prefix",
                Attribute::string().required().validate(Validator::IsCidr),
            )
            .attribute(
                "description",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 200 }),
            )
            .attribute("site_id", Attribute::int())
            .attribute("vrf_id", Attribute::int())
            .attribute("tenant_id", Attribute::int())
            .attribute("vlan_id", Attribute::int())
            .attribute(
                "status",
                Attribute::string().validate(Validator::StringInSlice(PREFIX_STATUSES)),
            )
            .attribute("role_id", Attribute::int())
            .attribute("is_pool", Attribute::bool().default(false))
            .attribute("family", Attribute::string().read_only())
            .attribute("tags", tags())
            .attribute("custom_fields", custom_fields())
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: PrefixConfig = d.decode()?;
        let request = WritablePrefix {
            prefix: cfg.prefix,
            site: cfg.site_id.map(Some),
            vrf: cfg.vrf_id.map(Some),
            tenant: cfg.tenant_id.map(Some),
            vlan: cfg.vlan_id.map(Some),
            status: cfg.status,
            role: cfg.role_id.map(Some),
            is_pool: cfg.is_pool,
            description: cfg.description,
            tags: cfg.tags.as_deref().map(expand_tags),
            custom_fields: cfg.custom_fields.as_ref().map(expand_custom_fields),
        };

        let prefix = client
            .create_prefix(&request)
            .await
            .map_err(|e| api_failed("Unable to create prefix", e))?;
        d.set_id(prefix.id);
        info!("Created prefix {} (ID: {})", prefix.prefix, prefix.id);

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let prefix = match client.get_prefix(id).await {
            Ok(prefix) => prefix,
            Err(e) => return read_failed(d, "prefix", e),
        };

        d.set("prefix", prefix.prefix.as_str());
        d.set_if_some("description", non_empty(&prefix.description));
        d.set_if_some("site_id", nested_id(prefix.site.as_ref()));
        d.set_if_some("vrf_id", nested_id(prefix.vrf.as_ref()));
        d.set_if_some("tenant_id", nested_id(prefix.tenant.as_ref()));
        d.set_if_some("vlan_id", nested_id(prefix.vlan.as_ref()));
        d.set_if_some("status", choice_value(prefix.status.as_ref()));
        d.set_if_some("role_id", nested_id(prefix.role.as_ref()));
        d.set("is_pool", prefix.is_pool);
        d.set_if_some(
            "family",
            prefix.family.as_ref().map(|f| f.label.as_str()).and_then(non_empty),
        );
        d.set("tags", flatten_tags(&prefix.tags));
        if !prefix.custom_fields.is_empty() {
            d.set("custom_fields", flatten_custom_fields(&prefix.custom_fields));
        }
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let cfg: PrefixConfig = d.decode()?;
        let request = WritablePrefix {
            prefix: d.changed_or_default("prefix", cfg.prefix),
            site: d.changed("site_id", cfg.site_id),
            vrf: d.changed("vrf_id", cfg.vrf_id),
            tenant: d.changed("tenant_id", cfg.tenant_id),
            vlan: d.changed("vlan_id", cfg.vlan_id),
            status: d.changed("status", cfg.status).flatten(),
            role: d.changed("role_id", cfg.role_id),
            is_pool: d.changed_or_default("is_pool", cfg.is_pool),
            description: d.changed_or_default("description", cfg.description),
            tags: d.changed_or_default("tags", cfg.tags.as_deref().map(expand_tags)),
            custom_fields: d.changed_or_default(
                "custom_fields",
                cfg.custom_fields.as_ref().map(expand_custom_fields),
            ),
        };

        client
            .update_prefix(id, &request)
            .await
            .map_err(|e| api_failed("Unable to update prefix", e))?;
        info!("Updated prefix {}", id);

        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_prefix(id).await;
        delete_result(d, "prefix", result)
    }
}
