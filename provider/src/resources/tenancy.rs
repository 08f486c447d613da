//! Tenancy resources

use crate::error::ProviderError;
use crate::helpers::{expand_custom_fields, expand_tags, flatten_custom_fields, flatten_tags, nested_id, non_empty};
use crate::resource_data::ResourceData;
use crate::resources::{Resource, api_failed, delete_result, read_failed};
use crate::schema::{Attribute, Schema, custom_fields, tags};
use async_trait::async_trait;
use netbox_client::{NetBoxClientTrait, WritableTenant};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TenantConfig {
    name: Option<String>,
    slug: Option<String>,
    comments: Option<String>,
    description: Option<String>,
    group_id: Option<u64>,
    tags: Option<Vec<Value>>,
    custom_fields: Option<BTreeMap<String, String>>,
}

/// `netbox_tenancy_tenant`
pub struct TenantResource;

#[async_trait]
impl Resource for TenantResource {
    fn type_name(&self) -> &'static str {
        "netbox_tenancy_tenant"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute("name", Attribute::string().required())
            .attribute("slug", Attribute::string().required())
            .attribute("comments", Attribute::string())
            .attribute("description", Attribute::string())
            .attribute("group_id", Attribute::int().describe("Tenant group"))
            .attribute("tags", tags())
            .attribute("custom_fields", custom_fields())
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: TenantConfig = d.decode()?;
        let request = WritableTenant {
            name: cfg.name,
            slug: cfg.slug,
            group: cfg.group_id.map(Some),
            description: cfg.description,
            comments: cfg.comments,
            tags: cfg.tags.as_deref().map(expand_tags),
            custom_fields: cfg.custom_fields.as_ref().map(expand_custom_fields),
        };

        let tenant = client
            .create_tenant(&request)
            .await
            .map_err(|e| api_failed("Unable to create tenant", e))?;
        d.set_id(tenant.id);
        info!("Created tenant {} (ID: {})", tenant.name, tenant.id);

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let tenant = match client.get_tenant(id).await {
            Ok(tenant) => tenant,
            Err(e) => return read_failed(d, "tenant", e),
        };

        d.set("name", tenant.name.as_str());
        d.set("slug", tenant.slug.as_str());
        d.set_if_some("comments", non_empty(&tenant.comments));
        d.set_if_some("description", non_empty(&tenant.description));
        d.set_if_some("group_id", nested_id(tenant.group.as_ref()));
        d.set("tags", flatten_tags(&tenant.tags));
        if !tenant.custom_fields.is_empty() {
            d.set("custom_fields", flatten_custom_fields(&tenant.custom_fields));
        }
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let cfg: TenantConfig = d.decode()?;
        let request = WritableTenant {
            name: d.changed_or_default("name", cfg.name),
            slug: d.changed_or_default("slug", cfg.slug),
            group: d.changed("group_id", cfg.group_id),
            description: d.changed_or_default("description", cfg.description),
            comments: d.changed_or_default("comments", cfg.comments),
            tags: d.changed_or_default("tags", cfg.tags.as_deref().map(expand_tags)),
            custom_fields: d.changed_or_default(
                "custom_fields",
                cfg.custom_fields.as_ref().map(expand_custom_fields),
            ),
        };

        client
            .update_tenant(id, &request)
            .await
            .map_err(|e| api_failed("Unable to update tenant", e))?;
        info!("Updated tenant {}", id);

        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_tenant(id).await;
        delete_result(d, "tenant", result)
    }
}
