//! `netbox_ipam_vlan`

use crate::choices::VLAN_STATUSES;
use crate::error::ProviderError;
use crate::helpers::{choice_value, expand_tags, flatten_tags, nested_id, non_empty};
use crate::resource_data::ResourceData;
use crate::resources::{Resource, api_failed, delete_result, read_failed};
use crate::schema::{Attribute, Schema, tags};
use crate::validation::Validator;
use async_trait::async_trait;
use netbox_client::{NetBoxClientTrait, WritableVlan};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VlanConfig {
    name: Option<String>,
    vid: Option<u16>,
    tenant_id: Option<u64>,
    role_id: Option<u64>,
    site_id: Option<u64>,
    status: Option<String>,
    description: Option<String>,
    tags: Option<Vec<Value>>,
}

pub struct VlanResource;

#[async_trait]
impl Resource for VlanResource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_vlan"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute("name", Attribute::string().required())
            .attribute(
                "vid",
                Attribute::int().validate(Validator::IntBetween { min: 1, max: 4094 }),
            )
            .attribute("tenant_id", Attribute::int())
            .attribute("role_id", Attribute::int())
            .attribute("site_id", Attribute::int())
            .attribute(
                "status",
                Attribute::string()
                    .default("active")
                    .validate(Validator::StringInSlice(VLAN_STATUSES)),
            )
            .attribute("description", Attribute::string())
            .attribute("tags", tags())
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: VlanConfig = d.decode()?;
        let request = WritableVlan {
            site: cfg.site_id.map(Some),
            vid: cfg.vid,
            name: cfg.name,
            tenant: cfg.tenant_id.map(Some),
            status: cfg.status,
            role: cfg.role_id.map(Some),
            description: cfg.description,
            tags: cfg.tags.as_deref().map(expand_tags),
        };

        let vlan = client
            .create_vlan(&request)
            .await
            .map_err(|e| api_failed("Unable to create VLAN", e))?;
        d.set_id(vlan.id);
        info!("Created VLAN {} {} (ID: {})", vlan.vid, vlan.name, vlan.id);

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let vlan = match client.get_vlan(id).await {
            Ok(vlan) => vlan,
            Err(e) => return read_failed(d, "VLAN", e),
        };

        d.set("name", vlan.name.as_str());
        d.set("vid", vlan.vid);
        d.set_if_some("tenant_id", nested_id(vlan.tenant.as_ref()));
        d.set_if_some("role_id", nested_id(vlan.role.as_ref()));
        d.set_if_some("site_id", nested_id(vlan.site.as_ref()));
        d.set_if_some("status", choice_value(vlan.status.as_ref()));
        d.set_if_some("description", non_empty(&vlan.description));
        d.set("tags", flatten_tags(&vlan.tags));
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let cfg: VlanConfig = d.decode()?;
        let request = WritableVlan {
            site: d.changed("site_id", cfg.site_id),
            vid: d.changed("vid", cfg.vid).flatten(),
            name: d.changed_or_default("name", cfg.name),
            tenant: d.changed("tenant_id", cfg.tenant_id),
            status: d.changed("status", cfg.status).flatten(),
            role: d.changed("role_id", cfg.role_id),
            description: d.changed_or_default("description", cfg.description),
            tags: d.changed_or_default("tags", cfg.tags.as_deref().map(expand_tags)),
        };

        client
            .update_vlan(id, &request)
            .await
            .map_err(|e| api_failed("Unable to update VLAN", e))?;
        info!("Updated VLAN {}", id);

        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_vlan(id).await;
        delete_result(d, "VLAN", result)
    }
}
