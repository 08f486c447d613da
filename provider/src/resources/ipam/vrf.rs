//! `netbox_ipam_vrf`

use crate::error::ProviderError;
use crate::helpers::{expand_custom_fields, expand_tags, flatten_custom_fields, flatten_tags, nested_id, non_empty};
use crate::resource_data::ResourceData;
use crate::resources::{Resource, api_failed, delete_result, read_failed};
use crate::schema::{Attribute, Schema, custom_fields, tags};
use crate::validation::Validator;
use async_trait::async_trait;
use netbox_client::{NetBoxClientTrait, WritableVrf};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VrfConfig {
    name: Option<String>,
    description: Option<String>,
    tenant_id: Option<u64>,
    enforce_unique: Option<bool>,
    rd: Option<String>,
    tags: Option<Vec<Value>>,
    custom_fields: Option<BTreeMap<String, String>>,
}

pub struct VrfResource;

#[async_trait]
impl Resource for VrfResource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_vrf"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute("name", Attribute::string().required())
            .attribute(
                "description",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 200 }),
            )
            .attribute("tenant_id", Attribute::int())
            .attribute(
                "enforce_unique",
                Attribute::bool()
                    .default(true)
                    .describe("Prevent duplicate prefixes and IP addresses within this VRF"),
            )
            .attribute("rd", Attribute::string().describe("Route distinguisher"))
            .attribute("tags", tags())
            .attribute("custom_fields", custom_fields())
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: VrfConfig = d.decode()?;
        let request = WritableVrf {
            name: cfg.name,
            rd: cfg.rd.map(Some),
            tenant: cfg.tenant_id.map(Some),
            enforce_unique: cfg.enforce_unique,
            description: cfg.description,
            tags: cfg.tags.as_deref().map(expand_tags),
            custom_fields: cfg.custom_fields.as_ref().map(expand_custom_fields),
        };

        let vrf = client
            .create_vrf(&request)
            .await
            .map_err(|e| api_failed("Unable to create VRF", e))?;
        d.set_id(vrf.id);
        info!("Created VRF {} (ID: {})", vrf.name, vrf.id);

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let vrf = match client.get_vrf(id).await {
            Ok(vrf) => vrf,
            Err(e) => return read_failed(d, "VRF", e),
        };

        d.set("name", vrf.name.as_str());
        d.set_if_some("description", non_empty(&vrf.description));
        d.set_if_some("tenant_id", nested_id(vrf.tenant.as_ref()));
        d.set("enforce_unique", vrf.enforce_unique);
        d.set_if_some("rd", vrf.rd.as_deref().and_then(non_empty));
        d.set("tags", flatten_tags(&vrf.tags));
        if !vrf.custom_fields.is_empty() {
            d.set("custom_fields", flatten_custom_fields(&vrf.custom_fields));
        }
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let cfg: VrfConfig = d.decode()?;
        let request = WritableVrf {
            name: d.changed_or_default("name", cfg.name),
            rd: d.changed("rd", cfg.rd),
            tenant: d.changed("tenant_id", cfg.tenant_id),
            enforce_unique: d.changed_or_default("enforce_unique", cfg.enforce_unique),
            description: d.changed_or_default("description", cfg.description),
            tags: d.changed_or_default("tags", cfg.tags.as_deref().map(expand_tags)),
            custom_fields: d.changed_or_default(
                "custom_fields",
                cfg.custom_fields.as_ref().map(expand_custom_fields),
            ),
        };

        client
            .update_vrf(id, &request)
            .await
            .map_err(|e| api_failed("Unable to update VRF", e))?;
        info!("Updated VRF {}", id);

        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_vrf(id).await;
        delete_result(d, "VRF", result)
    }
}
