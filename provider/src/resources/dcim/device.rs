//! `netbox_dcim_device`

use crate::choices::{DEVICE_FACES, DEVICE_STATUSES};
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
use netbox_client::{NetBoxClientTrait, WritableDevice};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DeviceConfig {
    name: Option<String>,
    device_type_id: Option<u64>,
    device_role_id: Option<u64>,
    site_id: Option<u64>,
    rack_id: Option<u64>,
    position: Option<f64>,
    face: Option<String>,
    platform_id: Option<u64>,
    tenant_id: Option<u64>,
    serial: Option<String>,
    asset_tag: Option<String>,
    status: Option<String>,
    primary_ip4_id: Option<u64>,
    primary_ip6_id: Option<u64>,
    cluster_id: Option<u64>,
    comments: Option<String>,
    tags: Option<Vec<Value>>,
    custom_fields: Option<BTreeMap<String, String>>,
}

pub struct DeviceResource;

#[async_trait]
impl Resource for DeviceResource {
    fn type_name(&self) -> &'static str {
        "netbox_dcim_device"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute(
                "name",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 64 }),
            )
            .attribute("device_type_id", Attribute::int().required())
            .attribute("device_role_id", Attribute::int().required())
            .attribute("site_id", Attribute::int().required())
            .attribute("rack_id", Attribute::int())
            .attribute("position", Attribute::float())
            .attribute(
                "face",
                Attribute::string().validate(Validator::StringInSlice(DEVICE_FACES)),
            )
            .attribute("platform_id", Attribute::int())
            .attribute("tenant_id", Attribute::int())
            .attribute(
                "serial",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 50 }),
            )
            .attribute(
                "asset_tag",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 50 }),
            )
            .attribute(
                "status",
                Attribute::string()
                    .default("active")
                    .validate(Validator::StringInSlice(DEVICE_STATUSES)),
            )
            .attribute("primary_ip4_id", Attribute::int())
            .attribute("primary_ip6_id", Attribute::int())
            .attribute("cluster_id", Attribute::int())
            .attribute("comments", Attribute::string())
            .attribute("tags", tags())
            .attribute("custom_fields", custom_fields())
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: DeviceConfig = d.decode()?;
        let request = WritableDevice {
            name: cfg.name.map(Some),
            device_type: cfg.device_type_id,
            device_role: cfg.device_role_id,
            site: cfg.site_id,
            rack: cfg.rack_id.map(Some),
            position: cfg.position.map(Some),
            face: cfg.face,
            platform: cfg.platform_id.map(Some),
            tenant: cfg.tenant_id.map(Some),
            serial: cfg.serial,
            asset_tag: cfg.asset_tag.map(Some),
            status: cfg.status,
            primary_ip4: cfg.primary_ip4_id.map(Some),
            primary_ip6: cfg.primary_ip6_id.map(Some),
            cluster: cfg.cluster_id.map(Some),
            comments: cfg.comments,
            tags: cfg.tags.as_deref().map(expand_tags),
            custom_fields: cfg.custom_fields.as_ref().map(expand_custom_fields),
        };

        let device = client
            .create_device(&request)
            .await
            .map_err(|e| api_failed("Unable to create device", e))?;
        d.set_id(device.id);
        info!(
            "Created device {} (ID: {})",
            device.name.as_deref().unwrap_or("<unnamed>"),
            device.id
        );

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let device = match client.get_device(id).await {
            Ok(device) => device,
            Err(e) => return read_failed(d, "device", e),
        };

        d.set_if_some("name", device.name.as_deref().and_then(non_empty));
        d.set("device_type_id", device.device_type.id);
        d.set("device_role_id", device.device_role.id);
        d.set("site_id", device.site.id);
        d.set_if_some("rack_id", nested_id(device.rack.as_ref()));
        d.set_if_some("position", device.position);
        d.set_if_some("face", choice_value(device.face.as_ref()));
        d.set_if_some("platform_id", nested_id(device.platform.as_ref()));
        d.set_if_some("tenant_id", nested_id(device.tenant.as_ref()));
        d.set_if_some("serial", non_empty(&device.serial));
        d.set_if_some("asset_tag", device.asset_tag.as_deref().and_then(non_empty));
        d.set_if_some("status", choice_value(device.status.as_ref()));
        d.set_if_some("primary_ip4_id", nested_id(device.primary_ip4.as_ref()));
        d.set_if_some("primary_ip6_id", nested_id(device.primary_ip6.as_ref()));
        d.set_if_some("cluster_id", nested_id(device.cluster.as_ref()));
        d.set_if_some("comments", non_empty(&device.comments));
        d.set("tags", flatten_tags(&device.tags));
        if !device.custom_fields.is_empty() {
            d.set("custom_fields", flatten_custom_fields(&device.custom_fields));
        }
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let cfg: DeviceConfig = d.decode()?;
        let request = WritableDevice {
            name: d.changed("name", cfg.name),
            device_type: d.changed("device_type_id", cfg.device_type_id).flatten(),
            device_role: d.changed("device_role_id", cfg.device_role_id).flatten(),
            site: d.changed("site_id", cfg.site_id).flatten(),
            rack: d.changed("rack_id", cfg.rack_id),
            position: d.changed("position", cfg.position),
            face: d.changed_or_default("face", cfg.face),
            platform: d.changed("platform_id", cfg.platform_id),
            tenant: d.changed("tenant_id", cfg.tenant_id),
            serial: d.changed_or_default("serial", cfg.serial),
            asset_tag: d.changed("asset_tag", cfg.asset_tag),
            status: d.changed("status", cfg.status).flatten(),
            primary_ip4: d.changed("primary_ip4_id", cfg.primary_ip4_id),
            primary_ip6: d.changed("primary_ip6_id", cfg.primary_ip6_id),
            cluster: d.changed("cluster_id", cfg.cluster_id),
            comments: d.changed_or_default("comments", cfg.comments),
            tags: d.changed_or_default("tags", cfg.tags.as_deref().map(expand_tags)),
            custom_fields: d.changed_or_default(
                "custom_fields",
                cfg.custom_fields.as_ref().map(expand_custom_fields),
            ),
        };

        client
            .update_device(id, &request)
            .await
            .map_err(|e| api_failed("Unable to update device", e))?;
        info!("Updated device {}", id);

        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_device(id).await;
        delete_result(d, "device", result)
    }
}
