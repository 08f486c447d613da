//! `netbox_dcim_rack`

use crate::choices::{RACK_OUTER_UNITS, RACK_STATUSES, RACK_TYPES};
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
use netbox_client::{NetBoxClientTrait, WritableRack};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RackConfig {
    name: Option<String>,
    facility: Option<String>,
    site_id: Option<u64>,
    tenant_id: Option<u64>,
    status: Option<String>,
    role_id: Option<u64>,
    serial: Option<String>,
    asset_tag: Option<String>,
    #[serde(rename = "type")]
    rack_type: Option<String>,
    width: Option<u16>,
    u_height: Option<u16>,
    desc_units: Option<bool>,
    outer_width: Option<u16>,
    outer_depth: Option<u16>,
    outer_unit: Option<String>,
    comments: Option<String>,
    tags: Option<Vec<Value>>,
    custom_fields: Option<BTreeMap<String, String>>,
}

pub struct RackResource;

#[async_trait]
impl Resource for RackResource {
    fn type_name(&self) -> &'static str {
        "netbox_dcim_rack"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute(
                "name",
                Attribute::string()
                    .required()
                    .validate(Validator::StringLenBetween { min: 1, max: 50 }),
            )
            .attribute(
                "facility",
                Attribute::string()
                    .validate(Validator::StringLenBetween { min: 0, max: 50 })
                    .describe("Facility identifier, sent as facility_id"),
            )
            .attribute("site_id", Attribute::int().required())
            .attribute("tenant_id", Attribute::int())
            .attribute(
                "status",
                Attribute::string()
                    .default("active")
                    .validate(Validator::StringInSlice(RACK_STATUSES)),
            )
            .attribute("role_id", Attribute::int())
            .attribute(
                "serial",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 50 }),
            )
            .attribute(
                "asset_tag",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 50 }),
            )
            .attribute(
                "type",
                Attribute::string().validate(Validator::StringInSlice(RACK_TYPES)),
            )
            .attribute("width", Attribute::int().default(19))
            .attribute("u_height", Attribute::int().default(42))
            .attribute("desc_units", Attribute::bool().default(false))
            .attribute("outer_width", Attribute::int())
            .attribute("outer_depth", Attribute::int())
            .attribute(
                "outer_unit",
                Attribute::string()
                    .default("mm")
                    .validate(Validator::StringInSlice(RACK_OUTER_UNITS)),
            )
            .attribute(
                "comments",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 200 }),
            )
            .attribute("tags", tags())
            .attribute("custom_fields", custom_fields())
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: RackConfig = d.decode()?;
        let request = WritableRack {
            name: cfg.name,
            facility_id: cfg.facility.map(Some),
            site: cfg.site_id,
            tenant: cfg.tenant_id.map(Some),
            status: cfg.status,
            role: cfg.role_id.map(Some),
            serial: cfg.serial,
            asset_tag: cfg.asset_tag.map(Some),
            rack_type: cfg.rack_type,
            width: cfg.width,
            u_height: cfg.u_height,
            desc_units: cfg.desc_units,
            outer_width: cfg.outer_width.map(Some),
            outer_depth: cfg.outer_depth.map(Some),
            outer_unit: cfg.outer_unit,
            comments: cfg.comments,
            tags: cfg.tags.as_deref().map(expand_tags),
            custom_fields: cfg.custom_fields.as_ref().map(expand_custom_fields),
        };

        let rack = client
            .create_rack(&request)
            .await
            .map_err(|e| api_failed("Unable to create rack", e))?;
        d.set_id(rack.id);
        info!("Created rack {} (ID: {})", rack.name, rack.id);

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let rack = match client.get_rack(id).await {
            Ok(rack) => rack,
            Err(e) => return read_failed(d, "rack", e),
        };

        d.set("name", rack.name.as_str());
        d.set("site_id", rack.site.id);
        d.set_if_some("facility", rack.facility_id.as_deref().and_then(non_empty));
        d.set_if_some("tenant_id", nested_id(rack.tenant.as_ref()));
        d.set_if_some("status", choice_value(rack.status.as_ref()));
        d.set_if_some("role_id", nested_id(rack.role.as_ref()));
        d.set_if_some("serial", non_empty(&rack.serial));
        d.set_if_some("asset_tag", rack.asset_tag.as_deref().and_then(non_empty));
        d.set_if_some("type", choice_value(rack.rack_type.as_ref()));
        d.set_if_some("width", rack.width.as_ref().map(|w| w.value));
        d.set("u_height", rack.u_height);
        d.set("desc_units", rack.desc_units);
        d.set_if_some("outer_width", rack.outer_width);
        d.set_if_some("outer_depth", rack.outer_depth);
        d.set_if_some("outer_unit", choice_value(rack.outer_unit.as_ref()));
        d.set_if_some("comments", non_empty(&rack.comments));
        d.set("tags", flatten_tags(&rack.tags));
        if !rack.custom_fields.is_empty() {
            d.set("custom_fields", flatten_custom_fields(&rack.custom_fields));
        }
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let cfg: RackConfig = d.decode()?;
        let request = WritableRack {
            name: d.changed_or_default("name", cfg.name),
            facility_id: d.changed("facility", cfg.facility),
            site: d.changed("site_id", cfg.site_id).flatten(),
            tenant: d.changed("tenant_id", cfg.tenant_id),
            status: d.changed("status", cfg.status).flatten(),
            role: d.changed("role_id", cfg.role_id),
            serial: d.changed_or_default("serial", cfg.serial),
            asset_tag: d.changed("asset_tag", cfg.asset_tag),
            rack_type: d.changed_or_default("type", cfg.rack_type),
            width: d.changed("width", cfg.width).flatten(),
            u_height: d.changed("u_height", cfg.u_height).flatten(),
            desc_units: d.changed_or_default("desc_units", cfg.desc_units),
            outer_width: d.changed("outer_width", cfg.outer_width),
            outer_depth: d.changed("outer_depth", cfg.outer_depth),
            outer_unit: d.changed("outer_unit", cfg.outer_unit).flatten(),
            comments: d.changed_or_default("comments", cfg.comments),
            tags: d.changed_or_default("tags", cfg.tags.as_deref().map(expand_tags)),
            custom_fields: d.changed_or_default(
                "custom_fields",
                cfg.custom_fields.as_ref().map(expand_custom_fields),
            ),
        };

        client
            .update_rack(id, &request)
            .await
            .map_err(|e| api_failed("Unable to update rack", e))?;
        info!("Updated rack {}", id);

        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_rack(id).await;
        delete_result(d, "rack", result)
    }
}
