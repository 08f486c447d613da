//! `netbox_dcim_interface`
//!
//! `tagged_vlans` is an ordered list of distinct VLAN ids; `cable_id` and
//! `connected_endpoint_type` are reported by NetBox and cannot be set.

use crate::choices::{INTERFACE_MODES, INTERFACE_TYPES};
use crate::error::ProviderError;
use crate::helpers::{
    choice_value, expand_tags, expand_vlan_ids, flatten_tags, flatten_vlan_ids, nested_id, non_empty,
};
use crate::resource_data::ResourceData;
use crate::resources::{Resource, api_failed, delete_result, read_failed};
use crate::schema::{Attribute, AttributeType, Schema, tags};
use crate::validation::Validator;
use async_trait::async_trait;
use netbox_client::{NetBoxClientTrait, WritableInterface};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InterfaceConfig {
    device_id: Option<u64>,
    #[serde(rename = "type")]
    interface_type: Option<String>,
    name: Option<String>,
    connection_status: Option<bool>,
    enabled: Option<bool>,
    management_only: Option<bool>,
    label: Option<String>,
    mac_address: Option<String>,
    mode: Option<String>,
    description: Option<String>,
    untagged_vlan_id: Option<u64>,
    tagged_vlans: Option<Vec<u64>>,
    mtu: Option<u32>,
    tags: Option<Vec<Value>>,
}

pub struct InterfaceResource;

#[async_trait]
impl Resource for InterfaceResource {
    fn type_name(&self) -> &'static str {
        "netbox_dcim_interface"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute("device_id", Attribute::int().required())
            .attribute(
                "type",
                Attribute::string()
                    .required()
                    .validate(Validator::StringInSlice(INTERFACE_TYPES)),
            )
            .attribute(
                "name",
                Attribute::string()
                    .required()
                    .validate(Validator::StringLenBetween { min: 1, max: 64 }),
            )
            .attribute("connection_status", Attribute::bool())
            .attribute("enabled", Attribute::bool().default(true))
            .attribute("management_only", Attribute::bool().default(false))
            .attribute(
                "label",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 64 }),
            )
            .attribute("mac_address", Attribute::string())
            .attribute(
                "mode",
                Attribute::string().validate(Validator::StringInSlice(INTERFACE_MODES)),
            )
            .attribute(
                "description",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 200 }),
            )
            .attribute("untagged_vlan_id", Attribute::int())
            .attribute(
                "tagged_vlans",
                Attribute::list(AttributeType::Int).validate(Validator::NoDuplicates),
            )
            .attribute(
                "mtu",
                Attribute::int().validate(Validator::IntBetween { min: 1, max: 65536 }),
            )
            .attribute("cable_id", Attribute::int().read_only())
            .attribute("connected_endpoint_type", Attribute::string().read_only())
            .attribute("tags", tags())
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: InterfaceConfig = d.decode()?;
        let request = WritableInterface {
            device: cfg.device_id,
            name: cfg.name,
            label: cfg.label,
            interface_type: cfg.interface_type,
            enabled: cfg.enabled,
            mtu: cfg.mtu.map(Some),
            mac_address: cfg.mac_address.map(Some),
            mgmt_only: cfg.management_only,
            description: cfg.description,
            mode: cfg.mode.map(Some),
            untagged_vlan: cfg.untagged_vlan_id.map(Some),
            tagged_vlans: cfg.tagged_vlans.as_deref().map(expand_vlan_ids),
            connection_status: cfg.connection_status.map(Some),
            tags: cfg.tags.as_deref().map(expand_tags),
        };

        let interface = client
            .create_interface(&request)
            .await
            .map_err(|e| api_failed("Unable to create interface", e))?;
        d.set_id(interface.id);
        info!("Created interface {} (ID: {})", interface.name, interface.id);

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let interface = match client.get_interface(id).await {
            Ok(interface) => interface,
            Err(e) => return read_failed(d, "interface", e),
        };

        d.set("device_id", interface.device.id);
        d.set("type", interface.interface_type.value.as_str());
        d.set("name", interface.name.as_str());
        d.set("enabled", interface.enabled);
        d.set("management_only", interface.mgmt_only);
        d.set_if_some(
            "connection_status",
            interface.connection_status.as_ref().map(|status| status.value),
        );
        d.set_if_some("label", non_empty(&interface.label));
        d.set_if_some("mac_address", interface.mac_address.as_deref().and_then(non_empty));
        d.set_if_some("mode", choice_value(interface.mode.as_ref()));
        d.set_if_some("description", non_empty(&interface.description));
        d.set_if_some("untagged_vlan_id", nested_id(interface.untagged_vlan.as_ref()));
        if !interface.tagged_vlans.is_empty() {
            d.set("tagged_vlans", flatten_vlan_ids(&interface.tagged_vlans));
        }
        d.set_if_some("mtu", interface.mtu);
        d.set_if_some("cable_id", nested_id(interface.cable.as_ref()));
        d.set_if_some(
            "connected_endpoint_type",
            interface.connected_endpoint_type.as_deref().and_then(non_empty),
        );
        d.set("tags", flatten_tags(&interface.tags));
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let cfg: InterfaceConfig = d.decode()?;
        let request = WritableInterface {
            device: d.changed("device_id", cfg.device_id).flatten(),
            name: d.changed_or_default("name", cfg.name),
            label: d.changed_or_default("label", cfg.label),
            interface_type: d.changed("type", cfg.interface_type).flatten(),
            enabled: d.changed_or_default("enabled", cfg.enabled),
            mtu: d.changed("mtu", cfg.mtu),
            mac_address: d.changed("mac_address", cfg.mac_address),
            mgmt_only: d.changed_or_default("management_only", cfg.management_only),
            description: d.changed_or_default("description", cfg.description),
            mode: d.changed("mode", cfg.mode),
            untagged_vlan: d.changed("untagged_vlan_id", cfg.untagged_vlan_id),
            tagged_vlans: d.changed_or_default(
                "tagged_vlans",
                cfg.tagged_vlans.as_deref().map(expand_vlan_ids),
            ),
            connection_status: d.changed("connection_status", cfg.connection_status),
            tags: d.changed_or_default("tags", cfg.tags.as_deref().map(expand_tags)),
        };

        client
            .update_interface(id, &request)
            .await
            .map_err(|e| api_failed("Unable to update interface", e))?;
        info!("Updated interface {}", id);

        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_interface(id).await;
        delete_result(d, "interface", result)
    }
}
