//! `netbox_ipam_ipaddress`

use crate::choices::{IP_ADDRESS_ROLES, IP_ADDRESS_STATUSES};
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
use netbox_client::{NetBoxClientTrait, WritableIPAddress};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IpAddressConfig {
    address: Option<String>,
    nat_inside_id: Option<u64>,
    description: Option<String>,
    tenant_id: Option<u64>,
    status: Option<String>,
    role: Option<String>,
    assigned_object_id: Option<u64>,
    assigned_object_type: Option<String>,
    dns_name: Option<String>,
    vrf_id: Option<u64>,
    tags: Option<Vec<Value>>,
    custom_fields: Option<BTreeMap<String, String>>,
}

pub struct IpAddressResource;

#[async_trait]
impl Resource for IpAddressResource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_ipaddress"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute(
                "address",
                Attribute::string()
                    .required()
                    .validate(Validator::IsCidr)
                    .describe("IPv4 or IPv6 address with mask, e.g. 10.0.0.1/24"),
            )
            .attribute("nat_inside_id", Attribute::int())
            .attribute(
                "description",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 200 }),
            )
            .attribute("tenant_id", Attribute::int())
            .attribute(
                "status",
                Attribute::string()
                    .default("active")
                    .validate(Validator::StringInSlice(IP_ADDRESS_STATUSES)),
            )
            .attribute(
                "role",
                Attribute::string().validate(Validator::StringInSlice(IP_ADDRESS_ROLES)),
            )
            .attribute("assigned_object_id", Attribute::int())
            .attribute(
                "assigned_object_type",
                Attribute::string().describe("Content type of the assigned object, e.g. dcim.interface"),
            )
            .attribute("dns_name", Attribute::string())
            .attribute("vrf_id", Attribute::int())
            .attribute("family", Attribute::string().read_only())
            .attribute("tags", tags())
            .attribute("custom_fields", custom_fields())
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: IpAddressConfig = d.decode()?;
        let request = WritableIPAddress {
            address: cfg.address,
            vrf: cfg.vrf_id.map(Some),
            tenant: cfg.tenant_id.map(Some),
            status: cfg.status,
            role: cfg.role,
            assigned_object_type: cfg.assigned_object_type.map(Some),
            assigned_object_id: cfg.assigned_object_id.map(Some),
            nat_inside: cfg.nat_inside_id.map(Some),
            dns_name: cfg.dns_name,
            description: cfg.description,
            tags: cfg.tags.as_deref().map(expand_tags),
            custom_fields: cfg.custom_fields.as_ref().map(expand_custom_fields),
        };

        let address = client
            .create_ip_address(&request)
            .await
            .map_err(|e| api_failed("Unable to create IP address", e))?;
        d.set_id(address.id);
        info!("Created IP address {} (ID: {})", address.address, address.id);

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let address = match client.get_ip_address(id).await {
            Ok(address) => address,
            Err(e) => return read_failed(d, "IP address", e),
        };

        d.set("address", address.address.as_str());
        d.set_if_some("nat_inside_id", nested_id(address.nat_inside.as_ref()));
        d.set_if_some("description", non_empty(&address.description));
        d.set_if_some("tenant_id", nested_id(address.tenant.as_ref()));
        d.set_if_some("status", choice_value(address.status.as_ref()));
        d.set_if_some("role", choice_value(address.role.as_ref()));
        d.set_if_some("assigned_object_id", address.assigned_object_id);
        d.set_if_some(
            "assigned_object_type",
            address.assigned_object_type.as_deref().and_then(non_empty),
        );
        d.set_if_some("dns_name", non_empty(&address.dns_name));
        d.set_if_some("vrf_id", nested_id(address.vrf.as_ref()));
        d.set_if_some(
            "family",
            address.family.as_ref().map(|f| f.label.as_str()).and_then(non_empty),
        );
        d.set("tags", flatten_tags(&address.tags));
        if !address.custom_fields.is_empty() {
            d.set("custom_fields", flatten_custom_fields(&address.custom_fields));
        }
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let cfg: IpAddressConfig = d.decode()?;
        let request = WritableIPAddress {
            address: d.changed_or_default("address", cfg.address),
            vrf: d.changed("vrf_id", cfg.vrf_id),
            tenant: d.changed("tenant_id", cfg.tenant_id),
            status: d.changed("status", cfg.status).flatten(),
            role: d.changed_or_default("role", cfg.role),
            assigned_object_type: d.changed("assigned_object_type", cfg.assigned_object_type),
            assigned_object_id: d.changed("assigned_object_id", cfg.assigned_object_id),
            nat_inside: d.changed("nat_inside_id", cfg.nat_inside_id),
            dns_name: d.changed_or_default("dns_name", cfg.dns_name),
            description: d.changed_or_default("description", cfg.description),
            tags: d.changed_or_default("tags", cfg.tags.as_deref().map(expand_tags)),
            custom_fields: d.changed_or_default(
                "custom_fields",
                cfg.custom_fields.as_ref().map(expand_custom_fields),
            ),
        };

        client
            .update_ip_address(id, &request)
            .await
            .map_err(|e| api_failed("Unable to update IP address", e))?;
        info!("Updated IP address {}", id);

        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_ip_address(id).await;
        delete_result(d, "IP address", result)
    }
}
