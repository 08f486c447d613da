//! DCIM models: sites, regions, racks, devices, interfaces

use super::{
    ChoiceField, CustomFields, NestedCable, NestedDevice, NestedIPAddress, NestedRef, NestedTag,
    NestedVlan, Nullable,
};
use serde::{Deserialize, Serialize};

/// Site model matching NetBox SiteSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
    pub status: Option<ChoiceField>,
    pub region: Option<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub facility: String,
    pub asn: Option<u64>,
    pub time_zone: Option<String>,
    pub description: String,
    pub physical_address: String,
    pub shipping_address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub comments: String,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

/// Request body for creating or patching a site
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WritableSite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asn: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Nullable<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Nullable<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<NestedTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// Region model matching NetBox RegionSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
    pub parent: Option<NestedRef>,
    pub description: String,
    pub site_count: u64,
}

/// Request body for creating or patching a region
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WritableRegion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Rack model matching NetBox RackSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rack {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub facility_id: Option<String>,
    pub site: NestedRef,
    pub tenant: Option<NestedRef>,
    pub status: Option<ChoiceField>,
    pub role: Option<NestedRef>,
    pub serial: String,
    pub asset_tag: Option<String>,
    #[serde(rename = "type")]
    pub rack_type: Option<ChoiceField>,
    pub width: Option<ChoiceField<u16>>,
    pub u_height: u16,
    pub desc_units: bool,
    pub outer_width: Option<u16>,
    pub outer_depth: Option<u16>,
    pub outer_unit: Option<ChoiceField>,
    pub comments: String,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}

/// Request body for creating or patching a rack
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WritableRack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_id: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_tag: Nullable<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rack_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u_height: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc_units: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_width: Nullable<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_depth: Nullable<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<NestedTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// Device model matching NetBox DeviceSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: Option<String>,
    pub device_type: NestedRef,
    #[serde(alias = "role")]
    pub device_role: NestedRef,
    pub site: NestedRef,
    pub rack: Option<NestedRef>,
    pub position: Option<f64>,
    pub face: Option<ChoiceField>,
    pub platform: Option<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub serial: String,
    pub asset_tag: Option<String>,
    pub status: Option<ChoiceField>,
    pub primary_ip4: Option<NestedIPAddress>,
    pub primary_ip6: Option<NestedIPAddress>,
    pub cluster: Option<NestedRef>,
    pub comments: String,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}

/// Request body for creating or patching a device
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WritableDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_role: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rack: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Nullable<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_tag: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_ip4: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_ip6: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<NestedTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// Interface model matching NetBox InterfaceSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interface {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device: NestedDevice,
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub interface_type: ChoiceField,
    pub enabled: bool,
    pub mtu: Option<u32>,
    pub mac_address: Option<String>,
    pub mgmt_only: bool,
    pub description: String,
    pub mode: Option<ChoiceField>,
    pub untagged_vlan: Option<NestedVlan>,
    pub tagged_vlans: Vec<NestedVlan>,
    pub cable: Option<NestedCable>,
    pub connected_endpoint_type: Option<String>,
    pub connection_status: Option<ChoiceField<bool>>,
    pub ip_addresses: Vec<NestedIPAddress>,
    pub tags: Vec<NestedTag>,
}

/// Request body for creating or patching an interface
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WritableInterface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub interface_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Nullable<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mgmt_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untagged_vlan: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagged_vlans: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_status: Nullable<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<NestedTag>>,
}
