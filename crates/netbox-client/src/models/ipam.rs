//! IPAM models: prefixes, IP addresses, aggregates, RIRs, VRFs, VLANs
//!
//! See: netbox/netbox/ipam/api/serializers_/ip.py

use super::{ChoiceField, CustomFields, NestedIPAddress, NestedRef, NestedTag, NestedVlan, NestedVrf, Nullable};
use serde::{Deserialize, Serialize};

/// Prefix model matching NetBox PrefixSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefix {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub family: Option<ChoiceField<u8>>,
    pub prefix: String, // e.g., "192.168.1.0/24"
    pub site: Option<NestedRef>,
    pub vrf: Option<NestedVrf>,
    pub tenant: Option<NestedRef>,
    pub vlan: Option<NestedVlan>,
    pub status: Option<ChoiceField>,
    pub role: Option<NestedRef>,
    pub is_pool: bool,
    pub description: String,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

/// Request body for creating or patching a prefix
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WritablePrefix {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pool: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<NestedTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// Available prefix (from prefix available-prefixes endpoint)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailablePrefix {
    pub family: u8,
    pub prefix: String,
    pub vrf: Option<NestedVrf>,
}

/// Request body for allocating a child prefix from a parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailablePrefixRequest {
    pub prefix_length: u8,
}

/// IP Address model matching NetBox IPAddressSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IPAddress {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub family: Option<ChoiceField<u8>>,
    pub address: String, // e.g., "192.168.1.1/24"
    pub vrf: Option<NestedVrf>,
    pub tenant: Option<NestedRef>,
    pub status: Option<ChoiceField>,
    pub role: Option<ChoiceField>,
    pub assigned_object_type: Option<String>,
    pub assigned_object_id: Option<u64>,
    pub nat_inside: Option<NestedIPAddress>,
    pub dns_name: String,
    pub description: String,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

/// Request body for creating or patching an IP address
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WritableIPAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_object_type: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_object_id: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nat_inside: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<NestedTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// Aggregate model matching NetBox AggregateSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aggregate {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub family: Option<ChoiceField<u8>>,
    pub prefix: String,
    pub rir: Option<NestedRef>,
    pub date_added: Option<String>,
    pub description: String,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}

/// Request body for creating or patching an aggregate
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WritableAggregate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rir: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// RIR model matching NetBox RIRSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rir {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
    pub is_private: bool,
    pub description: String,
}

/// Request body for creating or patching a RIR
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WritableRir {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// VRF model matching NetBox VRFSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vrf {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub rd: Option<String>,
    pub tenant: Option<NestedRef>,
    pub enforce_unique: bool,
    pub description: String,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}

/// Request body for creating or patching a VRF
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WritableVrf {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rd: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce_unique: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<NestedTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// VLAN model (from IPAM API)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vlan {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub site: Option<NestedRef>,
    pub group: Option<NestedRef>,
    pub vid: u16,
    pub name: String,
    pub tenant: Option<NestedRef>,
    pub status: Option<ChoiceField>,
    pub role: Option<NestedRef>,
    pub description: String,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}

/// Request body for creating or patching a VLAN
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WritableVlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vid: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<NestedTag>>,
}
