//! Circuits models: circuits and circuit providers

use super::{ChoiceField, CustomFields, NestedRef, NestedTag, Nullable};
use serde::{Deserialize, Serialize};

/// Circuit model matching NetBox CircuitSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Circuit {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub cid: String,
    pub provider: NestedRef,
    #[serde(rename = "type")]
    pub circuit_type: NestedRef,
    pub status: Option<ChoiceField>,
    pub tenant: Option<NestedRef>,
    pub install_date: Option<String>,
    pub commit_rate: Option<u64>,
    pub description: String,
    pub comments: String,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}

/// Request body for creating or patching a circuit
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WritableCircuit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub circuit_type: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_date: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_rate: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<NestedTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// Circuit provider model matching NetBox ProviderSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitProvider {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
    pub asn: Option<u64>,
    pub account: String,
    pub portal_url: String,
    pub noc_contact: String,
    pub admin_contact: String,
    pub comments: String,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}

/// Request body for creating or patching a circuit provider
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WritableCircuitProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asn: Nullable<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noc_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<NestedTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}
