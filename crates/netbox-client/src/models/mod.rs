//! NetBox API models
//!
//! Read models mirror the NetBox REST serializers; `Writable*` structs are the
//! request bodies for create (POST) and partial update (PATCH).
//!
//! Writable fields are all optional and skipped when `None`, so a PATCH body only
//! carries what the caller set. Nullable references use [`Nullable`], where
//! `Some(None)` serializes as an explicit JSON `null` (clearing the relation).

pub mod circuits;
pub mod dcim;
pub mod extras;
pub mod ipam;
pub mod tenancy;

pub use circuits::*;
pub use dcim::*;
pub use extras::*;
pub use ipam::*;
pub use tenancy::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A writable field that may be set, cleared (`Some(None)` -> `null`), or left out (`None`)
pub type Nullable<T> = Option<Option<T>>;

/// Custom field values as returned by NetBox (values may be any JSON type, including `null`)
pub type CustomFields = BTreeMap<String, serde_json::Value>;

/// Value/label pair used by NetBox for choice fields (status, family, type, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceField<V = String> {
    pub value: V,
    pub label: String,
}

impl<V> ChoiceField<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Brief representation of a related object with a name and slug
///
/// Sites, regions, tenants, roles, RIRs, providers, circuit types, platforms and the
/// like all nest in this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedRef {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedVrf {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub rd: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedVlan {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub vid: u16,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedDevice {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedIPAddress {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedCable {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub label: String,
}

/// Tag reference, used both in responses and in request bodies
///
/// In a request, an `id` of zero means "not known": NetBox resolves the tag by
/// name/slug instead, so zero ids and empty strings are left out of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedTag {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub slug: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Serialize)]
    struct Body {
        #[serde(skip_serializing_if = "Option::is_none")]
        site: Nullable<u64>,
    }

    #[test]
    fn test_nullable_serialization() {
        let unset = serde_json::to_value(Body::default()).expect("serialize");
        assert_eq!(unset, serde_json::json!({}));

        let cleared = serde_json::to_value(Body { site: Some(None) }).expect("serialize");
        assert_eq!(cleared, serde_json::json!({ "site": null }));

        let set = serde_json::to_value(Body { site: Some(Some(7)) }).expect("serialize");
        assert_eq!(set, serde_json::json!({ "site": 7 }));
    }

    #[test]
    fn test_nested_tag_request_body_omits_unknowns() {
        let tag = NestedTag {
            name: "testacc".to_string(),
            slug: "testacc".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&tag).expect("serialize"),
            serde_json::json!({ "name": "testacc", "slug": "testacc" })
        );
    }

    #[test]
    fn test_choice_field_tolerates_missing_label() {
        let family: ChoiceField<u8> =
            serde_json::from_value(serde_json::json!({ "value": 6 })).expect("deserialize");
        assert_eq!(family, ChoiceField::new(6, ""));
    }
}
