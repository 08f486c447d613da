//! Expand and flatten helpers
//!
//! Expand turns configuration values into NetBox request types; flatten turns
//! NetBox read models into state values. Resources and data sources share
//! these so the same upstream shape always lands in state the same way.

use chrono::Utc;
use netbox_client::{ChoiceField, CustomFields, NestedTag, NestedVlan};
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

fn string_member(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Tag references from the `tags` list; `id` 0 means "look up by name/slug"
pub fn expand_tags(tags: &[Value]) -> Vec<NestedTag> {
    tags.iter()
        .filter_map(Value::as_object)
        .map(|tag| NestedTag {
            id: tag.get("id").and_then(Value::as_u64).unwrap_or(0),
            name: string_member(tag, "name"),
            slug: string_member(tag, "slug"),
            color: string_member(tag, "color"),
            ..Default::default()
        })
        .collect()
}

/// `tags` state: every tag with all four keys
pub fn flatten_tags(tags: &[NestedTag]) -> Value {
    tags.iter()
        .map(|tag| {
            json!({
                "id": tag.id,
                "name": tag.name,
                "slug": tag.slug,
                "color": tag.color,
            })
        })
        .collect()
}

/// Tag slugs, as data sources export them
pub fn flatten_tag_slugs(tags: &[NestedTag]) -> Value {
    tags.iter().map(|tag| Value::String(tag.slug.clone())).collect()
}

/// Nested object as a zero- or one-element list holding only `fields`
pub fn flatten_nested<T: Serialize>(nested: Option<&T>, fields: &[&str]) -> Value {
    let Some(Value::Object(object)) = nested.and_then(|n| serde_json::to_value(n).ok()) else {
        return Value::Array(Vec::new());
    };
    let kept: Map<String, Value> = fields
        .iter()
        .filter_map(|field| object.get(*field).map(|v| ((*field).to_string(), v.clone())))
        .collect();
    Value::Array(vec![Value::Object(kept)])
}

/// Choice field (`status`, `family`, `type`) as `[{value, label}]`
pub fn flatten_choice<V: Serialize>(choice: Option<&ChoiceField<V>>) -> Value {
    flatten_nested(choice, &["value", "label"])
}

/// Choice value as a string, for attributes that hold only the value
pub fn choice_value(choice: Option<&ChoiceField>) -> Option<&str> {
    choice.map(|c| c.value.as_str()).filter(|v| !v.is_empty())
}

/// Numeric id of a nested reference, for `<relation>_id` attributes
pub fn nested_id<T: Serialize>(nested: Option<&T>) -> Option<u64> {
    let value = serde_json::to_value(nested?).ok()?;
    value.get("id").and_then(Value::as_u64).filter(|id| *id != 0)
}

/// Custom fields for a request body; every value is sent as a string
pub fn expand_custom_fields(fields: &BTreeMap<String, String>) -> CustomFields {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect()
}

/// Custom fields as a string map; unset (null) fields are dropped
pub fn flatten_custom_fields(fields: &CustomFields) -> Value {
    let flattened: Map<String, Value> = fields
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((key.clone(), Value::String(text)))
        })
        .collect();
    Value::Object(flattened)
}

/// Tagged VLAN ids in configured order, without repeats
pub fn expand_vlan_ids(ids: &[u64]) -> Vec<u64> {
    let mut expanded: Vec<u64> = Vec::with_capacity(ids.len());
    for id in ids {
        if !expanded.contains(id) {
            expanded.push(*id);
        }
    }
    expanded
}

/// Tagged VLAN ids as NetBox returned them
pub fn flatten_vlan_ids(vlans: &[NestedVlan]) -> Value {
    vlans.iter().map(|vlan| Value::from(vlan.id)).collect()
}

/// Non-empty string, for optional attributes NetBox returns as `""`
pub fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// Identifier for list data sources: the current Unix time
pub fn timestamp_id() -> String {
    Utc::now().timestamp().to_string()
}
