//! Attribute schemas for the provider, resources and data sources
//!
//! A [`Schema`] describes every attribute a block accepts or exports. It is
//! used at plan time to validate configuration, fill in defaults and decide
//! whether a change forces replacement, and it is what the `schema` command
//! prints.

use crate::error::{Diagnostic, Diagnostics};
use crate::resource_data::{AttributeMap, same_value};
use crate::validation::Validator;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Value type of an attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "elem", rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int,
    Bool,
    Float,
    List(Box<AttributeType>),
    Map(Box<AttributeType>),
    Object(BTreeMap<String, Attribute>),
}

impl AttributeType {
    fn describe(&self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Int => "number",
            AttributeType::Bool => "bool",
            AttributeType::Float => "number",
            AttributeType::List(_) => "list",
            AttributeType::Map(_) => "map",
            AttributeType::Object(_) => "object",
        }
    }
}

/// A single attribute definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub kind: AttributeType,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub computed: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub force_new: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub sensitive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_default: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator: Option<Validator>,
    #[serde(skip_serializing_if = "no_description")]
    pub description: &'static str,
}

impl Attribute {
    /// Optional attribute of the given type
    pub fn new(kind: AttributeType) -> Self {
        Self {
            kind,
            required: false,
            optional: true,
            computed: false,
            force_new: false,
            sensitive: false,
            default: None,
            env_default: None,
            validator: None,
            description: "",
        }
    }

    pub fn string() -> Self {
        Self::new(AttributeType::String)
    }

    pub fn int() -> Self {
        Self::new(AttributeType::Int)
    }

    pub fn bool() -> Self {
        Self::new(AttributeType::Bool)
    }

    pub fn float() -> Self {
        Self::new(AttributeType::Float)
    }

    /// List of `elem` values
    pub fn list(elem: AttributeType) -> Self {
        Self::new(AttributeType::List(Box::new(elem)))
    }

    /// Map of string keys to `elem` values
    pub fn map(elem: AttributeType) -> Self {
        Self::new(AttributeType::Map(Box::new(elem)))
    }

    /// List of nested objects
    pub fn list_of(attributes: Vec<(&str, Attribute)>) -> Self {
        let fields = attributes
            .into_iter()
            .map(|(name, attr)| (name.to_string(), attr))
            .collect();
        Self::list(AttributeType::Object(fields))
    }

    /// Must be set in configuration
    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    /// Value is set by NetBox; combined with `optional` the user may also set it
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Computed only: configuration may not set it
    pub fn read_only(mut self) -> Self {
        self.computed = true;
        self.optional = false;
        self.required = false;
        self
    }

    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Read the value from an environment variable when configuration omits it
    pub fn env_default(mut self, variable: &'static str) -> Self {
        self.env_default = Some(variable);
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    fn settable(&self) -> bool {
        self.required || self.optional
    }
}

fn no_description(description: &&'static str) -> bool {
    description.is_empty()
}

/// The `tags` block shared by most resources
pub fn tags() -> Attribute {
    Attribute::list_of(vec![
        ("id", Attribute::int().read_only()),
        ("name", Attribute::string().computed()),
        ("slug", Attribute::string().computed()),
        ("color", Attribute::string().read_only()),
    ])
    .computed()
}

/// The `custom_fields` map shared by most resources
pub fn custom_fields() -> Attribute {
    Attribute::map(AttributeType::String)
}

/// Ordered attribute table for one block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    /// Schema with no attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Resource schema: starts with the computed `id`
    pub fn resource() -> Self {
        Self::new().attribute("id", Attribute::string().read_only())
    }

    /// Add an attribute
    pub fn attribute(mut self, name: &str, attribute: Attribute) -> Self {
        self.attributes.insert(name.to_string(), attribute);
        self
    }

    /// Attribute named `name`
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Validate a configuration map, reporting every problem found
    pub fn validate(&self, config: &AttributeMap) -> Diagnostics {
        let mut diags = Diagnostics::new();
        validate_object(&self.attributes, config, "", &mut diags);
        diags
    }

    /// Insert declared and environment defaults for absent attributes
    pub fn apply_defaults(&self, config: &mut AttributeMap) {
        for (name, attr) in &self.attributes {
            if config.get(name).is_some_and(|v| !v.is_null()) {
                continue;
            }
            if let Some(default) = &attr.default {
                config.insert(name.clone(), default.clone());
            } else if let Some(value) = attr
                .env_default
                .and_then(|var| std::env::var(var).ok())
                .filter(|v| !v.is_empty())
            {
                config.insert(name.clone(), Value::String(value));
            }
        }
    }

    /// `force_new` attributes whose configured value differs from state
    ///
    /// Empty when the resource does not exist yet.
    pub fn requires_replace(&self, config: &AttributeMap, state: &AttributeMap) -> Vec<String> {
        let exists = state
            .get("id")
            .and_then(Value::as_str)
            .is_some_and(|id| !id.is_empty());
        if !exists {
            return Vec::new();
        }
        self.attributes
            .iter()
            .filter(|(_, attr)| attr.force_new)
            .filter(|(name, _)| !same_value(config.get(*name), state.get(*name)))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Planned state: the configuration, with computed values carried over
    /// from prior state where the configuration leaves them unset
    pub fn plan(&self, config: &AttributeMap, prior: &AttributeMap) -> AttributeMap {
        let mut planned = config.clone();
        for (name, attr) in &self.attributes {
            if !attr.computed || planned.get(name).is_some_and(|v| !v.is_null()) {
                continue;
            }
            if let Some(value) = prior.get(name).filter(|v| !v.is_null()) {
                planned.insert(name.clone(), value.clone());
            }
        }
        planned
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn validate_object(
    attributes: &BTreeMap<String, Attribute>,
    values: &AttributeMap,
    prefix: &str,
    diags: &mut Diagnostics,
) {
    for (name, attr) in attributes {
        let present = values.get(name).is_some_and(|v| !v.is_null());
        if attr.required && !present {
            diags.push(Diagnostic::error(
                &join(prefix, name),
                "Missing required argument",
                format!("The argument \"{}\" is required, but no definition was found.", name),
            ));
        }
    }

    for (name, value) in values {
        let path = join(prefix, name);
        let Some(attr) = attributes.get(name) else {
            diags.push(Diagnostic::error(
                &path,
                "Unsupported argument",
                format!("An argument named \"{}\" is not expected here.", name),
            ));
            continue;
        };
        if value.is_null() {
            continue;
        }
        if !attr.settable() {
            diags.push(Diagnostic::error(
                &path,
                "Invalid configuration",
                format!("\"{}\": this field cannot be set", name),
            ));
            continue;
        }
        if validate_value(&attr.kind, &path, value, diags) {
            if let Some(validator) = &attr.validator {
                validator.check(&path, value, diags);
            }
        }
    }
}

/// Check `value` against `kind`; returns false when the top-level type is wrong
fn validate_value(kind: &AttributeType, path: &str, value: &Value, diags: &mut Diagnostics) -> bool {
    let ok = match (kind, value) {
        (AttributeType::String, Value::String(_)) => true,
        (AttributeType::Int, Value::Number(n)) => n.is_i64() || n.is_u64(),
        (AttributeType::Float, Value::Number(_)) => true,
        (AttributeType::Bool, Value::Bool(_)) => true,
        (AttributeType::List(elem), Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                if !item.is_null() {
                    validate_value(elem, &join(path, &i.to_string()), item, diags);
                }
            }
            true
        }
        (AttributeType::Map(elem), Value::Object(entries)) => {
            for (key, item) in entries {
                if !item.is_null() {
                    validate_value(elem, &join(path, key), item, diags);
                }
            }
            true
        }
        (AttributeType::Object(fields), Value::Object(entries)) => {
            validate_object(fields, entries, path, diags);
            true
        }
        _ => false,
    };
    if !ok {
        diags.push(Diagnostic::error(
            path,
            "Incorrect attribute value type",
            format!("Inappropriate value for attribute \"{}\": {} required.", path, kind.describe()),
        ));
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> AttributeMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn prefix_schema() -> Schema {
        Schema::resource()
            .attribute(
                "prefix",
                Attribute::string().required().validate(Validator::IsCidr),
            )
            .attribute("status", Attribute::string().default("active"))
            .attribute("family", Attribute::string().read_only())
            .attribute("vrf_id", Attribute::int().force_new())
            .attribute("tags", tags())
    }

    fn paths(diags: &Diagnostics) -> Vec<String> {
        diags.iter().filter_map(|d| d.attribute.clone()).collect()
    }

    #[test]
    fn test_validate_accepts_valid_config() {
        let config = object(json!({
            "prefix": "10.0.0.0/16",
            "tags": [{"name": "Foo", "slug": "foo"}]
        }));
        assert!(prefix_schema().validate(&config).is_empty());
    }

    #[test]
    fn test_validate_missing_required() {
        let diags = prefix_schema().validate(&AttributeMap::new());
        assert!(diags.has_errors());
        assert_eq!(paths(&diags), vec!["prefix"]);
    }

    #[test]
    fn test_validate_wrong_type_skips_validator() {
        let diags = prefix_schema().validate(&object(json!({"prefix": 10})));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags.iter().next().unwrap().summary, "Incorrect attribute value type");
    }

    #[test]
    fn test_validate_runs_validator() {
        let diags = prefix_schema().validate(&object(json!({"prefix": "not-a-cidr"})));
        assert_eq!(paths(&diags), vec!["prefix"]);
        assert_eq!(diags.iter().next().unwrap().summary, "Invalid attribute value");
    }

    #[test]
    fn test_validate_rejects_unknown_and_computed() {
        let diags = prefix_schema().validate(&object(json!({
            "prefix": "10.0.0.0/16",
            "family": "IPv4",
            "bogus": true
        })));
        let mut found = paths(&diags);
        found.sort();
        assert_eq!(found, vec!["bogus", "family"]);
    }

    #[test]
    fn test_validate_nested_paths() {
        let diags = prefix_schema().validate(&object(json!({
            "prefix": "10.0.0.0/16",
            "tags": [{"name": "Foo"}, {"name": 3, "color": "ff0000"}]
        })));
        let mut found = paths(&diags);
        found.sort();
        assert_eq!(found, vec!["tags.1.color", "tags.1.name"]);
    }

    #[test]
    fn test_apply_defaults() {
        let mut config = object(json!({"prefix": "10.0.0.0/16"}));
        prefix_schema().apply_defaults(&mut config);
        assert_eq!(config["status"], json!("active"));

        let mut explicit = object(json!({"prefix": "10.0.0.0/16", "status": "reserved"}));
        prefix_schema().apply_defaults(&mut explicit);
        assert_eq!(explicit["status"], json!("reserved"));
    }

    #[test]
    fn test_requires_replace() {
        let schema = prefix_schema();
        let config = object(json!({"prefix": "10.0.0.0/16", "vrf_id": 2}));
        let state = object(json!({"id": "5", "prefix": "10.0.0.0/16", "vrf_id": 1}));
        assert_eq!(schema.requires_replace(&config, &state), vec!["vrf_id"]);

        let same = object(json!({"id": "5", "prefix": "10.0.0.0/16", "vrf_id": 2}));
        assert!(schema.requires_replace(&config, &same).is_empty());

        let new = object(json!({"vrf_id": 1}));
        assert!(schema.requires_replace(&config, &new).is_empty());
    }

    #[test]
    fn test_plan_keeps_computed_values() {
        let schema = prefix_schema();
        let config = object(json!({"prefix": "10.0.0.0/16"}));
        let prior = object(json!({"id": "5", "prefix": "10.0.0.0/16", "family": "IPv4"}));
        let planned = schema.plan(&config, &prior);
        assert_eq!(planned["id"], json!("5"));
        assert_eq!(planned["family"], json!("IPv4"));
    }

    #[test]
    fn test_schema_serializes() {
        let value = serde_json::to_value(prefix_schema()).unwrap();
        assert_eq!(value["attributes"]["prefix"]["type"]["type"], json!("string"));
        assert_eq!(value["attributes"]["prefix"]["required"], json!(true));
        assert_eq!(value["attributes"]["prefix"]["validator"]["kind"], json!("is_cidr"));
    }
}
