//! Per-call resource data: identifier, configuration, prior state and the
//! state being written back.

use crate::error::ProviderError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Generic attribute representation exchanged with the runtime
pub type AttributeMap = Map<String, Value>;

/// Identifier, configuration and state for one resource operation
///
/// Configuration has defaults applied. State starts from the configuration
/// (or from prior state on a plain refresh) and is overwritten by `set` calls
/// as the adapter reads the object back from NetBox.
#[derive(Debug, Clone, Default)]
pub struct ResourceData {
    id: String,
    config: AttributeMap,
    prior: AttributeMap,
    state: AttributeMap,
}

impl ResourceData {
    /// Data for an operation on an existing resource; the id comes from `prior`
    pub fn new(config: AttributeMap, prior: AttributeMap) -> Self {
        let id = match prior.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => String::new(),
        };
        let mut state = if config.is_empty() {
            prior.clone()
        } else {
            config.clone()
        };
        if !id.is_empty() {
            state.insert("id".to_string(), Value::String(id.clone()));
        }
        Self {
            id,
            config,
            prior,
            state,
        }
    }

    /// Data for a resource that does not exist yet, or for a data source
    pub fn from_config(config: AttributeMap) -> Self {
        Self::new(config, AttributeMap::new())
    }

    /// Current id; empty when the resource does not exist
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Record the NetBox object id
    pub fn set_id(&mut self, id: u64) {
        self.set_raw_id(id.to_string());
    }

    /// Identifier that is not a NetBox object id (data-source timestamps)
    pub fn set_raw_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
        self.state
            .insert("id".to_string(), Value::String(self.id.clone()));
    }

    /// Mark the resource as gone; state becomes empty
    pub fn clear_id(&mut self) {
        self.id.clear();
        self.state.clear();
    }

    /// Id as a NetBox object id
    pub fn parse_id(&self) -> Result<u64, ProviderError> {
        self.id
            .parse()
            .map_err(|_| ProviderError::InvalidId(self.id.clone()))
    }

    /// Decode the configuration into a typed struct
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ProviderError> {
        serde_json::from_value(Value::Object(self.config.clone()))
            .map_err(|e| ProviderError::AttributeType(e.to_string()))
    }

    /// Planned configuration
    pub fn config(&self) -> &AttributeMap {
        &self.config
    }

    /// State before this operation
    pub fn prior(&self) -> &AttributeMap {
        &self.prior
    }

    /// Current state value, if set and not null
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.state.get(name).filter(|v| !v.is_null())
    }

    /// Configured value, if present and not null
    ///
    /// Explicit `false`, `0` and `""` count as set.
    pub fn get_ok(&self, name: &str) -> Option<&Value> {
        self.config.get(name).filter(|v| !v.is_null())
    }

    /// Configured value differs from prior state
    pub fn has_change(&self, name: &str) -> bool {
        !same_value(self.config.get(name), self.prior.get(name))
    }

    /// PATCH value for a nullable field: `None` when unchanged, `Some(None)`
    /// when removed from configuration
    pub fn changed<T>(&self, name: &str, value: Option<T>) -> Option<Option<T>> {
        self.has_change(name).then_some(value)
    }

    /// PATCH value for a non-nullable field; a removed attribute is sent as
    /// the type's empty value
    pub fn changed_or_default<T: Default>(&self, name: &str, value: Option<T>) -> Option<T> {
        self.changed(name, value).map(Option::unwrap_or_default)
    }

    /// Write a state value
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.state.insert(name.to_string(), value.into());
    }

    /// Write `value` when NetBox returned one, otherwise keep what state holds
    pub fn set_if_some<V: Into<Value>>(&mut self, name: &str, value: Option<V>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    /// Resulting state; empty when the resource is gone
    pub fn state(&self) -> AttributeMap {
        if self.id.is_empty() {
            AttributeMap::new()
        } else {
            self.state.clone()
        }
    }
}

/// Compare a configured value with a prior state value
///
/// Null and absent are equal, numbers compare numerically, and objects inside
/// lists are compared on the keys the configuration sets, so computed members
/// such as a tag's `id` and `color` do not register as a change.
pub(crate) fn same_value(config: Option<&Value>, prior: Option<&Value>) -> bool {
    match (
        config.filter(|v| !v.is_null()),
        prior.filter(|v| !v.is_null()),
    ) {
        (None, None) => true,
        (Some(config), Some(prior)) => values_match(config, prior, false),
        _ => false,
    }
}

fn values_match(config: &Value, prior: &Value, in_list: bool) -> bool {
    match (config, prior) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_match(x, y, true))
        }
        (Value::Object(a), Value::Object(b)) if in_list => a
            .iter()
            .filter(|(_, v)| !v.is_null())
            .all(|(key, v)| b.get(key).is_some_and(|w| values_match(v, w, true))),
        (Value::Object(a), Value::Object(b)) => a
            .keys()
            .chain(b.keys())
            .all(|key| same_value(a.get(key), b.get(key))),
        _ => config == prior,
    }
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

    #[test]
    fn test_new_takes_id_from_prior() {
        let d = ResourceData::new(
            object(json!({"name": "blue"})),
            object(json!({"id": "12", "name": "red"})),
        );
        assert_eq!(d.id(), "12");
        assert_eq!(d.parse_id().unwrap(), 12);
        assert_eq!(d.get("name"), Some(&json!("blue")));
    }

    #[test]
    fn test_refresh_starts_from_prior_state() {
        let d = ResourceData::new(AttributeMap::new(), object(json!({"id": "3", "rd": "65000:1"})));
        assert_eq!(d.get("rd"), Some(&json!("65000:1")));
    }

    #[test]
    fn test_parse_id_rejects_corrupt_identifier() {
        let d = ResourceData::new(AttributeMap::new(), object(json!({"id": "abc"})));
        assert!(matches!(d.parse_id(), Err(ProviderError::InvalidId(id)) if id == "abc"));
    }

    #[test]
    fn test_get_ok_counts_zero_values_as_set() {
        let d = ResourceData::from_config(object(json!({
            "enabled": false, "mtu": 0, "label": "", "mode": null
        })));
        assert!(d.get_ok("enabled").is_some());
        assert!(d.get_ok("mtu").is_some());
        assert!(d.get_ok("label").is_some());
        assert!(d.get_ok("mode").is_none());
        assert!(d.get_ok("missing").is_none());
    }

    #[test]
    fn test_has_change() {
        let d = ResourceData::new(
            object(json!({
                "name": "blue",
                "description": "new",
                "tenant_id": null,
                "vid": 10,
                "tags": [{"name": "Foo", "slug": "foo"}]
            })),
            object(json!({
                "id": "1",
                "name": "blue",
                "description": "old",
                "vid": 10.0,
                "tags": [{"id": 4, "name": "Foo", "slug": "foo", "color": "9e9e9e"}]
            })),
        );
        assert!(!d.has_change("name"));
        assert!(d.has_change("description"));
        assert!(!d.has_change("tenant_id"));
        assert!(!d.has_change("vid"));
        assert!(!d.has_change("tags"));
    }

    #[test]
    fn test_map_change_detects_removed_key() {
        let d = ResourceData::new(
            object(json!({"custom_fields": {"a": "1"}})),
            object(json!({"id": "1", "custom_fields": {"a": "1", "b": "2"}})),
        );
        assert!(d.has_change("custom_fields"));
    }

    #[test]
    fn test_changed_values() {
        let d = ResourceData::new(
            object(json!({"name": "blue"})),
            object(json!({"id": "1", "name": "blue", "description": "old", "tenant_id": 2})),
        );
        assert_eq!(d.changed::<u64>("tenant_id", None), Some(None));
        assert_eq!(d.changed_or_default::<String>("description", None), Some(String::new()));
        assert_eq!(d.changed("name", Some("blue".to_string())), None);
    }

    #[test]
    fn test_set_if_some_keeps_existing_value() {
        let mut d = ResourceData::new(
            AttributeMap::new(),
            object(json!({"id": "1", "description": "keep"})),
        );
        d.set_if_some::<&str>("description", None);
        assert_eq!(d.get("description"), Some(&json!("keep")));
        d.set_if_some("description", Some("replaced"));
        assert_eq!(d.get("description"), Some(&json!("replaced")));
    }

    #[test]
    fn test_clear_id_empties_state() {
        let mut d = ResourceData::new(AttributeMap::new(), object(json!({"id": "1", "name": "x"})));
        d.clear_id();
        assert_eq!(d.id(), "");
        assert!(d.state().is_empty());
    }
}
