//! Provider registry
//!
//! `NetBoxProvider` owns the resource and data-source tables and the one
//! NetBox client shared by every adapter call. The runtime-facing operations
//! take and return plain attribute maps.

use crate::data_sources::{self, DataSource};
use crate::error::{Diagnostic, Diagnostics, ProviderError};
use crate::resource_data::{AttributeMap, ResourceData};
use crate::resources::{self, Resource};
use crate::schema::{Attribute, Schema};
use netbox_client::{NetBoxClient, NetBoxClientTrait};
use reqwest::Url;
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Path used when the configured host carries none
const DEFAULT_API_PATH: &str = "/api";

/// Provider block after defaults
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// NetBox URL or bare host name
    pub host: String,
    /// API token
    #[serde(default)]
    pub token: Option<String>,
}

/// Result of planning one resource change
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannedChange {
    /// Configuration with defaults and carried-over computed values
    pub planned_state: AttributeMap,
    /// Attributes whose change forces the resource to be replaced
    pub requires_replace: Vec<String>,
    /// Validation findings; the plan is unusable when these hold errors
    pub diagnostics: Diagnostics,
}

/// Registry of adapters plus the configured client
pub struct NetBoxProvider {
    resources: BTreeMap<&'static str, Arc<dyn Resource>>,
    data_sources: BTreeMap<&'static str, Arc<dyn DataSource>>,
    client: Option<Arc<dyn NetBoxClientTrait>>,
}

impl fmt::Debug for NetBoxProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetBoxProvider")
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .field("data_sources", &self.data_sources.keys().collect::<Vec<_>>())
            .field("client", &self.client.as_ref().map(|c| c.base_url().to_string()))
            .finish()
    }
}

impl Default for NetBoxProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl NetBoxProvider {
    /// Provider with every resource and data source registered and no client
    pub fn new() -> Self {
        Self {
            resources: resources::all().into_iter().map(|r| (r.type_name(), r)).collect(),
            data_sources: data_sources::all().into_iter().map(|ds| (ds.type_name(), ds)).collect(),
            client: None,
        }
    }

    /// Schema of the provider block
    pub fn schema(&self) -> Schema {
        Schema::new()
            .attribute(
                "host",
                Attribute::string()
                    .required()
                    .env_default("NETBOX_HOST")
                    .describe("NetBox URL, e.g. https://netbox.example.com/api"),
            )
            .attribute(
                "token",
                Attribute::string()
                    .sensitive()
                    .env_default("NETBOX_TOKEN")
                    .describe("NetBox API token"),
            )
    }

    /// Provider, resource and data-source schemas as one JSON document
    pub fn schemas(&self) -> Value {
        let resource_schemas: BTreeMap<_, _> = self.resources.iter().map(|(name, r)| (*name, r.schema())).collect();
        let data_source_schemas: BTreeMap<_, _> =
            self.data_sources.iter().map(|(name, ds)| (*name, ds.schema())).collect();
        json!({
            "provider": self.schema(),
            "resource_schemas": resource_schemas,
            "data_source_schemas": data_source_schemas,
        })
    }

    /// Build the shared NetBox client from the provider block
    pub fn configure(&mut self, config: AttributeMap) -> Result<(), ProviderError> {
        let config = prepare(&self.schema(), config)?;
        let config: ProviderConfig = serde_json::from_value(Value::Object(config))
            .map_err(|e| ProviderError::InvalidConfig(e.to_string()))?;

        let base_url = normalize_host(&config.host)?;
        let token = config.token.filter(|t| !t.is_empty());
        if token.is_none() {
            debug!("No NetBox token configured, requests will be sent without authentication");
        }

        info!("Creating NetBox client for {}", base_url);
        let client = NetBoxClient::new(base_url, token)
            .map_err(|e| ProviderError::netbox("Unable to create NetBox client", e))?;
        self.client = Some(Arc::new(client));
        Ok(())
    }

    /// Use an already-built client
    pub fn configure_with_client(&mut self, client: Arc<dyn NetBoxClientTrait>) {
        info!("Using NetBox client for {}", client.base_url());
        self.client = Some(client);
    }

    /// Configured client; fails until `configure` has run
    pub fn client(&self) -> Result<&dyn NetBoxClientTrait, ProviderError> {
        self.client.as_deref().ok_or(ProviderError::NotConfigured)
    }

    /// Registered resource type names, sorted
    pub fn resource_types(&self) -> Vec<&'static str> {
        self.resources.keys().copied().collect()
    }

    /// Registered data-source type names, sorted
    pub fn data_source_types(&self) -> Vec<&'static str> {
        self.data_sources.keys().copied().collect()
    }

    /// Resource adapter registered under `name`
    pub fn resource(&self, name: &str) -> Result<&Arc<dyn Resource>, ProviderError> {
        self.resources
            .get(name)
            .ok_or_else(|| ProviderError::UnknownResourceType(name.to_string()))
    }

    /// Data-source adapter registered under `name`
    pub fn data_source(&self, name: &str) -> Result<&Arc<dyn DataSource>, ProviderError> {
        self.data_sources
            .get(name)
            .ok_or_else(|| ProviderError::UnknownDataSourceType(name.to_string()))
    }

    /// Diagnostics for a resource configuration, defaults applied first
    pub fn validate_resource_config(&self, name: &str, config: &AttributeMap) -> Diagnostics {
        match self.resource(name) {
            Ok(resource) => validate_with_defaults(&resource.schema(), config),
            Err(e) => unknown_type(e),
        }
    }

    /// Diagnostics for a data-source configuration, defaults applied first
    pub fn validate_data_source_config(&self, name: &str, config: &AttributeMap) -> Diagnostics {
        match self.data_source(name) {
            Ok(data_source) => validate_with_defaults(&data_source.schema(), config),
            Err(e) => unknown_type(e),
        }
    }

    /// Planned state and replacement set for moving `state` to `config`
    pub fn plan_resource_change(
        &self,
        name: &str,
        config: &AttributeMap,
        state: &AttributeMap,
    ) -> Result<PlannedChange, ProviderError> {
        let schema = self.resource(name)?.schema();
        let mut config = config.clone();
        schema.apply_defaults(&mut config);

        Ok(PlannedChange {
            diagnostics: schema.validate(&config),
            requires_replace: schema.requires_replace(&config, state),
            planned_state: schema.plan(&config, state),
        })
    }

    /// Create the object and return its state
    pub async fn create_resource(&self, name: &str, config: AttributeMap) -> Result<AttributeMap, ProviderError> {
        let resource = self.resource(name)?;
        let client = self.client()?;
        let schema = resource.schema();
        let config = schema.plan(&prepare(&schema, config)?, &AttributeMap::new());

        let mut d = ResourceData::from_config(config);
        resource.create(client, &mut d).await?;
        Ok(d.state())
    }

    /// Refresh `state` from NetBox; an empty result means the object is gone
    pub async fn read_resource(&self, name: &str, state: AttributeMap) -> Result<AttributeMap, ProviderError> {
        let resource = self.resource(name)?;
        let client = self.client()?;

        let mut d = ResourceData::new(AttributeMap::new(), state);
        resource.read(client, &mut d).await?;
        Ok(d.state())
    }

    /// Apply `config` over `prior` state and return the new state
    pub async fn update_resource(
        &self,
        name: &str,
        config: AttributeMap,
        prior: AttributeMap,
    ) -> Result<AttributeMap, ProviderError> {
        let resource = self.resource(name)?;
        let client = self.client()?;
        let schema = resource.schema();
        let config = schema.plan(&prepare(&schema, config)?, &prior);

        let mut d = ResourceData::new(config, prior);
        resource.update(client, &mut d).await?;
        Ok(d.state())
    }

    /// Delete the object recorded in `state`
    pub async fn delete_resource(&self, name: &str, state: AttributeMap) -> Result<(), ProviderError> {
        let resource = self.resource(name)?;
        let client = self.client()?;

        let mut d = ResourceData::new(AttributeMap::new(), state);
        resource.delete(client, &mut d).await
    }

    /// Run a data-source lookup and return its state
    pub async fn read_data_source(&self, name: &str, config: AttributeMap) -> Result<AttributeMap, ProviderError> {
        let data_source = self.data_source(name)?;
        let client = self.client()?;
        let config = prepare(&data_source.schema(), config)?;

        let mut d = ResourceData::from_config(config);
        data_source.read(client, &mut d).await?;
        Ok(d.state())
    }
}

/// Apply defaults and reject configuration that fails validation
fn prepare(schema: &Schema, mut config: AttributeMap) -> Result<AttributeMap, ProviderError> {
    schema.apply_defaults(&mut config);
    schema.validate(&config).into_result()?;
    Ok(config)
}

fn validate_with_defaults(schema: &Schema, config: &AttributeMap) -> Diagnostics {
    let mut config = config.clone();
    schema.apply_defaults(&mut config);
    schema.validate(&config)
}

fn unknown_type(err: ProviderError) -> Diagnostics {
    let mut diags = Diagnostics::new();
    diags.push(Diagnostic::error("", "Unsupported type", err.to_string()));
    diags
}

/// API base URL for a configured host
///
/// A missing scheme means `https`; a missing path means `/api`.
pub fn normalize_host(host: &str) -> Result<String, ProviderError> {
    let host = host.trim();
    let with_scheme = if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    };

    let mut url = Url::parse(&with_scheme)
        .map_err(|e| ProviderError::InvalidConfig(format!("host {:?} is not a valid URL: {}", host, e)))?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ProviderError::InvalidConfig(format!("host {:?} has no host name", host)));
    }
    if url.path().is_empty() || url.path() == "/" {
        url.set_path(DEFAULT_API_PATH);
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
