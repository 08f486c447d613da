//! NetBox provider
//!
//! Resource and data-source adapters that manage NetBox objects through its
//! REST API. Each adapter translates a generic attribute map to the typed
//! NetBox models in `netbox-client` and back:
//! - `resources`: create, read, update and delete for DCIM, IPAM, circuits,
//!   tenancy and tag objects
//! - `data_sources`: read-only prefix, aggregate and available-prefix lookups
//! - `provider`: the registry of adapters plus the shared, configured client
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//! use terraform_provider_netbox::NetBoxProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut provider = NetBoxProvider::new();
//! let config = json!({"host": "netbox.example.com", "token": "0123456789abcdef"});
//! if let serde_json::Value::Object(config) = config {
//!     provider.configure(config)?;
//! }
//!
//! let prefix = json!({"prefix": "10.0.0.0/24", "status": "active"});
//! if let serde_json::Value::Object(prefix) = prefix {
//!     let state = provider.create_resource("netbox_ipam_prefix", prefix).await?;
//!     println!("created prefix {}", state["id"]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod choices;
pub mod data_sources;
pub mod error;
pub mod helpers;
pub mod provider;
pub mod resource_data;
pub mod resources;
pub mod schema;
pub mod validation;

#[cfg(test)]
mod provider_test;
#[cfg(test)]
mod test_utils;

pub use data_sources::DataSource;
pub use error::{Diagnostic, Diagnostics, ProviderError, Severity};
pub use provider::{NetBoxProvider, PlannedChange, ProviderConfig};
pub use resource_data::{AttributeMap, ResourceData};
pub use resources::Resource;
pub use schema::{Attribute, AttributeType, Schema};
pub use validation::Validator;
