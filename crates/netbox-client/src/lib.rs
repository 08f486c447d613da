//! NetBox REST API Client
//!
//! A Rust client library for interacting with the NetBox REST API.
//! Provides typed read models, writable request bodies and CRUD methods for
//! the DCIM, IPAM, circuits, tenancy and extras objects the provider manages.
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::{NetBoxClient, WritablePrefix};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = NetBoxClient::new(
//!     "https://netbox.example.com/api".to_string(),
//!     Some("your-api-token".to_string()),
//! )?;
//!
//! // Create a prefix
//! let prefix = client
//!     .create_prefix(&WritablePrefix {
//!         prefix: Some("10.0.0.0/16".to_string()),
//!         status: Some("active".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Carve a /24 out of it
//! let child = client.create_available_prefix(prefix.id, 24).await?;
//!
//! // Query prefixes
//! let prefixes = client.query_prefixes(&[("within", "10.0.0.0/16")], true).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **CRUD**: get, create, PATCH update and delete for every managed object type
//! - **Explicit clears**: `Nullable<T>` fields serialise `Some(None)` as JSON `null`
//! - **Pagination**: Support for fetching all pages of large result sets
//! - **Mocking**: `MockNetBoxClient` behind the `test-util` feature

pub mod client;
pub mod common;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod netbox_trait;
#[cfg(feature = "test-util")]
pub mod mock;

#[cfg(test)]
mod client_test;

pub use client::NetBoxClient;
pub use common::{HttpClient, PaginatedResponse};
pub use error::NetBoxError;
pub use models::*;
pub use netbox_trait::NetBoxClientTrait;
#[cfg(feature = "test-util")]
pub use mock::{MockNetBoxClient, RecordedRequest};
