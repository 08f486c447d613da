//! Data sources
//!
//! Read-only lookups. Single-object data sources use the NetBox id as their
//! identifier; list data sources use the time of the read and fetch every
//! page of the result.

pub mod aggregates;
pub mod available_prefixes;
pub mod prefix;
pub mod prefixes;

pub use aggregates::AggregatesDataSource;
pub use available_prefixes::AvailablePrefixesDataSource;
pub use prefix::PrefixDataSource;
pub use prefixes::PrefixesDataSource;

use crate::error::ProviderError;
use crate::resource_data::ResourceData;
use crate::schema::{Attribute, Schema};
use async_trait::async_trait;
use netbox_client::NetBoxClientTrait;
use std::sync::Arc;

/// Read operation for one data-source type
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Type name used in configuration, e.g. `netbox_ipam_prefixes`
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError>;
}

/// Every data source the provider registers
pub fn all() -> Vec<Arc<dyn DataSource>> {
    vec![
        Arc::new(AggregatesDataSource),
        Arc::new(AvailablePrefixesDataSource),
        Arc::new(PrefixDataSource),
        Arc::new(PrefixesDataSource),
    ]
}

/// Data-source schema: starts with the computed `id`
pub(crate) fn data_source_schema() -> Schema {
    Schema::new().attribute("id", Attribute::string().read_only())
}

/// Computed `[{value, label}]` block for a choice field
pub(crate) fn choice_block(value: Attribute) -> Attribute {
    Attribute::list_of(vec![
        ("value", value.read_only()),
        ("label", Attribute::string().read_only()),
    ])
    .read_only()
}

/// Computed `[{id, name, slug}]` block for a nested reference
pub(crate) fn nested_block() -> Attribute {
    Attribute::list_of(vec![
        ("id", Attribute::int().read_only()),
        ("name", Attribute::string().read_only()),
        ("slug", Attribute::string().read_only()),
    ])
    .read_only()
}

/// Computed `[{id, name, rd}]` block for a VRF
pub(crate) fn vrf_block() -> Attribute {
    Attribute::list_of(vec![
        ("id", Attribute::int().read_only()),
        ("name", Attribute::string().read_only()),
        ("rd", Attribute::string().read_only()),
    ])
    .read_only()
}

#[cfg(test)]
mod data_sources_test;
