//! Resource adapters
//!
//! One adapter per NetBox object type. Every adapter follows the same
//! lifecycle:
//! - create sends the configured attributes, stores the new id and reads back
//! - read copies the object into state; a 404 clears the id instead of failing
//! - update PATCHes only the attributes that changed, then reads back
//! - delete removes the object; any failure, a 404 included, keeps the id

pub mod circuits;
pub mod dcim;
pub mod extras;
pub mod ipam;
pub mod tenancy;

use crate::error::ProviderError;
use crate::resource_data::ResourceData;
use crate::schema::Schema;
use async_trait::async_trait;
use netbox_client::{NetBoxClientTrait, NetBoxError};
use std::sync::Arc;
use tracing::{error, info, warn};

/// CRUD adapter for one resource type
#[async_trait]
pub trait Resource: Send + Sync {
    /// Type name used in configuration, e.g. `netbox_ipam_prefix`
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError>;

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError>;

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError>;

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError>;
}

/// Every resource adapter the provider registers
pub fn all() -> Vec<Arc<dyn Resource>> {
    vec![
        Arc::new(dcim::SiteResource),
        Arc::new(dcim::RackResource),
        Arc::new(dcim::DeviceResource),
        Arc::new(dcim::InterfaceResource),
        Arc::new(dcim::RegionResource),
        Arc::new(circuits::CircuitResource),
        Arc::new(circuits::CircuitProviderResource),
        Arc::new(ipam::IpAddressResource),
        Arc::new(ipam::PrefixResource),
        Arc::new(ipam::AvailablePrefixResource),
        Arc::new(ipam::AggregateResource),
        Arc::new(ipam::VrfResource),
        Arc::new(ipam::VlanResource),
        Arc::new(ipam::RirResource),
        Arc::new(tenancy::TenantResource),
        Arc::new(extras::TagResource),
    ]
}

/// Log and wrap a failed API call
pub(crate) fn api_failed(action: &str, err: NetBoxError) -> ProviderError {
    error!("{}: {}", action, err);
    ProviderError::netbox(action, err)
}

/// Outcome of a failed read: a 404 means the object was deleted outside
/// Terraform, so the id is cleared and the read succeeds
pub(crate) fn read_failed(d: &mut ResourceData, kind: &str, err: NetBoxError) -> Result<(), ProviderError> {
    if err.is_not_found() {
        warn!("{} {} no longer exists in NetBox, removing it from state", kind, d.id());
        d.clear_id();
        return Ok(());
    }
    Err(api_failed(&format!("Unable to get {}", kind), err))
}

/// Outcome of a delete call; the id is cleared only once NetBox accepted
/// the delete
pub(crate) fn delete_result(
    d: &mut ResourceData,
    kind: &str,
    result: Result<(), NetBoxError>,
) -> Result<(), ProviderError> {
    result.map_err(|e| api_failed(&format!("Unable to delete {}", kind), e))?;
    info!("Deleted {} {}", kind, d.id());
    d.clear_id();
    Ok(())
}

#[cfg(test)]
mod resources_test;
