//! NetBoxClient trait for mocking
//!
//! This trait abstracts the NetBoxClient so that resource adapters can run
//! against either the HTTP client or an in-memory mock.
//! The concrete NetBoxClient implements this trait, and tests can use mock implementations.

use crate::error::NetBoxError;
use crate::models::*;

/// Trait for NetBox API client operations
///
/// Create and update take the writable request body; update is a PATCH, so
/// only the fields set on the body are sent.
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait NetBoxClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Validate the API token
    async fn validate_token(&self) -> Result<(), NetBoxError>;

    // DCIM Operations
    async fn get_site(&self, id: u64) -> Result<Site, NetBoxError>;
    async fn create_site(&self, site: &WritableSite) -> Result<Site, NetBoxError>;
    async fn update_site(&self, id: u64, site: &WritableSite) -> Result<Site, NetBoxError>;
    async fn delete_site(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_rack(&self, id: u64) -> Result<Rack, NetBoxError>;
    async fn create_rack(&self, rack: &WritableRack) -> Result<Rack, NetBoxError>;
    async fn update_rack(&self, id: u64, rack: &WritableRack) -> Result<Rack, NetBoxError>;
    async fn delete_rack(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_device(&self, id: u64) -> Result<Device, NetBoxError>;
    async fn create_device(&self, device: &WritableDevice) -> Result<Device, NetBoxError>;
    async fn update_device(&self, id: u64, device: &WritableDevice) -> Result<Device, NetBoxError>;
    async fn delete_device(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_interface(&self, id: u64) -> Result<Interface, NetBoxError>;
    async fn create_interface(&self, interface: &WritableInterface) -> Result<Interface, NetBoxError>;
    async fn update_interface(&self, id: u64, interface: &WritableInterface) -> Result<Interface, NetBoxError>;
    async fn delete_interface(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_region(&self, id: u64) -> Result<Region, NetBoxError>;
    async fn create_region(&self, region: &WritableRegion) -> Result<Region, NetBoxError>;
    async fn update_region(&self, id: u64, region: &WritableRegion) -> Result<Region, NetBoxError>;
    async fn delete_region(&self, id: u64) -> Result<(), NetBoxError>;

    // Circuits Operations
    async fn get_circuit(&self, id: u64) -> Result<Circuit, NetBoxError>;
    async fn create_circuit(&self, circuit: &WritableCircuit) -> Result<Circuit, NetBoxError>;
    async fn update_circuit(&self, id: u64, circuit: &WritableCircuit) -> Result<Circuit, NetBoxError>;
    async fn delete_circuit(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_circuit_provider(&self, id: u64) -> Result<CircuitProvider, NetBoxError>;
    async fn create_circuit_provider(&self, provider: &WritableCircuitProvider) -> Result<CircuitProvider, NetBoxError>;
    async fn update_circuit_provider(&self, id: u64, provider: &WritableCircuitProvider) -> Result<CircuitProvider, NetBoxError>;
    async fn delete_circuit_provider(&self, id: u64) -> Result<(), NetBoxError>;

    // IPAM Operations
    async fn get_ip_address(&self, id: u64) -> Result<IPAddress, NetBoxError>;
    async fn create_ip_address(&self, address: &WritableIPAddress) -> Result<IPAddress, NetBoxError>;
    async fn update_ip_address(&self, id: u64, address: &WritableIPAddress) -> Result<IPAddress, NetBoxError>;
    async fn delete_ip_address(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_prefix(&self, id: u64) -> Result<Prefix, NetBoxError>;
    async fn query_prefixes(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Prefix>, NetBoxError>;
    async fn create_prefix(&self, prefix: &WritablePrefix) -> Result<Prefix, NetBoxError>;
    async fn update_prefix(&self, id: u64, prefix: &WritablePrefix) -> Result<Prefix, NetBoxError>;
    async fn delete_prefix(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_available_prefixes(&self, prefix_id: u64) -> Result<Vec<AvailablePrefix>, NetBoxError>;
    async fn create_available_prefix(&self, prefix_id: u64, prefix_length: u8) -> Result<Prefix, NetBoxError>;
    async fn get_aggregate(&self, id: u64) -> Result<Aggregate, NetBoxError>;
    async fn query_aggregates(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Aggregate>, NetBoxError>;
    async fn create_aggregate(&self, aggregate: &WritableAggregate) -> Result<Aggregate, NetBoxError>;
    async fn update_aggregate(&self, id: u64, aggregate: &WritableAggregate) -> Result<Aggregate, NetBoxError>;
    async fn delete_aggregate(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_vrf(&self, id: u64) -> Result<Vrf, NetBoxError>;
    async fn create_vrf(&self, vrf: &WritableVrf) -> Result<Vrf, NetBoxError>;
    async fn update_vrf(&self, id: u64, vrf: &WritableVrf) -> Result<Vrf, NetBoxError>;
    async fn delete_vrf(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_vlan(&self, id: u64) -> Result<Vlan, NetBoxError>;
    async fn create_vlan(&self, vlan: &WritableVlan) -> Result<Vlan, NetBoxError>;
    async fn update_vlan(&self, id: u64, vlan: &WritableVlan) -> Result<Vlan, NetBoxError>;
    async fn delete_vlan(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_rir(&self, id: u64) -> Result<Rir, NetBoxError>;
    async fn create_rir(&self, rir: &WritableRir) -> Result<Rir, NetBoxError>;
    async fn update_rir(&self, id: u64, rir: &WritableRir) -> Result<Rir, NetBoxError>;
    async fn delete_rir(&self, id: u64) -> Result<(), NetBoxError>;

    // Tenancy Operations
    async fn get_tenant(&self, id: u64) -> Result<Tenant, NetBoxError>;
    async fn create_tenant(&self, tenant: &WritableTenant) -> Result<Tenant, NetBoxError>;
    async fn update_tenant(&self, id: u64, tenant: &WritableTenant) -> Result<Tenant, NetBoxError>;
    async fn delete_tenant(&self, id: u64) -> Result<(), NetBoxError>;

    // Extras Operations
    async fn get_tag(&self, id: u64) -> Result<Tag, NetBoxError>;
    async fn create_tag(&self, tag: &WritableTag) -> Result<Tag, NetBoxError>;
    async fn update_tag(&self, id: u64, tag: &WritableTag) -> Result<Tag, NetBoxError>;
    async fn delete_tag(&self, id: u64) -> Result<(), NetBoxError>;
}
