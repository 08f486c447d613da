//! Mock NetBoxClient for unit testing
//!
//! This module provides a mock implementation of NetBoxClientTrait that can be used
//! in unit tests without requiring a running NetBox instance.
//!
//! The mock is organized into domain-specific modules:
//! - `ipam.rs` - IPAM operations (prefixes, available prefixes, IP addresses, aggregates, VRFs, VLANs, RIRs)
//! - `dcim.rs` - DCIM operations (sites, racks, devices, interfaces, regions)
//! - `circuits.rs` - Circuits operations (circuits, circuit providers)
//! - `tenancy.rs` - Tenancy operations (tenants)
//! - `extras.rs` - Extras operations (tags)
//! - `helpers.rs` - Helper functions for creating nested types and applying request bodies
//!
//! Every POST and PATCH body is recorded so tests can assert exactly which
//! fields an adapter sent.

mod circuits;
mod dcim;
mod extras;
mod helpers;
mod ipam;
mod tenancy;

use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub(crate) type Store<T> = Arc<Mutex<BTreeMap<u64, T>>>;

/// A write request received by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// HTTP method the real client would have used (`POST` or `PATCH`)
    pub method: &'static str,
    /// Request path relative to the API base URL
    pub path: String,
    /// JSON body exactly as it would be sent on the wire
    pub body: serde_json::Value,
}

/// Mock NetBoxClient for testing
///
/// This mock stores resources in memory and can be configured to return
/// specific responses for testing different scenarios.
#[derive(Clone, Default)]
pub struct MockNetBoxClient {
    pub(crate) base_url: String,
    // In-memory storage for resources
    pub(crate) sites: Store<Site>,
    pub(crate) racks: Store<Rack>,
    pub(crate) devices: Store<Device>,
    pub(crate) interfaces: Store<Interface>,
    pub(crate) regions: Store<Region>,
    pub(crate) circuits: Store<Circuit>,
    pub(crate) circuit_providers: Store<CircuitProvider>,
    pub(crate) ip_addresses: Store<IPAddress>,
    pub(crate) prefixes: Store<Prefix>,
    pub(crate) aggregates: Store<Aggregate>,
    pub(crate) vrfs: Store<Vrf>,
    pub(crate) vlans: Store<Vlan>,
    pub(crate) rirs: Store<Rir>,
    pub(crate) tenants: Store<Tenant>,
    pub(crate) tags: Store<Tag>,
    // Counter for generating IDs
    pub(crate) next_id: Arc<Mutex<u64>>,
    pub(crate) requests: Arc<Mutex<Vec<RecordedRequest>>>,
    pub(crate) pending_failure: Arc<Mutex<Option<String>>>,
}

/// Lock a mock store, recovering the data if a previous test thread panicked
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Fetch a clone of a stored object, or the 404 NetBox would answer
pub(crate) fn get_from<T: Clone>(store: &Store<T>, id: u64, kind: &str) -> Result<T, NetBoxError> {
    lock(store)
        .get(&id)
        .cloned()
        .ok_or_else(|| NetBoxError::NotFound(format!("{} {} not found", kind, id)))
}

/// Remove a stored object, or the 404 NetBox would answer
pub(crate) fn delete_from<T>(store: &Store<T>, id: u64, kind: &str) -> Result<(), NetBoxError> {
    lock(store)
        .remove(&id)
        .map(|_| ())
        .ok_or_else(|| NetBoxError::NotFound(format!("{} {} not found", kind, id)))
}

/// Apply a patch to a stored object in place and return the updated copy
pub(crate) fn update_in<T: Clone>(
    store: &Store<T>,
    id: u64,
    kind: &str,
    apply: impl FnOnce(&mut T),
) -> Result<T, NetBoxError> {
    let mut guard = lock(store);
    let object = guard
        .get_mut(&id)
        .ok_or_else(|| NetBoxError::NotFound(format!("{} {} not found", kind, id)))?;
    apply(object);
    Ok(object.clone())
}

impl MockNetBoxClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            next_id: Arc::new(Mutex::new(1)),
            ..Default::default()
        }
    }

    /// Add a prefix to the mock store (for test setup)
    pub fn add_prefix(&self, prefix: Prefix) {
        lock(&self.prefixes).insert(prefix.id, prefix);
    }

    /// Add an aggregate to the mock store (for test setup)
    pub fn add_aggregate(&self, aggregate: Aggregate) {
        lock(&self.aggregates).insert(aggregate.id, aggregate);
    }

    /// Add a site to the mock store (for test setup)
    pub fn add_site(&self, site: Site) {
        lock(&self.sites).insert(site.id, site);
    }

    /// Add a VRF to the mock store (for test setup)
    pub fn add_vrf(&self, vrf: Vrf) {
        lock(&self.vrfs).insert(vrf.id, vrf);
    }

    /// Add a tag to the mock store (for test setup)
    pub fn add_tag(&self, tag: Tag) {
        lock(&self.tags).insert(tag.id, tag);
    }

    /// Remove any stored object with this id, simulating an out-of-band delete
    pub fn forget(&self, id: u64) {
        lock(&self.sites).remove(&id);
        lock(&self.racks).remove(&id);
        lock(&self.devices).remove(&id);
        lock(&self.interfaces).remove(&id);
        lock(&self.regions).remove(&id);
        lock(&self.circuits).remove(&id);
        lock(&self.circuit_providers).remove(&id);
        lock(&self.ip_addresses).remove(&id);
        lock(&self.prefixes).remove(&id);
        lock(&self.aggregates).remove(&id);
        lock(&self.vrfs).remove(&id);
        lock(&self.vlans).remove(&id);
        lock(&self.rirs).remove(&id);
        lock(&self.tenants).remove(&id);
        lock(&self.tags).remove(&id);
    }

    /// Make the next call fail with an API error carrying `message`
    pub fn fail_with_api_error(&self, message: impl Into<String>) {
        *lock(&self.pending_failure) = Some(message.into());
    }

    /// Every POST and PATCH received so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Every PATCH received so far, in order
    pub fn patch_log(&self) -> Vec<RecordedRequest> {
        lock(&self.requests)
            .iter()
            .filter(|r| r.method == "PATCH")
            .cloned()
            .collect()
    }

    /// Generate next ID
    pub(crate) fn next_id(&self) -> u64 {
        let mut id = lock(&self.next_id);
        let current = (*id).max(1);
        *id = current + 1;
        current
    }

    /// Consume an injected failure, if one is pending
    pub(crate) fn check_failure(&self) -> Result<(), NetBoxError> {
        match lock(&self.pending_failure).take() {
            Some(message) => Err(NetBoxError::Api(message)),
            None => Ok(()),
        }
    }

    /// Record a write request body
    pub(crate) fn record<B: Serialize>(
        &self,
        method: &'static str,
        path: String,
        body: &B,
    ) -> Result<(), NetBoxError> {
        let body = serde_json::to_value(body)?;
        lock(&self.requests).push(RecordedRequest { method, path, body });
        Ok(())
    }

    /// Get helpers instance
    pub(crate) fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(self.base_url.clone())
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for MockNetBoxClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        self.check_failure()
    }

    // DCIM Operations - delegated to dcim module
    async fn get_site(&self, id: u64) -> Result<Site, NetBoxError> {
        dcim::get_site(self, id).await
    }

    async fn create_site(&self, site: &WritableSite) -> Result<Site, NetBoxError> {
        dcim::create_site(self, site).await
    }

    async fn update_site(&self, id: u64, site: &WritableSite) -> Result<Site, NetBoxError> {
        dcim::update_site(self, id, site).await
    }

    async fn delete_site(&self, id: u64) -> Result<(), NetBoxError> {
        dcim::delete_site(self, id).await
    }

    async fn get_rack(&self, id: u64) -> Result<Rack, NetBoxError> {
        dcim::get_rack(self, id).await
    }

    async fn create_rack(&self, rack: &WritableRack) -> Result<Rack, NetBoxError> {
        dcim::create_rack(self, rack).await
    }

    async fn update_rack(&self, id: u64, rack: &WritableRack) -> Result<Rack, NetBoxError> {
        dcim::update_rack(self, id, rack).await
    }

    async fn delete_rack(&self, id: u64) -> Result<(), NetBoxError> {
        dcim::delete_rack(self, id).await
    }

    async fn get_device(&self, id: u64) -> Result<Device, NetBoxError> {
        dcim::get_device(self, id).await
    }

    async fn create_device(&self, device: &WritableDevice) -> Result<Device, NetBoxError> {
        dcim::create_device(self, device).await
    }

    async fn update_device(&self, id: u64, device: &WritableDevice) -> Result<Device, NetBoxError> {
        dcim::update_device(self, id, device).await
    }

    async fn delete_device(&self, id: u64) -> Result<(), NetBoxError> {
        dcim::delete_device(self, id).await
    }

    async fn get_interface(&self, id: u64) -> Result<Interface, NetBoxError> {
        dcim::get_interface(self, id).await
    }

    async fn create_interface(&self, interface: &WritableInterface) -> Result<Interface, NetBoxError> {
        dcim::create_interface(self, interface).await
    }

    async fn update_interface(&self, id: u64, interface: &WritableInterface) -> Result<Interface, NetBoxError> {
        dcim::update_interface(self, id, interface).await
    }

    async fn delete_interface(&self, id: u64) -> Result<(), NetBoxError> {
        dcim::delete_interface(self, id).await
    }

    async fn get_region(&self, id: u64) -> Result<Region, NetBoxError> {
        dcim::get_region(self, id).await
    }

    async fn create_region(&self, region: &WritableRegion) -> Result<Region, NetBoxError> {
        dcim::create_region(self, region).await
    }

    async fn update_region(&self, id: u64, region: &WritableRegion) -> Result<Region, NetBoxError> {
        dcim::update_region(self, id, region).await
    }

    async fn delete_region(&self, id: u64) -> Result<(), NetBoxError> {
        dcim::delete_region(self, id).await
    }

    // Circuits Operations - delegated to circuits module
    async fn get_circuit(&self, id: u64) -> Result<Circuit, NetBoxError> {
        circuits::get_circuit(self, id).await
    }

    async fn create_circuit(&self, circuit: &WritableCircuit) -> Result<Circuit, NetBoxError> {
        circuits::create_circuit(self, circuit).await
    }

    async fn update_circuit(&self, id: u64, circuit: &WritableCircuit) -> Result<Circuit, NetBoxError> {
        circuits::update_circuit(self, id, circuit).await
    }

    async fn delete_circuit(&self, id: u64) -> Result<(), NetBoxError> {
        circuits::delete_circuit(self, id).await
    }

    async fn get_circuit_provider(&self, id: u64) -> Result<CircuitProvider, NetBoxError> {
        circuits::get_circuit_provider(self, id).await
    }

    async fn create_circuit_provider(&self, provider: &WritableCircuitProvider) -> Result<CircuitProvider, NetBoxError> {
        circuits::create_circuit_provider(self, provider).await
    }

    async fn update_circuit_provider(&self, id: u64, provider: &WritableCircuitProvider) -> Result<CircuitProvider, NetBoxError> {
        circuits::update_circuit_provider(self, id, provider).await
    }

    async fn delete_circuit_provider(&self, id: u64) -> Result<(), NetBoxError> {
        circuits::delete_circuit_provider(self, id).await
    }

    // IPAM Operations - delegated to ipam module
    async fn get_ip_address(&self, id: u64) -> Result<IPAddress, NetBoxError> {
        ipam::get_ip_address(self, id).await
    }

    async fn create_ip_address(&self, address: &WritableIPAddress) -> Result<IPAddress, NetBoxError> {
        ipam::create_ip_address(self, address).await
    }

    async fn update_ip_address(&self, id: u64, address: &WritableIPAddress) -> Result<IPAddress, NetBoxError> {
        ipam::update_ip_address(self, id, address).await
    }

    async fn delete_ip_address(&self, id: u64) -> Result<(), NetBoxError> {
        ipam::delete_ip_address(self, id).await
    }

    async fn get_prefix(&self, id: u64) -> Result<Prefix, NetBoxError> {
        ipam::get_prefix(self, id).await
    }

    async fn query_prefixes(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Prefix>, NetBoxError> {
        ipam::query_prefixes(self, filters, fetch_all).await
    }

    async fn create_prefix(&self, prefix: &WritablePrefix) -> Result<Prefix, NetBoxError> {
        ipam::create_prefix(self, prefix).await
    }

    async fn update_prefix(&self, id: u64, prefix: &WritablePrefix) -> Result<Prefix, NetBoxError> {
        ipam::update_prefix(self, id, prefix).await
    }

    async fn delete_prefix(&self, id: u64) -> Result<(), NetBoxError> {
        ipam::delete_prefix(self, id).await
    }

    async fn get_available_prefixes(&self, prefix_id: u64) -> Result<Vec<AvailablePrefix>, NetBoxError> {
        ipam::get_available_prefixes(self, prefix_id).await
    }

    async fn create_available_prefix(&self, prefix_id: u64, prefix_length: u8) -> Result<Prefix, NetBoxError> {
        ipam::create_available_prefix(self, prefix_id, prefix_length).await
    }

    async fn get_aggregate(&self, id: u64) -> Result<Aggregate, NetBoxError> {
        ipam::get_aggregate(self, id).await
    }

    async fn query_aggregates(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Aggregate>, NetBoxError> {
        ipam::query_aggregates(self, filters, fetch_all).await
    }

    async fn create_aggregate(&self, aggregate: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        ipam::create_aggregate(self, aggregate).await
    }

    async fn update_aggregate(&self, id: u64, aggregate: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        ipam::update_aggregate(self, id, aggregate).await
    }

    async fn delete_aggregate(&self, id: u64) -> Result<(), NetBoxError> {
        ipam::delete_aggregate(self, id).await
    }

    async fn get_vrf(&self, id: u64) -> Result<Vrf, NetBoxError> {
        ipam::get_vrf(self, id).await
    }

    async fn create_vrf(&self, vrf: &WritableVrf) -> Result<Vrf, NetBoxError> {
        ipam::create_vrf(self, vrf).await
    }

    async fn update_vrf(&self, id: u64, vrf: &WritableVrf) -> Result<Vrf, NetBoxError> {
        ipam::update_vrf(self, id, vrf).await
    }

    async fn delete_vrf(&self, id: u64) -> Result<(), NetBoxError> {
        ipam::delete_vrf(self, id).await
    }

    async fn get_vlan(&self, id: u64) -> Result<Vlan, NetBoxError> {
        ipam::get_vlan(self, id).await
    }

    async fn create_vlan(&self, vlan: &WritableVlan) -> Result<Vlan, NetBoxError> {
        ipam::create_vlan(self, vlan).await
    }

    async fn update_vlan(&self, id: u64, vlan: &WritableVlan) -> Result<Vlan, NetBoxError> {
        ipam::update_vlan(self, id, vlan).await
    }

    async fn delete_vlan(&self, id: u64) -> Result<(), NetBoxError> {
        ipam::delete_vlan(self, id).await
    }

    async fn get_rir(&self, id: u64) -> Result<Rir, NetBoxError> {
        ipam::get_rir(self, id).await
    }

    async fn create_rir(&self, rir: &WritableRir) -> Result<Rir, NetBoxError> {
        ipam::create_rir(self, rir).await
    }

    async fn update_rir(&self, id: u64, rir: &WritableRir) -> Result<Rir, NetBoxError> {
        ipam::update_rir(self, id, rir).await
    }

    async fn delete_rir(&self, id: u64) -> Result<(), NetBoxError> {
        ipam::delete_rir(self, id).await
    }

    // Tenancy Operations - delegated to tenancy module
    async fn get_tenant(&self, id: u64) -> Result<Tenant, NetBoxError> {
        tenancy::get_tenant(self, id).await
    }

    async fn create_tenant(&self, tenant: &WritableTenant) -> Result<Tenant, NetBoxError> {
        tenancy::create_tenant(self, tenant).await
    }

    async fn update_tenant(&self, id: u64, tenant: &WritableTenant) -> Result<Tenant, NetBoxError> {
        tenancy::update_tenant(self, id, tenant).await
    }

    async fn delete_tenant(&self, id: u64) -> Result<(), NetBoxError> {
        tenancy::delete_tenant(self, id).await
    }

    // Extras Operations - delegated to extras module
    async fn get_tag(&self, id: u64) -> Result<Tag, NetBoxError> {
        extras::get_tag(self, id).await
    }

    async fn create_tag(&self, tag: &WritableTag) -> Result<Tag, NetBoxError> {
        extras::create_tag(self, tag).await
    }

    async fn update_tag(&self, id: u64, tag: &WritableTag) -> Result<Tag, NetBoxError> {
        extras::update_tag(self, id, tag).await
    }

    async fn delete_tag(&self, id: u64) -> Result<(), NetBoxError> {
        extras::delete_tag(self, id).await
    }
}
