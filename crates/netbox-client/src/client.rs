//! NetBox API client
//!
//! Implements the NetBox REST API client for the DCIM, IPAM, circuits,
//! tenancy and extras sections used by the provider.
//! Paths are relative to the API base URL, e.g. `/ipam/prefixes/`.

use crate::common::HttpClient;
use crate::common::query::query_resources;
use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Request timeout applied by the transport
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// NetBox API client
#[derive(Debug, Clone)]
pub struct NetBoxClient {
    http: HttpClient,
}

impl NetBoxClient {
    /// Create a new NetBox client
    ///
    /// # Arguments
    /// * `base_url` - NetBox API base URL (e.g., "https://netbox.example.com/api")
    /// * `token` - API token; no `Authorization` header is sent when `None`
    pub fn new(base_url: String, token: Option<String>) -> Result<Self, NetBoxError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(NetBoxError::Http)?;

        Ok(Self {
            http: HttpClient::new(client, base_url, token),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Validate connectivity and the API token against the status endpoint.
    ///
    /// # Returns
    /// * `Ok(())` - NetBox is reachable and accepted the token
    /// * `Err(NetBoxError)` - Token is invalid or NetBox is unreachable
    pub async fn validate_token(&self) -> Result<(), NetBoxError> {
        debug!("Validating NetBox token and connectivity");
        let _: serde_json::Value = self.http.get("/status/").await?;
        debug!("Token validated successfully");
        Ok(())
    }

    // DCIM: sites

    /// Get site by ID
    pub async fn get_site(&self, id: u64) -> Result<Site, NetBoxError> {
        self.http.get(&format!("/dcim/sites/{}/", id)).await
    }

    /// Create a new site
    pub async fn create_site(&self, site: &WritableSite) -> Result<Site, NetBoxError> {
        debug!("Creating site {:?} in NetBox", site.name);
        self.http.post("/dcim/sites/", site).await
    }

    /// Patch an existing site
    pub async fn update_site(&self, id: u64, site: &WritableSite) -> Result<Site, NetBoxError> {
        self.http.patch(&format!("/dcim/sites/{}/", id), site).await
    }

    /// Delete a site
    pub async fn delete_site(&self, id: u64) -> Result<(), NetBoxError> {
        self.http.delete(&format!("/dcim/sites/{}/", id)).await
    }

    // DCIM: racks

    /// Get rack by ID
    pub async fn get_rack(&self, id: u64) -> Result<Rack, NetBoxError> {
        self.http.get(&format!("/dcim/racks/{}/", id)).await
    }

    /// Create a new rack
    pub async fn create_rack(&self, rack: &WritableRack) -> Result<Rack, NetBoxError> {
        debug!("Creating rack {:?} in NetBox", rack.name);
        self.http.post("/dcim/racks/", rack).await
    }

    /// Patch an existing rack
    pub async fn update_rack(&self, id: u64, rack: &WritableRack) -> Result<Rack, NetBoxError> {
        self.http.patch(&format!("/dcim/racks/{}/", id), rack).await
    }

    /// Delete a rack
    pub async fn delete_rack(&self, id: u64) -> Result<(), NetBoxError> {
        self.http.delete(&format!("/dcim/racks/{}/", id)).await
    }

    // DCIM: devices

    /// Get device by ID
    pub async fn get_device(&self, id: u64) -> Result<Device, NetBoxError> {
        self.http.get(&format!("/dcim/devices/{}/", id)).await
    }

    /// Create a new device
    pub async fn create_device(&self, device: &WritableDevice) -> Result<Device, NetBoxError> {
        debug!("Creating device {:?} in NetBox", device.name);
        self.http.post("/dcim/devices/", device).await
    }

    /// Patch an existing device
    pub async fn update_device(
        &self,
        id: u64,
        device: &WritableDevice,
    ) -> Result<Device, NetBoxError> {
        self.http.patch(&format!("/dcim/devices/{}/", id), device).await
    }

    /// Delete a device
    pub async fn delete_device(&self, id: u64) -> Result<(), NetBoxError> {
        self.http.delete(&format!("/dcim/devices/{}/", id)).await
    }

    // DCIM: interfaces

    /// Get interface by ID
    pub async fn get_interface(&self, id: u64) -> Result<Interface, NetBoxError> {
        self.http.get(&format!("/dcim/interfaces/{}/", id)).await
    }

    /// Create a new interface on a device
    pub async fn create_interface(
        &self,
        interface: &WritableInterface,
    ) -> Result<Interface, NetBoxError> {
        debug!(
            "Creating interface {:?} on device {:?} in NetBox",
            interface.name, interface.device
        );
        self.http.post("/dcim/interfaces/", interface).await
    }

    /// Patch an existing interface
    pub async fn update_interface(
        &self,
        id: u64,
        interface: &WritableInterface,
    ) -> Result<Interface, NetBoxError> {
        self.http
            .patch(&format!("/dcim/interfaces/{}/", id), interface)
            .await
    }

    /// Delete an interface
    pub async fn delete_interface(&self, id: u64) -> Result<(), NetBoxError> {
        self.http.delete(&format!("/dcim/interfaces/{}/", id)).await
    }

    // DCIM: regions

    /// Get region by ID
    pub async fn get_region(&self, id: u64) -> Result<Region, NetBoxError> {
        self.http.get(&format!("/dcim/regions/{}/", id)).await
    }

    /// Create a new region
    pub async fn create_region(&self, region: &WritableRegion) -> Result<Region, NetBoxError> {
        debug!("Creating region {:?} in NetBox", region.name);
        self.http.post("/dcim/regions/", region).await
    }

    /// Patch an existing region
    pub async fn update_region(
        &self,
        id: u64,
        region: &WritableRegion,
    ) -> Result<Region, NetBoxError> {
        self.http.patch(&format!("/dcim/regions/{}/", id), region).await
    }

    /// Delete a region
    pub async fn delete_region(&self, id: u64) -> Result<(), NetBoxError> {
        self.http.delete(&format!("/dcim/regions/{}/", id)).await
    }

    // Circuits

    /// Get circuit by ID
    pub async fn get_circuit(&self, id: u64) -> Result<Circuit, NetBoxError> {
        self.http.get(&format!("/circuits/circuits/{}/", id)).await
    }

    /// Create a new circuit
    pub async fn create_circuit(&self, circuit: &WritableCircuit) -> Result<Circuit, NetBoxError> {
        debug!("Creating circuit {:?} in NetBox", circuit.cid);
        self.http.post("/circuits/circuits/", circuit).await
    }

    /// Patch an existing circuit
    pub async fn update_circuit(
        &self,
        id: u64,
        circuit: &WritableCircuit,
    ) -> Result<Circuit, NetBoxError> {
        self.http
            .patch(&format!("/circuits/circuits/{}/", id), circuit)
            .await
    }

    /// Delete a circuit
    pub async fn delete_circuit(&self, id: u64) -> Result<(), NetBoxError> {
        self.http.delete(&format!("/circuits/circuits/{}/", id)).await
    }

    /// Get circuit provider by ID
    pub async fn get_circuit_provider(&self, id: u64) -> Result<CircuitProvider, NetBoxError> {
        self.http.get(&format!("/circuits/providers/{}/", id)).await
    }

    /// Create a new circuit provider
    pub async fn create_circuit_provider(
        &self,
        provider: &WritableCircuitProvider,
    ) -> Result<CircuitProvider, NetBoxError> {
        debug!("Creating circuit provider {:?} in NetBox", provider.name);
        self.http.post("/circuits/providers/", provider).await
    }

    /// Patch an existing circuit provider
    pub async fn update_circuit_provider(
        &self,
        id: u64,
        provider: &WritableCircuitProvider,
    ) -> Result<CircuitProvider, NetBoxError> {
        self.http
            .patch(&format!("/circuits/providers/{}/", id), provider)
            .await
    }

    /// Delete a circuit provider
    pub async fn delete_circuit_provider(&self, id: u64) -> Result<(), NetBoxError> {
        self.http.delete(&format!("/circuits/providers/{}/", id)).await
    }

    // IPAM: IP addresses

    /// Get IP address by ID
    pub async fn get_ip_address(&self, id: u64) -> Result<IPAddress, NetBoxError> {
        self.http.get(&format!("/ipam/ip-addresses/{}/", id)).await
    }

    /// Create a new IP address
    pub async fn create_ip_address(
        &self,
        address: &WritableIPAddress,
    ) -> Result<IPAddress, NetBoxError> {
        debug!("Creating IP address {:?} in NetBox", address.address);
        self.http.post("/ipam/ip-addresses/", address).await
    }

    /// Patch an existing IP address
    pub async fn update_ip_address(
        &self,
        id: u64,
        address: &WritableIPAddress,
    ) -> Result<IPAddress, NetBoxError> {
        self.http
            .patch(&format!("/ipam/ip-addresses/{}/", id), address)
            .await
    }

    /// Delete an IP address
    pub async fn delete_ip_address(&self, id: u64) -> Result<(), NetBoxError> {
        self.http.delete(&format!("/ipam/ip-addresses/{}/", id)).await
    }

    // IPAM: prefixes

    /// Get prefix by ID
    pub async fn get_prefix(&self, id: u64) -> Result<Prefix, NetBoxError> {
        self.http.get(&format!("/ipam/prefixes/{}/", id)).await
    }

    /// Query prefixes with filters
    ///
    /// # Arguments
    /// * `filters` - Query parameters (e.g., `[("status", "active"), ("family", "4")]`)
    /// * `fetch_all` - Follow `next` links until every page was read
    pub async fn query_prefixes(
        &self,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<Prefix>, NetBoxError> {
        query_resources(&self.http, "ipam/prefixes", filters, fetch_all).await
    }

    /// Create a new prefix
    pub async fn create_prefix(&self, prefix: &WritablePrefix) -> Result<Prefix, NetBoxError> {
        debug!("Creating prefix {:?} in NetBox", prefix.prefix);
        self.http.post("/ipam/prefixes/", prefix).await
    }

    /// Patch an existing prefix
    pub async fn update_prefix(
        &self,
        id: u64,
        prefix: &WritablePrefix,
    ) -> Result<Prefix, NetBoxError> {
        self.http.patch(&format!("/ipam/prefixes/{}/", id), prefix).await
    }

    /// Delete a prefix
    pub async fn delete_prefix(&self, id: u64) -> Result<(), NetBoxError> {
        self.http.delete(&format!("/ipam/prefixes/{}/", id)).await
    }

    /// List the unallocated child ranges of a prefix
    pub async fn get_available_prefixes(
        &self,
        prefix_id: u64,
    ) -> Result<Vec<AvailablePrefix>, NetBoxError> {
        self.http
            .get(&format!("/ipam/prefixes/{}/available-prefixes/", prefix_id))
            .await
    }

    /// Allocate the first free child prefix of the given length
    ///
    /// NetBox answers with either a single prefix or a one-element list,
    /// depending on the version; both shapes are accepted.
    pub async fn create_available_prefix(
        &self,
        prefix_id: u64,
        prefix_length: u8,
    ) -> Result<Prefix, NetBoxError> {
        debug!(
            "Allocating /{} from prefix {} in NetBox",
            prefix_length, prefix_id
        );
        let path = format!("/ipam/prefixes/{}/available-prefixes/", prefix_id);
        let value: serde_json::Value = self
            .http
            .post(&path, &AvailablePrefixRequest { prefix_length })
            .await?;

        let created = match value {
            serde_json::Value::Array(mut items) => {
                if items.is_empty() {
                    return Err(NetBoxError::Api(format!(
                        "No available /{} prefix in prefix {}",
                        prefix_length, prefix_id
                    )));
                }
                items.swap_remove(0)
            }
            other => other,
        };

        Ok(serde_json::from_value(created)?)
    }

    // IPAM: aggregates

    /// Get aggregate by ID
    pub async fn get_aggregate(&self, id: u64) -> Result<Aggregate, NetBoxError> {
        self.http.get(&format!("/ipam/aggregates/{}/", id)).await
    }

    /// Query aggregates with filters
    pub async fn query_aggregates(
        &self,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<Aggregate>, NetBoxError> {
        query_resources(&self.http, "ipam/aggregates", filters, fetch_all).await
    }

    /// Create a new aggregate
    pub async fn create_aggregate(
        &self,
        aggregate: &WritableAggregate,
    ) -> Result<Aggregate, NetBoxError> {
        debug!("Creating aggregate {:?} in NetBox", aggregate.prefix);
        self.http.post("/ipam/aggregates/", aggregate).await
    }

    /// Patch an existing aggregate
    pub async fn update_aggregate(
        &self,
        id: u64,
        aggregate: &WritableAggregate,
    ) -> Result<Aggregate, NetBoxError> {
        self.http
            .patch(&format!("/ipam/aggregates/{}/", id), aggregate)
            .await
    }

    /// Delete an aggregate
    pub async fn delete_aggregate(&self, id: u64) -> Result<(), NetBoxError> {
        self.http.delete(&format!("/ipam/aggregates/{}/", id)).await
    }

    // IPAM: VRFs

    /// Get VRF by ID
    pub async fn get_vrf(&self, id: u64) -> Result<Vrf, NetBoxError> {
        self.http.get(&format!("/ipam/vrfs/{}/", id)).await
    }

    /// Create a new VRF
    pub async fn create_vrf(&self, vrf: &WritableVrf) -> Result<Vrf, NetBoxError> {
        debug!("Creating VRF {:?} in NetBox", vrf.name);
        self.http.post("/ipam/vrfs/", vrf).await
    }

    /// Patch an existing VRF
    pub async fn update_vrf(&self, id: u64, vrf: &WritableVrf) -> Result<Vrf, NetBoxError> {
        self.http.patch(&format!("/ipam/vrfs/{}/", id), vrf).await
    }

    /// Delete a VRF
    pub async fn delete_vrf(&self, id: u64) -> Result<(), NetBoxError> {
        self.http.delete(&format!("/ipam/vrfs/{}/", id)).await
    }

    // IPAM: VLANs

    /// Get VLAN by ID
    pub async fn get_vlan(&self, id: u64) -> Result<Vlan, NetBoxError> {
        self.http.get(&format!("/ipam/vlans/{}/", id)).await
    }

    /// Create a new VLAN
    pub async fn create_vlan(&self, vlan: &WritableVlan) -> Result<Vlan, NetBoxError> {
        debug!("Creating VLAN {:?} (vid {:?}) in NetBox", vlan.name, vlan.vid);
        self.http.post("/ipam/vlans/", vlan).await
    }

    /// Patch an existing VLAN
    pub async fn update_vlan(&self, id: u64, vlan: &WritableVlan) -> Result<Vlan, NetBoxError> {
        self.http.patch(&format!("/ipam/vlans/{}/", id), vlan).await
    }

    /// Delete a VLAN
    pub async fn delete_vlan(&self, id: u64) -> Result<(), NetBoxError> {
        self.http.delete(&format!("/ipam/vlans/{}/", id)).await
    }

    // IPAM: RIRs

    /// Get RIR by ID
    pub async fn get_rir(&self, id: u64) -> Result<Rir, NetBoxError> {
        self.http.get(&format!("/ipam/rirs/{}/", id)).await
    }

    /// Create a new RIR
    pub async fn create_rir(&self, rir: &WritableRir) -> Result<Rir, NetBoxError> {
        debug!("Creating RIR {:?} in NetBox", rir.name);
        self.http.post("/ipam/rirs/", rir).await
    }

    /// Patch an existing RIR
    pub async fn update_rir(&self, id: u64, rir: &WritableRir) -> Result<Rir, NetBoxError> {
        self.http.patch(&format!("/ipam/rirs/{}/", id), rir).await
    }

    /// Delete a RIR
    pub async fn delete_rir(&self, id: u64) -> Result<(), NetBoxError> {
        self.http.delete(&format!("/ipam/rirs/{}/", id)).await
    }

    // Tenancy

    /// Get tenant by ID
    pub async fn get_tenant(&self, id: u64) -> Result<Tenant, NetBoxError> {
        self.http.get(&format!("/tenancy/tenants/{}/", id)).await
    }

    /// Create a new tenant
    pub async fn create_tenant(&self, tenant: &WritableTenant) -> Result<Tenant, NetBoxError> {
        debug!("Creating tenant {:?} in NetBox", tenant.name);
        self.http.post("/tenancy/tenants/", tenant).await
    }

    /// Patch an existing tenant
    pub async fn update_tenant(
        &self,
        id: u64,
        tenant: &WritableTenant,
    ) -> Result<Tenant, NetBoxError> {
        self.http
            .patch(&format!("/tenancy/tenants/{}/", id), tenant)
            .await
    }

    /// Delete a tenant
    pub async fn delete_tenant(&self, id: u64) -> Result<(), NetBoxError> {
        self.http.delete(&format!("/tenancy/tenants/{}/", id)).await
    }

    // Extras

    /// Get tag by ID
    pub async fn get_tag(&self, id: u64) -> Result<Tag, NetBoxError> {
        self.http.get(&format!("/extras/tags/{}/", id)).await
    }

    /// Create a new tag
    pub async fn create_tag(&self, tag: &WritableTag) -> Result<Tag, NetBoxError> {
        debug!("Creating tag {:?} in NetBox", tag.name);
        self.http.post("/extras/tags/", tag).await
    }

    /// Patch an existing tag
    pub async fn update_tag(&self, id: u64, tag: &WritableTag) -> Result<Tag, NetBoxError> {
        self.http.patch(&format!("/extras/tags/{}/", id), tag).await
    }

    /// Delete a tag
    pub async fn delete_tag(&self, id: u64) -> Result<(), NetBoxError> {
        self.http.delete(&format!("/extras/tags/{}/", id)).await
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for NetBoxClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        self.validate_token().await
    }

    // DCIM Operations
    async fn get_site(&self, id: u64) -> Result<Site, NetBoxError> {
        self.get_site(id).await
    }

    async fn create_site(&self, site: &WritableSite) -> Result<Site, NetBoxError> {
        self.create_site(site).await
    }

    async fn update_site(&self, id: u64, site: &WritableSite) -> Result<Site, NetBoxError> {
        self.update_site(id, site).await
    }

    async fn delete_site(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_site(id).await
    }

    async fn get_rack(&self, id: u64) -> Result<Rack, NetBoxError> {
        self.get_rack(id).await
    }

    async fn create_rack(&self, rack: &WritableRack) -> Result<Rack, NetBoxError> {
        self.create_rack(rack).await
    }

    async fn update_rack(&self, id: u64, rack: &WritableRack) -> Result<Rack, NetBoxError> {
        self.update_rack(id, rack).await
    }

    async fn delete_rack(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_rack(id).await
    }

    async fn get_device(&self, id: u64) -> Result<Device, NetBoxError> {
        self.get_device(id).await
    }

    async fn create_device(&self, device: &WritableDevice) -> Result<Device, NetBoxError> {
        self.create_device(device).await
    }

    async fn update_device(&self, id: u64, device: &WritableDevice) -> Result<Device, NetBoxError> {
        self.update_device(id, device).await
    }

    async fn delete_device(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_device(id).await
    }

    async fn get_interface(&self, id: u64) -> Result<Interface, NetBoxError> {
        self.get_interface(id).await
    }

    async fn create_interface(&self, interface: &WritableInterface) -> Result<Interface, NetBoxError> {
        self.create_interface(interface).await
    }

    async fn update_interface(&self, id: u64, interface: &WritableInterface) -> Result<Interface, NetBoxError> {
        self.update_interface(id, interface).await
    }

    async fn delete_interface(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_interface(id).await
    }

    async fn get_region(&self, id: u64) -> Result<Region, NetBoxError> {
        self.get_region(id).await
    }

    async fn create_region(&self, region: &WritableRegion) -> Result<Region, NetBoxError> {
        self.create_region(region).await
    }

    async fn update_region(&self, id: u64, region: &WritableRegion) -> Result<Region, NetBoxError> {
        self.update_region(id, region).await
    }

    async fn delete_region(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_region(id).await
    }

    // Circuits Operations
    async fn get_circuit(&self, id: u64) -> Result<Circuit, NetBoxError> {
        self.get_circuit(id).await
    }

    async fn create_circuit(&self, circuit: &WritableCircuit) -> Result<Circuit, NetBoxError> {
        self.create_circuit(circuit).await
    }

    async fn update_circuit(&self, id: u64, circuit: &WritableCircuit) -> Result<Circuit, NetBoxError> {
        self.update_circuit(id, circuit).await
    }

    async fn delete_circuit(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_circuit(id).await
    }

    async fn get_circuit_provider(&self, id: u64) -> Result<CircuitProvider, NetBoxError> {
        self.get_circuit_provider(id).await
    }

    async fn create_circuit_provider(&self, provider: &WritableCircuitProvider) -> Result<CircuitProvider, NetBoxError> {
        self.create_circuit_provider(provider).await
    }

    async fn update_circuit_provider(&self, id: u64, provider: &WritableCircuitProvider) -> Result<CircuitProvider, NetBoxError> {
        self.update_circuit_provider(id, provider).await
    }

    async fn delete_circuit_provider(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_circuit_provider(id).await
    }

    // IPAM Operations
    async fn get_ip_address(&self, id: u64) -> Result<IPAddress, NetBoxError> {
        self.get_ip_address(id).await
    }

    async fn create_ip_address(&self, address: &WritableIPAddress) -> Result<IPAddress, NetBoxError> {
        self.create_ip_address(address).await
    }

    async fn update_ip_address(&self, id: u64, address: &WritableIPAddress) -> Result<IPAddress, NetBoxError> {
        self.update_ip_address(id, address).await
    }

    async fn delete_ip_address(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_ip_address(id).await
    }

    async fn get_prefix(&self, id: u64) -> Result<Prefix, NetBoxError> {
        self.get_prefix(id).await
    }

    async fn query_prefixes(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Prefix>, NetBoxError> {
        self.query_prefixes(filters, fetch_all).await
    }

    async fn create_prefix(&self, prefix: &WritablePrefix) -> Result<Prefix, NetBoxError> {
        self.create_prefix(prefix).await
    }

    async fn update_prefix(&self, id: u64, prefix: &WritablePrefix) -> Result<Prefix, NetBoxError> {
        self.update_prefix(id, prefix).await
    }

    async fn delete_prefix(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_prefix(id).await
    }

    async fn get_available_prefixes(&self, prefix_id: u64) -> Result<Vec<AvailablePrefix>, NetBoxError> {
        self.get_available_prefixes(prefix_id).await
    }

    async fn create_available_prefix(&self, prefix_id: u64, prefix_length: u8) -> Result<Prefix, NetBoxError> {
        self.create_available_prefix(prefix_id, prefix_length).await
    }

    async fn get_aggregate(&self, id: u64) -> Result<Aggregate, NetBoxError> {
        self.get_aggregate(id).await
    }

    async fn query_aggregates(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Aggregate>, NetBoxError> {
        self.query_aggregates(filters, fetch_all).await
    }

    async fn create_aggregate(&self, aggregate: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        self.create_aggregate(aggregate).await
    }

    async fn update_aggregate(&self, id: u64, aggregate: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        self.update_aggregate(id, aggregate).await
    }

    async fn delete_aggregate(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_aggregate(id).await
    }

    async fn get_vrf(&self, id: u64) -> Result<Vrf, NetBoxError> {
        self.get_vrf(id).await
    }

    async fn create_vrf(&self, vrf: &WritableVrf) -> Result<Vrf, NetBoxError> {
        self.create_vrf(vrf).await
    }

    async fn update_vrf(&self, id: u64, vrf: &WritableVrf) -> Result<Vrf, NetBoxError> {
        self.update_vrf(id, vrf).await
    }

    async fn delete_vrf(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_vrf(id).await
    }

    async fn get_vlan(&self, id: u64) -> Result<Vlan, NetBoxError> {
        self.get_vlan(id).await
    }

    async fn create_vlan(&self, vlan: &WritableVlan) -> Result<Vlan, NetBoxError> {
        self.create_vlan(vlan).await
    }

    async fn update_vlan(&self, id: u64, vlan: &WritableVlan) -> Result<Vlan, NetBoxError> {
        self.update_vlan(id, vlan).await
    }

    async fn delete_vlan(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_vlan(id).await
    }

    async fn get_rir(&self, id: u64) -> Result<Rir, NetBoxError> {
        self.get_rir(id).await
    }

    async fn create_rir(&self, rir: &WritableRir) -> Result<Rir, NetBoxError> {
        self.create_rir(rir).await
    }

    async fn update_rir(&self, id: u64, rir: &WritableRir) -> Result<Rir, NetBoxError> {
        self.update_rir(id, rir).await
    }

    async fn delete_rir(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_rir(id).await
    }

    // Tenancy Operations
    async fn get_tenant(&self, id: u64) -> Result<Tenant, NetBoxError> {
        self.get_tenant(id).await
    }

    async fn create_tenant(&self, tenant: &WritableTenant) -> Result<Tenant, NetBoxError> {
        self.create_tenant(tenant).await
    }

    async fn update_tenant(&self, id: u64, tenant: &WritableTenant) -> Result<Tenant, NetBoxError> {
        self.update_tenant(id, tenant).await
    }

    async fn delete_tenant(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_tenant(id).await
    }

    // Extras Operations
    async fn get_tag(&self, id: u64) -> Result<Tag, NetBoxError> {
        self.get_tag(id).await
    }

    async fn create_tag(&self, tag: &WritableTag) -> Result<Tag, NetBoxError> {
        self.create_tag(tag).await
    }

    async fn update_tag(&self, id: u64, tag: &WritableTag) -> Result<Tag, NetBoxError> {
        self.update_tag(id, tag).await
    }

    async fn delete_tag(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_tag(id).await
    }
}
