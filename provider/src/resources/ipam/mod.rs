//! IPAM (IP Address Management) resources
//!
//! Handles: prefixes, available prefixes, aggregates, IP addresses, VRFs, VLANs, RIRs

pub mod aggregate;
pub mod available_prefix;
pub mod ip_address;
pub mod prefix;
pub mod rir;
pub mod vlan;
pub mod vrf;

pub use aggregate::AggregateResource;
pub use available_prefix::AvailablePrefixResource;
pub use ip_address::IpAddressResource;
pub use prefix::PrefixResource;
pub use rir::RirResource;
pub use vlan::VlanResource;
pub use vrf::VrfResource;

#[cfg(test)]
mod ipam_test;
