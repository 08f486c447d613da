//! DCIM resources
//!
//! Handles: sites, racks, devices, interfaces, regions

pub mod device;
pub mod interface;
pub mod rack;
pub mod region;
pub mod site;

pub use device::DeviceResource;
pub use interface::InterfaceResource;
pub use rack::RackResource;
pub use region::RegionResource;
pub use site::SiteResource;

#[cfg(test)]
mod dcim_test;
