//! Circuits resources
//!
//! Handles: circuits, circuit providers

pub mod circuit;
pub mod provider;

pub use circuit::CircuitResource;
pub use provider::CircuitProviderResource;
