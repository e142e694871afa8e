//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for the SOS registry.
//! These are the interfaces between the domain and the outside world.
//!
//! - **Driving Ports (Inbound)**: `SosRegistryApi`
//! - **Driven Ports (Outbound)**: `StateStore`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
