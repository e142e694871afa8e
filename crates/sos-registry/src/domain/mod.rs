//! # Domain Layer (Inner Hexagon)
//!
//! Pure state-transition logic for the SOS registry.
//! NO I/O, NO async, NO external dependencies beyond serde derives.
//!
//! - All types here are pure domain concepts.
//! - Dependencies point INWARD only (adapters depend on this, not vice versa).

pub mod entities;
pub mod invariants;
pub mod transitions;
pub mod value_objects;

pub use entities::*;
pub use invariants::*;
pub use transitions::*;
pub use value_objects::*;
