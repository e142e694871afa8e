//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete implementations of the driven ports.

pub mod memory_state;

pub use memory_state::InMemoryStateStore;
