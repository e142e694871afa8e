//! Cross-module integration flows for the SOS registry.

pub mod registry_flows;
pub mod rejection_paths;
