//! # SOS Registry Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/          # Cross-module flows against the service API
//!     ├── registry_flows.rs     # End-to-end counting scenarios
//!     └── rejection_paths.rs    # All-or-nothing rejection behavior
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p sos-tests
//!
//! # By category
//! cargo test -p sos-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
