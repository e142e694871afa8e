//! # SOS Registry - Emergency-Alert State Transitions
//!
//! ## Purpose
//!
//! On-chain state-transition logic for an emergency-alert ("SOS") registry:
//! records alert submissions, tracks per-account participation, and books
//! reward-token credits to responders, as deterministic mutations of a
//! shared ledger state keyed by account. Network submission, wallet
//! signing, IPFS media storage, credential issuance, and consensus are the
//! surrounding runtime's responsibility; this crate references them only by
//! opaque identifier and never interprets them.
//!
//! ## Actions
//!
//! | Routing rule (first match wins) | Action | Exact args |
//! |---------------------------------|--------|------------|
//! | `app_id == 0` | `Initialize` | 0 |
//! | `on_completion == OptIn` | `OptIn` | — |
//! | `on_completion == ClearState` | `ClearState` | — |
//! | `args[0] == "register_sos"` | `RegisterAlert` | 4 |
//! | `args[0] == "reward_responder"` | `RewardResponder` | 2 |
//! | `args[0] == "verify_responder"` | `VerifyResponder` | 2 |
//! | anything else | Reject | — |
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Alert conservation | `domain/invariants.rs` - `check_alert_conservation()` |
//! | INVARIANT-2 | Monotonic global counters | `domain/invariants.rs` - `check_monotonic_globals()` |
//! | INVARIANT-3 | Reputation untouched | `domain/invariants.rs` - `check_reputation_untouched()` |
//!
//! ## Usage Example
//!
//! ```ignore
//! use sos_registry::prelude::*;
//!
//! let service = create_test_service();
//! let response = service.submit_transaction(correlation_id, payload).await;
//! if response.approved {
//!     println!("applied: {:?}", response.action);
//! }
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{GlobalCounters, LocalAccount, Transaction, TransitionReceipt};

    // Value objects
    pub use crate::domain::value_objects::{Action, Address, GlobalKey, LocalKey, OnCompletion};

    // Transitions
    pub use crate::domain::transitions::{dispatch, route};

    // Invariants
    pub use crate::domain::invariants::{
        check_all_invariants, InvariantCheckResult, InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::SosRegistryApi;
    pub use crate::ports::outbound::StateStore;

    // Events
    pub use crate::events::{
        topics, SubmitTransactionRequestPayload, SubmitTransactionResponsePayload,
    };

    // Errors
    pub use crate::errors::{StateError, TransitionError};

    // Adapters
    pub use crate::adapters::InMemoryStateStore;

    // Service
    pub use crate::service::{create_test_service, ServiceConfig, ServiceStats, SosRegistryService};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "SOS Registry";

// =============================================================================
// TESTS
// =============================================================================
