//! # Error Types
//!
//! The registry knows two failure kinds: a transaction whose shape does not
//! match any known action (or the matched action's exact argument count),
//! and a local-state access for an account that has no local state. Both
//! reject the transaction outright with no partial mutation; the ledger
//! runtime surfaces the rejection to the submitter, and retries are the
//! submitter's responsibility.

use crate::domain::value_objects::{Action, Address};
use thiserror::Error;

// =============================================================================
// STATE ERRORS
// =============================================================================

/// Errors from state-store access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Local state touched for an account that never opted in or already
    /// cleared.
    #[error("no local state for account {0}")]
    MissingLocalState(Address),

    /// Opt-in for an account that already holds local state. The existing
    /// counters are left untouched.
    #[error("account {0} already opted in")]
    AlreadyOptedIn(Address),
}

// =============================================================================
// TRANSITION ERRORS
// =============================================================================

/// Errors that reject a dispatched transaction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// Argument count does not match the matched action's exact count.
    #[error("argument count mismatch for {action}: expected {expected}, got {actual}")]
    ShapeViolation {
        /// The routed action.
        action: Action,
        /// The exact count the action requires.
        expected: usize,
        /// The count the transaction carried.
        actual: usize,
    },

    /// `args[0]` matched none of the known dispatch strings.
    #[error("unknown action")]
    UnknownAction,

    /// Local-state access failed.
    #[error(transparent)]
    State(#[from] StateError),
}

impl TransitionError {
    /// Returns true for shape violations (bad argument count or unknown
    /// action), as opposed to missing-local-state failures.
    #[must_use]
    pub fn is_shape_violation(&self) -> bool {
        matches!(self, Self::ShapeViolation { .. } | Self::UnknownAction)
    }
}

// =============================================================================
// TESTS
// =============================================================================
