//! # Event Schema
//!
//! IPC payloads for the registry boundary. The ledger runtime wraps these
//! in its authenticated envelope for transport; correlation ids pair each
//! request with its response. The core itself emits no ledger events — the
//! binary Approve/Reject outcome travels in the response payload.

use crate::domain::value_objects::{Action, Address, OnCompletion};
use crate::errors::TransitionError;
use serde::{Deserialize, Serialize};

/// Event-bus topics for the registry boundary.
pub mod topics {
    /// Transaction submission requests.
    pub const SUBMIT_TRANSACTION_REQUEST: &str = "sos_registry.submit_transaction.request";
    /// Transaction submission responses.
    pub const SUBMIT_TRANSACTION_RESPONSE: &str = "sos_registry.submit_transaction.response";
}

/// Request to validate and apply one transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitTransactionRequestPayload {
    /// Target application id; 0 means contract creation.
    pub app_id: u64,
    /// Ledger-runtime completion flag.
    pub on_completion: OnCompletion,
    /// Transaction sender account.
    pub sender: Address,
    /// Ordered application arguments (opaque byte-strings).
    pub args: Vec<Vec<u8>>,
}

/// Outcome of one submitted transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitTransactionResponsePayload {
    /// Binary outcome: true = Approve, false = Reject.
    pub approved: bool,
    /// The routed action, when routing succeeded.
    pub action: Option<Action>,
    /// Human-readable reject reason (absent on approval).
    pub reject_reason: Option<String>,
}

impl SubmitTransactionResponsePayload {
    /// Approval response for `action`.
    #[must_use]
    pub fn approved(action: Action) -> Self {
        Self {
            approved: true,
            action: Some(action),
            reject_reason: None,
        }
    }

    /// Rejection response carrying the transition error.
    #[must_use]
    pub fn rejected(error: &TransitionError) -> Self {
        let action = match error {
            TransitionError::ShapeViolation { action, .. } => Some(*action),
            _ => None,
        };
        Self {
            approved: false,
            action,
            reject_reason: Some(error.to_string()),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
