//! # Core Domain Entities
//!
//! The incoming transaction record, the receipt produced by an approved
//! transition, and read-only snapshots of the two state namespaces.

use crate::domain::value_objects::{Address, Action, GlobalKey, LocalKey, OnCompletion};
use crate::errors::StateError;
use crate::ports::outbound::StateStore;
use serde::{Deserialize, Serialize};

// =============================================================================
// TRANSACTION
// =============================================================================

/// An incoming application-call transaction, as handed over by the ledger
/// runtime after signature verification and fee handling (both out of scope
/// here).
///
/// `args` are opaque byte-strings; the core matches `args[0]` against the
/// known dispatch strings and never interprets the rest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Target application id; 0 means contract creation.
    pub app_id: u64,
    /// Ledger-runtime completion flag.
    pub on_completion: OnCompletion,
    /// Sender account. The only account whose local state may change.
    pub sender: Address,
    /// Ordered application arguments.
    pub args: Vec<Vec<u8>>,
}

impl Transaction {
    /// Contract-creation transaction (`app_id == 0`, no arguments).
    #[must_use]
    pub fn create(sender: Address) -> Self {
        Self {
            app_id: 0,
            on_completion: OnCompletion::NoOp,
            sender,
            args: Vec::new(),
        }
    }

    /// Opt-in transaction for `sender`.
    #[must_use]
    pub fn opt_in(sender: Address, app_id: u64) -> Self {
        Self {
            app_id,
            on_completion: OnCompletion::OptIn,
            sender,
            args: Vec::new(),
        }
    }

    /// Clear-state transaction for `sender`.
    #[must_use]
    pub fn clear_state(sender: Address, app_id: u64) -> Self {
        Self {
            app_id,
            on_completion: OnCompletion::ClearState,
            sender,
            args: Vec::new(),
        }
    }

    /// Plain application call with the given argument vector.
    #[must_use]
    pub fn app_call(sender: Address, app_id: u64, args: Vec<Vec<u8>>) -> Self {
        Self {
            app_id,
            on_completion: OnCompletion::NoOp,
            sender,
            args,
        }
    }

    /// First argument, if any. Used only for routing.
    #[must_use]
    pub fn first_arg(&self) -> Option<&[u8]> {
        self.args.first().map(Vec::as_slice)
    }
}

// =============================================================================
// TRANSITION RECEIPT
// =============================================================================

/// Receipt for an approved transition.
///
/// Rejections carry no receipt; they surface as a `TransitionError` and by
/// construction have mutated nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionReceipt {
    /// The action that was applied.
    pub action: Action,
    /// The transaction sender.
    pub sender: Address,
}

// =============================================================================
// STATE SNAPSHOTS
// =============================================================================

/// Read-only snapshot of the global counter set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalCounters {
    /// Successful alert registrations, across all accounts.
    pub total_alerts: u64,
    /// Opaque reward-token asset id.
    pub help_token_id: u64,
    /// Successful identity verifications.
    pub verified_responders: u64,
}

impl GlobalCounters {
    /// Reads the current global counters out of a state store.
    pub fn read<S: StateStore + ?Sized>(store: &S) -> Self {
        Self {
            total_alerts: store.get_global(GlobalKey::TotalAlerts),
            help_token_id: store.get_global(GlobalKey::HelpTokenId),
            verified_responders: store.get_global(GlobalKey::VerifiedResponders),
        }
    }
}

/// Read-only snapshot of one account's local counter set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalAccount {
    /// Alerts registered by this account.
    pub user_alerts: u64,
    /// Reward credits booked to this account.
    pub user_help_balance: u64,
    /// Reserved, never mutated.
    pub user_reputation: u64,
}

impl LocalAccount {
    /// Reads one account's local counters out of a state store.
    ///
    /// # Errors
    ///
    /// `StateError::MissingLocalState` if the account has not opted in.
    pub fn read<S: StateStore + ?Sized>(store: &S, account: Address) -> Result<Self, StateError> {
        Ok(Self {
            user_alerts: store.get_local(account, LocalKey::UserAlerts)?,
            user_help_balance: store.get_local(account, LocalKey::UserHelpBalance)?,
            user_reputation: store.get_local(account, LocalKey::UserReputation)?,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
