//! # Transaction Dispatch & Transition Handlers
//!
//! Routing is evaluated in order, first match wins:
//!
//! | # | Rule | Action |
//! |---|------|--------|
//! | 1 | `app_id == 0` | `Initialize` |
//! | 2 | `on_completion == OptIn` | `OptIn` |
//! | 3 | `on_completion == ClearState` | `ClearState` |
//! | 4 | `args[0] == "register_sos"` | `RegisterAlert` |
//! | 5 | `args[0] == "reward_responder"` | `RewardResponder` |
//! | 6 | `args[0] == "verify_responder"` | `VerifyResponder` |
//! | 7 | anything else | Reject (`UnknownAction`) |
//!
//! Every handler validates before it mutates: a rejected transaction leaves
//! both namespaces exactly as they were. Each dispatched transaction is
//! applied as a single atomic unit; the ledger runtime serializes them.

use crate::domain::entities::{Transaction, TransitionReceipt};
use crate::domain::value_objects::{
    Action, GlobalKey, LocalKey, OnCompletion, ACTION_REGISTER_SOS, ACTION_REWARD_RESPONDER,
    ACTION_VERIFY_RESPONDER,
};
use crate::errors::{StateError, TransitionError};
use crate::ports::outbound::StateStore;

// =============================================================================
// ROUTING
// =============================================================================

/// Routes a transaction to its action. Exact byte-string match on
/// `args[0]`, case-sensitive, no trimming.
///
/// # Errors
///
/// `TransitionError::UnknownAction` when no rule matches.
pub fn route(tx: &Transaction) -> Result<Action, TransitionError> {
    if tx.app_id == 0 {
        return Ok(Action::Initialize);
    }
    match tx.on_completion {
        OnCompletion::OptIn => return Ok(Action::OptIn),
        OnCompletion::ClearState => return Ok(Action::ClearState),
        OnCompletion::NoOp => {}
    }
    match tx.first_arg() {
        Some(ACTION_REGISTER_SOS) => Ok(Action::RegisterAlert),
        Some(ACTION_REWARD_RESPONDER) => Ok(Action::RewardResponder),
        Some(ACTION_VERIFY_RESPONDER) => Ok(Action::VerifyResponder),
        _ => Err(TransitionError::UnknownAction),
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Routes and applies one transaction against the state store.
///
/// # Errors
///
/// Any `TransitionError`; on error no state has been mutated.
pub fn dispatch<S: StateStore + ?Sized>(
    store: &S,
    tx: &Transaction,
) -> Result<TransitionReceipt, TransitionError> {
    let action = route(tx)?;
    match action {
        Action::Initialize => initialize(tx)?,
        Action::OptIn => opt_in(store, tx)?,
        Action::ClearState => clear_state(store, tx),
        Action::RegisterAlert => register_alert(store, tx)?,
        Action::RewardResponder => reward_responder(store, tx)?,
        Action::VerifyResponder => verify_responder(store, tx)?,
    }
    Ok(TransitionReceipt {
        action,
        sender: tx.sender,
    })
}

/// Exact argument-count precondition shared by the argument-bearing actions.
///
/// For string-dispatched actions the count applies to the payload after the
/// dispatch string at `args[0]`; `Initialize` carries no dispatch string and
/// the count applies to the whole vector.
fn require_args(action: Action, tx: &Transaction) -> Result<(), TransitionError> {
    // Routed actions without a count (OptIn/ClearState) never reach this.
    let expected = action.expected_args().unwrap_or(0);
    let actual = match action {
        Action::Initialize => tx.args.len(),
        _ => tx.args.len().saturating_sub(1),
    };
    if actual != expected {
        return Err(TransitionError::ShapeViolation {
            action,
            expected,
            actual,
        });
    }
    Ok(())
}

// =============================================================================
// TRANSITION HANDLERS
// =============================================================================

/// Contract creation. No counters touched.
fn initialize(tx: &Transaction) -> Result<(), TransitionError> {
    require_args(Action::Initialize, tx)
}

/// Allocates the sender's local state with all counters at 0.
fn opt_in<S: StateStore + ?Sized>(store: &S, tx: &Transaction) -> Result<(), TransitionError> {
    store.allocate_local(tx.sender)?;
    Ok(())
}

/// Deallocates the sender's local state. Always approves, preserves nothing.
fn clear_state<S: StateStore + ?Sized>(store: &S, tx: &Transaction) {
    store.deallocate_local(tx.sender);
}

/// `register_sos(user_id, latitude, longitude, ipfs_hash)`.
///
/// The four values are opaque payload; the core never range-checks the
/// coordinates or validates the hash format. Counts the alert globally and
/// on the sender's local state.
fn register_alert<S: StateStore + ?Sized>(
    store: &S,
    tx: &Transaction,
) -> Result<(), TransitionError> {
    require_args(Action::RegisterAlert, tx)?;
    // Both increments or neither: check the local namespace before the
    // global counter moves.
    if !store.has_local(tx.sender) {
        return Err(StateError::MissingLocalState(tx.sender).into());
    }
    store.increment_global(GlobalKey::TotalAlerts);
    store.increment_local(tx.sender, LocalKey::UserAlerts)?;
    Ok(())
}

/// `reward_responder(responder_address, amount)`.
///
/// Flat +1 to the SENDER's help balance. Neither argument is used
/// arithmetically; this mirrors the deployed contract's observed behavior
/// and is bookkeeping only, not a value transfer.
fn reward_responder<S: StateStore + ?Sized>(
    store: &S,
    tx: &Transaction,
) -> Result<(), TransitionError> {
    require_args(Action::RewardResponder, tx)?;
    store.increment_local(tx.sender, LocalKey::UserHelpBalance)?;
    Ok(())
}

/// `verify_responder(responder_address, credential_proof)`.
///
/// Counts the verification; the credential proof itself is checked by an
/// external identity authority, never here.
fn verify_responder<S: StateStore + ?Sized>(
    store: &S,
    tx: &Transaction,
) -> Result<(), TransitionError> {
    require_args(Action::VerifyResponder, tx)?;
    store.increment_global(GlobalKey::VerifiedResponders);
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
