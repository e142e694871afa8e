//! # Value Objects
//!
//! Immutable domain values: account addresses, state-store keys, the
//! on-completion flag, and the closed set of registry actions.
//!
//! The dispatch strings and key names are a bit-exact external contract:
//! exact byte-string match, case-sensitive, no trimming.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ADDRESS
// =============================================================================

/// Ledger account address (32 bytes).
///
/// Opaque to this core: never parsed, never checksummed, only used as the
/// key for local state and as the transaction sender identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address([u8; 32]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates an address from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short hex form for logs: first 4 bytes.
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}…",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

// =============================================================================
// STATE KEYS
// =============================================================================

/// Keys of the global namespace (one counter set shared by all accounts).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlobalKey {
    /// Total successful alert registrations, across all accounts.
    TotalAlerts,
    /// Opaque reward-token asset id, set at initialization, immutable.
    HelpTokenId,
    /// Count of successful identity verifications (count-only).
    VerifiedResponders,
}

impl GlobalKey {
    /// The fixed on-ledger key name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TotalAlerts => "total_alerts",
            Self::HelpTokenId => "help_token_id",
            Self::VerifiedResponders => "verified_responders",
        }
    }
}

/// Keys of the local namespace (one counter set per opted-in account).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalKey {
    /// Alerts registered by this account.
    UserAlerts,
    /// Reward-token credits booked to this account (bookkeeping only).
    UserHelpBalance,
    /// Reserved: present in the state layout, never mutated by any
    /// transition.
    UserReputation,
}

impl LocalKey {
    /// All local keys, in state-layout order.
    pub const ALL: [Self; 3] = [Self::UserAlerts, Self::UserHelpBalance, Self::UserReputation];

    /// The fixed on-ledger key name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserAlerts => "user_alerts",
            Self::UserHelpBalance => "user_help_balance",
            Self::UserReputation => "user_reputation",
        }
    }
}

// =============================================================================
// ON-COMPLETION FLAG
// =============================================================================

/// Ledger-runtime completion flag carried by every application call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnCompletion {
    /// Plain application call; routing falls through to `args[0]`.
    #[default]
    NoOp,
    /// Allocate the sender's local state.
    OptIn,
    /// Deallocate the sender's local state (separate program path).
    ClearState,
}

// =============================================================================
// ACTIONS
// =============================================================================

/// Dispatch string for alert registration.
pub const ACTION_REGISTER_SOS: &[u8] = b"register_sos";
/// Dispatch string for responder reward bookkeeping.
pub const ACTION_REWARD_RESPONDER: &[u8] = b"reward_responder";
/// Dispatch string for responder verification.
pub const ACTION_VERIFY_RESPONDER: &[u8] = b"verify_responder";

/// The closed set of registry actions.
///
/// Parsed exactly once at the dispatch boundary; handlers never re-inspect
/// the raw argument bytes to decide what to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Contract creation call (`app_id == 0`).
    Initialize,
    /// Allocate sender local state.
    OptIn,
    /// Deallocate sender local state.
    ClearState,
    /// `register_sos`: record an alert.
    RegisterAlert,
    /// `reward_responder`: book a reward credit.
    RewardResponder,
    /// `verify_responder`: count an identity verification.
    VerifyResponder,
}

impl Action {
    /// Exact argument count this action requires, where one applies.
    ///
    /// Counts are exact, not minimums, and apply to the payload after the
    /// dispatch string at `args[0]` (for `Initialize`, which has no dispatch
    /// string, to the whole vector). `OptIn` and `ClearState` are routed by
    /// the on-completion flag and carry no argument-count precondition.
    #[must_use]
    pub const fn expected_args(self) -> Option<usize> {
        match self {
            Self::Initialize => Some(0),
            Self::RegisterAlert => Some(4),
            Self::RewardResponder | Self::VerifyResponder => Some(2),
            Self::OptIn | Self::ClearState => None,
        }
    }

    /// Stable name for logs and response payloads.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::OptIn => "opt_in",
            Self::ClearState => "clear_state",
            Self::RegisterAlert => "register_sos",
            Self::RewardResponder => "reward_responder",
            Self::VerifyResponder => "verify_responder",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// TESTS
// =============================================================================
