//! # Domain Invariants
//!
//! Runtime-checkable predicates over state snapshots. The service checks
//! them behind a config flag after each applied transaction; the test suite
//! checks them after every step of its scenarios.
//!
//! - INVARIANT-1: Alert conservation
//! - INVARIANT-2: Monotonic global counters
//! - INVARIANT-3: Reputation untouched

use crate::domain::entities::{GlobalCounters, LocalAccount};

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-1: Alert conservation
///
/// Every locally counted alert was counted globally. Equality holds only
/// while no account has cleared its local state, so the sum of live local
/// counters is a lower bound, never an overshoot.
#[must_use]
pub fn check_alert_conservation(global: &GlobalCounters, locals: &[LocalAccount]) -> bool {
    let local_sum: u64 = locals.iter().map(|l| l.user_alerts).sum();
    local_sum <= global.total_alerts
}

/// INVARIANT-2: Monotonic global counters
///
/// `total_alerts` and `verified_responders` never decrease across a
/// transition, and `help_token_id` never changes after initialization.
#[must_use]
pub fn check_monotonic_globals(before: &GlobalCounters, after: &GlobalCounters) -> bool {
    after.total_alerts >= before.total_alerts
        && after.verified_responders >= before.verified_responders
        && after.help_token_id == before.help_token_id
}

/// INVARIANT-3: Reputation untouched
///
/// No in-scope transition mutates `user_reputation`; the slot exists only
/// for state-layout compatibility.
#[must_use]
pub fn check_reputation_untouched(local: &LocalAccount) -> bool {
    local.user_reputation == 0
}

// =============================================================================
// AGGREGATE CHECK
// =============================================================================

/// A single invariant violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// INVARIANT-1 failed.
    AlertConservation,
    /// INVARIANT-2 failed.
    MonotonicGlobals,
    /// INVARIANT-3 failed.
    ReputationTouched,
}

/// Result of checking all invariants against a pair of snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvariantCheckResult {
    /// Violations found, empty when all invariants hold.
    pub violations: Vec<InvariantViolation>,
}

impl InvariantCheckResult {
    /// True when no invariant was violated.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks all invariants for one applied transition.
///
/// `before`/`after` are the global snapshots around the transition;
/// `locals` are the live local snapshots after it.
#[must_use]
pub fn check_all_invariants(
    before: &GlobalCounters,
    after: &GlobalCounters,
    locals: &[LocalAccount],
) -> InvariantCheckResult {
    let mut violations = Vec::new();
    if !check_alert_conservation(after, locals) {
        violations.push(InvariantViolation::AlertConservation);
    }
    if !check_monotonic_globals(before, after) {
        violations.push(InvariantViolation::MonotonicGlobals);
    }
    if locals.iter().any(|l| !check_reputation_untouched(l)) {
        violations.push(InvariantViolation::ReputationTouched);
    }
    InvariantCheckResult { violations }
}

// =============================================================================
// TESTS
// =============================================================================
