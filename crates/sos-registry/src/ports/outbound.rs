//! # Driven Ports (SPI - Outbound)
//!
//! The state-store interface the registry depends on. The surrounding
//! ledger runtime provides the real durable, crash-consistent store; this
//! crate ships an in-memory adapter for tests.
//!
//! ## Contract
//!
//! - Every key is implicitly initialized to 0: reads of absent keys return 0
//!   rather than an error.
//! - The store is scoped into a single global namespace and one local
//!   namespace per opted-in account. Local access for an account without
//!   local state is the only read/write failure.
//! - The runtime serializes transactions, so a transition holds exclusive
//!   write access to the global namespace and its sender's local namespace
//!   for the duration of its atomic application. The provided
//!   read-modify-write helpers rely on that.

use crate::domain::value_objects::{Address, GlobalKey, LocalKey};
use crate::errors::StateError;

/// Key-value state abstraction backing the registry.
pub trait StateStore: Send + Sync {
    /// Reads a global counter (0 when absent).
    fn get_global(&self, key: GlobalKey) -> u64;

    /// Writes a global counter.
    fn put_global(&self, key: GlobalKey, value: u64);

    /// Returns true if `account` currently holds local state.
    fn has_local(&self, account: Address) -> bool;

    /// Reads a local counter (0 when the key is absent).
    ///
    /// # Errors
    ///
    /// `StateError::MissingLocalState` if `account` has no local state.
    fn get_local(&self, account: Address, key: LocalKey) -> Result<u64, StateError>;

    /// Writes a local counter.
    ///
    /// # Errors
    ///
    /// `StateError::MissingLocalState` if `account` has no local state.
    fn put_local(&self, account: Address, key: LocalKey, value: u64) -> Result<(), StateError>;

    /// Allocates local state for `account` with all counters at 0.
    ///
    /// # Errors
    ///
    /// `StateError::AlreadyOptedIn` if local state already exists; the
    /// existing counters are left untouched.
    fn allocate_local(&self, account: Address) -> Result<(), StateError>;

    /// Deallocates `account`'s local state, preserving nothing.
    /// A no-op if the account holds no local state.
    fn deallocate_local(&self, account: Address);

    /// `put(key, get(key) + 1)` on the global namespace.
    fn increment_global(&self, key: GlobalKey) {
        self.put_global(key, self.get_global(key).saturating_add(1));
    }

    /// `put(key, get(key) + 1)` on `account`'s local namespace.
    ///
    /// # Errors
    ///
    /// `StateError::MissingLocalState` if `account` has no local state.
    fn increment_local(&self, account: Address, key: LocalKey) -> Result<(), StateError> {
        let current = self.get_local(account, key)?;
        self.put_local(account, key, current.saturating_add(1))
    }
}
