//! # In-Memory State Store
//!
//! In-memory `StateStore` implementation for testing. The production store
//! is the ledger runtime's durable key-value engine; this adapter mirrors
//! its visible semantics (implicit-zero keys, local namespace existing only
//! between opt-in and clear).

use crate::domain::entities::LocalAccount;
use crate::domain::value_objects::{Address, GlobalKey, LocalKey};
use crate::errors::StateError;
use crate::ports::outbound::StateStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory state for testing.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    /// Global counter namespace.
    global: RwLock<HashMap<GlobalKey, u64>>,
    /// Per-account local namespaces; presence of the outer entry is the
    /// opt-in marker.
    local: RwLock<HashMap<Address, HashMap<LocalKey, u64>>>,
}

impl InMemoryStateStore {
    /// Create a new empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts currently holding local state, in unspecified order.
    #[must_use]
    pub fn opted_in_accounts(&self) -> Vec<Address> {
        self.local.read().unwrap().keys().copied().collect()
    }

    /// Live local snapshots for all opted-in accounts.
    #[must_use]
    pub fn local_snapshots(&self) -> Vec<LocalAccount> {
        self.local
            .read()
            .unwrap()
            .values()
            .map(|slots| LocalAccount {
                user_alerts: slots.get(&LocalKey::UserAlerts).copied().unwrap_or(0),
                user_help_balance: slots.get(&LocalKey::UserHelpBalance).copied().unwrap_or(0),
                user_reputation: slots.get(&LocalKey::UserReputation).copied().unwrap_or(0),
            })
            .collect()
    }

    /// Test seeding: write a local counter, allocating the account if
    /// needed.
    pub fn seed_local(&self, account: Address, key: LocalKey, value: u64) {
        self.local
            .write()
            .unwrap()
            .entry(account)
            .or_default()
            .insert(key, value);
    }
}

impl StateStore for InMemoryStateStore {
    fn get_global(&self, key: GlobalKey) -> u64 {
        self.global.read().unwrap().get(&key).copied().unwrap_or(0)
    }

    fn put_global(&self, key: GlobalKey, value: u64) {
        self.global.write().unwrap().insert(key, value);
    }

    fn has_local(&self, account: Address) -> bool {
        self.local.read().unwrap().contains_key(&account)
    }

    fn get_local(&self, account: Address, key: LocalKey) -> Result<u64, StateError> {
        self.local
            .read()
            .unwrap()
            .get(&account)
            .ok_or(StateError::MissingLocalState(account))
            .map(|slots| slots.get(&key).copied().unwrap_or(0))
    }

    fn put_local(&self, account: Address, key: LocalKey, value: u64) -> Result<(), StateError> {
        self.local
            .write()
            .unwrap()
            .get_mut(&account)
            .ok_or(StateError::MissingLocalState(account))
            .map(|slots| {
                slots.insert(key, value);
            })
    }

    fn allocate_local(&self, account: Address) -> Result<(), StateError> {
        let mut local = self.local.write().unwrap();
        if local.contains_key(&account) {
            return Err(StateError::AlreadyOptedIn(account));
        }
        let slots = LocalKey::ALL.iter().map(|&key| (key, 0)).collect();
        local.insert(account, slots);
        Ok(())
    }

    fn deallocate_local(&self, account: Address) {
        self.local.write().unwrap().remove(&account);
    }
}

// =============================================================================
// TESTS
// =============================================================================
