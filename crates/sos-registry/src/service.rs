//! # SOS Registry Service
//!
//! Wires the pure dispatch logic to the inbound API: per-transaction
//! tracing, service statistics, and the one-time `help_token_id`
//! configuration write. The domain stays synchronous; only this layer is
//! async, because the surrounding runtime drives it from async transport.

use crate::adapters::InMemoryStateStore;
use crate::domain::entities::{GlobalCounters, LocalAccount, Transaction};
use crate::domain::invariants::check_monotonic_globals;
use crate::domain::transitions::dispatch;
use crate::domain::value_objects::{Action, Address, GlobalKey};
use crate::errors::StateError;
use crate::events::{SubmitTransactionRequestPayload, SubmitTransactionResponsePayload};
use crate::ports::inbound::SosRegistryApi;
use crate::ports::outbound::StateStore;

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// SOS Registry Service configuration.
#[derive(Debug, Default, Clone)]
pub struct ServiceConfig {
    /// Opaque reward-token asset id, written once at construction and
    /// immutable thereafter.
    pub help_token_id: u64,
    /// Check global-counter invariants after each applied transaction.
    pub check_invariants: bool,
}

/// Statistics for the SOS Registry Service.
#[derive(Debug, Default, Clone)]
pub struct ServiceStats {
    /// Total transactions processed.
    pub transactions_processed: u64,
    /// Approved transactions.
    pub approved: u64,
    /// Rejected transactions.
    pub rejected: u64,
    /// Successful alert registrations.
    pub alerts_registered: u64,
    /// Successful responder verifications.
    pub responders_verified: u64,
}

/// The main SOS Registry Service.
///
/// This service:
/// 1. Receives transaction submissions from the ledger runtime
/// 2. Dispatches them through the pure transition logic
/// 3. Returns the binary Approve/Reject outcome
/// 4. Maintains submission statistics
pub struct SosRegistryService<S: StateStore> {
    /// Service configuration.
    config: ServiceConfig,
    /// State store adapter.
    state: Arc<S>,
    /// Service statistics.
    stats: Arc<RwLock<ServiceStats>>,
}

impl<S: StateStore> SosRegistryService<S> {
    /// Create a new SOS Registry Service.
    ///
    /// Writes `help_token_id` into the global namespace once; no transition
    /// exposes a mutator for it.
    pub fn new(state: S, config: ServiceConfig) -> Self {
        state.put_global(GlobalKey::HelpTokenId, config.help_token_id);
        Self {
            config,
            state: Arc::new(state),
            stats: Arc::new(RwLock::new(ServiceStats::default())),
        }
    }

    /// Get current service statistics.
    pub async fn stats(&self) -> ServiceStats {
        self.stats.read().await.clone()
    }

    /// Shared handle to the underlying state store.
    #[must_use]
    pub fn state(&self) -> Arc<S> {
        Arc::clone(&self.state)
    }

    async fn record_outcome(&self, action: Option<Action>, approved: bool) {
        let mut stats = self.stats.write().await;
        stats.transactions_processed += 1;
        if approved {
            stats.approved += 1;
            match action {
                Some(Action::RegisterAlert) => stats.alerts_registered += 1,
                Some(Action::VerifyResponder) => stats.responders_verified += 1,
                _ => {}
            }
        } else {
            stats.rejected += 1;
        }
    }
}

#[async_trait]
impl<S: StateStore> SosRegistryApi for SosRegistryService<S> {
    #[instrument(skip(self, payload), fields(correlation_id = %correlation_id, sender = %payload.sender))]
    async fn submit_transaction(
        &self,
        correlation_id: Uuid,
        payload: SubmitTransactionRequestPayload,
    ) -> SubmitTransactionResponsePayload {
        let tx = Transaction {
            app_id: payload.app_id,
            on_completion: payload.on_completion,
            sender: payload.sender,
            args: payload.args,
        };
        debug!(app_id = tx.app_id, args = tx.args.len(), "Dispatching transaction");

        let before = self.config.check_invariants.then(|| GlobalCounters::read(self.state.as_ref()));

        let response = match dispatch(self.state.as_ref(), &tx) {
            Ok(receipt) => {
                info!(action = %receipt.action, "Transaction approved");
                SubmitTransactionResponsePayload::approved(receipt.action)
            }
            Err(err) => {
                warn!(error = %err, "Transaction rejected");
                SubmitTransactionResponsePayload::rejected(&err)
            }
        };

        if let Some(before) = before {
            let after = GlobalCounters::read(self.state.as_ref());
            debug_assert!(
                check_monotonic_globals(&before, &after),
                "global counters regressed within one transaction"
            );
        }

        self.record_outcome(response.action, response.approved).await;
        response
    }

    async fn global_counters(&self) -> GlobalCounters {
        GlobalCounters::read(self.state.as_ref())
    }

    async fn local_account(&self, account: Address) -> Result<LocalAccount, StateError> {
        LocalAccount::read(self.state.as_ref(), account)
    }
}

/// Create a service over a fresh in-memory store, for tests.
#[must_use]
pub fn create_test_service() -> SosRegistryService<InMemoryStateStore> {
    SosRegistryService::new(InMemoryStateStore::new(), ServiceConfig::default())
}

// =============================================================================
// TESTS
// =============================================================================
