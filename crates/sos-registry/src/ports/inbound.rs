//! # Driving Ports (API - Inbound)
//!
//! The interface the ledger runtime uses to hand transactions to the
//! registry and to read back counter snapshots for queries.

use crate::domain::entities::{GlobalCounters, LocalAccount};
use crate::domain::value_objects::Address;
use crate::errors::StateError;
use crate::events::{SubmitTransactionRequestPayload, SubmitTransactionResponsePayload};
use async_trait::async_trait;
use uuid::Uuid;

/// Public API of the SOS registry.
///
/// One call per transaction; the outcome is binary Approve/Reject carried
/// in the response payload. A rejected transaction has mutated nothing.
#[async_trait]
pub trait SosRegistryApi: Send + Sync {
    /// Validates and applies one transaction.
    async fn submit_transaction(
        &self,
        correlation_id: Uuid,
        payload: SubmitTransactionRequestPayload,
    ) -> SubmitTransactionResponsePayload;

    /// Snapshot of the global counters.
    async fn global_counters(&self) -> GlobalCounters;

    /// Snapshot of one account's local counters.
    ///
    /// # Errors
    ///
    /// `StateError::MissingLocalState` if the account has not opted in.
    async fn local_account(&self, account: Address) -> Result<LocalAccount, StateError>;
}
