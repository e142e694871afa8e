//! # Registry Flow Tests
//!
//! End-to-end counting behavior through the service API:
//!
//! 1. The canonical alert/reward/verify/clear scenario
//! 2. Per-account and global alert counts across many accounts
//! 3. A randomized transaction sequence checked against a reference model

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::HashMap;
    use uuid::Uuid;

    use sos_registry::prelude::*;

    const APP_ID: u64 = 42;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn account(byte: u8) -> Address {
        Address::new([byte; 32])
    }

    fn opt_in(sender: Address) -> SubmitTransactionRequestPayload {
        SubmitTransactionRequestPayload {
            app_id: APP_ID,
            on_completion: OnCompletion::OptIn,
            sender,
            args: Vec::new(),
        }
    }

    fn clear(sender: Address) -> SubmitTransactionRequestPayload {
        SubmitTransactionRequestPayload {
            app_id: APP_ID,
            on_completion: OnCompletion::ClearState,
            sender,
            args: Vec::new(),
        }
    }

    fn app_call(sender: Address, args: &[&[u8]]) -> SubmitTransactionRequestPayload {
        SubmitTransactionRequestPayload {
            app_id: APP_ID,
            on_completion: OnCompletion::NoOp,
            sender,
            args: args.iter().map(|a| a.to_vec()).collect(),
        }
    }

    fn register(sender: Address) -> SubmitTransactionRequestPayload {
        app_call(
            sender,
            &[b"register_sos", b"u1", b"10.0", b"20.0", b"hash1"],
        )
    }

    async fn submit(
        service: &SosRegistryService<InMemoryStateStore>,
        payload: SubmitTransactionRequestPayload,
    ) -> SubmitTransactionResponsePayload {
        service.submit_transaction(Uuid::new_v4(), payload).await
    }

    // =============================================================================
    // CANONICAL SCENARIO
    // =============================================================================

    /// Opt-in → register → reward → verify → clear → register rejects.
    #[tokio::test]
    async fn test_canonical_alert_lifecycle() {
        let service = create_test_service();
        let x = account(0xAA);

        assert!(submit(&service, opt_in(x)).await.approved);

        let response = submit(&service, register(x)).await;
        assert!(response.approved);
        assert_eq!(response.action, Some(Action::RegisterAlert));
        assert_eq!(service.global_counters().await.total_alerts, 1);
        assert_eq!(service.local_account(x).await.unwrap().user_alerts, 1);

        // Reward books a flat +1 to the sender; the "5" is never applied.
        let response = submit(&service, app_call(x, &[b"reward_responder", b"respAddr", b"5"])).await;
        assert!(response.approved);
        assert_eq!(service.local_account(x).await.unwrap().user_help_balance, 1);

        let response =
            submit(&service, app_call(x, &[b"verify_responder", b"respAddr", b"proof"])).await;
        assert!(response.approved);
        assert_eq!(service.global_counters().await.verified_responders, 1);

        assert!(submit(&service, clear(x)).await.approved);
        let response = submit(&service, register(x)).await;
        assert!(!response.approved);
        assert!(response
            .reject_reason
            .as_deref()
            .unwrap()
            .contains("no local state"));

        // The failed registration counted nowhere.
        assert_eq!(service.global_counters().await.total_alerts, 1);

        let stats = service.stats().await;
        assert_eq!(stats.transactions_processed, 6);
        assert_eq!(stats.approved, 5);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.alerts_registered, 1);
        assert_eq!(stats.responders_verified, 1);
    }

    // =============================================================================
    // MULTI-ACCOUNT COUNTING
    // =============================================================================

    /// `total_alerts` is the sum of everyone's successful registrations;
    /// each account's `user_alerts` counts only its own.
    #[tokio::test]
    async fn test_per_account_alert_counts() {
        let service = create_test_service();
        let accounts = [account(1), account(2), account(3)];
        let per_account = [3u64, 0, 5];

        for (addr, count) in accounts.iter().zip(per_account) {
            assert!(submit(&service, opt_in(*addr)).await.approved);
            for _ in 0..count {
                assert!(submit(&service, register(*addr)).await.approved);
            }
        }

        assert_eq!(service.global_counters().await.total_alerts, 8);
        for (addr, count) in accounts.iter().zip(per_account) {
            assert_eq!(service.local_account(*addr).await.unwrap().user_alerts, count);
        }

        // Fresh local state reads 0 everywhere, not just user_alerts.
        assert_eq!(
            service.local_account(accounts[1]).await.unwrap(),
            LocalAccount::default()
        );
    }

    /// Clearing one account never disturbs another account's counters or
    /// the global totals.
    #[tokio::test]
    async fn test_clear_is_isolated_per_account() {
        let service = create_test_service();
        let (x, y) = (account(4), account(5));

        for addr in [x, y] {
            submit(&service, opt_in(addr)).await;
            submit(&service, register(addr)).await;
        }
        submit(&service, clear(x)).await;

        assert_eq!(service.global_counters().await.total_alerts, 2);
        assert_eq!(service.local_account(y).await.unwrap().user_alerts, 1);
        assert!(service.local_account(x).await.is_err());
    }

    // =============================================================================
    // RANDOMIZED SEQUENCE VS REFERENCE MODEL
    // =============================================================================

    /// Reference model: per-account opt-in flags plus alert counts, and the
    /// two global counters, updated by the routing rules alone.
    #[derive(Default)]
    struct Model {
        total_alerts: u64,
        verified_responders: u64,
        opted_in: HashMap<Address, u64>, // account -> user_alerts
    }

    #[tokio::test]
    async fn test_random_sequences_match_reference_model() {
        let mut rng = StdRng::seed_from_u64(0x505_5E9);
        let service = create_test_service();
        let mut model = Model::default();
        let accounts: Vec<Address> = (0u8..8).map(account).collect();

        for _ in 0..500 {
            let sender = accounts[rng.gen_range(0..accounts.len())];
            let choice = rng.gen_range(0..5u8);
            let (payload, expect_approve) = match choice {
                0 => (opt_in(sender), !model.opted_in.contains_key(&sender)),
                1 => (clear(sender), true),
                2 => (register(sender), model.opted_in.contains_key(&sender)),
                3 => (
                    app_call(sender, &[b"verify_responder", b"r", b"p"]),
                    true,
                ),
                _ => (
                    app_call(sender, &[b"reward_responder", b"r", b"1"]),
                    model.opted_in.contains_key(&sender),
                ),
            };

            let response = submit(&service, payload).await;
            assert_eq!(response.approved, expect_approve, "choice {choice}");

            if response.approved {
                match choice {
                    0 => {
                        model.opted_in.insert(sender, 0);
                    }
                    1 => {
                        model.opted_in.remove(&sender);
                    }
                    2 => {
                        model.total_alerts += 1;
                        *model.opted_in.get_mut(&sender).unwrap() += 1;
                    }
                    3 => model.verified_responders += 1,
                    _ => {}
                }
            }

            let global = service.global_counters().await;
            assert_eq!(global.total_alerts, model.total_alerts);
            assert_eq!(global.verified_responders, model.verified_responders);
        }

        // Final per-account alert counts agree with the model.
        for (addr, expected_alerts) in &model.opted_in {
            assert_eq!(
                service.local_account(*addr).await.unwrap().user_alerts,
                *expected_alerts
            );
        }

        // And the live snapshots satisfy the domain invariants.
        let store = service.state();
        let result = check_all_invariants(
            &service.global_counters().await,
            &service.global_counters().await,
            &store.local_snapshots(),
        );
        assert!(result.passed(), "violations: {:?}", result.violations);
    }
}
