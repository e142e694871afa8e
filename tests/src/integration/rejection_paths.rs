//! # Rejection Path Tests
//!
//! Every rejection is all-or-nothing: no partial mutation is ever visible,
//! no matter where in the transition the precondition failed.

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use sos_registry::prelude::*;

    const APP_ID: u64 = 42;

    fn account(byte: u8) -> Address {
        Address::new([byte; 32])
    }

    fn app_call(sender: Address, args: &[&[u8]]) -> SubmitTransactionRequestPayload {
        SubmitTransactionRequestPayload {
            app_id: APP_ID,
            on_completion: OnCompletion::NoOp,
            sender,
            args: args.iter().map(|a| a.to_vec()).collect(),
        }
    }

    fn opt_in(sender: Address) -> SubmitTransactionRequestPayload {
        SubmitTransactionRequestPayload {
            app_id: APP_ID,
            on_completion: OnCompletion::OptIn,
            sender,
            args: Vec::new(),
        }
    }

    async fn submit(
        service: &SosRegistryService<InMemoryStateStore>,
        payload: SubmitTransactionRequestPayload,
    ) -> SubmitTransactionResponsePayload {
        service.submit_transaction(Uuid::new_v4(), payload).await
    }

    /// Malformed `register_sos` (3 payload args instead of 4) leaves both
    /// the global and the sender's counters unchanged.
    #[tokio::test]
    async fn test_malformed_register_mutates_nothing() {
        let service = create_test_service();
        let x = account(1);
        submit(&service, opt_in(x)).await;

        let response = submit(
            &service,
            app_call(x, &[b"register_sos", b"u1", b"10.0", b"20.0"]),
        )
        .await;
        assert!(!response.approved);
        assert_eq!(response.action, Some(Action::RegisterAlert));
        assert!(response
            .reject_reason
            .as_deref()
            .unwrap()
            .contains("expected 4, got 3"));

        assert_eq!(service.global_counters().await.total_alerts, 0);
        assert_eq!(service.local_account(x).await.unwrap().user_alerts, 0);
    }

    /// Rejection is repeatable: resubmitting the same malformed transaction
    /// rejects again with the same outcome and still mutates nothing.
    #[tokio::test]
    async fn test_rejection_is_repeatable() {
        let service = create_test_service();
        let x = account(2);
        submit(&service, opt_in(x)).await;

        let malformed = app_call(x, &[b"reward_responder", b"respAddr"]);
        for _ in 0..3 {
            let response = submit(&service, malformed.clone()).await;
            assert!(!response.approved);
        }
        assert_eq!(service.local_account(x).await.unwrap().user_help_balance, 0);
        assert_eq!(service.stats().await.rejected, 3);
    }

    /// Unknown dispatch strings reject even when `args` is non-empty, and
    /// matching is exact: no case folding, no trimming.
    #[tokio::test]
    async fn test_unknown_and_inexact_dispatch_strings_reject() {
        let service = create_test_service();
        let x = account(3);
        submit(&service, opt_in(x)).await;

        let cases: [&[&[u8]]; 4] = [
            &[b"mint", b"100"],
            &[b"REGISTER_SOS", b"u1", b"10.0", b"20.0", b"h"],
            &[b"register_sos ", b"u1", b"10.0", b"20.0", b"h"],
            &[b""],
        ];
        for args in cases {
            let response = submit(&service, app_call(x, args)).await;
            assert!(!response.approved);
            assert_eq!(response.action, None);
            assert_eq!(response.reject_reason.as_deref(), Some("unknown action"));
        }
        assert_eq!(service.global_counters().await.total_alerts, 0);
    }

    /// Local-state actions from a sender that never opted in (or has
    /// cleared) fail with a missing-local-state rejection; verify_responder
    /// needs no local state and still approves.
    #[tokio::test]
    async fn test_missing_local_state_scopes_per_action() {
        let service = create_test_service();
        let x = account(4);

        let response = submit(
            &service,
            app_call(x, &[b"register_sos", b"u1", b"10.0", b"20.0", b"h"]),
        )
        .await;
        assert!(!response.approved);
        assert!(response
            .reject_reason
            .as_deref()
            .unwrap()
            .contains("no local state"));

        let response = submit(&service, app_call(x, &[b"reward_responder", b"r", b"1"])).await;
        assert!(!response.approved);

        // Global-only action is unaffected by the sender's opt-in status.
        let response = submit(&service, app_call(x, &[b"verify_responder", b"r", b"p"])).await;
        assert!(response.approved);
        assert_eq!(service.global_counters().await.verified_responders, 1);
    }

    /// The reward credit lands on the transaction sender, never on the
    /// account named in the arguments.
    #[tokio::test]
    async fn test_reward_credits_sender_not_named_responder() {
        let service = create_test_service();
        let (x, y) = (account(5), account(6));
        submit(&service, opt_in(x)).await;
        submit(&service, opt_in(y)).await;

        let named = y.as_bytes().to_vec();
        let response = submit(&service, app_call(x, &[&named, b"5"])).await;
        // args[0] is the named responder here, not a dispatch string.
        assert!(!response.approved);

        let response = submit(&service, app_call(x, &[b"reward_responder", &named, b"5"])).await;
        assert!(response.approved);
        assert_eq!(service.local_account(x).await.unwrap().user_help_balance, 1);
        assert_eq!(service.local_account(y).await.unwrap().user_help_balance, 0);
    }

    /// Double opt-in rejects without resetting the counters accumulated
    /// under the live local state.
    #[tokio::test]
    async fn test_double_opt_in_preserves_counters() {
        let service = create_test_service();
        let x = account(7);
        submit(&service, opt_in(x)).await;
        submit(
            &service,
            app_call(x, &[b"register_sos", b"u1", b"10.0", b"20.0", b"h"]),
        )
        .await;

        let response = submit(&service, opt_in(x)).await;
        assert!(!response.approved);
        assert!(response
            .reject_reason
            .as_deref()
            .unwrap()
            .contains("already opted in"));
        assert_eq!(service.local_account(x).await.unwrap().user_alerts, 1);
    }
}
