//! Integration tests for the circle-sdk client against a mock server

use chrono::{TimeZone, Utc};
use circle_sdk::{
    config::{self, Backend},
    request::{
        with_context, with_date_range, with_idempotency_key, with_page_after, with_page_size,
    },
    types::*,
    CircleError, Client, Context, TransportError,
};
use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio_test::{assert_err, assert_ok};
use tracing_subscriber::EnvFilter;

const API_KEY: &str = "test-key";

fn client_for(server: &Server) -> Client {
    Client::new([
        config::with_api_key(API_KEY),
        config::with_backend(Backend::Custom(server.url())),
    ])
    .unwrap()
}

#[tokio::test]
async fn test_wallet_is_unwrapped_from_envelope() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", "/v1/wallets/w1")
        .match_header("authorization", "Bearer test-key")
        .match_header("accept", "application/json")
        .match_header("content-type", "application/json")
        .match_header("user-agent", Matcher::Regex("^circle-sdk-rs/".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"data": {"id": "w1", "type": "merchant"}}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let wallet = client.accounts().wallet("w1", vec![]).await.unwrap();

    assert_eq!(wallet.id.as_deref(), Some("w1"));
    assert_eq!(wallet.kind, Some(WalletType::Merchant));
    m.assert_async().await;
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/v1/wallets")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(json!({"code": 500, "message": "internal error"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.accounts().wallets(vec![]).await.unwrap_err();

    assert_eq!(err.to_string(), "500: internal error");
    assert_eq!(err.status(), Some(500));
    assert!(err.is_retryable());
    let api = err.api_error().unwrap();
    assert_eq!(api.code, 500);
    assert_eq!(api.http_status, Some(500));
}

#[tokio::test]
async fn test_validation_error_details() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/v1/cards")
        .with_status(400)
        .with_body(
            json!({
                "code": 2,
                "message": "Invalid entity.",
                "errors": [{
                    "error": "required",
                    "message": "may not be null",
                    "location": "billingDetails.postalCode",
                    "invalidValue": null
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .payments()
        .create_card(&CreateCardRequest::default(), vec![])
        .await
        .unwrap_err();

    let api = err.api_error().unwrap();
    assert_eq!(api.code, 2);
    assert_eq!(api.details[0].kind, Some(ErrorDetailKind::Required));
    assert_eq!(
        api.details[0].location.as_deref(),
        Some("billingDetails.postalCode")
    );
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_unparseable_error_body_is_malformed() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/v1/payouts/missing")
        .with_status(404)
        .with_body("not found")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.payouts().payout("missing", vec![]).await.unwrap_err();

    match err {
        CircleError::MalformedResponse { status, body, .. } => {
            assert_eq!(status, "404 Not Found");
            assert_eq!(body, "not found");
        }
        other => panic!("expected malformed response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unparseable_success_body_is_malformed() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/v1/businessAccount/balances")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.core().balance(vec![]).await.unwrap_err();
    assert!(matches!(err, CircleError::MalformedResponse { .. }));
    assert_eq!(err.status(), Some(200));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let client = Client::new([
        config::with_api_key(API_KEY),
        config::with_backend(Backend::Custom("http://127.0.0.1:1".to_string())),
        config::with_timeout(Duration::from_secs(5)),
    ])
    .unwrap();

    let err = client.accounts().wallets(vec![]).await.unwrap_err();
    assert!(matches!(
        err,
        CircleError::Transport(TransportError::Http(_))
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_last_idempotency_key_wins() {
    let first = circle_sdk::new_idempotency_key();
    let second = circle_sdk::new_idempotency_key();

    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/v1/wallets")
        .match_body(Matcher::Json(
            json!({"description": "savings", "idempotencyKey": second}),
        ))
        .with_status(201)
        .with_body(json!({"data": {"walletId": "w9", "type": "end_user_wallet"}}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let wallet = client
        .accounts()
        .create_wallet(
            "savings",
            vec![
                with_idempotency_key(first),
                with_idempotency_key(second.clone()),
            ],
        )
        .await
        .unwrap();

    assert_eq!(wallet.kind, Some(WalletType::EndUserWallet));
    m.assert_async().await;
}

#[tokio::test]
async fn test_same_key_is_sent_on_every_attempt() {
    let key = circle_sdk::new_idempotency_key();

    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/v1/payouts")
        .match_body(Matcher::PartialJson(json!({"idempotencyKey": key})))
        .with_status(201)
        .with_body(json!({"data": {"id": "po1", "status": "pending"}}).to_string())
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = CreatePayoutRequest::new(
        Source::new("b1", SourceType::Wire),
        Amount::usd("100.00"),
    );
    for _ in 0..2 {
        let payout = client
            .payouts()
            .create_payout(&request, vec![with_idempotency_key(key.clone())])
            .await
            .unwrap();
        assert_eq!(payout.status, Some(PayoutStatus::Pending));
    }
    m.assert_async().await;
}

#[tokio::test]
async fn test_no_key_without_option() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/v1/banks/ach")
        .match_body(Matcher::Json(json!({"plaidProcessorToken": "tok"})))
        .with_status(201)
        .with_body(json!({"data": {"id": "ba1", "status": "pending"}}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let account = client
        .payments()
        .create_bank_account(
            &CreateBankAccountRequest {
                plaid_processor_token: Some("tok".to_string()),
                ..Default::default()
            },
            vec![],
        )
        .await
        .unwrap();

    assert_eq!(account.status, Some(BankAccountStatus::Pending));
    m.assert_async().await;
}

#[tokio::test]
async fn test_invalid_key_fails_before_any_request() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/v1/wallets")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client
        .accounts()
        .create_wallet("w", vec![with_idempotency_key("not-a-uuid")])
        .await;

    let err = assert_err!(result);
    assert!(matches!(err, CircleError::InvalidOption { .. }));
    m.assert_async().await;
}

#[tokio::test]
async fn test_pagination_and_date_range_query() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", "/v1/payouts")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pageSize".into(), "25".into()),
            Matcher::UrlEncoded("pageAfter".into(), "po-last".into()),
            Matcher::UrlEncoded("from".into(), "2021-01-01T00:00:00Z".into()),
            Matcher::UrlEncoded("to".into(), "2021-02-01T00:00:00Z".into()),
            Matcher::UrlEncoded("status".into(), "pending".into()),
            Matcher::UrlEncoded("status".into(), "failed".into()),
            Matcher::UrlEncoded("type".into(), "wire".into()),
        ]))
        .with_status(200)
        .with_body(json!({"data": [{"id": "po1"}, {"id": "po2"}]}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let filter = ListPayoutsRequest {
        statuses: vec![PayoutStatus::Pending, PayoutStatus::Failed],
        types: vec![PayoutDestinationType::Wire],
        ..Default::default()
    };
    let payouts = client
        .payouts()
        .list_payouts(
            &filter,
            vec![
                with_page_size(10),
                with_page_size(25),
                with_page_after("po-last"),
                with_date_range(
                    Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
                    Utc.with_ymd_and_hms(2021, 2, 1, 0, 0, 0).unwrap(),
                ),
            ],
        )
        .await
        .unwrap();

    assert_eq!(payouts.len(), 2);
    m.assert_async().await;
}

#[tokio::test]
async fn test_list_payments_filters() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", "/v1/payments")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("settlementId".into(), "s1".into()),
            Matcher::UrlEncoded("type".into(), "payment".into()),
            Matcher::UrlEncoded("type".into(), "refund".into()),
        ]))
        .with_status(200)
        .with_body(json!({"data": [{"id": "p1", "type": "payment"}]}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let filter = ListPaymentsRequest {
        settlement_id: Some("s1".to_string()),
        types: vec![PaymentType::Payment, PaymentType::Refund],
        ..Default::default()
    };
    let payments = client
        .payments()
        .list_payments(&filter, vec![])
        .await
        .unwrap();
    assert_eq!(payments[0].kind, Some(PaymentType::Payment));
    m.assert_async().await;
}

#[tokio::test]
async fn test_capture_discards_response() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/v1/payments/p1/capture")
        .match_body(Matcher::Json(json!({"amount": {"amount": "5.00", "currency": "USD"}})))
        .with_status(200)
        .with_body(json!({"data": {"id": "p1", "captured": true}}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let capture = CapturePaymentRequest {
        amount: Some(Amount::usd("5.00")),
    };
    let result = client
        .payments()
        .capture_payment("p1", &capture, vec![])
        .await;
    assert_ok!(result);
    m.assert_async().await;
}

#[tokio::test]
async fn test_canceled_context_sends_nothing() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", "/v1/cards")
        .expect(0)
        .create_async()
        .await;

    let (ctx, handle) = Context::with_cancel();
    handle.cancel();

    let client = client_for(&server);
    let err = client
        .payments()
        .cards(vec![with_context(ctx)])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CircleError::Transport(TransportError::Canceled)
    ));
    m.assert_async().await;
}

#[tokio::test]
async fn test_expired_context_reports_deadline() {
    let server = Server::new_async().await;
    let client = client_for(&server);

    let err = client
        .payments()
        .settlements(vec![with_context(Context::with_timeout(Duration::ZERO))])
        .await
        .unwrap_err();
    match err {
        CircleError::Transport(reason) => assert!(reason.is_timeout()),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_user_agent_is_not_sent() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", "/ping")
        .match_header("user-agent", Matcher::Missing)
        .with_status(200)
        .with_body(json!({"message": "pong"}).to_string())
        .create_async()
        .await;

    let client = Client::new([
        config::with_api_key(API_KEY),
        config::with_backend(Backend::Custom(server.url())),
        config::with_user_agent(""),
    ])
    .unwrap();

    assert!(client.core().ping(vec![]).await.unwrap());
    m.assert_async().await;
}

/// Collects formatted log output for inspection
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_debug_dump_redacts_credentials() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("circle_sdk=debug"))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/v1/configuration")
        .with_status(200)
        .with_body(json!({"data": {"payments": {"masterWalletId": "1000066041"}}}).to_string())
        .create_async()
        .await;

    let client = Client::new([
        config::with_api_key(API_KEY),
        config::with_backend(Backend::Custom(server.url())),
        config::with_debug(),
    ])
    .unwrap();

    let id = client.core().master_wallet_id(vec![]).await.unwrap();
    assert_eq!(id, "1000066041");

    let output = logs.contents();
    assert!(output.contains("outgoing request"), "{}", output);
    assert!(output.contains("incoming response"), "{}", output);
    assert!(output.contains("<redacted>"), "{}", output);
    assert!(!output.contains(API_KEY), "{}", output);
}

#[tokio::test]
async fn test_cancel_aborts_request_in_flight() {
    // Accepts connections and never answers
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let stalled = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let client = Client::new([
        config::with_api_key(API_KEY),
        config::with_backend(Backend::Custom(format!("http://{}", addr))),
    ])
    .unwrap();

    let (ctx, handle) = Context::with_cancel();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        handle.cancel();
    });

    let started = Instant::now();
    let err = client
        .accounts()
        .wallets(vec![with_context(ctx)])
        .await
        .unwrap_err();

    assert!(
        matches!(err, CircleError::Transport(TransportError::Canceled)),
        "unexpected error: {:?}",
        err
    );
    assert!(started.elapsed() < Duration::from_secs(5));
    stalled.abort();
}

#[tokio::test]
async fn test_dot_segment_id_sends_nothing() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let capture = CapturePaymentRequest {
        amount: Some(Amount::usd("5.00")),
    };
    let err = client
        .payments()
        .capture_payment("..", &capture, vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, CircleError::InvalidInput { .. }));

    let err = client.payments().card("", vec![]).await.unwrap_err();
    assert!(matches!(err, CircleError::InvalidInput { .. }));
    m.assert_async().await;
}
