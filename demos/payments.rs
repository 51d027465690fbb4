//! Example card payment with cancellation and error handling
//!
//! Run with `CIRCLE_API_KEY=... CARD_ID=... cargo run --example payments`.

use circle_sdk::{
    config,
    request::{with_context, with_idempotency_key},
    Amount, CancelPaymentRequest, CircleError, Client, Context, CreateMetadataRequest,
    CreatePaymentRequest, ListPaymentsRequest, PaymentStatus, ReversalReason, Source,
    VerificationMethod,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("circle_sdk=debug")
        .init();

    let client = Client::new([
        config::with_api_key_from_env(config::DEFAULT_API_KEY_ENV),
        config::with_timeout(Duration::from_secs(10)),
        config::with_debug(),
    ])?;

    let card_id = std::env::var("CARD_ID")?;
    let request = CreatePaymentRequest::new(
        Amount::usd("3.14"),
        Source::card(card_id),
        CreateMetadataRequest::new(
            "customer@example.com",
            "DE6FA86F60BB47B379307F851E238617",
            "244.28.239.130",
        ),
    )
    .with_verification(VerificationMethod::None)
    .with_description("demo purchase");

    // The same key is reused if the call has to be repeated
    let key = circle_sdk::new_idempotency_key();
    let payment = loop {
        let ctx = Context::with_timeout(Duration::from_secs(5));
        match client
            .payments()
            .create_payment(
                &request,
                vec![with_idempotency_key(key.clone()), with_context(ctx)],
            )
            .await
        {
            Ok(payment) => break payment,
            Err(err) if err.is_retryable() => {
                println!("⏳ retrying after: {}", err);
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
            Err(CircleError::Api(api)) => {
                println!("❌ rejected: {}", api);
                for detail in &api.details {
                    println!(
                        "  {}: {}",
                        detail.location.as_deref().unwrap_or("-"),
                        detail.message
                    );
                }
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
    };

    let payment_id = payment.id.clone().unwrap_or_default();
    println!("💳 Payment {} is {:?}", payment_id, payment.status);

    let pending = client
        .payments()
        .list_payments(
            &ListPaymentsRequest {
                status: Some(PaymentStatus::Pending),
                ..Default::default()
            },
            vec![],
        )
        .await?;
    println!("{} payments pending", pending.len());

    let canceled = client
        .payments()
        .cancel_payment(
            &payment_id,
            &CancelPaymentRequest {
                reason: Some(ReversalReason::RequestedByCustomer),
            },
            vec![with_idempotency_key("")],
        )
        .await?;
    println!("🚫 Cancel request {:?} submitted", canceled.id);

    Ok(())
}
