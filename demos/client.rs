//! Example client exploring a Circle sandbox account
//!
//! Run with `CIRCLE_API_KEY=... cargo run --example client`.

use circle_sdk::{
    config,
    request::{with_idempotency_key, with_page_size},
    Chain, Client, Currency,
};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let client = Client::new([
        config::with_api_key_from_env(config::DEFAULT_API_KEY_ENV),
        config::with_user_agent("circle-sdk-demo/0.1"),
    ])?;

    println!("🔍 Checking service at {}...", client.base_url());
    if !client.core().ping(vec![]).await? {
        println!("Service did not answer pong");
        return Ok(());
    }

    let master_wallet = client.core().master_wallet_id(vec![]).await?;
    println!("Master wallet: {}", master_wallet);

    let balance = client.core().balance(vec![]).await?;
    for amount in &balance.available {
        println!(
            "  available: {} {}",
            amount.amount,
            amount.currency.as_ref().map(|c| c.as_str()).unwrap_or("?")
        );
    }

    // Wallets, ten at a time
    let wallets = client.accounts().wallets(vec![with_page_size(10)]).await?;
    println!("\n👛 {} wallets", wallets.len());
    for wallet in &wallets {
        println!(
            "  {} ({})",
            wallet.id.as_deref().unwrap_or("-"),
            wallet.description.as_deref().unwrap_or("no description")
        );
    }

    // Retrying with the same key never creates a second wallet
    let key = circle_sdk::new_idempotency_key();
    let wallet = client
        .accounts()
        .create_wallet("demo wallet", vec![with_idempotency_key(key.clone())])
        .await?;
    let wallet_id = wallet.id.unwrap_or_default();
    println!("\n✅ Created wallet {} with key {}", wallet_id, key);

    let address = client
        .accounts()
        .create_wallet_address(
            &wallet_id,
            Currency::Usd,
            Chain::Eth,
            vec![with_idempotency_key("")],
        )
        .await?;
    println!(
        "Deposit USDC on ETH to {}",
        address.address.as_deref().unwrap_or("-")
    );

    Ok(())
}
