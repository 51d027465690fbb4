//! # circle-sdk - typed async client for the Circle API
//!
//! Covers the core account, accounts (wallets and transfers), payments and
//! payouts APIs. Every call builds one request, sends it over a pooled
//! connection, unwraps the `{"data": ...}` envelope and decodes the result
//! into a typed record, or maps the failure into a [`CircleError`].
//!
//! ```no_run
//! use circle_sdk::{config, request, Client};
//!
//! # async fn run() -> circle_sdk::Result<()> {
//! let client = Client::new([config::with_api_key_from_env(config::DEFAULT_API_KEY_ENV)])?;
//! let wallet = client
//!     .accounts()
//!     .create_wallet("savings", vec![request::with_idempotency_key("")])
//!     .await?;
//! println!("created wallet {:?}", wallet.id);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod request;
pub mod types;

// Re-exports for convenience
pub use client::Client;
pub use config::{Backend, ClientConfig, ConfigOption};
pub use context::{CancelHandle, Context};
pub use error::{ApiError, CircleError, ErrorDetail, Result, TransportError};
pub use request::{CallOption, RequestDescriptor};
pub use types::*;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A fresh random idempotency key
pub fn new_idempotency_key() -> String {
    uuid::Uuid::new_v4().to_string()
}
