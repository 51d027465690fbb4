//! Resource modules, one thin async method per endpoint.
//!
//! Each module borrows the [`Client`](crate::Client) it was obtained from:
//!
//! ```no_run
//! # async fn run(client: circle_sdk::Client) -> circle_sdk::Result<()> {
//! use circle_sdk::request::with_page_size;
//!
//! let wallets = client.accounts().wallets(vec![with_page_size(10)]).await?;
//! # Ok(())
//! # }
//! ```

pub mod accounts;
pub mod core;
pub mod payments;
pub mod payouts;

pub use self::accounts::AccountsApi;
pub use self::core::CoreApi;
pub use self::payments::PaymentsApi;
pub use self::payouts::PayoutsApi;
