//! Wallets and transfers

use crate::client::Client;
use crate::request::{encode_segment, CallOption, RequestDescriptor};
use crate::types::{Chain, CreateTransferRequest, Currency, DepositAddress, Transfer, Wallet};
use crate::Result;
use serde::Serialize;

#[derive(Serialize)]
struct NewWallet<'a> {
    description: &'a str,
}

#[derive(Serialize)]
struct NewWalletAddress<'a> {
    currency: &'a Currency,
    chain: &'a Chain,
}

/// Wallet and transfer endpoints
#[derive(Debug, Clone, Copy)]
pub struct AccountsApi<'a> {
    client: &'a Client,
}

impl<'a> AccountsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Transfers, optionally only those touching `wallet_id`
    pub async fn transfers(
        &self,
        wallet_id: Option<&str>,
        options: Vec<CallOption>,
    ) -> Result<Vec<Transfer>> {
        let mut request = RequestDescriptor::get("v1/transfers").apply(options)?;
        if let Some(wallet_id) = wallet_id.filter(|id| !id.is_empty()) {
            request.set_query("walletId", wallet_id);
        }
        self.client.dispatch(request).await
    }

    /// Move funds between wallets or to a blockchain address
    pub async fn create_transfer(
        &self,
        transfer: &CreateTransferRequest,
        options: Vec<CallOption>,
    ) -> Result<Transfer> {
        let request = RequestDescriptor::post("v1/transfers")
            .with_input(transfer)?
            .apply(options)?;
        self.client.dispatch(request).await
    }

    pub async fn transfer(&self, id: &str, options: Vec<CallOption>) -> Result<Transfer> {
        let request =
            RequestDescriptor::get(format!("v1/transfers/{}", encode_segment(id)?)).apply(options)?;
        self.client.dispatch(request).await
    }

    /// End user wallets
    pub async fn wallets(&self, options: Vec<CallOption>) -> Result<Vec<Wallet>> {
        let request = RequestDescriptor::get("v1/wallets").apply(options)?;
        self.client.dispatch(request).await
    }

    pub async fn wallet(&self, id: &str, options: Vec<CallOption>) -> Result<Wallet> {
        let request =
            RequestDescriptor::get(format!("v1/wallets/{}", encode_segment(id)?)).apply(options)?;
        self.client.dispatch(request).await
    }

    /// Create an end user wallet
    pub async fn create_wallet(
        &self,
        description: &str,
        options: Vec<CallOption>,
    ) -> Result<Wallet> {
        let request = RequestDescriptor::post("v1/wallets")
            .with_input(&NewWallet { description })?
            .apply(options)?;
        self.client.dispatch(request).await
    }

    /// Blockchain addresses that deposit into wallet `id`
    pub async fn wallet_addresses(
        &self,
        id: &str,
        options: Vec<CallOption>,
    ) -> Result<Vec<DepositAddress>> {
        let request =
            RequestDescriptor::get(format!("v1/wallets/{}/addresses", encode_segment(id)?))
                .apply(options)?;
        self.client.dispatch(request).await
    }

    /// Generate a blockchain address that deposits into `wallet_id`
    pub async fn create_wallet_address(
        &self,
        wallet_id: &str,
        currency: Currency,
        chain: Chain,
        options: Vec<CallOption>,
    ) -> Result<DepositAddress> {
        let body = NewWalletAddress {
            currency: &currency,
            chain: &chain,
        };
        let request =
            RequestDescriptor::post(format!("v1/wallets/{}/addresses", encode_segment(wallet_id)?))
                .with_input(&body)?
                .apply(options)?;
        self.client.dispatch(request).await
    }
}
