//! Service health, account configuration, balances and business addresses

use crate::client::Client;
use crate::request::{CallOption, RequestDescriptor};
use crate::types::{Balance, Chain, Currency, DepositAddress};
use crate::Result;
use serde::{Deserialize, Serialize};

const DEPOSIT_ADDRESSES: &str = "v1/businessAccount/wallets/addresses/deposit";
const RECIPIENT_ADDRESSES: &str = "v1/businessAccount/wallets/addresses/recipient";

#[derive(Deserialize)]
struct Pong {
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentsConfiguration {
    master_wallet_id: String,
}

#[derive(Deserialize)]
struct Configuration {
    payments: PaymentsConfiguration,
}

#[derive(Serialize)]
struct NewDepositAddress<'a> {
    currency: &'a Currency,
    chain: &'a Chain,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewRecipientAddress<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<&'a Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chain: Option<&'a Chain>,
    description: &'a str,
}

/// Core account endpoints
#[derive(Debug, Clone, Copy)]
pub struct CoreApi<'a> {
    client: &'a Client,
}

impl<'a> CoreApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Check the service is reachable. True when it answers `pong`.
    pub async fn ping(&self, options: Vec<CallOption>) -> Result<bool> {
        let request = RequestDescriptor::get("ping").without_unwrap().apply(options)?;
        let pong: Pong = self.client.dispatch(request).await?;
        Ok(pong.message == "pong")
    }

    /// Id of the merchant wallet payments settle into
    pub async fn master_wallet_id(&self, options: Vec<CallOption>) -> Result<String> {
        let request = RequestDescriptor::get("v1/configuration").apply(options)?;
        let configuration: Configuration = self.client.dispatch(request).await?;
        Ok(configuration.payments.master_wallet_id)
    }

    /// Available and unsettled balances of the business account
    pub async fn balance(&self, options: Vec<CallOption>) -> Result<Balance> {
        let request = RequestDescriptor::get("v1/businessAccount/balances").apply(options)?;
        self.client.dispatch(request).await
    }

    /// Generate a blockchain address that deposits into the business account
    pub async fn create_deposit_address(
        &self,
        currency: Currency,
        chain: Chain,
        options: Vec<CallOption>,
    ) -> Result<DepositAddress> {
        let body = NewDepositAddress {
            currency: &currency,
            chain: &chain,
        };
        let request = RequestDescriptor::post(DEPOSIT_ADDRESSES)
            .with_input(&body)?
            .apply(options)?;
        self.client.dispatch(request).await
    }

    /// Deposit addresses of the business account
    pub async fn deposit_addresses(&self, options: Vec<CallOption>) -> Result<Vec<DepositAddress>> {
        let request = RequestDescriptor::get(DEPOSIT_ADDRESSES).apply(options)?;
        self.client.dispatch(request).await
    }

    /// Register an address transfers may be sent to. Returns the new address id.
    pub async fn add_recipient_address(
        &self,
        address: &DepositAddress,
        description: &str,
        options: Vec<CallOption>,
    ) -> Result<String> {
        let body = NewRecipientAddress {
            address: address.address.as_deref(),
            address_tag: address.address_tag.as_deref(),
            currency: address.currency.as_ref(),
            chain: address.chain.as_ref(),
            description,
        };
        let request = RequestDescriptor::post(RECIPIENT_ADDRESSES)
            .with_input(&body)?
            .apply(options)?;
        let created: DepositAddress = self.client.dispatch(request).await?;
        Ok(created.id.unwrap_or_default())
    }

    /// Registered recipient addresses
    pub async fn recipient_addresses(
        &self,
        options: Vec<CallOption>,
    ) -> Result<Vec<DepositAddress>> {
        let request = RequestDescriptor::get(RECIPIENT_ADDRESSES).apply(options)?;
        self.client.dispatch(request).await
    }
}
