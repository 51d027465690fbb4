//! Business account, wallet and transfer records

use super::common::Amount;
use super::enums::{AddressType, Chain, Currency, TransferErrorCode, TransferStatus, WalletType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Balances of the business account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Funds available for payouts and transfers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available: Vec<Amount>,
    /// Funds from payments that have not settled yet
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unsettled: Vec<Amount>,
}

/// A blockchain address, either for deposits or as a transfer recipient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<AddressType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Secondary identifier (memo, destination tag) required by some chains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<Chain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DepositAddress {
    /// A blockchain address on a chain
    pub fn blockchain(address: impl Into<String>, currency: Currency, chain: Chain) -> Self {
        Self {
            kind: Some(AddressType::Blockchain),
            address: Some(address.into()),
            currency: Some(currency),
            chain: Some(chain),
            ..Default::default()
        }
    }

    /// Set the address tag
    pub fn with_address_tag(mut self, tag: impl Into<String>) -> Self {
        self.address_tag = Some(tag.into());
        self
    }
}

/// A wallet holding balances on behalf of the merchant or an end user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    #[serde(
        rename = "walletId",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Entity the wallet belongs to
    #[serde(rename = "entityId", default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<WalletType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub balances: Vec<Amount>,
}

/// Source or destination of a transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferEndpoint {
    #[serde(rename = "type")]
    pub kind: AddressType,
    /// Wallet id, for `wallet` endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Blockchain address, for `blockchain` endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<Chain>,
}

impl TransferEndpoint {
    /// A wallet endpoint
    pub fn wallet(id: impl Into<String>) -> Self {
        Self {
            kind: AddressType::Wallet,
            id: Some(id.into()),
            address: None,
            address_tag: None,
            chain: None,
        }
    }

    /// A blockchain endpoint
    pub fn blockchain(address: impl Into<String>, chain: Chain) -> Self {
        Self {
            kind: AddressType::Blockchain,
            id: None,
            address: Some(address.into()),
            address_tag: None,
            chain: Some(chain),
        }
    }
}

/// A transfer of funds between wallets or to a blockchain address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<DepositAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<DepositAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// On-chain transaction hash, once broadcast
    #[serde(
        rename = "transactionHash",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub tx_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransferStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<TransferErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
}

/// Body of a new transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransferRequest {
    pub source: TransferEndpoint,
    pub destination: TransferEndpoint,
    pub amount: Amount,
}

impl CreateTransferRequest {
    /// Create a new transfer request
    pub fn new(source: TransferEndpoint, destination: TransferEndpoint, amount: Amount) -> Self {
        Self {
            source,
            destination,
            amount,
        }
    }
}
