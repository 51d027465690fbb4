//! Payout records and request bodies

use super::common::{Amount, RiskEvaluation, Source};
use super::enums::{PayoutDestinationType, PayoutErrorCode, PayoutReturnStatus, PayoutStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bank account a payout is sent to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutDestination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PayoutDestinationType>,
    /// Bank name followed by the last four digits of the account number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Foreign exchange adjustments applied to a payout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutAdjustment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fx_credit: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fx_debit: Option<Amount>,
}

/// Funds returned by the destination bank after a payout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutReturn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<Amount>,
    /// Bank-provided return reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PayoutReturnStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<DateTime<Utc>>,
}

/// A payout from a merchant wallet to a bank account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_wallet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<PayoutDestination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PayoutStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<PayoutErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_evaluation: Option<RiskEvaluation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustments: Option<PayoutAdjustment>,
    #[serde(rename = "return", default, skip_serializing_if = "Option::is_none")]
    pub payout_return: Option<PayoutReturn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<DateTime<Utc>>,
}

/// Metadata of a new payout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayoutMetadataRequest {
    /// Email of the beneficiary, notified when the payout is sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_email: Option<String>,
}

/// Body of a new payout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayoutRequest {
    /// Source wallet; the merchant wallet when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_destination: Option<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CreatePayoutMetadataRequest>,
}

impl CreatePayoutRequest {
    /// Create a payout of an amount to a bank account
    pub fn new(destination: Source, amount: Amount) -> Self {
        Self {
            payout_destination: Some(destination),
            amount: Some(amount),
            ..Default::default()
        }
    }

    /// Set the beneficiary email
    pub fn with_beneficiary_email(mut self, email: impl Into<String>) -> Self {
        self.metadata = Some(CreatePayoutMetadataRequest {
            beneficiary_email: Some(email.into()),
        });
        self
    }
}

/// Filters for listing payouts. Sent as query parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPayoutsRequest {
    /// Source wallet id
    pub source: Option<String>,
    /// Destination bank account id
    pub destination: Option<String>,
    /// Destination types to include; repeated in the query
    pub types: Vec<PayoutDestinationType>,
    /// Statuses to include; repeated in the query
    pub statuses: Vec<PayoutStatus>,
}

impl ListPayoutsRequest {
    /// Query pairs for the filters that are set
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(source) = &self.source {
            pairs.push(("source".to_string(), source.clone()));
        }
        if let Some(destination) = &self.destination {
            pairs.push(("destination".to_string(), destination.clone()));
        }
        for status in &self.statuses {
            pairs.push(("status".to_string(), status.to_string()));
        }
        for kind in &self.types {
            pairs.push(("type".to_string(), kind.to_string()));
        }
        pairs
    }
}
