//! Records shared by several resources

use super::enums::{Currency, RiskEvaluationDecision, SourceType};
use crate::{CircleError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An amount/currency pair.
///
/// The magnitude stays a string on the wire; use [`Amount::value`] for arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    /// Magnitude of the amount, in units of the currency
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub amount: String,
    /// Currency code for the amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

impl Amount {
    /// Create a new amount
    pub fn new(amount: impl Into<String>, currency: Currency) -> Self {
        Self {
            amount: amount.into(),
            currency: Some(currency),
        }
    }

    /// Create a USD amount
    pub fn usd(amount: impl Into<String>) -> Self {
        Self::new(amount, Currency::Usd)
    }

    /// Parse the magnitude as a decimal
    pub fn value(&self) -> Result<Decimal> {
        Decimal::from_str(&self.amount).map_err(|e| {
            CircleError::invalid_input(format!("Invalid amount '{}': {}", self.amount, e))
        })
    }
}

/// Billing details of a card or bank account holder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingDetails {
    /// Full name of the card or bank account holder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// State, county, province or region. Two-letter subdivision code for US and Canada.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Contact metadata attached to an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number in E.164 format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Metadata sent when creating cards, bank accounts and payments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMetadataRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number in E.164 format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Hash of the end user's session identifier, never the raw identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// IPv4 or IPv6 address of the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl CreateMetadataRequest {
    /// Create metadata with the fields the service requires
    pub fn new(
        email: impl Into<String>,
        session_id: impl Into<String>,
        ip_address: impl Into<String>,
    ) -> Self {
        Self {
            email: Some(email.into()),
            phone_number: None,
            session_id: Some(session_id.into()),
            ip_address: Some(ip_address.into()),
        }
    }

    /// Set the phone number
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }
}

/// Result of the service's risk evaluation, present when a request was denied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskEvaluation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<RiskEvaluationDecision>,
    /// Reason for the decision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Funding source of a payment or payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SourceType,
}

impl Source {
    /// Create a new source
    pub fn new(id: impl Into<String>, kind: SourceType) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// A card source
    pub fn card(id: impl Into<String>) -> Self {
        Self::new(id, SourceType::Card)
    }
}
