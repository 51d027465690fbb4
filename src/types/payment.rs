//! Payment records and request bodies

use super::common::{Amount, CreateMetadataRequest, Metadata, RiskEvaluation, Source};
use super::enums::{
    AvsStatus, CvvStatus, Eci, PaymentErrorCode, PaymentStatus, PaymentType, RequiredActionType,
    ReversalReason, ThreeDSecureStatus, VerificationMethod,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Additional step the payer must complete, such as a 3DS redirect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredAction {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RequiredActionType>,
    /// URL the payer must be redirected to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

/// Verification results of a card payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentVerification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avs: Option<AvsStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvv: Option<CvvStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_d_secure: Option<ThreeDSecureStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eci: Option<Eci>,
}

/// A payment, or a cancel/refund object derived from one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PaymentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_wallet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    /// Whether an authorized payment has been captured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_action: Option<RequiredAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<PaymentVerification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<PaymentErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_evaluation: Option<RiskEvaluation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<DateTime<Utc>>,
    /// Cancel object, once the payment was canceled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel: Option<Box<Payment>>,
    /// Payment a cancel or refund object refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_payment: Option<Box<Payment>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub refunds: Vec<Payment>,
}

/// Body of a new card or bank payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CreateMetadataRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Capture immediately instead of only authorizing
    #[serde(default)]
    pub auto_capture: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_success_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_failure_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// CVV encrypted with the key identified by `key_id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl CreatePaymentRequest {
    /// Create a payment request for an amount from a source
    pub fn new(amount: Amount, source: Source, metadata: CreateMetadataRequest) -> Self {
        Self {
            amount: Some(amount),
            source: Some(source),
            metadata: Some(metadata),
            auto_capture: true,
            ..Default::default()
        }
    }

    /// Set the verification method
    pub fn with_verification(mut self, verification: VerificationMethod) -> Self {
        self.verification = Some(verification);
        self
    }

    /// Set the encryption key and encrypted CVV
    pub fn with_encrypted_data(
        mut self,
        key_id: impl Into<String>,
        encrypted_data: impl Into<String>,
    ) -> Self {
        self.key_id = Some(key_id.into());
        self.encrypted_data = Some(encrypted_data.into());
        self
    }

    /// Set the payment description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Body for capturing an authorized payment. Omitting the amount captures it in full.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapturePaymentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

/// Body for canceling a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelPaymentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ReversalReason>,
}

/// Body for refunding a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefundPaymentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ReversalReason>,
}

/// Filters for listing payments. Sent as query parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPaymentsRequest {
    /// Source id the payments were made from
    pub source: Option<String>,
    pub settlement_id: Option<String>,
    /// Payment types to include; repeated in the query
    pub types: Vec<PaymentType>,
    pub status: Option<PaymentStatus>,
}

impl ListPaymentsRequest {
    /// Query pairs for the filters that are set
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(source) = &self.source {
            pairs.push(("source".to_string(), source.clone()));
        }
        if let Some(settlement_id) = &self.settlement_id {
            pairs.push(("settlementId".to_string(), settlement_id.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status".to_string(), status.to_string()));
        }
        for kind in &self.types {
            pairs.push(("type".to_string(), kind.to_string()));
        }
        pairs
    }
}
