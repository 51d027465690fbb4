//! Closed string enumerations used across the API.
//!
//! Every enumerated field the service sends is modeled as a closed enum with
//! an `Unrecognized(String)` fallback, so a value added server-side decodes
//! instead of failing the whole response, and serializes back verbatim.

/// Declare a string-backed enum with an `Unrecognized(String)` fallback.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// Value not known to this version of the client
            Unrecognized(String),
        }

        impl $name {
            /// Wire representation of the value
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Unrecognized(value) => value.as_str(),
                }
            }

            /// Whether the value is outside the known set
            pub fn is_unrecognized(&self) -> bool {
                matches!(self, Self::Unrecognized(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    other => Self::Unrecognized(other.to_string()),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
                Ok(Self::from(value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                Ok(Self::from(value.as_str()))
            }
        }
    };
}

string_enum! {
    /// Currency code of an amount, balance or address.
    pub enum Currency {
        /// USDC stablecoin / US dollar
        Usd => "USD",
        /// Euro
        Eur => "EUR",
        /// Bitcoin
        Btc => "BTC",
        /// Ether
        Eth => "ETH",
    }
}

string_enum! {
    /// Blockchain a currency is available on.
    pub enum Chain {
        /// Algorand
        Algo => "ALGO",
        /// Avalanche
        Avax => "AVAX",
        /// Bitcoin
        Btc => "BTC",
        /// Ethereum
        Eth => "ETH",
        /// Flow
        Flow => "FLOW",
        /// Hedera Hashgraph
        Hbar => "HBAR",
        /// Solana
        Sol => "SOL",
        /// TRON
        Trx => "TRX",
        /// Stellar
        Xlm => "XLM",
    }
}

string_enum! {
    /// Kind of wallet.
    pub enum WalletType {
        Merchant => "merchant",
        EndUserWallet => "end_user_wallet",
    }
}

string_enum! {
    /// Kind of a transfer source or destination.
    pub enum AddressType {
        Blockchain => "blockchain",
        Wallet => "wallet",
    }
}

string_enum! {
    /// Progress of a transfer.
    pub enum TransferStatus {
        Pending => "pending",
        Complete => "complete",
        Failed => "failed",
    }
}

string_enum! {
    /// Failure reason of a transfer.
    pub enum TransferErrorCode {
        InsufficientFunds => "insufficient_funds",
        BlockchainError => "blockchain_error",
        TransferDenied => "transfer_denied",
        TransferFailed => "transfer_failed",
    }
}

string_enum! {
    /// Outcome of the service's risk evaluation.
    pub enum RiskEvaluationDecision {
        Approved => "approved",
        Denied => "denied",
        Review => "review",
    }
}

string_enum! {
    /// Type of a payment or payout source.
    pub enum SourceType {
        Card => "card",
        Ach => "ach",
        Wire => "wire",
        Sepa => "sepa",
        Wallet => "wallet",
    }
}

string_enum! {
    /// Linking status of a card.
    pub enum CardStatus {
        Pending => "pending",
        Complete => "complete",
        Failed => "failed",
    }
}

string_enum! {
    /// Card network.
    pub enum CardNetwork {
        Visa => "VISA",
        Mastercard => "MASTERCARD",
        Amex => "AMEX",
        /// The service itself could not determine the network
        Unknown => "UNKNOWN",
    }
}

string_enum! {
    /// Funding type of a card.
    pub enum CardFundingType {
        Credit => "credit",
        Debit => "debit",
        Prepaid => "prepaid",
        Unknown => "unknown",
    }
}

string_enum! {
    /// Failure reason of a card verification.
    pub enum CardErrorCode {
        VerificationFailed => "verification_failed",
        VerificationFraudDetected => "verification_fraud_detected",
        VerificationDenied => "verification_denied",
        VerificationNotSupportedByIssuer => "verification_not_supported_by_issuer",
        VerificationStoppedByIssuer => "verification_stopped_by_issuer",
        CardFailed => "card_failed",
        CardInvalid => "card_invalid",
        CardAddressMismatch => "card_address_mismatch",
        CardZipMismatch => "card_zip_mismatch",
        CardCvvInvalid => "card_cvv_invalid",
        CardExpired => "card_expired",
        CardLimitViolated => "card_limit_violated",
        CardNotHonored => "card_not_honored",
        CardCvvRequired => "card_cvv_required",
        CreditCardNotAllowed => "credit_card_not_allowed",
        CardAccountIneligible => "card_account_ineligible",
        CardNetworkUnsupported => "card_network_unsupported",
    }
}

string_enum! {
    /// Status of an AVS check. Raw single-letter AVS responses decode as
    /// `Unrecognized` and keep their letter.
    pub enum AvsStatus {
        NotRequested => "not_requested",
        Pending => "pending",
    }
}

string_enum! {
    /// Status of a CVV check.
    pub enum CvvStatus {
        NotRequested => "not_requested",
        Pass => "pass",
        Fail => "fail",
        Unavailable => "unavailable",
        Pending => "pending",
    }
}

string_enum! {
    /// Outcome of 3DS authentication.
    pub enum ThreeDSecureStatus {
        Pass => "pass",
        Fail => "fail",
    }
}

string_enum! {
    /// Electronic commerce indicator returned by the card directory servers.
    pub enum Eci {
        Eci00 => "00",
        Eci01 => "01",
        Eci02 => "02",
        Eci05 => "05",
        Eci06 => "06",
        Eci07 => "07",
    }
}

string_enum! {
    /// Linking status of a bank account.
    pub enum BankAccountStatus {
        Pending => "pending",
        Complete => "complete",
        Failed => "failed",
    }
}

string_enum! {
    /// Failure reason of an ACH bank account.
    pub enum BankAccountErrorCode {
        BankAccountAuthorizationExpired => "bank_account_authorization_expired",
        BankAccountError => "bank_account_error",
        BankAccountIneligible => "bank_account_ineligible",
        BankAccountNotFound => "bank_account_not_found",
        BankAccountUnauthorized => "bank_account_unauthorized",
        UnsupportedRoutingNumber => "unsupported_routing_number",
        VerificationFailed => "verification_failed",
    }
}

string_enum! {
    /// Type of a payment object.
    pub enum PaymentType {
        Payment => "payment",
        Refund => "refund",
        Cancel => "cancel",
    }
}

string_enum! {
    /// Processing status of a payment.
    pub enum PaymentStatus {
        Pending => "pending",
        Confirmed => "confirmed",
        Paid => "paid",
        Failed => "failed",
        ActionRequired => "action_required",
    }
}

string_enum! {
    /// Failure reason of a payment.
    pub enum PaymentErrorCode {
        PaymentFailed => "payment_failed",
        PaymentFraudDetected => "payment_fraud_detected",
        PaymentDenied => "payment_denied",
        PaymentNotSupportedByIssuer => "payment_not_supported_by_issuer",
        PaymentNotFunded => "payment_not_funded",
        PaymentUnprocessable => "payment_unprocessable",
        PaymentStoppedByIssuer => "payment_stopped_by_issuer",
        PaymentCanceled => "payment_canceled",
        PaymentReturned => "payment_returned",
        PaymentFailedBalanceCheck => "payment_failed_balance_check",
        CardFailed => "card_failed",
        CardInvalid => "card_invalid",
        CardAddressMismatch => "card_address_mismatch",
        CardZipMismatch => "card_zip_mismatch",
        CardCvvInvalid => "card_cvv_invalid",
        CardExpired => "card_expired",
        CardLimitViolated => "card_limit_violated",
        CardNotHonored => "card_not_honored",
        CardCvvRequired => "card_cvv_required",
        CreditCardNotAllowed => "credit_card_not_allowed",
        CardAccountIneligible => "card_account_ineligible",
        CardNetworkUnsupported => "card_network_unsupported",
        ChannelInvalid => "channel_invalid",
        UnauthorizedTransaction => "unauthorized_transaction",
        BankAccountIneligible => "bank_account_ineligible",
        BankTransactionError => "bank_transaction_error",
        InvalidAccountNumber => "invalid_account_number",
        InvalidWireRtn => "invalid_wire_rtn",
        InvalidAchRtn => "invalid_ach_rtn",
        VendorInactive => "vendor_inactive",
    }
}

string_enum! {
    /// Additional step required to complete a payment.
    pub enum RequiredActionType {
        ThreeDSecureRequired => "three_d_secure_required",
    }
}

string_enum! {
    /// Verification method requested for a new payment.
    pub enum VerificationMethod {
        None => "none",
        Cvv => "cvv",
        ThreeDSecure => "three_d_secure",
    }
}

string_enum! {
    /// Processing status of a payout.
    pub enum PayoutStatus {
        Pending => "pending",
        Complete => "complete",
        Failed => "failed",
    }
}

string_enum! {
    /// Destination bank account type of a payout.
    pub enum PayoutDestinationType {
        Wire => "wire",
        Ach => "ach",
        Sepa => "sepa",
    }
}

string_enum! {
    /// Failure reason of a payout.
    pub enum PayoutErrorCode {
        InsufficientFunds => "insufficient_funds",
        TransactionDenied => "transaction_denied",
        TransactionFailed => "transaction_failed",
        TransactionReturned => "transaction_returned",
        BankTransactionError => "bank_transaction_error",
        FiatAccountLimitExceeded => "fiat_account_limit_exceeded",
        InvalidBankAccountNumber => "invalid_bank_account_number",
        InvalidAchRtn => "invalid_ach_rtn",
        InvalidWireRtn => "invalid_wire_rtn",
        VendorInactive => "vendor_inactive",
    }
}

string_enum! {
    /// Processing status of a payout return.
    pub enum PayoutReturnStatus {
        Pending => "pending",
        Complete => "complete",
        Failed => "failed",
    }
}

string_enum! {
    /// Processing status of a reversal.
    pub enum ReversalStatus {
        Pending => "pending",
        Confirmed => "confirmed",
        Paid => "paid",
        Failed => "failed",
    }
}

string_enum! {
    /// Reason a payment was returned, canceled or refunded.
    pub enum ReversalReason {
        Duplicate => "duplicate",
        Fraudulent => "fraudulent",
        RequestedByCustomer => "requested_by_customer",
        BankTransactionError => "bank_transaction_error",
        InvalidAccountNumber => "invalid_account_number",
        InsufficientFunds => "insufficient_funds",
        PaymentStoppedByIssuer => "payment_stopped_by_issuer",
        PaymentReturned => "payment_returned",
        BankAccountIneligible => "bank_account_ineligible",
        InvalidAchRtn => "invalid_ach_rtn",
        UnauthorizedTransaction => "unauthorized_transaction",
        PaymentFailed => "payment_failed",
    }
}

string_enum! {
    /// Category of a chargeback, derived from the network status code.
    pub enum ChargeBackCategory {
        CanceledRecurringPayment => "Canceled Recurring Payment",
        CustomerDispute => "Customer Dispute",
        Fraudulent => "Fraudulent",
        General => "General",
        ProcessingError => "Processing Error",
        NotDefined => "Not Defined",
    }
}

string_enum! {
    /// Stage of the dispute procedure a chargeback history entry records.
    pub enum ChargeBackHistoryType {
        FirstChargeBack => "1st Chargeback",
        SecondChargeBack => "2nd Chargeback",
        ChargeBackReversal => "Chargeback Reversal",
        Representment => "Representment",
        ChargeBackSettlement => "Chargeback Settlement",
    }
}

string_enum! {
    /// Type of a field-level violation in an error response.
    pub enum ErrorDetailKind {
        InvalidValue => "invalid_value",
        ValueMustBeTrue => "value_must_be_true",
        ValueMustBeFalse => "value_must_be_false",
        Required => "required",
        NumberFormat => "number_format",
        MinValue => "min_value",
        MaxValue => "max_value",
        LengthOutsideBounds => "length_outside_bounds",
        PatternMismatch => "pattern_mismatch",
        DateFormat => "date_format",
        UnrecognizedField => "unrecognized_field",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_decode() {
        let status: PaymentStatus = serde_json::from_str("\"action_required\"").unwrap();
        assert_eq!(status, PaymentStatus::ActionRequired);

        let category: ChargeBackCategory =
            serde_json::from_str("\"Canceled Recurring Payment\"").unwrap();
        assert_eq!(category, ChargeBackCategory::CanceledRecurringPayment);
    }

    #[test]
    fn test_unknown_value_is_preserved() {
        let status: PayoutStatus = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(status, PayoutStatus::Unrecognized("on_hold".to_string()));
        assert!(status.is_unrecognized());
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"on_hold\"");
    }

    #[test]
    fn test_network_unknown_is_a_real_value() {
        assert_eq!(CardNetwork::from("UNKNOWN"), CardNetwork::Unknown);
        assert!(!CardNetwork::Unknown.is_unrecognized());
        assert_eq!(CardNetwork::from("DISCOVER").as_str(), "DISCOVER");
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(Chain::Algo.to_string(), "ALGO");
        assert_eq!("ETH".parse::<Currency>().unwrap(), Currency::Eth);
        assert_eq!(Eci::Eci05.as_str(), "05");
    }
}
