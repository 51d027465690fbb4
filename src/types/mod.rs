//! Request and response records of the Circle API

pub mod account;
pub mod card;
pub mod common;
pub mod enums;
pub mod payment;
pub mod payout;
pub mod settlement;

pub use account::*;
pub use card::*;
pub use common::*;
pub use enums::*;
pub use payment::*;
pub use payout::*;
pub use settlement::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use serde_json::{json, Value};
    use std::fmt::Debug;

    /// Decode `fixture`, encode it again and expect the same JSON back
    fn assert_round_trip<T>(fixture: Value)
    where
        T: Serialize + DeserializeOwned + PartialEq + Debug,
    {
        let decoded: T = serde_json::from_value(fixture.clone()).unwrap();
        let encoded = serde_json::to_value(&decoded).unwrap();
        assert_eq!(encoded, fixture);

        let again: T = serde_json::from_value(encoded).unwrap();
        assert_eq!(again, decoded);
    }

    #[test]
    fn test_payment_round_trip() {
        let payment = Payment {
            id: Some("p1".to_string()),
            kind: Some(PaymentType::Payment),
            amount: Some(Amount::usd("3.14")),
            source: Some(Source::card("c1")),
            status: Some(PaymentStatus::Unrecognized("held".to_string())),
            captured: Some(false),
            create_date: Some(Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap()),
            refunds: vec![Payment {
                id: Some("r1".to_string()),
                kind: Some(PaymentType::Refund),
                ..Default::default()
            }],
            ..Default::default()
        };

        let json = serde_json::to_string(&payment).unwrap();
        let decoded: Payment = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, payment);
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_empty_record_serializes_to_empty_object() {
        assert_eq!(serde_json::to_string(&Wallet::default()).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&Payout::default()).unwrap(), "{}");
    }

    #[test]
    fn test_account_records_round_trip() {
        assert_round_trip::<Balance>(json!({
            "available": [{"amount": "3.14", "currency": "USD"}],
            "unsettled": [{"amount": "0.50", "currency": "USD"}]
        }));
        assert_round_trip::<DepositAddress>(json!({
            "id": "a1",
            "type": "blockchain",
            "address": "rKdPAqR1hX3szb2bdqzLrqqkHbdgJb6PAX",
            "addressTag": "3907544265",
            "currency": "USD",
            "chain": "XLM",
            "description": "treasury"
        }));
        assert_round_trip::<Wallet>(json!({
            "walletId": "1000038499",
            "entityId": "0bd0b8d1-b2fb-4be1-8c0b-5b6cae6a8dc5",
            "type": "end_user_wallet",
            "description": "Savings",
            "balances": [{"amount": "10.00", "currency": "USD"}]
        }));
        assert_round_trip::<Transfer>(json!({
            "id": "t1",
            "source": {"type": "wallet", "id": "1000038499"},
            "destination": {"type": "blockchain", "address": "0x8381470ED67C3802402dbbFa0058E8871F017A6F", "chain": "ETH"},
            "amount": {"amount": "3.14", "currency": "USD"},
            "transactionHash": "0x4cebf8f90c9243a23c77e4ae20df691469e4b933",
            "status": "failed",
            "errorCode": "insufficient_funds",
            "createDate": "2020-04-10T02:13:30Z"
        }));
    }

    #[test]
    fn test_funding_records_round_trip() {
        assert_round_trip::<Card>(json!({
            "id": "b8627ae8-732b-4d25-b947-1df8f4007a29",
            "status": "complete",
            "billingDetails": {
                "name": "Satoshi Nakamoto",
                "city": "Boston",
                "country": "US",
                "line1": "100 Money Street",
                "district": "MA",
                "postalCode": "01234"
            },
            "expMonth": 1,
            "expYear": 2025,
            "network": "VISA",
            "last4": "0123",
            "bin": "401230",
            "issuerCountry": "US",
            "fundingType": "credit",
            "fingerprint": "eb170539-9e1c-4e92-bf4f-1d09534fdca2",
            "verification": {"avs": "not_requested", "cvv": "pass"},
            "riskEvaluation": {"decision": "approved", "reason": "3000"},
            "metadata": {"email": "satoshi@circle.com", "phoneNumber": "+14155555555"},
            "createDate": "2020-04-10T02:13:30Z",
            "updateDate": "2020-04-10T02:13:30Z"
        }));
        assert_round_trip::<BankAccount>(json!({
            "id": "e553417d-fe7a-4b7a-8d06-ff4de80a0d65",
            "status": "pending",
            "accountNumber": "****0123",
            "routingNumber": "121000248",
            "billingDetails": {"name": "Satoshi Nakamoto", "country": "US"},
            "bankAddress": {
                "bankName": "SAN FRANCISCO",
                "city": "SAN FRANCISCO",
                "country": "US",
                "line1": "100 Money Street",
                "line2": "Suite 1",
                "district": "CA"
            },
            "fingerprint": "eb170539-9e1c-4e92-bf4f-1d09534fdca2",
            "metadata": {"email": "satoshi@circle.com"},
            "createDate": "2020-04-10T02:13:30Z",
            "updateDate": "2020-04-10T02:13:30Z"
        }));
    }

    #[test]
    fn test_payout_records_round_trip() {
        let payout_return = json!({
            "id": "ret1",
            "payoutId": "po1",
            "amount": {"amount": "3.14", "currency": "USD"},
            "fees": {"amount": "2.00", "currency": "USD"},
            "reason": "payout_returned",
            "status": "complete",
            "createDate": "2020-04-10T02:13:30Z",
            "updateDate": "2020-04-11T02:13:30Z"
        });
        assert_round_trip::<PayoutReturn>(payout_return.clone());
        assert_round_trip::<Payout>(json!({
            "id": "po1",
            "sourceWalletId": "1000038499",
            "destination": {"id": "d1", "type": "wire", "name": "SAN FRANCISCO ****0123"},
            "amount": {"amount": "3.14", "currency": "USD"},
            "fees": {"amount": "2.00", "currency": "USD"},
            "status": "failed",
            "trackingRef": "CIR13FB13A",
            "externalRef": "ext-1",
            "errorCode": "insufficient_funds",
            "riskEvaluation": {"decision": "denied", "reason": "3000"},
            "adjustments": {
                "fxCredit": {"amount": "0.01", "currency": "USD"},
                "fxDebit": {"amount": "0.02", "currency": "USD"}
            },
            "return": payout_return,
            "createDate": "2020-04-10T02:13:30Z",
            "updateDate": "2020-04-10T02:13:30Z"
        }));
    }

    #[test]
    fn test_settlement_records_round_trip() {
        assert_round_trip::<Settlement>(json!({
            "id": "s1",
            "merchantWalletId": "1000038499",
            "walletId": "1000038500",
            "totalDebits": {"amount": "1.00", "currency": "USD"},
            "totalCredits": {"amount": "10.00", "currency": "USD"},
            "paymentFees": {"amount": "0.30", "currency": "USD"},
            "chargebackFees": {"amount": "15.00", "currency": "USD"},
            "createDate": "2020-04-10T02:13:30Z",
            "updateDate": "2020-04-10T02:13:30Z"
        }));
        assert_round_trip::<ChargeBack>(json!({
            "id": "cb1",
            "paymentId": "p1",
            "merchantId": "m1",
            "reasonCode": "10.4",
            "category": "Fraudulent",
            "history": [{
                "type": "1st Chargeback",
                "chargebackAmount": {"amount": "3.14", "currency": "USD"},
                "fee": {"amount": "15.00", "currency": "USD"},
                "description": "Fraud",
                "settlementId": "s1",
                "createDate": "2020-04-10T02:13:30Z"
            }]
        }));
        assert_round_trip::<Reversal>(json!({
            "id": "rv1",
            "paymentId": "p1",
            "amount": {"amount": "3.14", "currency": "USD"},
            "description": "Merchant refund",
            "status": "paid",
            "reason": "duplicate",
            "fees": {"amount": "0.10", "currency": "USD"},
            "createDate": "2020-04-10T02:13:30Z",
            "updateDate": "2020-04-10T02:13:30Z"
        }));
    }

    #[test]
    fn test_chargeback_amount_alias() {
        let chargeback: ChargeBack = serde_json::from_value(json!({
            "id": "cb1",
            "history": [{"type": "1st Chargeback", "chargeBackAmount": {"amount": "3.14", "currency": "USD"}}]
        }))
        .unwrap();
        assert_eq!(
            chargeback.history[0].chargeback_amount,
            Some(Amount::usd("3.14"))
        );

        let json = serde_json::to_value(&chargeback).unwrap();
        assert_eq!(json["history"][0]["chargebackAmount"]["amount"], "3.14");
        assert!(json["history"][0].get("chargeBackAmount").is_none());
    }
}
