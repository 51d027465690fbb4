//! Card and bank payments, and the records that follow them

use crate::client::Client;
use crate::request::{encode_segment, CallOption, RequestDescriptor};
use crate::types::{
    BankAccount, CancelPaymentRequest, CapturePaymentRequest, Card, ChargeBack,
    CreateBankAccountRequest, CreateCardRequest, CreatePaymentRequest, ListPaymentsRequest,
    Payment, RefundPaymentRequest, Reversal, ReversalStatus, Settlement, UpdateCardRequest,
};
use crate::Result;

/// Payments endpoints
#[derive(Debug, Clone, Copy)]
pub struct PaymentsApi<'a> {
    client: &'a Client,
}

impl<'a> PaymentsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Link a card for future payments
    pub async fn create_card(
        &self,
        card: &CreateCardRequest,
        options: Vec<CallOption>,
    ) -> Result<Card> {
        let request = RequestDescriptor::post("v1/cards")
            .with_input(card)?
            .apply(options)?;
        self.client.dispatch(request).await
    }

    pub async fn card(&self, id: &str, options: Vec<CallOption>) -> Result<Card> {
        let request =
            RequestDescriptor::get(format!("v1/cards/{}", encode_segment(id)?)).apply(options)?;
        self.client.dispatch(request).await
    }

    pub async fn cards(&self, options: Vec<CallOption>) -> Result<Vec<Card>> {
        let request = RequestDescriptor::get("v1/cards").apply(options)?;
        self.client.dispatch(request).await
    }

    /// Update the expiry or encrypted details of a linked card
    pub async fn update_card(
        &self,
        id: &str,
        update: &UpdateCardRequest,
        options: Vec<CallOption>,
    ) -> Result<Card> {
        let request = RequestDescriptor::put(format!("v1/cards/{}", encode_segment(id)?))
            .with_input(update)?
            .apply(options)?;
        self.client.dispatch(request).await
    }

    /// Link an ACH bank account
    pub async fn create_bank_account(
        &self,
        account: &CreateBankAccountRequest,
        options: Vec<CallOption>,
    ) -> Result<BankAccount> {
        let request = RequestDescriptor::post("v1/banks/ach")
            .with_input(account)?
            .apply(options)?;
        self.client.dispatch(request).await
    }

    pub async fn bank_account(&self, id: &str, options: Vec<CallOption>) -> Result<BankAccount> {
        let request = RequestDescriptor::get(format!("v1/banks/ach/{}", encode_segment(id)?))
            .apply(options)?;
        self.client.dispatch(request).await
    }

    /// Charge a card or bank account
    pub async fn create_payment(
        &self,
        payment: &CreatePaymentRequest,
        options: Vec<CallOption>,
    ) -> Result<Payment> {
        let request = RequestDescriptor::post("v1/payments")
            .with_input(payment)?
            .apply(options)?;
        self.client.dispatch(request).await
    }

    pub async fn payment(&self, id: &str, options: Vec<CallOption>) -> Result<Payment> {
        let request =
            RequestDescriptor::get(format!("v1/payments/{}", encode_segment(id)?)).apply(options)?;
        self.client.dispatch(request).await
    }

    /// Payments matching `filter`
    pub async fn list_payments(
        &self,
        filter: &ListPaymentsRequest,
        options: Vec<CallOption>,
    ) -> Result<Vec<Payment>> {
        let mut request = RequestDescriptor::get("v1/payments").apply(options)?;
        for (key, value) in filter.query_pairs() {
            request.add_query(key, value);
        }
        self.client.dispatch(request).await
    }

    /// Capture an authorized payment
    pub async fn capture_payment(
        &self,
        id: &str,
        capture: &CapturePaymentRequest,
        options: Vec<CallOption>,
    ) -> Result<()> {
        let request =
            RequestDescriptor::post(format!("v1/payments/{}/capture", encode_segment(id)?))
                .with_input(capture)?
                .apply(options)?;
        self.client.dispatch_discard(request).await
    }

    /// Void a payment, or refund it when it can no longer be voided.
    /// Success means the request was accepted, not that the payment is canceled yet.
    pub async fn cancel_payment(
        &self,
        id: &str,
        cancel: &CancelPaymentRequest,
        options: Vec<CallOption>,
    ) -> Result<Payment> {
        let request =
            RequestDescriptor::post(format!("v1/payments/{}/cancel", encode_segment(id)?))
                .with_input(cancel)?
                .apply(options)?;
        self.client.dispatch(request).await
    }

    /// Refund a settled payment, fully or partially
    pub async fn refund_payment(
        &self,
        id: &str,
        refund: &RefundPaymentRequest,
        options: Vec<CallOption>,
    ) -> Result<Payment> {
        let request =
            RequestDescriptor::post(format!("v1/payments/{}/refund", encode_segment(id)?))
                .with_input(refund)?
                .apply(options)?;
        self.client.dispatch(request).await
    }

    pub async fn settlement(&self, id: &str, options: Vec<CallOption>) -> Result<Settlement> {
        let request = RequestDescriptor::get(format!("v1/settlements/{}", encode_segment(id)?))
            .apply(options)?;
        self.client.dispatch(request).await
    }

    pub async fn settlements(&self, options: Vec<CallOption>) -> Result<Vec<Settlement>> {
        let request = RequestDescriptor::get("v1/settlements").apply(options)?;
        self.client.dispatch(request).await
    }

    pub async fn chargeback(&self, id: &str, options: Vec<CallOption>) -> Result<ChargeBack> {
        let request = RequestDescriptor::get(format!("v1/chargebacks/{}", encode_segment(id)?))
            .apply(options)?;
        self.client.dispatch(request).await
    }

    /// Chargebacks, optionally only those raised against `payment_id`
    pub async fn chargebacks(
        &self,
        payment_id: Option<&str>,
        options: Vec<CallOption>,
    ) -> Result<Vec<ChargeBack>> {
        let mut request = RequestDescriptor::get("v1/chargebacks").apply(options)?;
        if let Some(payment_id) = payment_id.filter(|id| !id.is_empty()) {
            request.set_query("paymentID", payment_id);
        }
        self.client.dispatch(request).await
    }

    /// Returned ACH payments, optionally only those in `status`
    pub async fn reversals(
        &self,
        status: Option<ReversalStatus>,
        options: Vec<CallOption>,
    ) -> Result<Vec<Reversal>> {
        let mut request = RequestDescriptor::get("v1/reversals").apply(options)?;
        if let Some(status) = status {
            request.set_query("status", status.as_str());
        }
        self.client.dispatch(request).await
    }
}
