//! Payouts to bank accounts and their returns

use crate::client::Client;
use crate::request::{encode_segment, CallOption, RequestDescriptor};
use crate::types::{CreatePayoutRequest, ListPayoutsRequest, Payout, PayoutReturn};
use crate::Result;

/// Payout endpoints
#[derive(Debug, Clone, Copy)]
pub struct PayoutsApi<'a> {
    client: &'a Client,
}

impl<'a> PayoutsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Send funds from a wallet to a linked bank account
    pub async fn create_payout(
        &self,
        payout: &CreatePayoutRequest,
        options: Vec<CallOption>,
    ) -> Result<Payout> {
        let request = RequestDescriptor::post("v1/payouts")
            .with_input(payout)?
            .apply(options)?;
        self.client.dispatch(request).await
    }

    pub async fn payout(&self, id: &str, options: Vec<CallOption>) -> Result<Payout> {
        let request =
            RequestDescriptor::get(format!("v1/payouts/{}", encode_segment(id)?)).apply(options)?;
        self.client.dispatch(request).await
    }

    /// Payouts matching `filter`
    pub async fn list_payouts(
        &self,
        filter: &ListPayoutsRequest,
        options: Vec<CallOption>,
    ) -> Result<Vec<Payout>> {
        let mut request = RequestDescriptor::get("v1/payouts").apply(options)?;
        for (key, value) in filter.query_pairs() {
            request.add_query(key, value);
        }
        self.client.dispatch(request).await
    }

    /// Payouts returned by the destination bank
    pub async fn returns(&self, options: Vec<CallOption>) -> Result<Vec<PayoutReturn>> {
        let request = RequestDescriptor::get("v1/returns").apply(options)?;
        self.client.dispatch(request).await
    }
}
