use std::sync::Arc;

use wayfarer_core::{Envelope, NoQuery};
use wayfarer_domain::{CreateCreditCardForm, DepositForm, PaymentMethods};

use crate::api_transport::{ApiTransport, AuthPolicy};

/// Calls under `/payment`: the travel-pay wallet and registered credit
/// cards.
#[derive(Clone)]
pub struct PaymentRepository {
    transport: Arc<ApiTransport>,
}

impl PaymentRepository {
    /// Creates the repository over a shared transport.
    #[must_use]
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Fetches the wallet balance and registered cards in one call.
    pub async fn methods(&self) -> Envelope<PaymentMethods> {
        self.transport
            .get("/payment", None, &NoQuery, AuthPolicy::Enforce)
            .await
    }

    /// Tops up the travel-pay wallet.
    pub async fn deposit(&self, form: &DepositForm) -> Envelope<String> {
        self.transport
            .post("/payment/deposit", None, &NoQuery, form, AuthPolicy::Enforce)
            .await
    }

    /// Registers a credit card and returns its id.
    pub async fn create_credit_card(&self, form: &CreateCreditCardForm) -> Envelope<i64> {
        self.transport
            .post("/payment", None, &NoQuery, form, AuthPolicy::Enforce)
            .await
    }

    /// Removes a registered credit card.
    pub async fn delete_credit_card(&self, id: i64) -> Envelope<String> {
        self.transport
            .delete("/payment/{pv}", Some(&id.to_string()), AuthPolicy::Enforce)
            .await
    }
}
