use serde::{Deserialize, Serialize};

/// Travel-pay wallet balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPay {
    /// Stable wallet id.
    pub id: i64,
    /// Current balance.
    pub balance: i64,
}

/// Registered credit card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    /// Stable card id.
    pub id: i64,
    /// Card product name.
    pub card_name: String,
    /// Name of the card holder.
    pub owner_name: String,
    /// Card number, as the backend masks it.
    pub card_number: String,
}

/// Everything a member can pay with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethods {
    /// Travel-pay wallet.
    pub travel_pay: TravelPay,
    /// Registered credit cards.
    pub credit_cards: Vec<CreditCard>,
}

/// Which kind of payment instrument a reservation charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentKind {
    /// Charge a registered credit card.
    CreditCard,
    /// Spend from the travel-pay wallet.
    TravelPay,
}

impl PaymentKind {
    /// Wire token for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "CREDIT_CARD",
            Self::TravelPay => "TRAVEL_PAY",
        }
    }
}

/// Payment instrument selected for a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    /// Kind of instrument.
    pub payment_type: PaymentKind,
    /// Id of the wallet or card within that kind.
    pub payment_method_id: i64,
}

/// Request to top up the travel-pay wallet.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositForm {
    /// Amount to add to the balance.
    pub deposit_amount: i64,
}

/// Request to register a credit card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCreditCardForm {
    /// Name of the card holder.
    pub card_owner: String,
    /// Card number.
    pub card_number: String,
    /// Card product name.
    pub card_name: String,
}
