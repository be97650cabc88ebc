use masking::{CardNumberStrategy, Secret};
use serde::{Deserialize, Serialize};

use crate::enums::{Currency, PaymentMethod};

/// Body of `POST /mass_transactions`, a payout to `to_card`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MassTransactionRequest {
    pub user_uuid: String,
    pub to_card: Secret<String, CardNumberStrategy>,
    pub amount: i64,
    pub callback_url: String,
    pub merchant_id: String,
    pub currency: Currency,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<u32>,
}

impl MassTransactionRequest {
    /// Request with the mandatory fields set
    pub fn new(
        user_uuid: impl Into<String>,
        merchant_id: impl Into<String>,
        to_card: impl Into<String>,
        amount: i64,
        currency: Currency,
        payment_method: PaymentMethod,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            user_uuid: user_uuid.into(),
            to_card: Secret::new(to_card.into()),
            amount,
            callback_url: callback_url.into(),
            merchant_id: merchant_id.into(),
            currency,
            payment_method,
            lifetime: None,
        }
    }

    /// Seconds the payout stays open
    pub fn lifetime(mut self, lifetime: u32) -> Self {
        self.lifetime = Some(lifetime);
        self
    }
}

/// Response of the mass transaction endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MassTransactionResponse {
    pub result_code: String,
    pub payload: MassTransactionPayload,
}

/// Payout as reported by the API. The state set of payouts is open, so it stays a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MassTransactionPayload {
    pub id: String,
    pub amount: Option<String>,
    pub commission_type: Option<String>,
    pub service_commission: Option<String>,
    pub rate: Option<String>,
    pub fiat_amount: Option<String>,
    pub old_fiat_amount: Option<String>,
    pub state: String,
    pub currency: Option<String>,
    pub r_line: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub total_amount: Option<String>,
    pub recipient_card: Option<String>,
}
