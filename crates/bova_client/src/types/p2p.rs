use std::{fmt, io::Read, path::Path};

use masking::{CardNumberStrategy, Secret};
use serde::{Deserialize, Serialize};

use crate::enums::{Currency, PayeerType, PaymentMethod, TransactionState};

/// Body of `POST /p2p_transactions`.
///
/// [`P2PTransactionRequest::new`] takes every field the API requires; the rest are set with the
/// consuming setters and left out of the JSON body while unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct P2PTransactionRequest {
    pub user_uuid: String,
    pub merchant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    pub amount: i64,
    pub callback_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payeer_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payeer_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payeer_card_number: Option<Secret<String, CardNumberStrategy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payeer_type: Option<PayeerType>,
    /// Seconds the transaction waits for the payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<u32>,
    pub payment_method: PaymentMethod,
}

impl P2PTransactionRequest {
    /// Request with the mandatory fields set
    pub fn new(
        user_uuid: impl Into<String>,
        merchant_id: impl Into<String>,
        amount: i64,
        currency: Currency,
        payment_method: PaymentMethod,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            user_uuid: user_uuid.into(),
            merchant_id: merchant_id.into(),
            bank_name: None,
            amount,
            callback_url: callback_url.into(),
            redirect_url: None,
            email: None,
            customer_name: None,
            currency,
            payeer_identifier: None,
            payeer_ip: None,
            payeer_card_number: None,
            payeer_type: None,
            lifetime: None,
            payment_method,
        }
    }

    /// Bank the payer prefers to pay from
    pub fn bank_name(mut self, bank_name: impl Into<String>) -> Self {
        self.bank_name = Some(bank_name.into());
        self
    }

    /// Where the payer lands after the payment form
    pub fn redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
        self.redirect_url = Some(redirect_url.into());
        self
    }

    /// Payer e-mail
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Payer name
    pub fn customer_name(mut self, customer_name: impl Into<String>) -> Self {
        self.customer_name = Some(customer_name.into());
        self
    }

    /// Merchant side identifier of the payer
    pub fn payeer_identifier(mut self, payeer_identifier: impl Into<String>) -> Self {
        self.payeer_identifier = Some(payeer_identifier.into());
        self
    }

    /// IP address of the payer
    pub fn payeer_ip(mut self, payeer_ip: impl Into<String>) -> Self {
        self.payeer_ip = Some(payeer_ip.into());
        self
    }

    /// Card the payer pays from
    pub fn payeer_card_number(mut self, card_number: impl Into<String>) -> Self {
        self.payeer_card_number = Some(Secret::new(card_number.into()));
        self
    }

    /// Trust level of the payer
    pub fn payeer_type(mut self, payeer_type: PayeerType) -> Self {
        self.payeer_type = Some(payeer_type);
        self
    }

    /// Seconds the transaction waits for the payment
    pub fn lifetime(mut self, lifetime: u32) -> Self {
        self.lifetime = Some(lifetime);
        self
    }
}

/// Response of the P2P transaction endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct P2PTransactionResponse {
    pub result_code: String,
    pub payload: P2PTransactionPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct P2PTransactionPayload {
    pub id: String,
    pub merchant_id: Option<String>,
    pub currency: Option<Currency>,
    /// Payment page the payer is sent to
    pub form_url: Option<String>,
    pub state: TransactionState,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub close_at: Option<String>,
    pub callback_url: Option<String>,
    pub redirect_url: Option<String>,
    pub email: Option<String>,
    pub customer_name: Option<String>,
    pub rate: Option<String>,
    pub amount: Option<String>,
    pub fiat_amount: Option<String>,
    pub old_fiat_amount: Option<String>,
    pub service_commission: Option<String>,
    pub total_amount: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    // the API spells this key "resipient_card"
    #[serde(rename = "resipient_card", alias = "recipient_card")]
    pub recipient_card: Option<P2PRecipientCard>,
}

/// Card the payer transfers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct P2PRecipientCard {
    pub id: Option<String>,
    pub number: Option<String>,
    pub bank_name: Option<String>,
    pub bank_full_name: Option<String>,
    pub bank_colors: Option<serde_json::Value>,
    pub brand: Option<String>,
    pub card_holder: Option<String>,
    pub payment_method: Option<String>,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
    pub sberpay_url: Option<String>,
}

/// Short transaction shape some API versions return for the paid and cancel transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct P2PTransactionShortResponse {
    pub result_code: String,
    pub payload: P2PTransactionShortPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct P2PTransactionShortPayload {
    pub id: String,
    pub merchant_id: Option<String>,
    pub amount: Option<String>,
    pub old_amount: Option<String>,
    pub form_url: Option<String>,
    pub state: TransactionState,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub callback_url: Option<String>,
    #[serde(rename = "resipient_card", alias = "recipient_card")]
    pub recipient_card: Option<P2PDisputeRecipientCard>,
}

/// A proof artifact for a dispute: a file name and the stream its bytes are read from.
///
/// The stream is read once when the dispute is sent and dropped right after.
pub struct ProofImage {
    file_name: String,
    reader: Box<dyn Read + Send>,
}

impl ProofImage {
    /// Proof read from an arbitrary stream
    pub fn new(file_name: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
        Self {
            file_name: file_name.into(),
            reader: Box::new(reader),
        }
    }

    /// Proof read from a file on disk, named after the last path component
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(file_name, file))
    }

    /// Name sent with the file part
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub(crate) fn into_parts(self) -> (String, Box<dyn Read + Send>) {
        (self.file_name, self.reader)
    }
}

impl fmt::Debug for ProofImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProofImage")
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}

/// Dispute on a P2P transaction, sent as `multipart/form-data`.
///
/// Sending consumes the request, so both proof streams are released whatever the outcome.
#[derive(Debug)]
pub struct P2PDisputeRequest {
    pub transaction_id: String,
    pub amount: i64,
    pub proof_image: ProofImage,
    pub proof_image2: Option<ProofImage>,
}

impl P2PDisputeRequest {
    /// Dispute with the mandatory proof
    pub fn new(transaction_id: impl Into<String>, amount: i64, proof_image: ProofImage) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            amount,
            proof_image,
            proof_image2: None,
        }
    }

    /// Second, optional proof
    pub fn proof_image2(mut self, proof_image: ProofImage) -> Self {
        self.proof_image2 = Some(proof_image);
        self
    }
}

/// Response of `POST /p2p_disputes/from_client`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct P2PDisputeResponse {
    pub id: i64,
    pub state: String,
    pub proof_image: Option<String>,
    pub proof_image2: Option<String>,
    pub p2p_transaction_id: String,
    #[serde(default)]
    pub repeated: bool,
    pub amount: i64,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
    #[serde(rename = "resipient_card", alias = "recipient_card")]
    pub recipient_card: Option<P2PDisputeRecipientCard>,
}

/// Recipient card as embedded in disputes and short transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct P2PDisputeRecipientCard {
    pub id: Option<i64>,
    pub number: Option<String>,
    pub bank_name: Option<String>,
    pub bank_colors: Option<serde_json::Value>,
    pub brand: Option<String>,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use common_utils::ext_traits::{ByteSliceExt, Encode};
    use serde_json::json;

    use super::*;

    fn request() -> P2PTransactionRequest {
        P2PTransactionRequest::new(
            "364dbfc8-ae50-492f-bdd9-748edd84d5c9",
            "merchant-1",
            300,
            Currency::Rub,
            PaymentMethod::Card,
            "https://example.com/callback",
        )
    }

    #[test]
    fn unset_optional_fields_are_omitted() {
        let body = request()
            .encode_to_string_of_json()
            .expect("serialize request");

        assert_eq!(
            body,
            r#"{"user_uuid":"364dbfc8-ae50-492f-bdd9-748edd84d5c9","merchant_id":"merchant-1","amount":300,"callback_url":"https://example.com/callback","currency":"rub","payment_method":"card"}"#
        );
    }

    #[test]
    fn set_fields_are_sent_even_when_empty() {
        let value: serde_json::Value = serde_json::from_str(
            &request()
                .email("")
                .payeer_type(PayeerType::Ftd)
                .payeer_card_number("4111111111111111")
                .lifetime(900)
                .encode_to_string_of_json()
                .expect("serialize request"),
        )
        .expect("valid json");

        assert_eq!(value["email"], json!(""));
        assert_eq!(value["payeer_type"], json!("ftd"));
        assert_eq!(value["payeer_card_number"], json!("4111111111111111"));
        assert_eq!(value["lifetime"], json!(900));
        assert!(value.get("customer_name").is_none());
    }

    #[test]
    fn card_number_is_masked_in_debug_output() {
        let rendered = format!("{:?}", request().payeer_card_number("4111111111111111"));
        assert!(!rendered.contains("4111111111111111"));
    }

    #[test]
    fn transaction_response_reads_misspelled_card_key() {
        let body = json!({
            "result_code": "ok",
            "payload": {
                "id": "t1",
                "state": "successed",
                "currency": "uzs",
                "payment_method": "card",
                "amount": "100.0",
                "resipient_card": {
                    "id": "card-1",
                    "number": "123456******5678",
                    "bank_colors": {}
                }
            }
        })
        .to_string();

        let response: P2PTransactionResponse = body
            .as_bytes()
            .parse_struct("P2PTransactionResponse")
            .expect("decode response");

        assert_eq!(response.result_code, "ok");
        assert_eq!(response.payload.state, TransactionState::Successed);
        assert_eq!(response.payload.currency, Some(Currency::Uzs));
        assert_eq!(response.payload.form_url, None);
        let card = response.payload.recipient_card.expect("recipient card");
        assert_eq!(card.id.as_deref(), Some("card-1"));
    }

    #[test]
    fn transaction_response_rejects_unknown_state() {
        let body = br#"{"result_code":"ok","payload":{"id":"t1","state":"created"}}"#;
        assert!(body
            .as_slice()
            .parse_struct::<P2PTransactionResponse>("P2PTransactionResponse")
            .is_err());
    }

    #[test]
    fn short_response_has_numeric_card_id() {
        let body = br#"{"result_code":"ok","payload":{"id":"t1","state":"paid","old_amount":"90","resipient_card":{"id":7}}}"#;
        let response: P2PTransactionShortResponse = body
            .as_slice()
            .parse_struct("P2PTransactionShortResponse")
            .expect("decode short response");

        assert_eq!(response.payload.state, TransactionState::Paid);
        assert_eq!(
            response.payload.recipient_card.and_then(|card| card.id),
            Some(7)
        );
    }

    #[test]
    fn dispute_response_defaults_repeated() {
        let body = br#"{"id":1,"state":"opened","proof_image":"https://example.com/proof.jpg","p2p_transaction_id":"t1","amount":1000}"#;
        let response: P2PDisputeResponse = body
            .as_slice()
            .parse_struct("P2PDisputeResponse")
            .expect("decode dispute response");

        assert_eq!(response.state, "opened");
        assert!(!response.repeated);
        assert_eq!(response.proof_image2, None);
    }

    #[test]
    fn proof_image_from_missing_path_fails() {
        assert!(ProofImage::from_path("/definitely/not/here.png").is_err());
    }

    #[test]
    fn dispute_request_debug_skips_streams() {
        let request = P2PDisputeRequest::new("t1", 1000, ProofImage::new("a.png", &b"abc"[..]))
            .proof_image2(ProofImage::new("b.png", std::io::empty()));

        assert_eq!(request.proof_image.file_name(), "a.png");
        let rendered = format!("{request:?}");
        assert!(rendered.contains("b.png"));
    }
}
