#![allow(dead_code, clippy::expect_used)]

use std::{
    io::{self, Cursor, Read},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use bova_client::{
    enums::{Currency, PayeerType, PaymentMethod},
    types::P2PTransactionRequest,
    verify_signature, BovaApi,
};
use serde_json::{json, Value};
use wiremock::{Match, MockServer, Request};

pub const API_SECRET: &str = "mock_api_secret";
pub const TRANSACTION_ID: &str = "mock_transaction_id";

pub fn api(server: &MockServer) -> BovaApi {
    BovaApi::builder()
        .api_url(server.uri())
        .secret(API_SECRET)
        .build()
        .expect("client for mock server")
}

pub fn p2p_transaction_request() -> P2PTransactionRequest {
    P2PTransactionRequest::new(
        "mock_user_uuid",
        "mock_merchant_id",
        100,
        Currency::Uzs,
        PaymentMethod::Card,
        "https://example.com/callback",
    )
    .redirect_url("https://example.com/redirect")
    .payeer_identifier("mock_identifier")
    .payeer_ip("127.0.0.1")
    .payeer_type(PayeerType::Trust)
}

pub fn p2p_transaction_body(state: &str) -> Value {
    json!({
        "result_code": "ok",
        "payload": {
            "id": "mock_id",
            "merchant_id": "mock_merchant_id",
            "currency": "uzs",
            "form_url": "https://example.com/form",
            "state": state,
            "created_at": "2023-01-01T00:00:00Z",
            "updated_at": "2023-01-01T00:00:00Z",
            "close_at": "2023-01-01T01:00:00Z",
            "callback_url": "https://example.com/callback",
            "redirect_url": "https://example.com/redirect",
            "email": "test@example.com",
            "customer_name": "Test Customer",
            "rate": "1.0",
            "amount": "100.0",
            "fiat_amount": "100.0",
            "old_fiat_amount": "100.0",
            "service_commission": "1.0",
            "total_amount": "99.0",
            "payment_method": "card",
            "resipient_card": {
                "id": "mock_card_id",
                "number": "123456******5678",
                "bank_name": "Mock Bank",
                "bank_full_name": "Mock Bank Full Name",
                "bank_colors": {},
                "brand": "visa",
                "card_holder": "Test Customer",
                "payment_method": "card",
                "updated_at": "2023-01-01T00:00:00Z",
                "created_at": "2023-01-01T00:00:00Z",
                "sberpay_url": "https://example.com/sberpay"
            }
        }
    })
}

pub fn mass_transaction_body() -> Value {
    json!({
        "result_code": "ok",
        "payload": {
            "id": "mock_id",
            "amount": "100.0",
            "commission_type": "fixed",
            "service_commission": "1.0",
            "rate": "1.0",
            "fiat_amount": "100.0",
            "old_fiat_amount": "100.0",
            "state": "created",
            "currency": "USD",
            "r_line": "",
            "created_at": "2023-01-01T00:00:00Z",
            "updated_at": "2023-01-01T00:00:00Z",
            "total_amount": "99.0",
            "recipient_card": "411111******1111"
        }
    })
}

pub fn dispute_body() -> Value {
    json!({
        "id": 1,
        "state": "opened",
        "proof_image": "https://example.com/proof_image.jpg",
        "p2p_transaction_id": TRANSACTION_ID,
        "repeated": false,
        "amount": 1000
    })
}

/// Matches requests whose `Signature` header signs the body under the given secret
pub struct SignedWith(pub &'static str);

impl Match for SignedWith {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get("Signature")
            .and_then(|value| value.to_str().ok())
            .is_some_and(|signature| verify_signature(self.0, &request.body, signature))
    }
}

/// Matches requests without a `Signature` header
pub struct Unsigned;

impl Match for Unsigned {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("Signature")
    }
}

/// Matches multipart bodies where the part `name` holds exactly `value`
pub struct MultipartField {
    name: &'static str,
    value: Vec<u8>,
}

impl MultipartField {
    pub fn new(name: &'static str, value: impl Into<Vec<u8>>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

impl Match for MultipartField {
    fn matches(&self, request: &Request) -> bool {
        multipart_field(&request.body, self.name) == Some(self.value.as_slice())
    }
}

/// Content of the first multipart part called `name`
pub fn multipart_field<'a>(body: &'a [u8], name: &str) -> Option<&'a [u8]> {
    multipart_fields(body, name).into_iter().next()
}

/// Contents of every multipart part called `name`, in body order
pub fn multipart_fields<'a>(body: &'a [u8], name: &str) -> Vec<&'a [u8]> {
    let marker = format!("name=\"{name}\"");
    let mut contents = Vec::new();
    let mut rest = body;

    while let Some(start) = find(rest, marker.as_bytes()) {
        let Some(after_name) = rest.get(start + marker.len()..) else {
            break;
        };
        let Some(content) = find(after_name, b"\r\n\r\n").and_then(|at| after_name.get(at + 4..))
        else {
            break;
        };
        let Some(end) = find(content, b"\r\n--") else {
            break;
        };
        contents.extend(content.get(..end));
        rest = content.get(end..).unwrap_or_default();
    }

    contents
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// In-memory proof stream that records being dropped
pub struct TrackedReader {
    inner: Cursor<Vec<u8>>,
    closed: Arc<AtomicBool>,
}

impl TrackedReader {
    pub fn new(content: &[u8]) -> (Self, Arc<AtomicBool>) {
        let closed = Arc::new(AtomicBool::new(false));
        let reader = Self {
            inner: Cursor::new(content.to_vec()),
            closed: Arc::clone(&closed),
        };
        (reader, closed)
    }
}

impl Read for TrackedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Drop for TrackedReader {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Proof stream that cannot be read
pub struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk unplugged"))
    }
}

pub fn is_closed(flag: &AtomicBool) -> bool {
    flag.load(Ordering::SeqCst)
}
