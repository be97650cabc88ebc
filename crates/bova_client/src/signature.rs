//! Body signatures exchanged with the Bova API.
//!
//! The signature is the lowercase hex SHA-1 of the secret immediately followed by the body
//! bytes, see [`common_utils::crypto::Sha1Concat`].

use common_utils::crypto::{Sha1Concat, VerifySignature};

/// Signature of `body` under `secret`
pub fn calculate_signature(secret: &str, body: &[u8]) -> String {
    Sha1Concat::hex_digest(secret.as_bytes(), body)
}

/// `true` only when `candidate` is exactly the signature of `body` under `secret`.
///
/// Uppercase hex, surrounding whitespace and malformed input all yield `false`.
pub fn verify_signature(secret: &str, body: &[u8], candidate: &str) -> bool {
    let is_lowercase_hex = candidate
        .bytes()
        .all(|byte| matches!(byte, b'0'..=b'9' | b'a'..=b'f'));

    is_lowercase_hex
        && Sha1Concat
            .verify_signature(secret.as_bytes(), candidate.as_bytes(), body)
            .unwrap_or(false)
}
