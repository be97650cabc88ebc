//! Utilities for cryptographic algorithms

use error_stack::ResultExt;

use crate::errors::{self, CustomResult};

/// Trait for cryptographically signing messages
pub trait SignMessage {
    /// Takes in a secret and a message and returns the calculated signature as bytes
    fn sign_message(
        &self,
        _secret: &[u8],
        _msg: &[u8],
    ) -> CustomResult<Vec<u8>, errors::CryptoError>;
}

/// Trait for cryptographically verifying a message against a signature
pub trait VerifySignature {
    /// Takes in a secret, the signature and the message and verifies the message
    /// against the signature
    fn verify_signature(
        &self,
        _secret: &[u8],
        _signature: &[u8],
        _msg: &[u8],
    ) -> CustomResult<bool, errors::CryptoError>;
}

/// SHA-1 over the concatenation `secret || message`.
///
/// This is the body signature scheme of the Bova API. It is not an HMAC: there is no inner
/// and outer keying, no nonce and no timestamp, so a leaked `(body, signature)` pair can be
/// attacked offline. It is kept because the remote verifier recomputes exactly this value.
///
/// [`SignMessage`] returns the raw 20-byte digest. [`VerifySignature`] expects the
/// signature as hex text, which is what travels in the `Signature` header, and compares the
/// decoded digest in constant time.
#[derive(Debug)]
pub struct Sha1Concat;

impl Sha1Concat {
    /// Raw digest of `secret || msg`
    pub fn digest(secret: &[u8], msg: &[u8]) -> Vec<u8> {
        let mut context = ring::digest::Context::new(&ring::digest::SHA1_FOR_LEGACY_USE_ONLY);
        context.update(secret);
        context.update(msg);
        context.finish().as_ref().to_vec()
    }

    /// Lowercase hex digest of `secret || msg`
    pub fn hex_digest(secret: &[u8], msg: &[u8]) -> String {
        hex::encode(Self::digest(secret, msg))
    }
}

impl SignMessage for Sha1Concat {
    fn sign_message(
        &self,
        secret: &[u8],
        msg: &[u8],
    ) -> CustomResult<Vec<u8>, errors::CryptoError> {
        Ok(Self::digest(secret, msg))
    }
}

impl VerifySignature for Sha1Concat {
    fn verify_signature(
        &self,
        secret: &[u8],
        signature: &[u8],
        msg: &[u8],
    ) -> CustomResult<bool, errors::CryptoError> {
        let signature = hex::decode(signature)
            .change_context(errors::CryptoError::DecodingFailed)
            .attach_printable("Signature is not hex encoded")?;
        let expected = Self::digest(secret, msg);

        Ok(ring::constant_time::verify_slices_are_equal(&expected, &signature).is_ok())
    }
}
