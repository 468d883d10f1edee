//! Error types for token signing.
//!
//! Signing has exactly one fallible step: decoding the hex-encoded secret key
//! into raw HMAC key bytes. Every other input is treated permissively, so
//! [`SignError`] carries a single variant.

/// Errors that can occur while generating a secure edge HMAC token.
#[derive(Debug, thiserror::Error)]
pub enum SignError {
    /// The secret key is not valid hex (odd length or a non-hex digit).
    #[error("Secret key is not valid hex: {0}")]
    InvalidSecretEncoding(#[from] hex::FromHexError),
}
