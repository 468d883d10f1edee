//! Token signing: secret decoding, expiry resolution, and HMAC-SHA256 digest.
//!
//! The signing flow is:
//!
//! 1. Decode the hex-encoded secret into the raw HMAC key bytes.
//! 2. Resolve the expiry: an explicit `exp_time` wins, otherwise a non-zero
//!    window is added to the current clock reading, otherwise no expiry.
//! 3. Build the canonical field string.
//! 4. Compute HMAC-SHA256 over the canonical string and render it as
//!    lowercase hex.
//! 5. Assemble `"{token_name}={canonical}~hmac={digest}"`.
//!
//! The main entry point is [`sign`]; [`sign_with_clock`] takes an explicit
//! [`Clock`] so tests can pin the wall-clock reading.

use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;
use tracing::debug;

use crate::canonical::build_canonical_string;
use crate::clock::{Clock, SystemClock};
use crate::config::TokenConfig;
use crate::error::SignError;

type HmacSha256 = Hmac<Sha256>;

/// Generate a secure edge HMAC token using the system clock.
///
/// `secret_hex` is the hex encoding of the raw HMAC key bytes shared with the
/// edge. See [`TokenConfig`] for the remaining parameters.
///
/// # Errors
///
/// Returns [`SignError::InvalidSecretEncoding`] if `secret_hex` is not valid
/// hex.
///
/// # Examples
///
/// ```
/// use sehmac::{TokenConfig, sign};
///
/// let config = TokenConfig::builder()
///     .window(0)
///     .exp_time(1_700_000_000)
///     .acl("/videos/*")
///     .build();
///
/// let token = sign("00112233445566778899aabbccddeeff00112233", &config).unwrap();
/// assert!(token.starts_with("hdnea=exp=1700000000~acl=/videos/*~hmac="));
/// ```
pub fn sign(secret_hex: &str, config: &TokenConfig) -> Result<String, SignError> {
    sign_with_clock(secret_hex, config, &SystemClock)
}

/// Generate a secure edge HMAC token, reading `now` from the given clock.
///
/// The clock is consulted only when `config.exp_time` is absent and
/// `config.window` is non-zero; otherwise the output is a pure function of its
/// inputs.
///
/// # Errors
///
/// Returns [`SignError::InvalidSecretEncoding`] if `secret_hex` is not valid
/// hex.
pub fn sign_with_clock(
    secret_hex: &str,
    config: &TokenConfig,
    clock: &dyn Clock,
) -> Result<String, SignError> {
    let key = hex::decode(secret_hex)?;
    let exp_time = resolve_expiry(config, clock);

    let canonical = build_canonical_string(
        config.ip_address.as_deref(),
        config.start_time,
        exp_time,
        &config.acl,
        config.session_id.as_deref(),
        config.payload.as_deref(),
    );

    debug!(canonical_string = %canonical, exp_time, "Built canonical token string");

    // The salt field never reaches the signing input. The deployed generators
    // reset it to empty before signing, and downstream verifiers expect the
    // unsalted digest.
    let digest = hex::encode(hmac_sha256(&key, canonical.as_bytes()));

    debug!(token_name = %config.token_name, digest = %digest, "Signed edge token");

    Ok(format!(
        "{}={canonical}~hmac={digest}",
        config.token_name
    ))
}

/// Resolve the expiry field for a token.
///
/// An explicit `exp_time` always wins. Otherwise a non-zero window yields
/// `now + window`, and a zero window yields no expiry at all.
#[must_use]
pub fn resolve_expiry(config: &TokenConfig, clock: &dyn Clock) -> Option<i64> {
    match config.exp_time {
        Some(exp) => Some(exp),
        None if config.window != 0 => Some(clock.unix_now() + config.window),
        None => None,
    }
}

/// Compute the HMAC-SHA256 of `data` using `key`.
fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can accept keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
