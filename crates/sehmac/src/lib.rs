//! Secure edge HMAC token generation for CDN and streaming edge authentication.
//!
//! This crate generates the signed access tokens that edge servers check before
//! serving protected content. A token binds an optional client IP, a validity
//! window, an access-control path prefix, and an opaque payload into a single
//! HMAC-SHA256 authenticated string, typically delivered to the player as a
//! cookie or query parameter.
//!
//! # Overview
//!
//! Token generation is a pure computation: the signing fields are canonicalized
//! into a deterministic tilde-delimited string, an HMAC-SHA256 digest is
//! computed over it with the customer's secret key, and both are folded into
//! the final token. Verification happens on edge infrastructure outside this
//! crate.
//!
//! # Usage
//!
//! ```rust
//! use sehmac::{TokenConfig, sign};
//!
//! let config = TokenConfig::builder()
//!     .window(0)
//!     .exp_time(1_700_000_000)
//!     .acl("/videos/*")
//!     .build();
//!
//! let token = sign("00112233445566778899aabbccddeeff00112233", &config).unwrap();
//! assert!(token.starts_with("hdnea=exp=1700000000~acl=/videos/*~hmac="));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical field-string construction
//! - [`clock`] - Injectable clock for window-derived expiry
//! - [`config`] - Token parameters and defaults
//! - [`error`] - Signing error types
//! - [`signer`] - Secret decoding, HMAC computation, and token assembly

pub mod canonical;
pub mod clock;
pub mod config;
pub mod error;
pub mod signer;

pub use canonical::build_canonical_string;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::TokenConfig;
pub use error::SignError;
pub use signer::{sign, sign_with_clock};
