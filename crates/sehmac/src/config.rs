//! Token parameters and defaults.
//!
//! Provides [`TokenConfig`], the full set of signing inputs apart from the
//! secret key. All fields have defaults matching the deployed edge token
//! generators, so the zero-configuration case produces a six-hour `hdnea`
//! token covering `/*`.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Default validity window in seconds (6 hours).
pub const DEFAULT_WINDOW_SECONDS: i64 = 21_600;

/// Default access-control list covering every path.
pub const DEFAULT_ACL: &str = "/*";

/// Default name of the token, i.e. the key of the emitted cookie or query
/// parameter.
pub const DEFAULT_TOKEN_NAME: &str = "hdnea";

/// Parameters for a single token signing call.
///
/// Optional fields that are `None` (or empty, for string fields) are simply
/// omitted from the canonical string; they are never rejected.
///
/// # Examples
///
/// ```
/// use sehmac::config::TokenConfig;
///
/// let config = TokenConfig::default();
/// assert_eq!(config.window, 21_600);
/// assert_eq!(config.acl, "/*");
/// assert_eq!(config.token_name, "hdnea");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenConfig {
    /// Validity window in seconds, used only when `exp_time` is absent.
    /// A window of `0` disables window-derived expiry entirely.
    #[builder(default = DEFAULT_WINDOW_SECONDS)]
    pub window: i64,

    /// Client IP address to bind the token to (`ip=` field).
    #[builder(default, setter(strip_option, into))]
    pub ip_address: Option<String>,

    /// Validity start as a Unix timestamp in seconds (`st=` field).
    #[builder(default, setter(strip_option))]
    pub start_time: Option<i64>,

    /// Explicit expiry as a Unix timestamp in seconds (`exp=` field).
    /// Takes precedence over `window` when set.
    #[builder(default, setter(strip_option))]
    pub exp_time: Option<i64>,

    /// Access-control list, normally a path prefix such as `/videos/*`
    /// (`acl=` field). Omitted only when empty.
    #[builder(default = String::from(DEFAULT_ACL), setter(into))]
    pub acl: String,

    /// Session identifier (`id=` field).
    #[builder(default, setter(strip_option, into))]
    pub session_id: Option<String>,

    /// Opaque payload passed through to the edge (`data=` field).
    #[builder(default, setter(strip_option, into))]
    pub payload: Option<String>,

    /// Accepted for call compatibility with existing generators but never
    /// signed: the deployed generators discard the salt before computing the
    /// digest, and downstream verifiers expect the unsalted wire format.
    #[builder(default, setter(strip_option, into))]
    pub salt: Option<String>,

    /// Name of the token, i.e. the key of the emitted cookie or query
    /// parameter.
    #[builder(default = String::from(DEFAULT_TOKEN_NAME), setter(into))]
    pub token_name: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW_SECONDS,
            ip_address: None,
            start_time: None,
            exp_time: None,
            acl: String::from(DEFAULT_ACL),
            session_id: None,
            payload: None,
            salt: None,
            token_name: String::from(DEFAULT_TOKEN_NAME),
        }
    }
}
