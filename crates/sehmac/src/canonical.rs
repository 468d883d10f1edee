//! Canonical field-string construction.
//!
//! The canonical string is the exact byte sequence the HMAC is computed over,
//! and it is echoed verbatim into the token so the edge can recompute the
//! digest. Fields appear in a fixed order regardless of how the caller set
//! them:
//!
//! ```text
//! ip=<V>~st=<V>~exp=<V>~acl=<V>~id=<V>~data=<V>
//! ```
//!
//! Each field is present only when its source value was supplied, and the
//! trailing delimiter is trimmed, so an all-optional call yields the empty
//! string.

/// Delimiter between canonical fields.
pub const FIELD_DELIMITER: char = '~';

/// Build the canonical string from resolved field values.
///
/// Expiry must already be resolved (explicit expiry or window-derived, see
/// [`crate::signer::resolve_expiry`]); this function is a pure concatenation
/// in the fixed field order `ip, st, exp, acl, id, data`.
///
/// # Examples
///
/// ```
/// use sehmac::canonical::build_canonical_string;
///
/// let canonical =
///     build_canonical_string(None, None, Some(1_700_000_000), "/videos/*", None, None);
/// assert_eq!(canonical, "exp=1700000000~acl=/videos/*");
///
/// assert_eq!(build_canonical_string(None, None, None, "", None, None), "");
/// ```
#[must_use]
pub fn build_canonical_string(
    ip_address: Option<&str>,
    start_time: Option<i64>,
    exp_time: Option<i64>,
    acl: &str,
    session_id: Option<&str>,
    payload: Option<&str>,
) -> String {
    let mut canonical = String::new();

    if let Some(ip) = ip_address.filter(|v| !v.is_empty()) {
        push_field(&mut canonical, "ip", ip);
    }
    if let Some(st) = start_time {
        push_field(&mut canonical, "st", &st.to_string());
    }
    if let Some(exp) = exp_time {
        push_field(&mut canonical, "exp", &exp.to_string());
    }
    if !acl.is_empty() {
        push_field(&mut canonical, "acl", acl);
    }
    if let Some(id) = session_id.filter(|v| !v.is_empty()) {
        push_field(&mut canonical, "id", id);
    }
    if let Some(data) = payload.filter(|v| !v.is_empty()) {
        push_field(&mut canonical, "data", data);
    }

    // Exactly one trailing delimiter to trim, left by the last field pushed.
    if canonical.ends_with(FIELD_DELIMITER) {
        canonical.pop();
    }

    canonical
}

/// Append one `key=value` field followed by the field delimiter.
fn push_field(canonical: &mut String, key: &str, value: &str) {
    canonical.push_str(key);
    canonical.push('=');
    canonical.push_str(value);
    canonical.push(FIELD_DELIMITER);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_keep_fixed_field_order() {
        let canonical = build_canonical_string(
            Some("203.0.113.7"),
            Some(1_699_990_000),
            Some(1_700_000_000),
            "/videos/*",
            Some("abc123"),
            Some("uid=42"),
        );
        assert_eq!(
            canonical,
            "ip=203.0.113.7~st=1699990000~exp=1700000000~acl=/videos/*~id=abc123~data=uid=42"
        );
    }

    #[test]
    fn test_should_omit_absent_fields_without_stray_delimiter() {
        let canonical =
            build_canonical_string(Some("203.0.113.7"), None, None, "", None, Some("uid=42"));
        assert_eq!(canonical, "ip=203.0.113.7~data=uid=42");
    }

    #[test]
    fn test_should_omit_empty_string_fields() {
        let canonical = build_canonical_string(Some(""), None, Some(1_700_000_000), "", Some(""), Some(""));
        assert_eq!(canonical, "exp=1700000000");
    }

    #[test]
    fn test_should_build_empty_canonical_string() {
        assert_eq!(build_canonical_string(None, None, None, "", None, None), "");
    }

    #[test]
    fn test_should_never_end_with_delimiter() {
        let canonical =
            build_canonical_string(None, None, Some(1_700_000_000), "/videos/*", None, None);
        assert!(!canonical.ends_with(FIELD_DELIMITER));
    }

    #[test]
    fn test_should_include_start_time_of_zero() {
        // A zero timestamp is still an explicit start time.
        let canonical = build_canonical_string(None, Some(0), None, "/*", None, None);
        assert_eq!(canonical, "st=0~acl=/*");
    }
}
