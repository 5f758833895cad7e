//! Value normalization shared by the field readers

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static EXPLICIT_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://").expect("scheme pattern is valid"));

/// Ensure a URL-like string carries an explicit `http://` or `https://` prefix.
///
/// Protocol-relative URLs (`//host/path`) lose their leading slashes before
/// `http://` is prepended, as do bare hosts.
pub fn with_scheme(url: &str) -> String {
    if EXPLICIT_SCHEME.is_match(url) {
        return url.to_string();
    }

    format!("http://{}", url.strip_prefix("//").unwrap_or(url))
}

/// Drop thousands separators from a formatted count: `"12,345"` -> `"12345"`
pub fn strip_thousands_separators(count: &str) -> String {
    count.replace(',', "").trim().to_string()
}

/// Render a structured-data scalar as text.
///
/// Strings are used as-is and numbers keep their JSON text. Anything else is
/// treated as missing.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_with_scheme() {
        assert_eq!(with_scheme("http://host/path"), "http://host/path");
        assert_eq!(with_scheme("https://host/path"), "https://host/path");
        assert_eq!(with_scheme("//host/path"), "http://host/path");
        assert_eq!(with_scheme("host/path"), "http://host/path");
    }

    #[test]
    fn test_with_scheme_only_strips_leading_slashes() {
        assert_eq!(with_scheme("host//path"), "http://host//path");
        assert_eq!(with_scheme("ftp://host"), "http://ftp://host");
    }

    #[test]
    fn test_strip_thousands_separators() {
        assert_eq!(strip_thousands_separators("12,345"), "12345");
        assert_eq!(strip_thousands_separators(" 1,234,567 "), "1234567");
        assert_eq!(strip_thousands_separators("987"), "987");
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&json!("4.5")).unwrap(), "4.5");
        assert_eq!(scalar_text(&json!(4.5)).unwrap(), "4.5");
        assert_eq!(scalar_text(&json!(1234)).unwrap(), "1234");
        assert!(scalar_text(&json!(null)).is_none());
        assert!(scalar_text(&json!({"name": "x"})).is_none());
    }

    proptest! {
        #[test]
        fn prop_with_scheme_is_idempotent(rest in "[a-z0-9./]{0,24}") {
            let once = with_scheme(&rest);
            prop_assert_eq!(with_scheme(&once), once.clone());
            prop_assert!(once.starts_with("http://") || once.starts_with("https://"));
        }

        #[test]
        fn prop_protocol_relative_matches_bare_host(host in "[a-z]{1,12}\\.[a-z]{2,4}", path in "[a-z0-9/]{0,16}") {
            let bare = format!("{host}/{path}");
            prop_assert_eq!(with_scheme(&format!("//{bare}")), with_scheme(&bare));
        }
    }
}
