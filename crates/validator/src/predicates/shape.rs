//! E-mail and URL shape checks. Absent values always fail.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("e-mail pattern is a valid regex")
});

static RELATIVE_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://relative.invalid/").expect("base URL is valid"));

/// Schemes accepted by [`is_url`].
pub const WEB_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Local part, `@`, and a dot-separated host of LDH labels.
#[inline]
pub fn is_email(value: Option<&str>) -> bool {
    value.is_some_and(|value| EMAIL_REGEX.is_match(value))
}

/// Absolute `http`, `https` or `ftp` URL with a host.
pub fn is_url(value: Option<&str>) -> bool {
    parse_absolute(value)
        .is_some_and(|url| WEB_SCHEMES.contains(&url.scheme()) && url.host().is_some())
}

/// Absolute `https` URL with a host.
pub fn is_https_url(value: Option<&str>) -> bool {
    parse_absolute(value).is_some_and(|url| url.scheme() == "https" && url.host().is_some())
}

/// Any absolute URL, whatever the scheme.
pub fn is_absolute_url(value: Option<&str>) -> bool {
    parse_absolute(value).is_some()
}

/// A non-empty reference without a scheme that resolves against a base.
pub fn is_relative_url(value: Option<&str>) -> bool {
    value.is_some_and(|value| {
        !value.trim().is_empty()
            && !value.chars().any(char::is_whitespace)
            && matches!(Url::parse(value), Err(url::ParseError::RelativeUrlWithoutBase))
            && RELATIVE_BASE.join(value).is_ok()
    })
}

fn parse_absolute(value: Option<&str>) -> Option<Url> {
    Url::parse(value?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("contact@royal-code.com", true)]
    #[case("contact@royal-code", true)]
    #[case("first.last+tag@sub.example.org", true)]
    #[case("contact@", false)]
    #[case("@royal-code.com", false)]
    #[case("royal-code.com", false)]
    #[case("a b@example.com", false)]
    fn test_is_email(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_email(Some(value)), expected);
    }

    #[rstest]
    #[case("https://royal-code.com", true)]
    #[case("http://royal-code.com/path?q=1", true)]
    #[case("ftp://files.example.com", true)]
    #[case("royal-code.com", false)]
    #[case("mailto:contact@royal-code.com", false)]
    #[case("", false)]
    fn test_is_url(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_url(Some(value)), expected);
    }

    #[test]
    fn test_url_variants() {
        assert!(is_https_url(Some("https://example.com")));
        assert!(!is_https_url(Some("http://example.com")));
        assert!(is_absolute_url(Some("mailto:someone@example.com")));
        assert!(!is_absolute_url(Some("/orders/1")));
        assert!(is_relative_url(Some("/orders/1")));
        assert!(is_relative_url(Some("orders/1?x=2")));
        assert!(!is_relative_url(Some("https://example.com")));
        assert!(!is_relative_url(Some("")));
    }

    #[test]
    fn test_absent_fails() {
        assert!(!is_email(None));
        assert!(!is_url(None));
        assert!(!is_https_url(None));
        assert!(!is_absolute_url(None));
        assert!(!is_relative_url(None));
    }
}
