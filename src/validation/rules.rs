//! Rule kinds and the predicates behind them

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// local@domain.tld; dot-separated atoms on both sides, at least one dot in the domain
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_%+-]+(\.[A-Za-z0-9_%+-]+)*@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$")
        .expect("email pattern is valid")
});

/// Accepted input layouts for date fields, tried in order. The pattern pins
/// the year to four digits before chrono parses the value.
static DATE_LAYOUTS: LazyLock<[(Regex, &'static str); 2]> = LazyLock::new(|| {
    [
        (
            Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("iso date pattern is valid"),
            "%Y-%m-%d",
        ),
        (
            Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("local date pattern is valid"),
            "%d/%m/%Y",
        ),
    ]
});

/// What a rule checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Value must be present (and a real date for date fields)
    Required,
    /// Value must look like an email address
    Email,
    /// Value must be an absolute URL
    Url,
}

/// Parse a date typed into a form field
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_LAYOUTS
        .iter()
        .filter(|(pattern, _)| pattern.is_match(raw))
        .find_map(|(_, fmt)| NaiveDate::parse_from_str(raw, fmt).ok())
}

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// True for URLs with both a scheme and a non-empty host
pub fn is_absolute_url(value: &str) -> bool {
    reqwest::Url::parse(value)
        .map(|url| url.host_str().is_some_and(|host| !host.is_empty()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in ["a@b.com", "first.last@mail.example.org", "x+tag@nave.rs"] {
            assert!(is_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plain",
            "missing-at.com",
            "a@nodot",
            "a@b.",
            "a@.com",
            "a @b.com",
            "a@@b.com",
            "<x>@y.com",
            "a..b@c.com",
            ".a@b.com",
            "a.@b.com",
            "a@b..com",
        ] {
            assert!(!is_email(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn test_absolute_urls() {
        assert!(is_absolute_url("https://example.com/photo.png"));
        assert!(is_absolute_url("http://localhost:8080"));
    }

    #[test]
    fn test_non_absolute_urls() {
        assert!(!is_absolute_url("not-a-url"));
        assert!(!is_absolute_url("/relative/path"));
        assert!(!is_absolute_url("mailto:someone@example.com"));
        assert!(!is_absolute_url(""));
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_date("2020-01-15"),
            NaiveDate::from_ymd_opt(2020, 1, 15)
        );
    }

    #[test]
    fn test_parse_brazilian_date() {
        assert_eq!(
            parse_date("15/01/2020"),
            NaiveDate::from_ymd_opt(2020, 1, 15)
        );
    }

    #[test]
    fn test_parse_rejects_garbage_and_impossible_dates() {
        assert!(parse_date("").is_none());
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("2020-02-30").is_none());
    }

    #[test]
    fn test_parse_requires_four_digit_year() {
        assert!(parse_date("15/01/95").is_none());
        assert!(parse_date("15/01/20").is_none());
        assert!(parse_date("95-01-15").is_none());
        assert!(parse_date("15/1/2020").is_none());
        assert!(parse_date("15/01/20200").is_none());
        assert_eq!(
            parse_date(" 03/02/2021 "),
            NaiveDate::from_ymd_opt(2021, 2, 3)
        );
    }
}
