use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    // Local part of letters, digits, underscores, periods; domain of a
    // letters-only first label and one or two lowercase tail labels
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[a-zA-Z0-9_.]+@[a-zA-Z]+\.[a-z]+\.?[a-z]*$"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub struct EmailMatcher {}

impl PatternMatcher for EmailMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let valid_emails = vec![
            "user@example.com",
            "a.b_c@example.com",
            "user123@example.co.uk",
            "john.smith@Example.com", // first domain label may be mixed case
        ];

        for email in valid_emails {
            assert!(is_match(email), "Email should be valid: {}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        let invalid_emails = vec![
            "a@b",                    // missing TLD
            "a@example.COM",          // uppercase after the first label
            "user+tag@example.com",   // plus not allowed in local part
            "user-name@example.com",  // hyphen not allowed in local part
            "user@exam_ple.com",      // underscore in domain
            "user@example..com",
            "@example.com",
            "user@",
        ];

        for email in invalid_emails {
            assert!(!is_match(email), "Email should be invalid: {}", email);
        }
    }
}
