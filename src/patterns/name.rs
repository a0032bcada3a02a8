use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    // Personal name - one to three alphabetic words separated by a space or hyphen,
    // first word at least two letters
    static ref NAME_PATTERN: Regex = Regex::new(
        r"^[a-zA-Z]{2,}[ -]?[a-zA-Z]*[ -]?[a-zA-Z]*$"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}

pub struct NameMatcher {}

impl PatternMatcher for NameMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        let valid_names = vec![
            "Jo",
            "Mary",
            "John Smith",
            "Jo Ann Smith",
            "Jean-Claude",
            "Mary Jane-Smith",
            "Jo-", // trailing separator is accepted by the pattern
        ];

        for name in valid_names {
            assert!(is_match(name), "Name should be valid: {}", name);
        }
    }

    #[test]
    fn test_invalid_names() {
        let invalid_names = vec![
            "J",                     // single word shorter than two letters
            "123",
            "J0hn Smith",            // digits
            "Jo_Ann",                // underscore is not a separator
            "Jo Ann Smith Jones",    // four words
            "",
        ];

        for name in invalid_names {
            assert!(!is_match(name), "Name should be invalid: {}", name);
        }
    }
}
