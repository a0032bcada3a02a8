use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    // A letter followed by 3-15 letters or digits, 4-16 characters total
    static ref USERNAME_PATTERN: Regex = Regex::new(
        r"^[a-zA-Z][a-zA-Z0-9]{3,15}$"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    USERNAME_PATTERN.is_match(value)
}

pub struct UsernameMatcher {}

impl PatternMatcher for UsernameMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        let valid_usernames = vec![
            "abcd",
            "user1234",
            "Admin42",
            "abcdefghijklmnop", // 16 characters, the maximum
        ];

        for username in valid_usernames {
            assert!(is_match(username), "Username should be valid: {}", username);
        }
    }

    #[test]
    fn test_invalid_usernames() {
        let invalid_usernames = vec![
            "ab1",                // too short
            "1abcd",              // must start with a letter
            "abcdefghijklmnopq",  // 17 characters
            "user_name",          // no underscores
            "user-name",          // no hyphens
            "",
        ];

        for username in invalid_usernames {
            assert!(!is_match(username), "Username should be invalid: {}", username);
        }
    }
}
