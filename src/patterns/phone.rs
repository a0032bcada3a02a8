use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    // Optional parenthesized area code of up to three digits, then the
    // three-digit and four-digit groups with optional separators
    static ref PHONE_PATTERN: Regex = Regex::new(
        r"^\(?[0-9]{0,3}\)?[- ]?[0-9]{3}[- ]?[0-9]{4}$"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    if !PHONE_PATTERN.is_match(value) {
        return false;
    }

    // Local numbers carry seven digits, area-code numbers ten
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    digits == 7 || digits == 10
}

pub struct PhoneMatcher {}

impl PatternMatcher for PhoneMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}
