use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    // Scheme and TLD are short character class runs rather than literal
    // alternations, host is a single alphanumeric label, then an optional
    // path and extension tail
    static ref URL_PATTERN: Regex = Regex::new(
        r"^[http://|https://]{7,8}[a-zA-Z0-9]+\.[com|org|net|biz|info]{3,4}[/a-zA-Z0-9+]*[.a-zA-Z0-9]*$"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    URL_PATTERN.is_match(value)
}

pub struct UrlMatcher {}

impl PatternMatcher for UrlMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}
