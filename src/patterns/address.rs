use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    // Building number, one or two capitalized street words, then a short
    // suffix token. The suffix is a character class, not an alternation, so
    // any 2-4 letters drawn from it pass
    static ref ADDRESS_PATTERN: Regex = Regex::new(
        r"^[0-9]+ [A-Z][a-zA-Z]+ [A-Z]?[a-zA-Z]*[ ]?[Ave|St|Lane|Blvd]{2,4}$"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    ADDRESS_PATTERN.is_match(value)
}

pub struct AddressMatcher {}

impl PatternMatcher for AddressMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}
