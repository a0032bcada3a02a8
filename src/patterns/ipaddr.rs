use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    // Four groups of 1-3 digits separated by periods. Group values are not
    // range checked, so groups above 255 pass
    static ref IPADDR_PATTERN: Regex = Regex::new(
        r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    IPADDR_PATTERN.is_match(value)
}

pub struct IpAddrMatcher {}

impl PatternMatcher for IpAddrMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}
