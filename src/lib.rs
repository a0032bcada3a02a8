pub mod patterns;

use patterns::PatternMatcher;
use std::collections::HashMap;

/// Main classifier function that takes a string value and returns the list of
/// format names it matches
pub fn classify(value: &str) -> Vec<String> {
    if value.is_empty() {
        return vec![];
    }

    let mut matches = Vec::new();

    // Check each pattern
    if patterns::address::is_match(value) {
        matches.push("address".to_string());
    }
    if patterns::email::is_match(value) {
        matches.push("email".to_string());
    }
    if patterns::ipaddr::is_match(value) {
        matches.push("ipaddr".to_string());
    }
    if patterns::name::is_match(value) {
        matches.push("name".to_string());
    }
    if patterns::phone::is_match(value) {
        matches.push("phone".to_string());
    }
    if patterns::url::is_match(value) {
        matches.push("url".to_string());
    }
    if patterns::username::is_match(value) {
        matches.push("username".to_string());
    }

    matches
}

pub fn get_all_matchers() -> HashMap<String, Box<dyn PatternMatcher>> {
    let mut matchers: HashMap<String, Box<dyn PatternMatcher>> = HashMap::new();

    matchers.insert("address".to_string(), Box::new(patterns::address::AddressMatcher {}));
    matchers.insert("email".to_string(), Box::new(patterns::email::EmailMatcher {}));
    matchers.insert("ipaddr".to_string(), Box::new(patterns::ipaddr::IpAddrMatcher {}));
    matchers.insert("name".to_string(), Box::new(patterns::name::NameMatcher {}));
    matchers.insert("phone".to_string(), Box::new(patterns::phone::PhoneMatcher {}));
    matchers.insert("url".to_string(), Box::new(patterns::url::UrlMatcher {}));
    matchers.insert("username".to_string(), Box::new(patterns::username::UsernameMatcher {}));

    matchers
}

/// True when the value looks like a personal name
pub fn validate_name(input: &str) -> bool {
    patterns::name::is_match(input)
}

/// True when the value looks like a phone number with seven or ten digits
pub fn validate_phone(input: &str) -> bool {
    patterns::phone::is_match(input)
}

/// True when the value looks like an email address
pub fn validate_email(input: &str) -> bool {
    patterns::email::is_match(input)
}

/// True when the value looks like a street address
pub fn validate_address(input: &str) -> bool {
    patterns::address::is_match(input)
}

pub fn validate_username(input: &str) -> bool {
    patterns::username::is_match(input)
}

pub fn validate_url(input: &str) -> bool {
    patterns::url::is_match(input)
}

/// True when the value looks like a dotted-quad IPv4 address
pub fn validate_ipaddr(input: &str) -> bool {
    patterns::ipaddr::is_match(input)
}
