//! Field patterns for JSON-shaped token responses.
//!
//! Matching is non-anchored and the first match wins, so a field is found
//! even when the body is only near-JSON or the object is nested.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII-only classes: Unicode spaces and digits are ordinary value characters
const NON_SPACE: &str = r"[^ \t\n\x0B\x0C\r]";

/// A named field and the pattern locating its value in group 1.
#[derive(Debug)]
pub struct FieldPattern {
    pub name: &'static str,
    pub regex: Regex,
}

impl FieldPattern {
    fn compile(name: &'static str, pattern: &str) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid built-in pattern for '{}': {}", name, e));
        Self { name, regex }
    }

    fn string_field(name: &'static str) -> Self {
        Self::compile(name, &format!(r#""{}"\s*:\s*"({}*?)""#, name, NON_SPACE))
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// First captured value, if the field occurs at all.
    pub fn find<'a>(&self, response: &'a str) -> Option<&'a str> {
        self.regex
            .captures(response)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

pub static ACCESS_TOKEN: Lazy<FieldPattern> = Lazy::new(|| FieldPattern::string_field("access_token"));
pub static TOKEN_TYPE: Lazy<FieldPattern> = Lazy::new(|| FieldPattern::string_field("token_type"));
pub static REFRESH_TOKEN: Lazy<FieldPattern> = Lazy::new(|| FieldPattern::string_field("refresh_token"));
pub static ID_TOKEN: Lazy<FieldPattern> = Lazy::new(|| FieldPattern::string_field("id_token"));

// scope is a space-delimited list, so whitespace is allowed inside the quotes
pub static SCOPE: Lazy<FieldPattern> =
    Lazy::new(|| FieldPattern::compile("scope", r#""scope"\s*:\s*"([^"]*)""#));

// quoted or bare numeral, terminated by any non-digit
pub static EXPIRES_IN: Lazy<FieldPattern> =
    Lazy::new(|| FieldPattern::compile("expires_in", r#""expires_in"\s*:\s*"?([0-9]*?)"?[^0-9]"#));
