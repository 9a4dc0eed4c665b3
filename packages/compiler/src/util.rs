//! Utility Functions
//!
//! Attribute-name canonicalization helpers shared across the compiler.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for dash-case to camelCase conversion
static DASH_CASE_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+([a-z0-9])").unwrap());

/// Convert dash-case to camelCase
pub fn dash_case_to_camel_case(input: &str) -> String {
    DASH_CASE_REGEXP
        .replace_all(input, |caps: &regex::Captures| {
            caps.get(1).unwrap().as_str().to_uppercase()
        })
        .to_string()
}

/// Canonicalize an attribute name as it arrives from the parser.
///
/// Source names are hyphenated (`data-my-title`); map keys are camel-cased
/// (`dataMyTitle`). A leading `:` marks the expression family and is kept as
/// part of the key. Canonicalization is idempotent: an already-canonical
/// name is returned unchanged.
pub fn canonicalize_attribute_name(name: &str) -> String {
    match name.strip_prefix(':') {
        Some(rest) => format!(":{}", dash_case_to_camel_case(rest)),
        None => dash_case_to_camel_case(name),
    }
}
