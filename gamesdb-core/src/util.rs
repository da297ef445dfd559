//! Best-effort numeric coercion.
//!
//! The catalog server is loose about numeric fields: attributes go missing and
//! text is sometimes non-numeric. Every numeric field is read through these
//! helpers, which never fail. Unparsable input yields the supplied default.

use crate::xml::XmlElement;

/// Parse an integer, surrounding whitespace allowed, or return `default`.
pub fn parse_int_or(text: &str, default: i32) -> i32 {
    text.trim().parse().unwrap_or(default)
}

/// Parse a float, surrounding whitespace allowed, or return `default`.
pub fn parse_float_or(text: &str, default: f32) -> f32 {
    text.trim().parse().unwrap_or(default)
}

/// Read an integer attribute. Missing or unparsable attributes are 0.
pub fn attr_int_or_zero(element: &XmlElement, name: &str) -> i32 {
    element
        .attribute(name)
        .map_or(0, |value| parse_int_or(value, 0))
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod tests;
