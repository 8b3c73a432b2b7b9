//! Primitive field values and classification

use serde::Serialize;
use std::collections::BTreeMap;

/// The flat declared shape of a form: field name -> primitive value.
///
/// Declared once per form activation; the key set is closed afterwards and
/// only the values change. Iteration order is the declared key order
/// (lexicographic), which keeps serialization output deterministic.
pub type FieldValues = BTreeMap<String, FieldValue>;

/// A single primitive form value, tagged once at declaration.
///
/// The tag is the classifier: a value is boolean, number, or text, decided
/// when the shape is declared and never re-inferred afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// The three primitive kinds a field can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Number,
    Text,
}

impl FieldValue {
    /// Read-only classification accessor for callers that need the kind
    /// without the payload. Routing order is boolean, then number, then
    /// the text fallback. Field synthesis dispatches on the same tag
    /// structurally (matching the value directly), so the kind is still
    /// decided exactly once, at declaration.
    pub fn kind(&self) -> FieldKind {
        if self.is_boolean() {
            return FieldKind::Bool;
        }
        if self.is_number() {
            return FieldKind::Number;
        }
        FieldKind::Text
    }

    /// True only for the two boolean literals
    pub fn is_boolean(&self) -> bool {
        matches!(self, FieldValue::Bool(_))
    }

    /// True for any numeric value, including infinities and NaN.
    /// Never true for numeric-looking text; no coercion is performed.
    pub fn is_number(&self) -> bool {
        matches!(self, FieldValue::Number(_))
    }

    /// Get the text value, if this is a text field
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric value, if this is a number field
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the boolean value, if this is a boolean field
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The submission string form of this value: booleans become the
    /// literal strings `true`/`false`, numbers their decimal text.
    pub fn display_string(&self) -> String {
        match self {
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Parse a base-10 leading integer out of user input: optional sign,
/// then digits, everything after the digit run ignored. Malformed input
/// yields NaN, which is stored as data rather than treated as a fault;
/// validators are the backstop.
pub fn parse_base10_int(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return f64::NAN;
    }
    digits.parse::<f64>().map(|n| sign * n).unwrap_or(f64::NAN)
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Integral values within i64 range print without a fractional suffix
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return format!("{}", n as i64);
    }
    format!("{n}")
}
