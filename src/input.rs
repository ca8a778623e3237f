//! Free-text numeric coercion for form fields.
//!
//! The input surface accepts anything; unparseable or empty entries coerce
//! to zero rather than failing the submission. Coercion follows the form's
//! historical behavior: the longest leading numeric prefix wins ("12abc"
//! reads as 12), currency symbols and thousands separators are stripped,
//! and non-finite results collapse to zero.

use serde::Deserialize;

/// A form amount that deserializes from a JSON number or a free-text string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "RawAmount")]
pub struct Amount(pub f64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
    // null, booleans, nested values: all coerce to zero.
    Other(serde_json::Value),
}

impl From<RawAmount> for Amount {
    fn from(raw: RawAmount) -> Self {
        match raw {
            RawAmount::Number(n) if n.is_finite() => Amount(n),
            RawAmount::Number(_) => Amount(0.0),
            RawAmount::Text(s) => Amount(coerce_amount(&s)),
            RawAmount::Other(_) => Amount(0.0),
        }
    }
}

/// Coerce a free-text entry to a number. Never fails; the fallback is zero.
pub fn coerce_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    match leading_number(&cleaned) {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Parse the longest prefix of `s` that reads as a float. Fields are a few
/// characters long, so the quadratic scan is irrelevant.
fn leading_number(s: &str) -> Option<f64> {
    let mut best = None;
    for end in 1..=s.len() {
        if !s.is_char_boundary(end) {
            continue;
        }
        if let Ok(v) = s[..end].parse::<f64>() {
            best = Some(v);
        }
    }
    best
}
