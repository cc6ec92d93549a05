//! Best-effort parsing of free-text quantity and dosage strings.
//!
//! # Responsibility
//! - Extract a numeric magnitude and unit from strings like "3.5g",
//!   "0.25 g" or "50ml" for summary maths.
//!
//! # Invariants
//! - Parsing never fails loudly: strings without a leading number ("a few
//!   drops") simply yield `None` and are excluded from totals.

use once_cell::sync::Lazy;
use regex::Regex;

static QUANTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*([A-Za-z]*)").expect("valid quantity regex"));

/// Parsed magnitude/unit pair. The unit is lowercased and may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub magnitude: f64,
    pub unit: String,
}

impl Quantity {
    /// Magnitude in grams when the unit denotes grams, otherwise `None`.
    pub fn grams(&self) -> Option<f64> {
        match self.unit.as_str() {
            "g" | "gram" | "grams" => Some(self.magnitude),
            "mg" => Some(self.magnitude / 1000.0),
            _ => None,
        }
    }
}

/// Parses the leading `<number><unit>` of a quantity string.
pub fn parse_quantity(value: &str) -> Option<Quantity> {
    let captures = QUANTITY_RE.captures(value)?;
    let magnitude: f64 = captures.get(1)?.as_str().parse().ok()?;
    let unit = captures
        .get(2)
        .map(|unit| unit.as_str().to_ascii_lowercase())
        .unwrap_or_default();
    Some(Quantity { magnitude, unit })
}
