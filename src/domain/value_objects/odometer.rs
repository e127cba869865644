//! Odometer input mask
//!
//! The text only ever holds digits with at most one decimal point. Edits that
//! would break the pattern are rejected and leave the previous text in place.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ODOMETER_PATTERN: Regex = Regex::new(r"^[0-9]*\.?[0-9]*$").unwrap();
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OdometerInput {
    text: String,
}

impl OdometerInput {
    /// True if `candidate` is an acceptable (possibly partial) reading.
    pub fn is_acceptable(candidate: &str) -> bool {
        candidate.is_empty() || ODOMETER_PATTERN.is_match(candidate)
    }

    /// Replace the text with `candidate` if it passes the mask.
    ///
    /// Returns whether the edit was applied.
    pub fn input(&mut self, candidate: &str) -> bool {
        if !Self::is_acceptable(candidate) {
            return false;
        }
        self.text.clear();
        self.text.push_str(candidate);
        true
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Kilometres as submitted; `None` for text like `"."` that has no number.
    pub fn parse(&self) -> Option<f64> {
        self.text
            .parse::<f64>()
            .ok()
            .filter(|km| km.is_finite() && *km >= 0.0)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
