//! # Domain Types
//!
//! Core domain types for the commission schedule.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │  BracketDraft   │   │  WeightBracket  │   │     Weight      │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  minKg: String  │──►│  min: Weight    │   │  grams (u32)    │        │
//! │  │  maxKg: String  │   │  max: Option<W> │   │  500 = 0.5 kg   │        │
//! │  │  charge: String │   │  charge: Money  │   │                 │        │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘        │
//! │     raw form row          typed bracket        smallest-unit mass       │
//! │                                                                         │
//! │  Coercion (validation module) turns the left column into the middle;    │
//! │  the schedule module only ever sees typed brackets.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::GRAMS_PER_KG;

// =============================================================================
// Weight
// =============================================================================

/// Parcel weight in integer grams.
///
/// ## Why Grams?
/// The same smallest-unit discipline as [`Money`]: form input like "0.5"
/// becomes 500 grams through pure integer parsing, so bracket bounds
/// compare exactly. A `u32` cannot hold a negative or non-finite weight,
/// which discharges the "minimum is a non-negative number" rule for every
/// typed value - only the string-coercion boundary can reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Weight(u32);

impl Weight {
    /// Creates a weight from grams (the smallest unit).
    #[inline]
    pub const fn from_grams(grams: u32) -> Self {
        Weight(grams)
    }

    /// Creates a weight from whole kilograms.
    #[inline]
    pub const fn from_kg(kg: u32) -> Self {
        Weight(kg * GRAMS_PER_KG)
    }

    /// Returns the weight in grams.
    #[inline]
    pub const fn grams(&self) -> u32 {
        self.0
    }

    /// Zero weight.
    #[inline]
    pub const fn zero() -> Self {
        Weight(0)
    }

    /// Saturating addition, used when extending a schedule by a default span.
    #[inline]
    pub const fn saturating_add(self, other: Weight) -> Self {
        Weight(self.0.saturating_add(other.0))
    }

    /// Parses a kilogram form field ("0.5", "2.75", "10") into grams using
    /// integer arithmetic only.
    ///
    /// ## Rules
    /// - At most three fraction digits (gram resolution)
    /// - No sign allowed - a negative weight fails coercion
    /// - Surrounding whitespace is ignored
    ///
    /// ## Example
    /// ```rust
    /// use parceldesk_core::types::Weight;
    ///
    /// assert_eq!(Weight::parse_kg("0.5"), Some(Weight::from_grams(500)));
    /// assert_eq!(Weight::parse_kg("2.75"), Some(Weight::from_grams(2750)));
    /// assert_eq!(Weight::parse_kg("-1"), None);
    /// ```
    pub fn parse_kg(raw: &str) -> Option<Self> {
        let raw = raw.trim();

        let (whole, fraction) = match raw.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (raw, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if fraction.len() > 3 {
            return None;
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let kg: u32 = if whole.is_empty() {
            0
        } else {
            whole.parse().ok()?
        };
        let scale = 10u32.pow(3 - fraction.len() as u32);
        let grams_frac: u32 = if fraction.is_empty() {
            0
        } else {
            fraction.parse::<u32>().ok()? * scale
        };

        let grams = kg.checked_mul(GRAMS_PER_KG)?.checked_add(grams_frac)?;
        Some(Weight(grams))
    }
}

/// Renders the weight in kilograms with trailing zeros trimmed ("0.5",
/// "1", "2.75"). This is the notation used in validation messages and
/// bracket span labels.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kg = self.0 / GRAMS_PER_KG;
        let rem = self.0 % GRAMS_PER_KG;
        if rem == 0 {
            write!(f, "{kg}")
        } else {
            let frac = format!("{rem:03}");
            write!(f, "{}.{}", kg, frac.trim_end_matches('0'))
        }
    }
}

// =============================================================================
// Weight Bracket
// =============================================================================

/// One row of the commission schedule: a half-open weight range `[min, max)`
/// with a flat charge.
///
/// `max = None` means unbounded ("∞"), permitted only on the last bracket
/// after sorting by `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightBracket {
    /// Inclusive lower bound.
    pub min: Weight,

    /// Exclusive upper bound; `None` = unbounded.
    pub max: Option<Weight>,

    /// Flat charge applied when a parcel's weight falls in `[min, max)`.
    pub charge: Money,
}

impl WeightBracket {
    /// Whether `weight` falls inside this bracket's half-open range.
    #[inline]
    pub fn contains(&self, weight: Weight) -> bool {
        weight >= self.min && self.max.is_none_or(|max| weight < max)
    }

    /// Human-readable span used in overlap messages and label captions:
    /// "0-1kg" for a bounded bracket, "5kg+" for an unbounded one.
    pub fn span_label(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}kg", self.min, max),
            None => format!("{}kg+", self.min),
        }
    }
}

// =============================================================================
// Bracket Draft
// =============================================================================

/// A raw commission-form row, exactly as the dashboard submits it.
///
/// Every field is a string straight out of an input element; a blank
/// `maxKg` means unbounded. The validation module coerces drafts into
/// [`WeightBracket`] values before any rule runs.
///
/// ## Serialization
/// ```json
/// { "minKg": "0", "maxKg": "1", "charge": "100" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BracketDraft {
    /// Inclusive lower bound, kilograms.
    pub min_kg: String,

    /// Exclusive upper bound, kilograms; blank = unbounded.
    pub max_kg: String,

    /// Flat charge, rupees.
    pub charge: String,
}

impl BracketDraft {
    /// Builds a draft row the way the form does.
    pub fn new(
        min_kg: impl Into<String>,
        max_kg: impl Into<String>,
        charge: impl Into<String>,
    ) -> Self {
        BracketDraft {
            min_kg: min_kg.into(),
            max_kg: max_kg.into(),
            charge: charge.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kg() {
        assert_eq!(Weight::parse_kg("0"), Some(Weight::zero()));
        assert_eq!(Weight::parse_kg("0.5"), Some(Weight::from_grams(500)));
        assert_eq!(Weight::parse_kg("2.75"), Some(Weight::from_grams(2750)));
        assert_eq!(Weight::parse_kg("10"), Some(Weight::from_kg(10)));
        assert_eq!(Weight::parse_kg("0.125"), Some(Weight::from_grams(125)));
        assert_eq!(Weight::parse_kg(" 1 "), Some(Weight::from_kg(1)));
        assert_eq!(Weight::parse_kg(".5"), Some(Weight::from_grams(500)));
    }

    #[test]
    fn test_parse_kg_rejects_junk() {
        assert_eq!(Weight::parse_kg(""), None);
        assert_eq!(Weight::parse_kg("   "), None);
        assert_eq!(Weight::parse_kg("."), None);
        assert_eq!(Weight::parse_kg("-1"), None);
        assert_eq!(Weight::parse_kg("+1"), None);
        assert_eq!(Weight::parse_kg("abc"), None);
        assert_eq!(Weight::parse_kg("1.2345"), None); // below gram resolution
        assert_eq!(Weight::parse_kg("1,5"), None);
    }

    #[test]
    fn test_weight_display() {
        assert_eq!(Weight::from_grams(500).to_string(), "0.5");
        assert_eq!(Weight::from_kg(1).to_string(), "1");
        assert_eq!(Weight::from_grams(2750).to_string(), "2.75");
        assert_eq!(Weight::from_grams(125).to_string(), "0.125");
        assert_eq!(Weight::zero().to_string(), "0");
    }

    #[test]
    fn test_bracket_contains_half_open() {
        let bracket = WeightBracket {
            min: Weight::zero(),
            max: Some(Weight::from_kg(1)),
            charge: Money::from_paisa(10_000),
        };

        assert!(bracket.contains(Weight::zero()));
        assert!(bracket.contains(Weight::from_grams(999)));
        assert!(!bracket.contains(Weight::from_kg(1))); // upper bound is exclusive
        assert!(!bracket.contains(Weight::from_kg(2)));
    }

    #[test]
    fn test_bracket_contains_unbounded() {
        let bracket = WeightBracket {
            min: Weight::from_kg(5),
            max: None,
            charge: Money::from_paisa(50_000),
        };

        assert!(!bracket.contains(Weight::from_grams(4999)));
        assert!(bracket.contains(Weight::from_kg(5)));
        assert!(bracket.contains(Weight::from_kg(999)));
    }

    #[test]
    fn test_span_label() {
        let bounded = WeightBracket {
            min: Weight::from_grams(500),
            max: Some(Weight::from_kg(2)),
            charge: Money::zero(),
        };
        assert_eq!(bounded.span_label(), "0.5-2kg");

        let open = WeightBracket {
            min: Weight::from_kg(5),
            max: None,
            charge: Money::zero(),
        };
        assert_eq!(open.span_label(), "5kg+");
    }

    #[test]
    fn test_draft_deserializes_from_form_json() {
        let draft: BracketDraft =
            serde_json::from_str(r#"{ "minKg": "0", "maxKg": "", "charge": "100" }"#)
                .expect("form payload should deserialize");
        assert_eq!(draft, BracketDraft::new("0", "", "100"));
    }
}
