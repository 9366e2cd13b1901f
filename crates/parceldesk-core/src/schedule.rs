//! # Schedule Module
//!
//! Invariant checking and charge lookup for the weight-bracket commission
//! schedule.
//!
//! ## Schedule Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Commission Schedule Rules (checked in order)               │
//! │                                                                         │
//! │  1. At least one bracket exists                                         │
//! │  2. Every minimum is a non-negative number (typed Weight: holds by      │
//! │     construction, enforced at string coercion)                          │
//! │  3. Every charge is non-negative                                        │
//! │  4. A bounded maximum is strictly greater than its minimum              │
//! │  5. Sorted by minimum, consecutive brackets do not overlap              │
//! │  6. Only the last bracket may be unbounded                              │
//! │                                                                         │
//! │  The walk is over a copy sorted ascending by minimum weight and         │
//! │  short-circuits on the first violation, so the same input always        │
//! │  produces the same message.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use parceldesk_core::schedule::{charge, validate};
//! use parceldesk_core::types::{Weight, WeightBracket};
//! use parceldesk_core::Money;
//!
//! let brackets = vec![WeightBracket {
//!     min: Weight::zero(),
//!     max: None,
//!     charge: Money::from_paisa(10_000),
//! }];
//!
//! validate(&brackets).unwrap();
//! assert_eq!(charge(&brackets, Weight::from_kg(3)), Some(Money::from_paisa(10_000)));
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::error::{ScheduleError, ScheduleResult};
use crate::money::Money;
use crate::types::{BracketDraft, Weight, WeightBracket};
use crate::validation::normalize_schedule;
use crate::DEFAULT_BRACKET_SPAN;

// =============================================================================
// Invariant Walk
// =============================================================================

/// Validates a typed schedule against the bracket rules.
///
/// Sorts a copy ascending by minimum weight (stable, so the caller's row
/// order never changes the outcome), walks it once, and returns the first
/// violation. Bracket indexes in messages are 1-based positions in the
/// *sorted* order.
///
/// Overlap is checked between consecutive brackets only. Because the rows
/// are contiguous ranges sorted by minimum, the adjacent-pair check is what
/// the business signed off on; do not widen it to a full pairwise scan
/// without confirming intended behavior.
pub fn validate(brackets: &[WeightBracket]) -> ScheduleResult<()> {
    if brackets.is_empty() {
        return Err(ScheduleError::Empty);
    }

    let sorted = sorted_by_min(brackets);
    let last = sorted.len() - 1;

    for (i, bracket) in sorted.iter().enumerate() {
        if bracket.charge.is_negative() {
            return Err(ScheduleError::InvalidCharge { index: i + 1 });
        }

        if let Some(max) = bracket.max {
            if max <= bracket.min {
                return Err(ScheduleError::MaxNotAboveMin { index: i + 1 });
            }
        }

        if i > 0 {
            let prev = &sorted[i - 1];
            if let Some(prev_max) = prev.max {
                if bracket.min < prev_max {
                    return Err(ScheduleError::Overlap {
                        first: prev.span_label(),
                        second: bracket.span_label(),
                    });
                }
            }
        }

        if bracket.max.is_none() && i != last {
            return Err(ScheduleError::UnboundedNotLast);
        }
    }

    Ok(())
}

/// Coerces raw form rows and validates them in one call, flattened to the
/// `{ valid, message }` shape the commission UI consumes.
///
/// This is the entry point the dashboard hits on every bracket mutation
/// (add/remove/edit) and again before the save action. It never panics.
pub fn validate_drafts(drafts: &[BracketDraft]) -> ValidationOutcome {
    normalize_schedule(drafts)
        .and_then(|brackets| validate(&brackets))
        .into()
}

// =============================================================================
// Charge Lookup
// =============================================================================

/// Prices a parcel: the charge of the first bracket (sorted by minimum)
/// whose half-open range contains `weight`.
///
/// Returns `None` when no bracket applies - the weight is below the lowest
/// minimum, or the schedule is empty. `None` is a signal, not an error:
/// billing decides whether to fall back to a default rate or flag the
/// booking for manual review.
///
/// Callers must validate the schedule first; on an overlapping schedule
/// the only guarantee is first-match-wins.
pub fn charge(brackets: &[WeightBracket], weight: Weight) -> Option<Money> {
    sorted_by_min(brackets)
        .into_iter()
        .find(|bracket| bracket.contains(weight))
        .map(|bracket| bracket.charge)
}

// =============================================================================
// Default Rows
// =============================================================================

/// Returns a new list with one appended bracket continuing the schedule:
/// minimum = the current last row's maximum (0 kg if the list is empty or
/// that row is unbounded), maximum = minimum + 1 kg, charge = 0.
///
/// Pure: the input list is untouched and independently owned.
pub fn add_default_bracket(brackets: &[WeightBracket]) -> Vec<WeightBracket> {
    let min = brackets
        .last()
        .and_then(|bracket| bracket.max)
        .unwrap_or(Weight::zero());

    let mut extended = brackets.to_vec();
    extended.push(WeightBracket {
        min,
        max: Some(min.saturating_add(DEFAULT_BRACKET_SPAN)),
        charge: Money::zero(),
    });
    extended
}

// =============================================================================
// Validation Outcome (wire shape)
// =============================================================================

/// What the commission UI receives for a validation pass.
///
/// ## Serialization
/// ```json
/// { "valid": true }
/// { "valid": false, "message": "Overlap between 0-1kg and 0.5-2kg" }
/// ```
///
/// The UI displays `message` verbatim and keeps the save action disabled
/// until `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    /// Whether the submitted schedule satisfies every bracket rule.
    pub valid: bool,

    /// First violation, phrased for the administrator; absent when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationOutcome {
    /// A passing outcome.
    pub fn ok() -> Self {
        ValidationOutcome {
            valid: true,
            message: None,
        }
    }

    /// A failing outcome carrying the message to display.
    pub fn rejected(message: impl Into<String>) -> Self {
        ValidationOutcome {
            valid: false,
            message: Some(message.into()),
        }
    }
}

impl From<ScheduleResult<()>> for ValidationOutcome {
    fn from(result: ScheduleResult<()>) -> Self {
        match result {
            Ok(()) => ValidationOutcome::ok(),
            Err(err) => ValidationOutcome::rejected(err.to_string()),
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Copy of the schedule sorted ascending by minimum weight. The sort is
/// stable so rows sharing a minimum keep their submitted order.
fn sorted_by_min(brackets: &[WeightBracket]) -> Vec<WeightBracket> {
    let mut sorted = brackets.to_vec();
    sorted.sort_by_key(|bracket| bracket.min);
    sorted
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(min_g: u32, max_g: u32, paisa: i64) -> WeightBracket {
        WeightBracket {
            min: Weight::from_grams(min_g),
            max: Some(Weight::from_grams(max_g)),
            charge: Money::from_paisa(paisa),
        }
    }

    fn open(min_g: u32, paisa: i64) -> WeightBracket {
        WeightBracket {
            min: Weight::from_grams(min_g),
            max: None,
            charge: Money::from_paisa(paisa),
        }
    }

    #[test]
    fn test_single_open_bracket_is_valid() {
        let brackets = vec![open(0, 10_000)];
        assert!(validate(&brackets).is_ok());
    }

    #[test]
    fn test_empty_schedule_rejected() {
        assert_eq!(validate(&[]), Err(ScheduleError::Empty));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let brackets = vec![bounded(0, 2000, 5000), bounded(1000, 3000, 8000)];
        assert_eq!(validate(&brackets), validate(&brackets));
    }

    #[test]
    fn test_result_is_order_invariant() {
        let in_order = vec![bounded(0, 1000, 10_000), open(1000, 15_000)];
        let shuffled = vec![open(1000, 15_000), bounded(0, 1000, 10_000)];

        assert_eq!(validate(&in_order), validate(&shuffled));
        assert_eq!(
            charge(&in_order, Weight::from_grams(500)),
            charge(&shuffled, Weight::from_grams(500))
        );
    }

    #[test]
    fn test_overlap_detected_with_span_labels() {
        // 0-2kg then 1-3kg: the second row starts inside the first.
        let brackets = vec![bounded(0, 2000, 5000), bounded(1000, 3000, 8000)];
        assert_eq!(
            validate(&brackets).unwrap_err().to_string(),
            "Overlap between 0-2kg and 1-3kg"
        );
    }

    #[test]
    fn test_identical_minimums_overlap() {
        let brackets = vec![bounded(0, 1000, 5000), bounded(0, 2000, 8000)];
        assert!(matches!(
            validate(&brackets),
            Err(ScheduleError::Overlap { .. })
        ));
    }

    #[test]
    fn test_touching_brackets_do_not_overlap() {
        // [0,1) then [1,3): the shared bound belongs to the second row only.
        let brackets = vec![bounded(0, 1000, 5000), bounded(1000, 3000, 8000)];
        assert!(validate(&brackets).is_ok());
    }

    #[test]
    fn test_unbounded_must_be_last() {
        let brackets = vec![open(0, 1000), bounded(5000, 10_000, 2000)];
        assert_eq!(
            validate(&brackets).unwrap_err().to_string(),
            "Only the last bracket can have unlimited maximum weight"
        );
    }

    #[test]
    fn test_max_not_above_min_names_sorted_position() {
        // Sorted: [0,1) first, then the inverted row at 0.5.
        let brackets = vec![bounded(500, 300, 2000), bounded(0, 1000, 5000)];
        assert_eq!(
            validate(&brackets).unwrap_err().to_string(),
            "Maximum weight must be greater than minimum weight for bracket 2"
        );
    }

    #[test]
    fn test_negative_charge_rejected() {
        let brackets = vec![bounded(0, 1000, 5000), bounded(1000, 2000, -100)];
        assert_eq!(
            validate(&brackets),
            Err(ScheduleError::InvalidCharge { index: 2 })
        );
    }

    #[test]
    fn test_zero_charge_allowed() {
        // Free tier for documents under 100 g.
        let brackets = vec![bounded(0, 100, 0), open(100, 10_000)];
        assert!(validate(&brackets).is_ok());
    }

    #[test]
    fn test_charge_lookup() {
        let brackets = vec![bounded(0, 1000, 10_000), open(1000, 15_000)];

        assert_eq!(
            charge(&brackets, Weight::from_grams(500)),
            Some(Money::from_paisa(10_000))
        );
        // Exactly on the shared bound: the open bracket wins (exclusive max).
        assert_eq!(
            charge(&brackets, Weight::from_kg(1)),
            Some(Money::from_paisa(15_000))
        );
        assert_eq!(
            charge(&brackets, Weight::from_kg(999)),
            Some(Money::from_paisa(15_000))
        );
    }

    #[test]
    fn test_charge_below_lowest_minimum_is_none() {
        let brackets = vec![bounded(500, 2000, 10_000)];
        assert_eq!(charge(&brackets, Weight::from_grams(200)), None);
        assert_eq!(charge(&[], Weight::from_grams(200)), None);
    }

    #[test]
    fn test_add_default_bracket_continues_schedule() {
        let brackets = vec![bounded(0, 1000, 10_000)];
        let extended = add_default_bracket(&brackets);

        assert_eq!(brackets.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(
            extended[1],
            WeightBracket {
                min: Weight::from_kg(1),
                max: Some(Weight::from_kg(2)),
                charge: Money::zero(),
            }
        );
    }

    #[test]
    fn test_add_default_bracket_to_empty_or_open_schedule() {
        let from_empty = add_default_bracket(&[]);
        assert_eq!(from_empty[0].min, Weight::zero());
        assert_eq!(from_empty[0].max, Some(Weight::from_kg(1)));

        // An unbounded last row has no maximum to continue from.
        let from_open = add_default_bracket(&[open(5000, 2000)]);
        assert_eq!(from_open[1].min, Weight::zero());
    }

    #[test]
    fn test_validate_drafts_wire_shape() {
        let good = vec![
            BracketDraft::new("0", "1", "100"),
            BracketDraft::new("1", "", "150"),
        ];
        let outcome = validate_drafts(&good);
        assert_eq!(outcome, ValidationOutcome::ok());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({ "valid": true })
        );

        let overlapping = vec![
            BracketDraft::new("0", "1", "100"),
            BracketDraft::new("0.5", "2", "150"),
        ];
        let outcome = validate_drafts(&overlapping);
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({
                "valid": false,
                "message": "Overlap between 0-1kg and 0.5-2kg"
            })
        );
    }

    #[test]
    fn test_validate_drafts_reports_coercion_failures() {
        let drafts = vec![BracketDraft::new("zero", "1", "100")];
        let outcome = validate_drafts(&drafts);
        assert!(!outcome.valid);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Minimum weight must be a non-negative number for bracket 1")
        );
    }

    #[test]
    fn test_validate_drafts_accepts_form_payload() {
        // The exact JSON the dashboard PUTs after an edit session.
        let payload = r#"[
            { "minKg": "0", "maxKg": "1", "charge": "100" },
            { "minKg": "1", "maxKg": "5", "charge": "150.50" },
            { "minKg": "5", "maxKg": "", "charge": "300" }
        ]"#;
        let drafts: Vec<BracketDraft> = serde_json::from_str(payload).unwrap();
        assert_eq!(validate_drafts(&drafts), ValidationOutcome::ok());
    }
}
