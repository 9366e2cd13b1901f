//! # Validation Module
//!
//! Normalization of raw commission-form input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard form (external)                                     │
//! │  ├── Basic format hints (input type, placeholder)                       │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - coercion                                        │
//! │  ├── "0.5" → 500 g, "150.50" → 15050 paisa, "" max → unbounded          │
//! │  └── Rejects rows that are not numbers at all                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: schedule module - invariant walk                              │
//! │  ├── Ordering, overlap, unbounded-last rules over typed brackets        │
//! │  └── First violation blocks the save                                    │
//! │                                                                         │
//! │  Coercion and invariant checking are deliberately separate steps:       │
//! │  coercion errors name the row as submitted, invariant errors name       │
//! │  the bracket in sorted order.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ScheduleError, ScheduleResult};
use crate::money::Money;
use crate::types::{BracketDraft, Weight, WeightBracket};

// =============================================================================
// Draft Coercion
// =============================================================================

/// Coerces one form row into a typed bracket.
///
/// `position` is the row's 1-based position in the submitted list and is
/// used in error messages.
///
/// ## Rules
/// - `min_kg` must parse as a non-negative kilogram value
/// - `max_kg` blank means unbounded; anything else must parse
/// - `charge` must parse as a decimal amount; a *negative* amount passes
///   coercion and is rejected by the schedule rule walk, which owns that
///   rule and its message
pub fn normalize_bracket(draft: &BracketDraft, position: usize) -> ScheduleResult<WeightBracket> {
    let min = Weight::parse_kg(&draft.min_kg)
        .ok_or(ScheduleError::InvalidMin { index: position })?;

    let max_raw = draft.max_kg.trim();
    let max = if max_raw.is_empty() {
        None
    } else {
        Some(Weight::parse_kg(max_raw).ok_or(ScheduleError::InvalidMax { index: position })?)
    };

    let charge = Money::from_decimal_str(&draft.charge)
        .ok_or(ScheduleError::InvalidCharge { index: position })?;

    Ok(WeightBracket { min, max, charge })
}

/// Coerces a whole form submission, stopping at the first bad row.
pub fn normalize_schedule(drafts: &[BracketDraft]) -> ScheduleResult<Vec<WeightBracket>> {
    drafts
        .iter()
        .enumerate()
        .map(|(i, draft)| normalize_bracket(draft, i + 1))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bracket() {
        let draft = BracketDraft::new("0.5", "2", "150.50");
        let bracket = normalize_bracket(&draft, 1).expect("draft should coerce");

        assert_eq!(bracket.min, Weight::from_grams(500));
        assert_eq!(bracket.max, Some(Weight::from_kg(2)));
        assert_eq!(bracket.charge, Money::from_paisa(15050));
    }

    #[test]
    fn test_blank_max_means_unbounded() {
        let blank = normalize_bracket(&BracketDraft::new("5", "", "200"), 1).unwrap();
        assert_eq!(blank.max, None);

        let spaces = normalize_bracket(&BracketDraft::new("5", "   ", "200"), 1).unwrap();
        assert_eq!(spaces.max, None);
    }

    #[test]
    fn test_bad_min_names_the_row() {
        let err = normalize_bracket(&BracketDraft::new("", "1", "100"), 2).unwrap_err();
        assert_eq!(err, ScheduleError::InvalidMin { index: 2 });

        let err = normalize_bracket(&BracketDraft::new("-1", "1", "100"), 3).unwrap_err();
        assert_eq!(err, ScheduleError::InvalidMin { index: 3 });

        let err = normalize_bracket(&BracketDraft::new("abc", "1", "100"), 1).unwrap_err();
        assert_eq!(err, ScheduleError::InvalidMin { index: 1 });
    }

    #[test]
    fn test_bad_max_and_charge() {
        let err = normalize_bracket(&BracketDraft::new("0", "oops", "100"), 1).unwrap_err();
        assert_eq!(err, ScheduleError::InvalidMax { index: 1 });

        let err = normalize_bracket(&BracketDraft::new("0", "1", ""), 4).unwrap_err();
        assert_eq!(err, ScheduleError::InvalidCharge { index: 4 });

        let err = normalize_bracket(&BracketDraft::new("0", "1", "1e3"), 1).unwrap_err();
        assert_eq!(err, ScheduleError::InvalidCharge { index: 1 });
    }

    #[test]
    fn test_negative_charge_passes_coercion() {
        // The rule walk owns the non-negative-charge rule and its message.
        let bracket = normalize_bracket(&BracketDraft::new("0", "1", "-50"), 1).unwrap();
        assert!(bracket.charge.is_negative());
    }

    #[test]
    fn test_normalize_schedule_stops_at_first_bad_row() {
        let drafts = vec![
            BracketDraft::new("0", "1", "100"),
            BracketDraft::new("bad", "2", "150"),
            BracketDraft::new("also bad", "", "200"),
        ];

        let err = normalize_schedule(&drafts).unwrap_err();
        assert_eq!(err, ScheduleError::InvalidMin { index: 2 });
    }

    #[test]
    fn test_normalize_schedule_ok() {
        let drafts = vec![
            BracketDraft::new("0", "1", "100"),
            BracketDraft::new("1", "", "150"),
        ];

        let brackets = normalize_schedule(&drafts).expect("schedule should coerce");
        assert_eq!(brackets.len(), 2);
        assert_eq!(brackets[1].max, None);
    }
}
