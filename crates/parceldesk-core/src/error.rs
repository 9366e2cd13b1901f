//! # Error Types
//!
//! Schedule validation errors for parceldesk-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  parceldesk-core errors (this file)                                     │
//! │  └── ScheduleError   - one variant per violated schedule rule           │
//! │                                                                         │
//! │  Commission UI (external)                                               │
//! │  └── receives { valid: false, message } and blocks the save button      │
//! │                                                                         │
//! │  Flow: ScheduleError → ValidationOutcome → Dashboard form banner        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Messages are shown to the administrator verbatim - write them for humans
//! 3. Errors are enum variants, never String
//! 4. Bracket indexes in messages are 1-based (the order the form shows rows)

use thiserror::Error;

// =============================================================================
// Schedule Error
// =============================================================================

/// A violated commission-schedule rule.
///
/// Returned by normalization (coercion of raw form strings) and by the
/// invariant walk over the sorted brackets. Validation never panics; the
/// first violation wins and its message is displayed unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The schedule has no rows at all.
    #[error("At least one weight bracket is required")]
    Empty,

    /// Minimum weight failed coercion (empty, non-numeric, or negative).
    #[error("Minimum weight must be a non-negative number for bracket {index}")]
    InvalidMin { index: usize },

    /// Maximum weight was neither blank (unbounded) nor a valid number.
    #[error("Maximum weight must be a number or left blank for bracket {index}")]
    InvalidMax { index: usize },

    /// Charge failed coercion, or a typed charge was negative.
    #[error("Charge must be a non-negative amount for bracket {index}")]
    InvalidCharge { index: usize },

    /// A bounded bracket whose upper bound does not exceed its lower bound.
    #[error("Maximum weight must be greater than minimum weight for bracket {index}")]
    MaxNotAboveMin { index: usize },

    /// Two brackets claim the same weights after sorting by minimum.
    ///
    /// ## When This Occurs
    /// - The administrator edits a bound so ranges intersect
    /// - Two rows share the same minimum weight
    ///
    /// ## User Workflow
    /// ```text
    /// Edit bracket 2 min: 0.5
    ///      │
    ///      ▼
    /// validate: bracket 1 is 0-1kg, bracket 2 now starts inside it
    ///      │
    ///      ▼
    /// Overlap { first: "0-1kg", second: "0.5-2kg" }
    ///      │
    ///      ▼
    /// UI shows: "Overlap between 0-1kg and 0.5-2kg"
    /// ```
    #[error("Overlap between {first} and {second}")]
    Overlap { first: String, second: String },

    /// An unbounded bracket that is not the final one in sorted order.
    #[error("Only the last bracket can have unlimited maximum weight")]
    UnboundedNotLast,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ScheduleError.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

// =============================================================================
// Unit Tests
// =============================================================================
