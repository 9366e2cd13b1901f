//! # parceldesk-core: Pure Business Logic for ParcelDesk
//!
//! This crate is the **heart** of ParcelDesk. It contains the business rules
//! shared between the courier dashboard and the billing service as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ParcelDesk Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Dashboard (React, external)                     │   │
//! │  │   Booking UI ──► Commission UI ──► Label UI ──► Finance UI      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ REST / JSON                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ parceldesk-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │ schedule  │  │ symbology │   │   │
//! │  │   │  Weight   │  │   Money   │  │  validate │  │  Code-39  │   │   │
//! │  │   │  Bracket  │  │  parsing  │  │  charge   │  │  encode   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            REST API + Store (external collaborators)            │   │
//! │  │       Persists schedules, prices bookings, prints labels        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Weight, WeightBracket, BracketDraft)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Schedule validation error types
//! - [`validation`] - Coercion of raw form input into typed brackets
//! - [`schedule`] - Bracket invariants, charge lookup, default rows
//! - [`symbology`] - Code-39-style bar encoding for shipment labels
//! - [`svg`] - SVG serialization of an encoded bar sequence
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Units**: Money in paisa (i64), weight in grams (u32) - no float drift
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use parceldesk_core::money::Money;
//! use parceldesk_core::schedule;
//! use parceldesk_core::types::{Weight, WeightBracket};
//!
//! // A two-row commission schedule: up to 1 kg, then open-ended.
//! let brackets = vec![
//!     WeightBracket {
//!         min: Weight::zero(),
//!         max: Some(Weight::from_kg(1)),
//!         charge: Money::from_paisa(10_000), // Rs 100
//!     },
//!     WeightBracket {
//!         min: Weight::from_kg(1),
//!         max: None,
//!         charge: Money::from_paisa(15_000), // Rs 150
//!     },
//! ];
//!
//! assert!(schedule::validate(&brackets).is_ok());
//!
//! // A 500 g parcel prices at the first bracket.
//! let priced = schedule::charge(&brackets, Weight::from_grams(500));
//! assert_eq!(priced, Some(Money::from_paisa(10_000)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod schedule;
pub mod svg;
pub mod symbology;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use parceldesk_core::Money` instead of
// `use parceldesk_core::money::Money`

pub use error::{ScheduleError, ScheduleResult};
pub use money::Money;
pub use schedule::ValidationOutcome;
pub use symbology::Bar;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Grams per kilogram, the conversion base for all weight parsing/display.
///
/// ## Why a constant?
/// Weights are stored in integer grams but every external surface (forms,
/// validation messages, label captions) speaks kilograms. All conversions
/// go through this single base.
pub const GRAMS_PER_KG: u32 = 1000;

/// Span of a freshly appended commission bracket (1 kg).
///
/// ## Business Reason
/// When the administrator adds a row, the form pre-fills a contiguous 1 kg
/// range after the current last bracket so the schedule stays gap-free by
/// default. The administrator then adjusts the bounds before saving.
pub const DEFAULT_BRACKET_SPAN: types::Weight = types::Weight::from_kg(1);
