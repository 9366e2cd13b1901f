//! # Money Module
//!
//! Provides the `Money` type for handling bracket charges and invoice
//! amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A commission form that parses "150.50" into a float and compares it    │
//! │  against a persisted schedule can disagree with the billing service     │
//! │  by a paisa - and the finance ledger never balances again.              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paisa                                            │
//! │    "150.50" parses to 15050 paisa with pure integer arithmetic          │
//! │    The dashboard, validation, and billing all agree to the paisa        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use parceldesk_core::money::Money;
//!
//! // Create from paisa (preferred)
//! let charge = Money::from_paisa(15050); // Rs 150.50
//!
//! // Coerce a commission-form field (no float intermediate)
//! let parsed = Money::from_decimal_str("150.50");
//! assert_eq!(parsed, Some(charge));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (paisa).
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative values are representable; coercion accepts
///   them and the schedule rule walk rejects them with its own message
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paisa (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use parceldesk_core::money::Money;
    ///
    /// let charge = Money::from_paisa(15050); // Represents Rs 150.50
    /// assert_eq!(charge.paisa(), 15050);
    /// ```
    #[inline]
    pub const fn from_paisa(paisa: i64) -> Self {
        Money(paisa)
    }

    /// Returns the value in paisa (smallest currency unit).
    #[inline]
    pub const fn paisa(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rupees) portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (paisa) portion (always 0-99).
    #[inline]
    pub const fn paisa_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parses a decimal currency string ("150", "150.5", "150.50") into
    /// paisa using integer arithmetic only.
    ///
    /// ## Rules
    /// - Optional leading minus (normalization accepts it; the schedule
    ///   rule walk rejects negative charges with its own message)
    /// - At most two fraction digits; one digit means tens of paisa
    /// - Surrounding whitespace is ignored
    /// - Anything else (empty, letters, thousands separators) is `None`
    ///
    /// ## Example
    /// ```rust
    /// use parceldesk_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal_str("150"), Some(Money::from_paisa(15000)));
    /// assert_eq!(Money::from_decimal_str("150.5"), Some(Money::from_paisa(15050)));
    /// assert_eq!(Money::from_decimal_str("0.75"), Some(Money::from_paisa(75)));
    /// assert_eq!(Money::from_decimal_str("12,50"), None);
    /// assert_eq!(Money::from_decimal_str(""), None);
    /// ```
    pub fn from_decimal_str(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if fraction.len() > 2 {
            return None;
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let rupees: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().ok()?
        };
        let paisa: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().ok()? * 10,
            _ => fraction.parse().ok()?,
        };

        let total = rupees.checked_mul(100)?.checked_add(paisa)?;
        Some(Money(if negative { -total } else { total }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. The dashboard formats amounts itself
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "Rs {}{}.{:02}",
            sign,
            self.rupees().abs(),
            self.paisa_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=), used when totalling invoice lines.
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
