//! # Symbology Module
//!
//! Deterministic Code-39-style bar encoding for shipment labels.
//!
//! ## Encoding Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Label Encoding Pipeline                             │
//! │                                                                         │
//! │  "cn-14764"                                                             │
//! │       │ uppercase + sentinel wrap                                       │
//! │       ▼                                                                 │
//! │  * C N - 1 4 7 6 4 *                                                    │
//! │       │ per character: 9-element wide/narrow pattern (12 units)         │
//! │       │ + one narrow gap after each character                           │
//! │       ▼                                                                 │
//! │  [Bar{2,█}, Bar{1,░}, ...]  ──►  label UI scales units to pixels        │
//! │                                                                         │
//! │  Characters outside the alphabet substitute '-' - the symbol is a       │
//! │  visual decoration on invoices and labels, not a scan-grade code,       │
//! │  so bad input degrades instead of erroring.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use parceldesk_core::symbology::{encode, total_units};
//!
//! let bars = encode("14764");
//! // 5 characters + 2 sentinels, 12 units + 1 gap unit each
//! assert_eq!(total_units(&bars), 7 * 13);
//!
//! // Empty input is "no symbol", the caller renders a placeholder
//! assert!(encode("").is_empty());
//! ```

use serde::Serialize;
use ts_rs::TS;

// =============================================================================
// Constants
// =============================================================================

/// Start/stop character wrapped around every encoded value.
pub const SENTINEL: char = '*';

/// Substitute pattern for characters outside the supported alphabet.
pub const FALLBACK: char = '-';

/// Elements (bars and spaces) per character pattern: 5 bars, 4 spaces.
pub const ELEMENTS_PER_CHARACTER: usize = 9;

/// Unit width of one character pattern: 6 narrow + 3 wide elements.
pub const UNITS_PER_CHARACTER: u32 = 12;

const NARROW: u32 = 1;
const WIDE: u32 = 2;

// =============================================================================
// Bar
// =============================================================================

/// One run of the rendered symbol.
///
/// Widths are abstract units; the label UI multiplies them by a pixel
/// scale, or redistributes horizontal scale to hit a target total width.
/// Only `filled` runs are drawn as rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    /// Width in abstract units (narrow = 1, wide = 2).
    pub width_units: u32,

    /// Ink (`true`) or background (`false`).
    pub filled: bool,
}

// =============================================================================
// Pattern Table
// =============================================================================

/// Wide/narrow patterns per character, 9 elements each, alternating
/// bar/space starting with a bar. Exactly three elements per character are
/// wide, so every pattern is 12 units.
const PATTERNS: [(char, &str); 44] = [
    ('0', "nnnwwnwnn"),
    ('1', "wnnwnnnnw"),
    ('2', "nnwwnnnnw"),
    ('3', "wnwwnnnnn"),
    ('4', "nnnwwnnnw"),
    ('5', "wnnwwnnnn"),
    ('6', "nnwwwnnnn"),
    ('7', "nnnwnnwnw"),
    ('8', "wnnwnnwnn"),
    ('9', "nnwwnnwnn"),
    ('A', "wnnnnwnnw"),
    ('B', "nnwnnwnnw"),
    ('C', "wnwnnwnnn"),
    ('D', "nnnnwwnnw"),
    ('E', "wnnnwwnnn"),
    ('F', "nnwnwwnnn"),
    ('G', "nnnnnwwnw"),
    ('H', "wnnnnwwnn"),
    ('I', "nnwnnwwnn"),
    ('J', "nnnnwwwnn"),
    ('K', "wnnnnnnww"),
    ('L', "nnwnnnnww"),
    ('M', "wnwnnnnwn"),
    ('N', "nnnnwnnww"),
    ('O', "wnnnwnnwn"),
    ('P', "nnwnwnnwn"),
    ('Q', "nnnnnnwww"),
    ('R', "wnnnnnwwn"),
    ('S', "nnwnnnwwn"),
    ('T', "nnnnwnwwn"),
    ('U', "wwnnnnnnw"),
    ('V', "nwwnnnnnw"),
    ('W', "wwwnnnnnn"),
    ('X', "nwnnwnnnw"),
    ('Y', "wwnnwnnnn"),
    ('Z', "nwwnwnnnn"),
    ('-', "nwnnnnwnw"),
    ('.', "wwnnnnwnn"),
    (' ', "nwwnnnwnn"),
    ('$', "nwnwnwnnn"),
    ('/', "nwnwnnnwn"),
    ('+', "nwnnnwnwn"),
    ('%', "nnnwnwnwn"),
    ('*', "nwnnwnwnn"),
];

/// '-' pattern, substituted for anything outside the alphabet.
const FALLBACK_PATTERN: &str = "nwnnnnwnw";

fn pattern_for(symbol: char) -> &'static str {
    PATTERNS
        .iter()
        .find(|(c, _)| *c == symbol)
        .map(|(_, pattern)| *pattern)
        .unwrap_or(FALLBACK_PATTERN)
}

// =============================================================================
// Encoding
// =============================================================================

/// Encodes a label value into an ordered bar sequence.
///
/// The value is uppercased and wrapped in [`SENTINEL`] characters; each
/// character contributes its 12-unit pattern plus one narrow gap. The
/// result is fully determined by the input - no randomness, no locale.
///
/// Empty input returns an empty sequence: "no symbol" is the caller's cue
/// to render a placeholder instead. There is no invalid input.
pub fn encode(value: &str) -> Vec<Bar> {
    if value.is_empty() {
        return Vec::new();
    }

    let mut bars =
        Vec::with_capacity((value.chars().count() + 2) * (ELEMENTS_PER_CHARACTER + 1));
    push_character(&mut bars, SENTINEL);
    for symbol in value.chars() {
        push_character(&mut bars, symbol.to_ascii_uppercase());
    }
    push_character(&mut bars, SENTINEL);
    bars
}

/// Unit width of an encoded sequence, for consumer scaling math.
pub fn total_units(bars: &[Bar]) -> u32 {
    bars.iter().map(|bar| bar.width_units).sum()
}

fn push_character(bars: &mut Vec<Bar>, symbol: char) {
    let pattern = pattern_for(symbol);
    for (position, element) in pattern.chars().enumerate() {
        bars.push(Bar {
            width_units: if element == 'w' { WIDE } else { NARROW },
            // Elements alternate bar/space starting with a bar.
            filled: position % 2 == 0,
        });
    }
    // Inter-character gap.
    bars.push(Bar {
        width_units: NARROW,
        filled: false,
    });
}

// =============================================================================
// Unit Tests
// =============================================================================
