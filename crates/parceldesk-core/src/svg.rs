//! # SVG Module
//!
//! Serializes an encoded label value as an SVG document of filled
//! rectangles, ready to embed in an invoice or shipment label view.
//!
//! Pure string construction - nothing here touches the file system or the
//! DOM; the dashboard decides where the markup lands.

use crate::symbology;

/// Vertical room reserved under the bars for the caption line.
const CAPTION_HEIGHT: f64 = 14.0;
const CAPTION_FONT_SIZE: f64 = 10.0;

// =============================================================================
// Options
// =============================================================================

/// Rendering options for [`to_svg`].
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Pixels per abstract unit when no target width is set.
    pub unit_width: f64,

    /// Bar height in pixels.
    pub bar_height: f64,

    /// When set, the symbol is scaled horizontally to exactly this total
    /// width. Only the scale changes - the unit sequence and its semantic
    /// widths are untouched.
    pub target_width: Option<f64>,

    /// Whether to print the original value beneath the bars.
    pub caption: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        SvgOptions {
            unit_width: 2.0,
            bar_height: 48.0,
            target_width: None,
            caption: true,
        }
    }
}

// =============================================================================
// Serialization
// =============================================================================

/// Renders `value` as an SVG barcode document.
///
/// Returns `None` for an empty value ("no symbol") - the caller renders
/// its own placeholder, matching the encoder's contract.
pub fn to_svg(value: &str, options: &SvgOptions) -> Option<String> {
    let bars = symbology::encode(value);
    if bars.is_empty() {
        return None;
    }

    let units = f64::from(symbology::total_units(&bars));
    let unit_width = match options.target_width {
        Some(target) => target / units,
        None => options.unit_width,
    };
    let width = units * unit_width;
    let caption_height = if options.caption { CAPTION_HEIGHT } else { 0.0 };
    let height = options.bar_height + caption_height;

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        fmt_len(width),
        fmt_len(height),
        fmt_len(width),
        fmt_len(height),
    );

    let mut x = 0.0;
    for bar in &bars {
        let bar_width = f64::from(bar.width_units) * unit_width;
        if bar.filled {
            svg.push_str(&format!(
                "<rect x=\"{}\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#000\"/>",
                fmt_len(x),
                fmt_len(bar_width),
                fmt_len(options.bar_height),
            ));
        }
        x += bar_width;
    }

    if options.caption {
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"monospace\" font-size=\"{}\">{}</text>",
            fmt_len(width / 2.0),
            fmt_len(height - 3.0),
            fmt_len(CAPTION_FONT_SIZE),
            escape_text(value),
        ));
    }

    svg.push_str("</svg>");
    Some(svg)
}

// =============================================================================
// Helpers
// =============================================================================

/// Formats a length with at most two decimals, trailing zeros trimmed.
fn fmt_len(value: f64) -> String {
    let formatted = format!("{value:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Minimal XML text escaping for the caption. The caption shows the
/// original value, which may contain markup-significant characters even
/// though the bars substitute them.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// =============================================================================
// Unit Tests
// =============================================================================
