//! Display-width estimation for auto-fit column sizing.

use crate::config::LayoutOptions;
use crate::types::CellValue;

/// Approximate rendered width of `text` in character units.
///
/// Full-width glyphs (code points above ASCII) occupy roughly two character
/// cells in spreadsheet fonts, so they count double.
pub fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| if (c as u32) <= 127 { 1 } else { 2 })
        .sum()
}

/// Auto-fit width for one column: widest of the header text and every
/// non-null cell, padded and clamped to the configured bounds.
pub fn column_width<'a, I>(header: &str, values: I, layout: &LayoutOptions) -> f64
where
    I: IntoIterator<Item = &'a CellValue>,
{
    let mut widest = display_width(header);
    for value in values {
        if let CellValue::Null = value {
            continue;
        }
        widest = widest.max(display_width(&value.display_text()));
    }

    (widest + layout.column_width_padding)
        .max(layout.min_column_width)
        .min(layout.max_column_width) as f64
}
