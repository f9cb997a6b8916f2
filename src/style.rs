//! Cell style plan keys and their `rust_xlsxwriter` format realization.
//!
//! The underlying writer applies one complete `Format` per cell at write
//! time, so the renderer decides every cell's final appearance up front and
//! caches one `Format` per distinct [`CellStyle`].

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};

use crate::config::RenderConfig;
use crate::error::{SheetError, SheetResult};

/// Structural kind of a cell, before fills are overlaid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Bold, left-aligned, header fill.
    Header,
    /// Left-aligned data cell.
    Text,
    /// Right-aligned numeric cell with the thousands-separator format.
    Amount,
}

/// Final appearance of one cell: kind plus optional background fill (hex).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub kind: CellKind,
    pub fill: Option<String>,
}

impl CellStyle {
    pub fn plain(kind: CellKind) -> Self {
        Self { kind, fill: None }
    }

    pub fn filled(kind: CellKind, fill: &str) -> Self {
        Self {
            kind,
            fill: Some(fill.to_string()),
        }
    }
}

/// Parse a strict `RRGGBB` hex color, tolerating a leading `#`.
pub fn parse_color(code: &str) -> SheetResult<Color> {
    let hex = code.strip_prefix('#').unwrap_or(code);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SheetError::InvalidColor(code.to_string()));
    }
    let rgb =
        u32::from_str_radix(hex, 16).map_err(|_| SheetError::InvalidColor(code.to_string()))?;
    Ok(Color::RGB(rgb))
}

/// Realize a style as a writer format.
///
/// Every cell gets thin borders on all four sides and vertical centering;
/// the kind decides horizontal alignment, boldness, and number format.
pub fn build_format(style: &CellStyle, config: &RenderConfig) -> SheetResult<Format> {
    let mut format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::VerticalCenter);

    format = match style.kind {
        CellKind::Header => format
            .set_bold()
            .set_align(FormatAlign::Left)
            .set_background_color(parse_color(&config.palette.header_fill)?),
        CellKind::Text => format.set_align(FormatAlign::Left),
        CellKind::Amount => format
            .set_align(FormatAlign::Right)
            .set_num_format(config.amount_number_format.as_str()),
    };

    if let Some(fill) = &style.fill {
        format = format.set_background_color(parse_color(fill)?);
    }

    Ok(format)
}
