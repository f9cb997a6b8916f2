//! Renderer configuration: palette, sizing bounds, and column conventions.
//!
//! Everything the styling rules key on lives here. All fields have defaults
//! matching the production match-review layout; YAML documents overlay the
//! defaults field by field.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::SheetResult;

/// Fill colors as `RRGGBB` hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Row fill when the exact-match flag is set.
    pub match_fill: String,
    /// Row fill when the exact-match flag is cleared.
    pub mismatch_fill: String,
    /// Header row fill.
    pub header_fill: String,
    /// First partner candidate column.
    pub partner_primary: String,
    /// Source partner column and remaining partner candidates.
    pub partner_secondary: String,
    /// First department candidate column.
    pub department_primary: String,
    /// Source department column and remaining department candidates.
    pub department_secondary: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            match_fill: "C6EFCE".to_string(),
            mismatch_fill: "FFC7CE".to_string(),
            header_fill: "D9D9D9".to_string(),
            partner_primary: "FFEB9C".to_string(),
            partner_secondary: "FFF9E6".to_string(),
            department_primary: "DDEBF7".to_string(),
            department_secondary: "F0F6FC".to_string(),
        }
    }
}

/// Row height and column width sizing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Spreadsheet default row height in points.
    pub base_row_height: f64,
    /// Multiplier applied to every row, header included.
    pub row_height_factor: f64,
    /// Lower bound for auto-fit column widths.
    pub min_column_width: usize,
    /// Upper bound for auto-fit column widths.
    pub max_column_width: usize,
    /// Units added to the widest observed content.
    pub column_width_padding: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            base_row_height: 15.0,
            row_height_factor: 1.5,
            min_column_width: 10,
            max_column_width: 60,
            column_width_padding: 2,
        }
    }
}

impl LayoutOptions {
    /// Height applied to every row of the rendered sheet.
    pub fn row_height(&self) -> f64 {
        self.base_row_height * self.row_height_factor
    }
}

/// Column names and name markers the styling rules match on.
///
/// Matching is case-sensitive: role columns by exact name, markers by
/// substring (`amount_marker`, `candidate_marker`) or prefix (`flag_prefix`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnConventions {
    /// Prefix marking internal flag columns (hidden in the output).
    pub flag_prefix: String,
    /// Substring marking monetary columns.
    pub amount_marker: String,
    /// Substring excluding a column from row-level coloring.
    pub candidate_marker: String,
    /// Source partner column (row-rule trigger, fixed fill).
    pub source_partner: String,
    /// Ranked partner suggestions; the first gets the primary fill.
    pub partner_candidates: Vec<String>,
    /// Partner exact-match flag column.
    pub partner_flag: String,
    /// Source department column (row-rule trigger, fixed fill).
    pub source_department: String,
    /// Ranked department suggestions; the first gets the primary fill.
    pub department_candidates: Vec<String>,
    /// Department exact-match flag column.
    pub department_flag: String,
}

impl Default for ColumnConventions {
    fn default() -> Self {
        Self {
            flag_prefix: "_".to_string(),
            amount_marker: "Amount".to_string(),
            candidate_marker: "Candidate".to_string(),
            source_partner: "Source Partner".to_string(),
            partner_candidates: vec![
                "Partner Candidate 1".to_string(),
                "Partner Candidate 2".to_string(),
                "Partner Candidate 3".to_string(),
            ],
            partner_flag: "_partner_exact_match".to_string(),
            source_department: "Source Department".to_string(),
            department_candidates: vec![
                "Department Candidate 1".to_string(),
                "Department Candidate 2".to_string(),
                "Department Candidate 3".to_string(),
            ],
            department_flag: "_department_exact_match".to_string(),
        }
    }
}

/// Complete renderer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub palette: Palette,
    pub layout: LayoutOptions,
    pub columns: ColumnConventions,
    /// Number format for numeric cells in amount columns.
    pub amount_number_format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            layout: LayoutOptions::default(),
            columns: ColumnConventions::default(),
            amount_number_format: "#,##0".to_string(),
        }
    }
}

impl RenderConfig {
    /// Parse a YAML config document. Absent fields keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> SheetResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a YAML config file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> SheetResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
