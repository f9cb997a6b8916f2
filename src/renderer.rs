//! Table rendering into a styled single-sheet workbook.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::error::{SheetError, SheetResult};
use crate::layout;
use crate::roles::ColumnRoles;
use crate::style::{self, CellKind, CellStyle};
use crate::types::{CellValue, Table};

const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Outcome of the row-level exact-match rules for one data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowOutcome {
    Match,
    Mismatch,
}

/// Renders match-review tables as styled xlsx files.
///
/// One renderer can serve any number of `render` calls; each call builds a
/// fresh workbook and holds no state afterwards.
pub struct TableRenderer {
    config: RenderConfig,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl TableRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `table` to `output_path` and return the path.
    ///
    /// The sheet name defaults to `Sheet1`. Missing role columns disable the
    /// corresponding styling rule; they never fail the render.
    pub fn render<P: AsRef<Path>>(
        &self,
        table: &Table,
        output_path: P,
        sheet_name: Option<&str>,
    ) -> SheetResult<PathBuf> {
        let output_path = output_path.as_ref();
        let roles = ColumnRoles::resolve(table.columns(), &self.config);
        debug!(
            rows = table.row_count(),
            columns = table.column_count(),
            "rendering match-review sheet"
        );

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_name.unwrap_or(DEFAULT_SHEET_NAME))?;

        let mut formats = FormatCache::new(&self.config);

        self.write_header(worksheet, table, &mut formats)?;
        self.write_rows(worksheet, table, &roles, &mut formats)?;
        self.apply_layout(worksheet, table, &roles)?;

        workbook.save(output_path)?;
        info!(path = %output_path.display(), "saved match-review workbook");

        Ok(output_path.to_path_buf())
    }

    fn write_header(
        &self,
        worksheet: &mut Worksheet,
        table: &Table,
        formats: &mut FormatCache<'_>,
    ) -> SheetResult<()> {
        let header = formats.get(&CellStyle::plain(CellKind::Header))?.clone();
        for (col, name) in table.columns().iter().enumerate() {
            worksheet.write_string_with_format(0, col_index(col)?, name, &header)?;
        }
        Ok(())
    }

    fn write_rows(
        &self,
        worksheet: &mut Worksheet,
        table: &Table,
        roles: &ColumnRoles,
        formats: &mut FormatCache<'_>,
    ) -> SheetResult<()> {
        for (row_idx, row) in table.rows().iter().enumerate() {
            let outcome = row_outcome(roles, row);
            let sheet_row = row_index(row_idx + 1)?;

            for (col, value) in row.iter().enumerate() {
                let style = data_cell_style(&self.config, roles, outcome, col, value);
                let format = formats.get(&style)?;
                let sheet_col = col_index(col)?;

                match value {
                    CellValue::Null => {
                        worksheet.write_blank(sheet_row, sheet_col, format)?;
                    }
                    CellValue::Bool(b) => {
                        worksheet.write_boolean_with_format(sheet_row, sheet_col, *b, format)?;
                    }
                    CellValue::Number(n) => {
                        worksheet.write_number_with_format(sheet_row, sheet_col, *n, format)?;
                    }
                    CellValue::Text(s) => {
                        worksheet.write_string_with_format(sheet_row, sheet_col, s, format)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Row heights, auto-fit column widths, and flag-column hiding.
    fn apply_layout(
        &self,
        worksheet: &mut Worksheet,
        table: &Table,
        roles: &ColumnRoles,
    ) -> SheetResult<()> {
        let height = self.config.layout.row_height();
        for row_idx in 0..=table.row_count() {
            worksheet.set_row_height(row_index(row_idx)?, height)?;
        }

        for (col, name) in table.columns().iter().enumerate() {
            let values = table.rows().iter().map(|row| &row[col]);
            let width = layout::column_width(name, values, &self.config.layout);
            let sheet_col = col_index(col)?;

            worksheet.set_column_width(sheet_col, width)?;
            if roles.hidden[col] {
                worksheet.set_column_hidden(sheet_col)?;
            }
        }
        Ok(())
    }
}

/// Evaluate the row coloring rules, partner before department.
///
/// The department rule is the fallback: it only fires when the partner rule
/// could not (flag or source column absent, or the source value empty).
fn row_outcome(roles: &ColumnRoles, row: &[CellValue]) -> Option<RowOutcome> {
    if let (Some(flag), Some(source)) = (roles.partner_flag, roles.source_partner) {
        if row[source].is_present() {
            return Some(if row[flag].is_truthy() {
                RowOutcome::Match
            } else {
                RowOutcome::Mismatch
            });
        }
    }

    if let (Some(flag), Some(source)) = (roles.department_flag, roles.source_department) {
        if row[source].is_present() {
            return Some(if row[flag].is_truthy() {
                RowOutcome::Match
            } else {
                RowOutcome::Mismatch
            });
        }
    }

    None
}

/// Final style of one data cell.
///
/// Fill precedence: fixed column fill, else the row outcome fill when the
/// column is not excluded. Amount formatting applies only to numeric values.
fn data_cell_style(
    config: &RenderConfig,
    roles: &ColumnRoles,
    outcome: Option<RowOutcome>,
    col: usize,
    value: &CellValue,
) -> CellStyle {
    let kind = if roles.amount[col] && matches!(value, CellValue::Number(_)) {
        CellKind::Amount
    } else {
        CellKind::Text
    };

    let fill = roles.fixed_fill[col].clone().or_else(|| {
        if roles.excluded_from_row_fill[col] {
            return None;
        }
        outcome.map(|o| match o {
            RowOutcome::Match => config.palette.match_fill.clone(),
            RowOutcome::Mismatch => config.palette.mismatch_fill.clone(),
        })
    });

    CellStyle { kind, fill }
}

struct FormatCache<'a> {
    config: &'a RenderConfig,
    formats: HashMap<CellStyle, Format>,
}

impl<'a> FormatCache<'a> {
    fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            formats: HashMap::new(),
        }
    }

    fn get(&mut self, style: &CellStyle) -> SheetResult<&Format> {
        match self.formats.entry(style.clone()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let format = style::build_format(style, self.config)?;
                Ok(entry.insert(format))
            }
        }
    }
}

fn row_index(idx: usize) -> SheetResult<u32> {
    u32::try_from(idx)
        .map_err(|_| SheetError::InvalidTable(format!("row index {} out of range", idx)))
}

fn col_index(idx: usize) -> SheetResult<u16> {
    u16::try_from(idx)
        .map_err(|_| SheetError::InvalidTable(format!("column index {} out of range", idx)))
}
