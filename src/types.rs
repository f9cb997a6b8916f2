use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{SheetError, SheetResult};

//==============================================================================
// Cell Values
//==============================================================================

/// A single scalar cell value.
///
/// Tables tolerate `Null` everywhere; the styling rules treat `Null` and the
/// empty string as "absent" when deciding whether a rule fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Whether this value counts as present for rule triggers.
    ///
    /// `Null` and `Text("")` are absent; numeric zero and `false` are present.
    pub fn is_present(&self) -> bool {
        match self {
            CellValue::Null => false,
            CellValue::Text(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Boolean interpretation used for match-flag cells.
    ///
    /// Flags produced by the matcher are booleans, but the grid tolerates
    /// anything: nonzero numbers and non-empty text read as true.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Null => false,
            CellValue::Bool(b) => *b,
            CellValue::Number(n) => *n != 0.0,
            CellValue::Text(s) => !s.is_empty(),
        }
    }

    /// Text as it would display in a cell, used for width estimation.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Number(v as f64)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellValue::Null, Into::into)
    }
}

//==============================================================================
// Tables
//==============================================================================

/// A rectangular, row-major dataset: ordered unique column names plus rows
/// holding exactly one value per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create an empty table with the given column names.
    ///
    /// Fails when a column name appears twice.
    pub fn new<I, S>(columns: I) -> SheetResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();

        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(SheetError::InvalidTable(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }
        }

        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Append a positional row. Fails on arity mismatch.
    pub fn push_row<I>(&mut self, values: I) -> SheetResult<()>
    where
        I: IntoIterator<Item = CellValue>,
    {
        let row: Vec<CellValue> = values.into_iter().collect();
        if row.len() != self.columns.len() {
            return Err(SheetError::InvalidTable(format!(
                "row has {} values, expected {}",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append a row given as (column name, value) pairs.
    ///
    /// Columns not named in `pairs` are filled with `Null`; an unknown column
    /// name is an error.
    pub fn push_record<'a, I>(&mut self, pairs: I) -> SheetResult<()>
    where
        I: IntoIterator<Item = (&'a str, CellValue)>,
    {
        let mut row = vec![CellValue::Null; self.columns.len()];
        for (name, value) in pairs {
            let idx = self.column_index(name).ok_or_else(|| {
                SheetError::InvalidTable(format!("unknown column '{}'", name))
            })?;
            row[idx] = value;
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell lookup; `None` when either index is out of range.
    pub fn value(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}
