//! Matchsheet - styled XLSX rendering for match-review tables
//!
//! This library renders a rectangular table produced by an external matching
//! process into a styled single-sheet workbook: bold gray header, thousands
//! formatting for amount columns, auto-fit sizing, green/red row coloring
//! driven by hidden exact-match flag columns, and fixed highlight colors for
//! source and candidate columns.
//!
//! # Features
//!
//! - Row coloring with partner-over-department rule priority
//! - Fixed yellow/blue fills for source and candidate columns
//! - Flag columns (`_`-prefixed) styled into the plan, then hidden
//! - Width auto-fit aware of full-width glyphs
//! - Palette, sizing, and column conventions configurable via YAML
//!
//! # Example
//!
//! ```no_run
//! use matchsheet::{CellValue, Table, TableRenderer};
//!
//! let mut table = Table::new(["Description", "Amount", "Source Partner"])?;
//! table.push_row([
//!     CellValue::from("office rent"),
//!     CellValue::from(120000.0),
//!     CellValue::from("ACME Corp"),
//! ])?;
//!
//! let renderer = TableRenderer::default();
//! let path = renderer.render(&table, "review.xlsx", None)?;
//! println!("wrote {}", path.display());
//! # Ok::<(), matchsheet::SheetError>(())
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod roles;
pub mod style;
pub mod types;

// Re-export commonly used types
pub use config::{ColumnConventions, LayoutOptions, Palette, RenderConfig};
pub use error::{SheetError, SheetResult};
pub use renderer::TableRenderer;
pub use types::{CellValue, Table};
