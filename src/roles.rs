//! One-shot resolution of logical column roles.
//!
//! The styling rules are all conditional on column names. Rather than
//! re-scanning names per cell, the renderer resolves every role and marker to
//! column indices once per render and works with positions from then on.

use crate::config::RenderConfig;

/// Logical roles and per-column style markers for one table layout.
///
/// Missing role columns resolve to `None` and silently disable the
/// corresponding rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRoles {
    /// Source partner column, the partner row-rule trigger.
    pub source_partner: Option<usize>,
    /// Partner exact-match flag column.
    pub partner_flag: Option<usize>,
    /// Source department column, the department row-rule trigger.
    pub source_department: Option<usize>,
    /// Department exact-match flag column.
    pub department_flag: Option<usize>,
    /// Fixed column-level fill (hex), overriding any row-level fill.
    pub fixed_fill: Vec<Option<String>>,
    /// Columns skipped by row-level coloring (candidates and flags).
    pub excluded_from_row_fill: Vec<bool>,
    /// Flag columns, collapsed to hidden in the output.
    pub hidden: Vec<bool>,
    /// Monetary columns receiving numeric formatting.
    pub amount: Vec<bool>,
}

impl ColumnRoles {
    /// Resolve roles for `columns` under `config`.
    pub fn resolve(columns: &[String], config: &RenderConfig) -> Self {
        let conv = &config.columns;
        let palette = &config.palette;

        let find = |name: &str| columns.iter().position(|c| c == name);

        let mut fixed_fill = vec![None; columns.len()];
        let mut assign = |name: &str, fill: &str| {
            if let Some(idx) = find(name) {
                fixed_fill[idx] = Some(fill.to_string());
            }
        };

        assign(&conv.source_partner, &palette.partner_secondary);
        for (rank, name) in conv.partner_candidates.iter().enumerate() {
            let fill = if rank == 0 {
                &palette.partner_primary
            } else {
                &palette.partner_secondary
            };
            assign(name, fill);
        }
        assign(&conv.source_department, &palette.department_secondary);
        for (rank, name) in conv.department_candidates.iter().enumerate() {
            let fill = if rank == 0 {
                &palette.department_primary
            } else {
                &palette.department_secondary
            };
            assign(name, fill);
        }

        let excluded_from_row_fill = columns
            .iter()
            .map(|name| {
                name.contains(conv.candidate_marker.as_str())
                    || name.starts_with(conv.flag_prefix.as_str())
            })
            .collect();

        let hidden = columns
            .iter()
            .map(|name| name.starts_with(conv.flag_prefix.as_str()))
            .collect();

        let amount = columns
            .iter()
            .map(|name| name.contains(conv.amount_marker.as_str()))
            .collect();

        Self {
            source_partner: find(&conv.source_partner),
            partner_flag: find(&conv.partner_flag),
            source_department: find(&conv.source_department),
            department_flag: find(&conv.department_flag),
            fixed_fill,
            excluded_from_row_fill,
            hidden,
            amount,
        }
    }
}
