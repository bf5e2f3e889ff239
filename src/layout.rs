//! Table layout formatting.
//!
//! Pure column-layout logic for pipe tables: cell padding and the separator
//! row with alignment markers. The table element renderer
//! ([`crate::elements::table`]) adapts its options onto [`format_table`] and
//! handles the trailing newline; this module knows nothing about option
//! structs or configuration.

use std::fmt::Write;

/// Column alignment for pipe tables.
///
/// Controls the marker placement in the separator row (`:---`, `:---:`,
/// `---:`, `---`). Cell text itself is not re-justified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Alignment {
    Left,
    Center,
    Right,
    #[default]
    None,
}

/// Minimum separator width so that `:---:` style markers always fit.
const MIN_COLUMN_WIDTH: usize = 3;

/// Format a pipe table from headers, rows, and per-column alignment.
///
/// Rows are expected to match the header count; shorter rows are padded with
/// empty cells and longer rows spill into extra columns (mismatches are the
/// caller's responsibility). The result has no trailing newline.
///
/// # Examples
///
/// ```
/// use mdgen::layout::{Alignment, format_table};
///
/// let table = format_table(
///     &["Name", "Qty"],
///     &[vec!["apple", "10"], vec!["kiwi", "2"]],
///     &[Alignment::Left, Alignment::Right],
///     true,
/// );
/// assert_eq!(
///     table,
///     "| Name  | Qty |\n| :---- | --: |\n| apple | 10  |\n| kiwi  | 2   |"
/// );
/// ```
pub fn format_table(
    headers: &[&str],
    rows: &[Vec<&str>],
    alignments: &[Alignment],
    pad: bool,
) -> String {
    let columns = headers.len();
    let widths = if pad {
        column_widths(headers, rows)
    } else {
        vec![MIN_COLUMN_WIDTH; columns]
    };

    let mut out = String::new();
    write_row(&mut out, headers, &widths, pad, columns);
    out.push('\n');
    write_separator(&mut out, alignments, &widths, columns);
    for row in rows {
        out.push('\n');
        write_row(&mut out, row, &widths, pad, columns);
    }
    out
}

/// Widest cell per column, headers included, floored at the separator width.
fn column_widths(headers: &[&str], rows: &[Vec<&str>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|h| h.chars().count().max(MIN_COLUMN_WIDTH))
        .collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let width = cell.chars().count();
            if i < widths.len() {
                widths[i] = widths[i].max(width);
            } else {
                widths.push(width.max(MIN_COLUMN_WIDTH));
            }
        }
    }
    widths
}

fn write_row(out: &mut String, cells: &[&str], widths: &[usize], pad: bool, columns: usize) {
    out.push('|');
    let count = cells.len().max(columns);
    for i in 0..count {
        let cell = cells.get(i).copied().unwrap_or("");
        if pad {
            let width = widths.get(i).copied().unwrap_or(MIN_COLUMN_WIDTH);
            let _ = write!(out, " {:<width$} |", cell);
        } else {
            let _ = write!(out, " {} |", cell);
        }
    }
}

fn write_separator(out: &mut String, alignments: &[Alignment], widths: &[usize], columns: usize) {
    out.push('|');
    for i in 0..columns.max(widths.len()) {
        let alignment = alignments.get(i).copied().unwrap_or(Alignment::None);
        let width = widths.get(i).copied().unwrap_or(MIN_COLUMN_WIDTH);
        let _ = write!(out, " {} |", separator_cell(alignment, width));
    }
}

/// Separator cell for one column, e.g. `:---:` for a centered 5-wide column.
fn separator_cell(alignment: Alignment, width: usize) -> String {
    let width = width.max(MIN_COLUMN_WIDTH);
    match alignment {
        Alignment::Left => format!(":{}", "-".repeat(width - 1)),
        Alignment::Center => format!(":{}:", "-".repeat(width - 2)),
        Alignment::Right => format!("{}:", "-".repeat(width - 1)),
        Alignment::None => "-".repeat(width),
    }
}
