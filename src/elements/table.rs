//! Pipe table rendering.
//!
//! Parameter adaptation over [`crate::layout::format_table`], which owns the
//! column layout; this renderer only forwards options and applies the
//! trailing-newline rule.

use crate::config::{DEFAULT_INCLUDE_NEW_LINE, DEFAULT_PAD_COLUMNS};
use crate::layout::{Alignment, format_table};

use super::append_newline;

/// Options for [`table`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TableOptions<'a> {
    /// Column headers.
    pub headers: &'a [&'a str],
    /// Table body, one cell vector per row. Expected to match the header
    /// count; not validated.
    pub rows: &'a [Vec<&'a str>],
    /// Per-column alignment, same length as `headers`. Missing entries fall
    /// back to [`Alignment::None`].
    pub alignments: &'a [Alignment],
    /// Whether to pad cells to uniform column widths. Defaults to `true`.
    pub pad_columns: Option<bool>,
    /// Whether to append a trailing newline. Defaults to `true`.
    pub include_new_line: Option<bool>,
}

/// Render a pipe table.
///
/// # Examples
///
/// ```
/// use mdgen::elements::{TableOptions, table};
/// use mdgen::layout::Alignment;
///
/// let rendered = table(&TableOptions {
///     headers: &["Name", "Qty"],
///     rows: &[vec!["apple", "10"]],
///     alignments: &[Alignment::Left, Alignment::Right],
///     ..Default::default()
/// });
/// assert_eq!(rendered, "| Name  | Qty |\n| :---- | --: |\n| apple | 10  |\n");
/// ```
pub fn table(options: &TableOptions) -> String {
    let pad = options.pad_columns.unwrap_or(DEFAULT_PAD_COLUMNS);
    let rendered = format_table(options.headers, options.rows, options.alignments, pad);
    append_newline(rendered, options.include_new_line, DEFAULT_INCLUDE_NEW_LINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_padded_with_newline() {
        let rendered = table(&TableOptions {
            headers: &["Header"],
            rows: &[vec!["Row"]],
            alignments: &[Alignment::Left],
            ..Default::default()
        });
        assert_eq!(rendered, "| Header |\n| :----- |\n| Row    |\n");
    }

    #[test]
    fn test_unpadded() {
        let rendered = table(&TableOptions {
            headers: &["A", "B"],
            rows: &[vec!["1", "2"]],
            alignments: &[Alignment::None, Alignment::None],
            pad_columns: Some(false),
            include_new_line: Some(false),
        });
        assert_eq!(rendered, "| A | B |\n| --- | --- |\n| 1 | 2 |");
    }

    #[test]
    fn test_newline_suffix() {
        let base = TableOptions {
            headers: &["A"],
            rows: &[],
            alignments: &[Alignment::None],
            pad_columns: Some(true),
            include_new_line: Some(false),
        };
        let without = table(&base);
        let with = table(&TableOptions {
            include_new_line: Some(true),
            ..base
        });
        assert_eq!(format!("{}\n", without), with);
    }
}
