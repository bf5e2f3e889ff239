//! ATX heading rendering.

use crate::config::DEFAULT_INCLUDE_NEW_LINE;

use super::append_newline;

/// Options for [`heading`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingOptions<'a> {
    /// The text of the heading.
    pub text: &'a str,
    /// The level of the heading (number of `#` characters).
    ///
    /// Not clamped: levels above 6 render but have no special meaning in
    /// Markdown, and level 0 renders no hashes at all.
    pub level: usize,
    /// Whether to append a trailing newline. Defaults to `true`.
    pub include_new_line: Option<bool>,
}

/// Render an ATX heading: `level` `#` characters, a space, then the text.
///
/// # Examples
///
/// ```
/// use mdgen::elements::{HeadingOptions, heading};
///
/// let rendered = heading(&HeadingOptions {
///     text: "Heading",
///     level: 2,
///     ..Default::default()
/// });
/// assert_eq!(rendered, "## Heading\n");
/// ```
pub fn heading(options: &HeadingOptions) -> String {
    let rendered = format!("{} {}", "#".repeat(options.level), options.text);
    append_newline(rendered, options.include_new_line, DEFAULT_INCLUDE_NEW_LINE)
}
