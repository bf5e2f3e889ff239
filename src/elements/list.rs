//! Unordered list rendering with recursive nesting.

use crate::config::{DEFAULT_INCLUDE_NEW_LINE, DEFAULT_UL_INDENT, DEFAULT_UL_INDENT_INCREMENT};

use super::append_newline;

/// An unordered list entry: either a leaf or a nested sub-list.
///
/// Nesting depth is unbounded; sibling order is preserved at every level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem<'a> {
    Text(&'a str),
    Nested(Vec<ListItem<'a>>),
}

impl<'a> From<&'a str> for ListItem<'a> {
    fn from(text: &'a str) -> Self {
        ListItem::Text(text)
    }
}

impl<'a> From<Vec<ListItem<'a>>> for ListItem<'a> {
    fn from(items: Vec<ListItem<'a>>) -> Self {
        ListItem::Nested(items)
    }
}

/// Options for [`ul`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UlOptions<'a> {
    /// The items of the list, in order.
    pub items: &'a [ListItem<'a>],
    /// Leading spaces before each top-level `- `. Defaults to 0.
    pub indent: Option<usize>,
    /// Additional indent applied per nesting level. Defaults to 2.
    pub indent_increment: Option<usize>,
    /// Whether to append a trailing newline. Defaults to `true`. Applies to
    /// the list as a whole; nested levels never emit their own.
    pub include_new_line: Option<bool>,
}

/// Render an unordered list, recursing into nested items.
///
/// Each leaf renders as `"- "` prefixed with the current indent; each nested
/// sub-list recurses with the indent increased by `indent_increment`. Sibling
/// lines are joined by a single newline. An empty `items` slice renders as an
/// empty string (plus the trailing newline if requested).
///
/// # Examples
///
/// ```
/// use mdgen::elements::{ListItem, UlOptions, ul};
///
/// let items = [
///     ListItem::Text("a"),
///     ListItem::Nested(vec![ListItem::Text("b"), ListItem::Text("c")]),
/// ];
/// let rendered = ul(&UlOptions {
///     items: &items,
///     ..Default::default()
/// });
/// assert_eq!(rendered, "- a\n  - b\n  - c\n");
/// ```
pub fn ul(options: &UlOptions) -> String {
    let indent = options.indent.unwrap_or(DEFAULT_UL_INDENT);
    let increment = options
        .indent_increment
        .unwrap_or(DEFAULT_UL_INDENT_INCREMENT);
    let rendered = render_level(options.items, indent, increment);
    append_newline(rendered, options.include_new_line, DEFAULT_INCLUDE_NEW_LINE)
}

/// Render one nesting level, joining siblings (leaves and fully-rendered
/// nested blocks) with single newlines.
fn render_level(items: &[ListItem], indent: usize, increment: usize) -> String {
    items
        .iter()
        .map(|item| match item {
            ListItem::Text(text) => format!("{}- {}", " ".repeat(indent), text),
            ListItem::Nested(children) => render_level(children, indent + increment, increment),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
