//! HTML-flavored constructs: `<details>` blocks, GitHub alerts, `<font>` tags.

use crate::config::DEFAULT_INCLUDE_NEW_LINE;

use super::append_newline;

/// Options for [`details`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailsOptions<'a> {
    /// The always-visible summary line.
    pub summary: &'a str,
    /// The collapsible body. May contain Markdown; the blank lines in the
    /// template keep it rendering as Markdown inside the HTML block.
    pub content: &'a str,
    /// Whether to append a trailing newline. Defaults to `true`.
    pub include_new_line: Option<bool>,
}

/// Render a collapsible `<details>` block.
///
/// # Examples
///
/// ```
/// use mdgen::elements::{DetailsOptions, details};
///
/// let rendered = details(&DetailsOptions {
///     summary: "Summary",
///     content: "Content",
///     ..Default::default()
/// });
/// assert_eq!(
///     rendered,
///     "<details>\n<summary>\n\nSummary\n</summary>\n\nContent\n</details>\n"
/// );
/// ```
pub fn details(options: &DetailsOptions) -> String {
    let rendered = format!(
        "<details>\n<summary>\n\n{}\n</summary>\n\n{}\n</details>",
        options.summary, options.content
    );
    append_newline(rendered, options.include_new_line, DEFAULT_INCLUDE_NEW_LINE)
}

/// The five alert categories GitHub recognizes in blockquote syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlertKind {
    Note,
    Tip,
    Important,
    Warning,
    Caution,
}

impl AlertKind {
    /// The uppercased tag used in the `[!TAG]` marker.
    pub fn tag(self) -> &'static str {
        match self {
            AlertKind::Note => "NOTE",
            AlertKind::Tip => "TIP",
            AlertKind::Important => "IMPORTANT",
            AlertKind::Warning => "WARNING",
            AlertKind::Caution => "CAUTION",
        }
    }
}

/// Options for [`github_alert`].
#[derive(Debug, Clone, Copy)]
pub struct AlertOptions<'a> {
    /// The alert category.
    pub kind: AlertKind,
    /// The alert body. Each line is prefixed with `> `.
    pub content: &'a str,
    /// Whether to append a trailing newline. Defaults to `true`.
    pub include_new_line: Option<bool>,
}

/// Render a GitHub alert: a blockquote opening with an uppercased `[!TAG]`.
///
/// # Examples
///
/// ```
/// use mdgen::elements::{AlertKind, AlertOptions, github_alert};
///
/// let rendered = github_alert(&AlertOptions {
///     kind: AlertKind::Warning,
///     content: "Mind the gap.",
///     include_new_line: Some(false),
/// });
/// assert_eq!(rendered, "> [!WARNING]\n> Mind the gap.");
/// ```
pub fn github_alert(options: &AlertOptions) -> String {
    let mut rendered = format!("> [!{}]", options.kind.tag());
    for line in options.content.lines() {
        rendered.push_str("\n> ");
        rendered.push_str(line);
    }
    append_newline(rendered, options.include_new_line, DEFAULT_INCLUDE_NEW_LINE)
}

/// Options for [`font`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FontOptions<'a> {
    /// The wrapped content.
    pub content: &'a str,
    /// The `color` attribute; omitted entirely when absent.
    pub color: Option<&'a str>,
}

/// Render a `<font>` tag. Inline construct: no trailing newline.
///
/// # Examples
///
/// ```
/// use mdgen::elements::{FontOptions, font};
///
/// let plain = font(&FontOptions {
///     content: "text",
///     color: None,
/// });
/// assert_eq!(plain, "<font>text</font>");
///
/// let red = font(&FontOptions {
///     content: "text",
///     color: Some("red"),
/// });
/// assert_eq!(red, "<font color=\"red\">text</font>");
/// ```
pub fn font(options: &FontOptions) -> String {
    match options.color {
        Some(color) => format!("<font color=\"{}\">{}</font>", color, options.content),
        None => format!("<font>{}</font>", options.content),
    }
}
