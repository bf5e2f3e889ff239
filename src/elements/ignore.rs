//! Lint-ignore comment wrappers for markdownlint and Prettier.

use crate::config::DEFAULT_INCLUDE_NEW_LINE;

use super::append_newline;

/// Options for [`markdownlint_ignore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownlintIgnoreOptions<'a> {
    /// The content the lint exemption applies to.
    pub content: &'a str,
    /// Specific rule names to disable (e.g. `MD013`), space-joined in the
    /// comments. Empty targets all rules.
    pub rules: &'a [&'a str],
    /// Whether to append a trailing newline. Defaults to `true`.
    pub include_new_line: Option<bool>,
}

/// Wrap content in `markdownlint-disable` / `markdownlint-enable` comments.
///
/// # Examples
///
/// ```
/// use mdgen::elements::{MarkdownlintIgnoreOptions, markdownlint_ignore};
///
/// let rendered = markdownlint_ignore(&MarkdownlintIgnoreOptions {
///     content: "| raw | table |",
///     rules: &["MD013"],
///     include_new_line: Some(false),
/// });
/// assert_eq!(
///     rendered,
///     "<!-- markdownlint-disable MD013 -->\n| raw | table |\n<!-- markdownlint-enable MD013 -->"
/// );
/// ```
pub fn markdownlint_ignore(options: &MarkdownlintIgnoreOptions) -> String {
    let rules = if options.rules.is_empty() {
        String::new()
    } else {
        format!(" {}", options.rules.join(" "))
    };
    let rendered = format!(
        "<!-- markdownlint-disable{rules} -->\n{}\n<!-- markdownlint-enable{rules} -->",
        options.content
    );
    append_newline(rendered, options.include_new_line, DEFAULT_INCLUDE_NEW_LINE)
}

/// Options for [`prettier_ignore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettierIgnoreOptions<'a> {
    /// The block Prettier should leave alone.
    pub content: &'a str,
    /// Whether to append a trailing newline. Defaults to `true`.
    pub include_new_line: Option<bool>,
}

/// Prefix content with a `prettier-ignore` comment.
///
/// # Examples
///
/// ```
/// use mdgen::elements::{PrettierIgnoreOptions, prettier_ignore};
///
/// let rendered = prettier_ignore(&PrettierIgnoreOptions {
///     content: "|raw|table|",
///     include_new_line: Some(false),
/// });
/// assert_eq!(rendered, "<!-- prettier-ignore -->\n|raw|table|");
/// ```
pub fn prettier_ignore(options: &PrettierIgnoreOptions) -> String {
    let rendered = format!("<!-- prettier-ignore -->\n{}", options.content);
    append_newline(rendered, options.include_new_line, DEFAULT_INCLUDE_NEW_LINE)
}
