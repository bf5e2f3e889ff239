//! Stateless Markdown element renderers.
//!
//! One pure function per Markdown construct, each taking a per-element
//! options struct and returning a `String`. No I/O, no shared state: calling
//! a renderer twice with the same options yields byte-identical output.
//!
//! Block-level constructs carry an `include_new_line` option that controls a
//! single trailing newline; when omitted it falls back to the compiled-in
//! default (`true`), or to the configured default when called through
//! [`crate::Markdown`]. Inline constructs ([`link`], [`font`]) emit no
//! trailing newline.
//!
//! Options follow a trust-the-caller policy: nothing is validated beyond its
//! type. A zero heading level, a malformed URL, or mismatched table rows pass
//! through rather than erroring.

mod heading;
mod html;
mod ignore;
mod link;
mod list;
mod table;

pub use heading::{HeadingOptions, heading};
pub use html::{AlertKind, AlertOptions, DetailsOptions, FontOptions, details, font, github_alert};
pub use ignore::{
    MarkdownlintIgnoreOptions, PrettierIgnoreOptions, markdownlint_ignore, prettier_ignore,
};
pub use link::{LinkOptions, link};
pub use list::{ListItem, UlOptions, ul};
pub use table::{TableOptions, table};

/// Append the trailing newline if requested.
///
/// `include_new_line` is the caller's explicit choice; `default` is the
/// element's fallback (compiled-in for standalone calls, configured when
/// called through the facade). Every block renderer ends with this.
pub(crate) fn append_newline(
    mut rendered: String,
    include_new_line: Option<bool>,
    default: bool,
) -> String {
    if include_new_line.unwrap_or(default) {
        rendered.push('\n');
    }
    rendered
}
