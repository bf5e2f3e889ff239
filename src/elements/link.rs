//! Inline link rendering with URL percent-encoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in a link target.
///
/// Everything except alphanumerics, the unreserved marks `-._~!*'()`, and the
/// URI reserved characters `:/?#[]@$&+,;=` is percent-encoded, matching the
/// behavior of encoding a whole URL as a single URI. Non-ASCII characters are
/// encoded as their UTF-8 bytes.
const URL_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    // unreserved marks
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    // reserved characters
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Options for [`link`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkOptions<'a> {
    /// The text of the link.
    pub text: &'a str,
    /// The URL of the link. Encoded, never validated: malformed URLs pass
    /// through percent-encoded rather than being rejected.
    pub url: &'a str,
}

/// Render an inline link: `[text](encoded-url)`.
///
/// # Examples
///
/// ```
/// use mdgen::elements::{LinkOptions, link};
///
/// let rendered = link(&LinkOptions {
///     text: "GitHub",
///     url: "https://github.com",
/// });
/// assert_eq!(rendered, "[GitHub](https://github.com)");
/// ```
pub fn link(options: &LinkOptions) -> String {
    format!(
        "[{}]({})",
        options.text,
        utf8_percent_encode(options.url, URL_ESCAPE)
    )
}
