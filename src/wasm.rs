//! WASM bindings for browser-based fragment rendering.
//!
//! Exposes the scalar-argument renderers to JavaScript via wasm-bindgen.
//! Structured options (list items, table rows) don't map cleanly onto the
//! wasm ABI, so those renderers are native-only.

use wasm_bindgen::prelude::*;

use crate::elements::{
    self, AlertKind, AlertOptions, DetailsOptions, FontOptions, HeadingOptions, LinkOptions,
    PrettierIgnoreOptions,
};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render an ATX heading.
#[wasm_bindgen]
pub fn heading(text: &str, level: usize, include_new_line: Option<bool>) -> String {
    elements::heading(&HeadingOptions {
        text,
        level,
        include_new_line,
    })
}

/// Render an inline link with a percent-encoded URL.
#[wasm_bindgen]
pub fn link(text: &str, url: &str) -> String {
    elements::link(&LinkOptions { text, url })
}

/// Render a collapsible `<details>` block.
#[wasm_bindgen]
pub fn details(summary: &str, content: &str, include_new_line: Option<bool>) -> String {
    elements::details(&DetailsOptions {
        summary,
        content,
        include_new_line,
    })
}

/// Render a GitHub alert. Unrecognized kinds fall back to `note`.
#[wasm_bindgen]
pub fn github_alert(kind: &str, content: &str, include_new_line: Option<bool>) -> String {
    let kind = match kind {
        "tip" => AlertKind::Tip,
        "important" => AlertKind::Important,
        "warning" => AlertKind::Warning,
        "caution" => AlertKind::Caution,
        _ => AlertKind::Note,
    };
    elements::github_alert(&AlertOptions {
        kind,
        content,
        include_new_line,
    })
}

/// Render a `<font>` tag, omitting the color attribute when absent.
#[wasm_bindgen]
pub fn font(content: &str, color: Option<String>) -> String {
    elements::font(&FontOptions {
        content,
        color: color.as_deref(),
    })
}

/// Prefix content with a `prettier-ignore` comment.
#[wasm_bindgen]
pub fn prettier_ignore(content: &str, include_new_line: Option<bool>) -> String {
    elements::prettier_ignore(&PrettierIgnoreOptions {
        content,
        include_new_line,
    })
}
