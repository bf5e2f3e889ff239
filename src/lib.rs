//! # mdgen
//!
//! A small library of pure functions that render Markdown fragments
//! (headings, links, lists, tables, `<details>` blocks, GitHub alerts, and
//! more) from typed option structs, plus a configurable [`Markdown`] facade
//! that supplies per-call defaults from a deep-merged configuration tree.
//!
//! There is no parser and no I/O: every renderer is a pure transformation
//! from options to a `String`, intended for host applications that assemble
//! documentation or changelog text in-process.
//!
//! ## Quick Start
//!
//! ```
//! use mdgen::elements::{HeadingOptions, ListItem, UlOptions, heading, ul};
//!
//! let title = heading(&HeadingOptions {
//!     text: "Release Notes",
//!     level: 2,
//!     ..Default::default()
//! });
//! assert_eq!(title, "## Release Notes\n");
//!
//! let items = [
//!     ListItem::Text("Fixed a bug"),
//!     ListItem::Nested(vec![ListItem::Text("in the parser")]),
//! ];
//! let changes = ul(&UlOptions {
//!     items: &items,
//!     ..Default::default()
//! });
//! assert_eq!(changes, "- Fixed a bug\n  - in the parser\n");
//! ```
//!
//! ## Configured defaults
//!
//! The standalone functions in [`elements`] use compiled-in defaults for any
//! option left unset. The [`Markdown`] facade substitutes its own configured
//! defaults instead, resolved per field: explicit call option, then instance
//! configuration, then the shipped default.
//!
//! ```
//! use mdgen::{Markdown, PartialConfig};
//! use mdgen::config::{PartialElementsConfig, PartialUlConfig};
//! use mdgen::elements::{ListItem, UlOptions};
//!
//! let md = Markdown::with_config(&PartialConfig {
//!     elements: Some(PartialElementsConfig {
//!         ul: Some(PartialUlConfig {
//!             indent: Some(2),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     }),
//! });
//!
//! let items = [ListItem::Text("indented")];
//! assert_eq!(
//!     md.ul(&UlOptions { items: &items, ..Default::default() }),
//!     "  - indented\n"
//! );
//! ```

pub mod config;
pub mod elements;
pub mod error;
pub mod layout;
mod markdown;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{Config, PartialConfig};
pub use error::{Error, Result};
pub use markdown::Markdown;
