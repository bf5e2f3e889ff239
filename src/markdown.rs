//! Configured facade over the stateless element renderers.

use crate::config::{Config, PartialConfig};
use crate::elements::{
    AlertOptions, DetailsOptions, FontOptions, HeadingOptions, LinkOptions,
    MarkdownlintIgnoreOptions, PrettierIgnoreOptions, TableOptions, UlOptions,
};
use crate::elements;

/// Stateful wrapper that supplies configured defaults to the renderers.
///
/// Holds exactly one [`Config`], owned and private. Each rendering method
/// resolves per field: an option the caller supplies explicitly always wins;
/// an omitted option takes the currently configured default. The facade never
/// rewrites renderer output, it only fills in defaults before delegating.
///
/// [`configure`](Markdown::configure) deep-merges a [`PartialConfig`] onto
/// the current tree in place, layering rather than resetting. Concurrent
/// `configure` and render calls on a shared instance need external
/// synchronization (e.g. `Mutex<Markdown>`); a `&Markdown` shared across
/// threads without reconfiguration needs none.
///
/// # Examples
///
/// ```
/// use mdgen::{Markdown, PartialConfig};
/// use mdgen::config::{PartialElementsConfig, PartialNewLineConfig};
/// use mdgen::elements::HeadingOptions;
///
/// let mut md = Markdown::new();
/// assert_eq!(
///     md.heading(&HeadingOptions { text: "Title", level: 1, ..Default::default() }),
///     "# Title\n"
/// );
///
/// md.configure(&PartialConfig {
///     elements: Some(PartialElementsConfig {
///         heading: Some(PartialNewLineConfig {
///             include_new_line: Some(false),
///         }),
///         ..Default::default()
///     }),
/// });
/// assert_eq!(
///     md.heading(&HeadingOptions { text: "Title", level: 1, ..Default::default() }),
///     "# Title"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Markdown {
    config: Config,
}

impl Markdown {
    /// Create a facade with the shipped default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a facade from a partial configuration merged onto the default.
    ///
    /// Leaves omitted by the partial resolve to the shipped defaults.
    pub fn with_config(partial: &PartialConfig) -> Self {
        let mut config = Config::default();
        config.merge(partial);
        Self { config }
    }

    /// A copy of the current configuration.
    ///
    /// The returned tree is isolated: mutating it has no effect on this
    /// instance.
    pub fn config(&self) -> Config {
        self.config.clone()
    }

    /// Deep-merge a partial configuration onto the current one, in place.
    pub fn configure(&mut self, partial: &PartialConfig) {
        self.config.merge(partial);
    }

    pub fn heading(&self, options: &HeadingOptions) -> String {
        elements::heading(&HeadingOptions {
            include_new_line: options
                .include_new_line
                .or(Some(self.config.elements.heading.include_new_line)),
            ..*options
        })
    }

    /// No configured defaults: forwards unchanged.
    pub fn link(&self, options: &LinkOptions) -> String {
        elements::link(options)
    }

    pub fn ul(&self, options: &UlOptions) -> String {
        let ul = &self.config.elements.ul;
        elements::ul(&UlOptions {
            items: options.items,
            indent: options.indent.or(Some(ul.indent)),
            indent_increment: options.indent_increment.or(Some(ul.indent_increment)),
            include_new_line: options.include_new_line.or(Some(ul.include_new_line)),
        })
    }

    pub fn table(&self, options: &TableOptions) -> String {
        let table = &self.config.elements.table;
        elements::table(&TableOptions {
            pad_columns: options.pad_columns.or(Some(table.pad_columns)),
            include_new_line: options.include_new_line.or(Some(table.include_new_line)),
            ..*options
        })
    }

    pub fn details(&self, options: &DetailsOptions) -> String {
        elements::details(&DetailsOptions {
            include_new_line: options
                .include_new_line
                .or(Some(self.config.elements.details.include_new_line)),
            ..*options
        })
    }

    pub fn github_alert(&self, options: &AlertOptions) -> String {
        elements::github_alert(&AlertOptions {
            include_new_line: options
                .include_new_line
                .or(Some(self.config.elements.github_alert.include_new_line)),
            ..*options
        })
    }

    /// No configured defaults: forwards unchanged.
    pub fn font(&self, options: &FontOptions) -> String {
        elements::font(options)
    }

    pub fn markdownlint_ignore(&self, options: &MarkdownlintIgnoreOptions) -> String {
        elements::markdownlint_ignore(&MarkdownlintIgnoreOptions {
            include_new_line: options
                .include_new_line
                .or(Some(self.config.elements.markdownlint_ignore.include_new_line)),
            ..*options
        })
    }

    pub fn prettier_ignore(&self, options: &PrettierIgnoreOptions) -> String {
        elements::prettier_ignore(&PrettierIgnoreOptions {
            include_new_line: options
                .include_new_line
                .or(Some(self.config.elements.prettier_ignore.include_new_line)),
            ..*options
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PartialElementsConfig, PartialNewLineConfig, PartialUlConfig};
    use crate::elements::ListItem;

    fn partial_heading_no_newline() -> PartialConfig {
        PartialConfig {
            elements: Some(PartialElementsConfig {
                heading: Some(PartialNewLineConfig {
                    include_new_line: Some(false),
                }),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_new_uses_shipped_defaults() {
        let md = Markdown::new();
        assert_eq!(md.config(), Config::default());
    }

    #[test]
    fn test_with_config_merges_onto_default() {
        let md = Markdown::with_config(&partial_heading_no_newline());
        let config = md.config();
        assert!(!config.elements.heading.include_new_line);
        // Everything else is still the shipped default
        assert!(config.elements.ul.include_new_line);
        assert_eq!(config.elements.ul.indent_increment, 2);
    }

    #[test]
    fn test_configured_default_applies_when_option_omitted() {
        let md = Markdown::with_config(&partial_heading_no_newline());
        let rendered = md.heading(&HeadingOptions {
            text: "T",
            level: 1,
            include_new_line: None,
        });
        assert_eq!(rendered, "# T");
    }

    #[test]
    fn test_explicit_option_overrides_configuration() {
        let md = Markdown::with_config(&partial_heading_no_newline());
        let rendered = md.heading(&HeadingOptions {
            text: "T",
            level: 1,
            include_new_line: Some(true),
        });
        assert_eq!(rendered, "# T\n");
    }

    #[test]
    fn test_configure_layers_in_place() {
        let mut md = Markdown::new();
        md.configure(&PartialConfig {
            elements: Some(PartialElementsConfig {
                ul: Some(PartialUlConfig {
                    indent: Some(2),
                    ..Default::default()
                }),
                ..Default::default()
            }),
        });
        md.configure(&partial_heading_no_newline());

        // Both layers visible; the second merge did not reset the first
        let config = md.config();
        assert_eq!(config.elements.ul.indent, 2);
        assert!(!config.elements.heading.include_new_line);
    }

    #[test]
    fn test_configured_ul_defaults_flow_through() {
        let mut md = Markdown::new();
        md.configure(&PartialConfig {
            elements: Some(PartialElementsConfig {
                ul: Some(PartialUlConfig {
                    indent: Some(2),
                    indent_increment: Some(3),
                    include_new_line: Some(false),
                }),
                ..Default::default()
            }),
        });

        let items = [
            ListItem::Text("a"),
            ListItem::Nested(vec![ListItem::Text("b")]),
        ];
        let rendered = md.ul(&UlOptions {
            items: &items,
            ..Default::default()
        });
        assert_eq!(rendered, "  - a\n     - b");
    }

    #[test]
    fn test_config_copy_isolation() {
        let md = Markdown::new();
        let mut copy = md.config();
        copy.elements.ul.indent = 99;
        assert_eq!(md.config().elements.ul.indent, 0);
    }
}
