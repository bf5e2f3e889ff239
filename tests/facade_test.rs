//! Tests for the `Markdown` facade: configuration merging and per-field
//! default resolution, verified through rendered output.

use mdgen::config::{
    PartialElementsConfig, PartialNewLineConfig, PartialTableConfig, PartialUlConfig,
};
use mdgen::elements::{DetailsOptions, HeadingOptions, ListItem, TableOptions, UlOptions};
use mdgen::layout::Alignment;
use mdgen::{Config, Markdown, PartialConfig};

fn ul_partial(ul: PartialUlConfig) -> PartialConfig {
    PartialConfig {
        elements: Some(PartialElementsConfig {
            ul: Some(ul),
            ..Default::default()
        }),
    }
}

// ============================================================================
// Configuration state
// ============================================================================

#[test]
fn test_default_config() {
    let md = Markdown::new();
    assert_eq!(md.config(), Config::default());
}

#[test]
fn test_constructor_merges_partial_onto_default() {
    let md = Markdown::with_config(&PartialConfig {
        elements: Some(PartialElementsConfig {
            heading: Some(PartialNewLineConfig {
                include_new_line: Some(false),
            }),
            ..Default::default()
        }),
    });

    let mut expected = Config::default();
    expected.elements.heading.include_new_line = false;
    assert_eq!(md.config(), expected);
}

#[test]
fn test_configure_replaces_only_present_leaves() {
    let mut md = Markdown::new();
    md.configure(&ul_partial(PartialUlConfig {
        indent_increment: Some(4),
        include_new_line: Some(false),
        ..Default::default()
    }));

    let mut expected = Config::default();
    expected.elements.ul.indent_increment = 4;
    expected.elements.ul.include_new_line = false;
    assert_eq!(md.config(), expected);
}

#[test]
fn test_config_read_is_isolated_copy() {
    let md = Markdown::new();
    let mut snapshot = md.config();
    snapshot.elements.table.pad_columns = false;
    snapshot.elements.ul.indent = 7;

    assert_eq!(md.config(), Config::default());
}

// ============================================================================
// Default resolution through rendering methods
// ============================================================================

#[test]
fn test_heading_uses_configured_default() {
    let mut md = Markdown::new();
    assert_eq!(
        md.heading(&HeadingOptions {
            text: "T",
            level: 1,
            ..Default::default()
        }),
        "# T\n"
    );

    md.configure(&PartialConfig {
        elements: Some(PartialElementsConfig {
            heading: Some(PartialNewLineConfig {
                include_new_line: Some(false),
            }),
            ..Default::default()
        }),
    });
    assert_eq!(
        md.heading(&HeadingOptions {
            text: "T",
            level: 1,
            ..Default::default()
        }),
        "# T"
    );

    // Explicit option still wins over configuration
    assert_eq!(
        md.heading(&HeadingOptions {
            text: "T",
            level: 1,
            include_new_line: Some(true),
        }),
        "# T\n"
    );
}

#[test]
fn test_ul_uses_configured_defaults_per_field() {
    let md = Markdown::with_config(&ul_partial(PartialUlConfig {
        indent: Some(4),
        indent_increment: Some(3),
        include_new_line: Some(false),
    }));

    let items = [
        ListItem::Text("a"),
        ListItem::Nested(vec![ListItem::Text("b")]),
    ];

    // All fields from configuration
    assert_eq!(
        md.ul(&UlOptions {
            items: &items,
            ..Default::default()
        }),
        "    - a\n       - b"
    );

    // One explicit field overrides; the others stay configured
    assert_eq!(
        md.ul(&UlOptions {
            items: &items,
            indent: Some(0),
            ..Default::default()
        }),
        "- a\n   - b"
    );
}

#[test]
fn test_table_uses_configured_defaults() {
    let md = Markdown::with_config(&PartialConfig {
        elements: Some(PartialElementsConfig {
            table: Some(PartialTableConfig {
                pad_columns: Some(false),
                include_new_line: Some(false),
            }),
            ..Default::default()
        }),
    });

    let rendered = md.table(&TableOptions {
        headers: &["Header"],
        rows: &[vec!["Row"]],
        alignments: &[Alignment::Left],
        ..Default::default()
    });
    assert_eq!(rendered, "| Header |\n| :-- |\n| Row |");

    // Explicit padding re-enabled for one call
    let padded = md.table(&TableOptions {
        headers: &["Header"],
        rows: &[vec!["Row"]],
        alignments: &[Alignment::Left],
        pad_columns: Some(true),
        ..Default::default()
    });
    assert_eq!(padded, "| Header |\n| :----- |\n| Row    |");
}

#[test]
fn test_details_uses_configured_default() {
    let md = Markdown::with_config(&PartialConfig {
        elements: Some(PartialElementsConfig {
            details: Some(PartialNewLineConfig {
                include_new_line: Some(false),
            }),
            ..Default::default()
        }),
    });

    let rendered = md.details(&DetailsOptions {
        summary: "S",
        content: "C",
        ..Default::default()
    });
    assert!(!rendered.ends_with('\n'));
}

// ============================================================================
// JSON configuration (serde feature)
// ============================================================================

#[cfg(feature = "serde")]
mod json {
    use super::*;

    #[test]
    fn test_configure_from_json() {
        let partial = PartialConfig::from_json(
            r#"{"elements": {"ul": {"indent": 2, "indentIncrement": 3}}}"#,
        )
        .unwrap();
        let md = Markdown::with_config(&partial);

        let items = [ListItem::Text("a")];
        assert_eq!(
            md.ul(&UlOptions {
                items: &items,
                ..Default::default()
            }),
            "  - a\n"
        );
    }

    #[test]
    fn test_invalid_json_config_fails_fast() {
        let result = PartialConfig::from_json(r#"{"elements": {"heading": "yes"}}"#);
        assert!(matches!(result, Err(mdgen::Error::InvalidConfig(_))));
    }
}
