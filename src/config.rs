//! Configuration tree for element defaults.
//!
//! The tree has a total default at the root ([`Config::default`]); callers
//! supply [`PartialConfig`] values where every leaf is optional. Merging is an
//! explicit recursive descent: struct-valued nodes merge key-by-key, leaves
//! present in the partial replace the current value wholesale, and absent
//! leaves are left untouched. Merging never deletes a key.
//!
//! With the `serde` feature a [`PartialConfig`] can be parsed from JSON, using
//! the camelCase key names of the original JavaScript library. Parsing fails
//! fast on unknown keys or wrong-shaped values rather than silently merging
//! garbage.

#[cfg(feature = "serde")]
use crate::error::{Error, Result};

/// Compiled-in defaults, used both for [`Config::default`] and by the
/// standalone renderers when an option is omitted.
pub(crate) const DEFAULT_INCLUDE_NEW_LINE: bool = true;
pub(crate) const DEFAULT_PAD_COLUMNS: bool = true;
pub(crate) const DEFAULT_UL_INDENT: usize = 0;
pub(crate) const DEFAULT_UL_INDENT_INCREMENT: usize = 2;

/// Fully-populated configuration tree.
///
/// `Clone` is the deep copy: no two [`crate::Markdown`] instances ever share
/// a tree, and [`crate::Markdown::config`] hands back an isolated clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub elements: ElementsConfig,
}

/// Per-element default values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementsConfig {
    pub details: NewLineConfig,
    pub github_alert: NewLineConfig,
    pub heading: NewLineConfig,
    pub markdownlint_ignore: NewLineConfig,
    pub prettier_ignore: NewLineConfig,
    pub table: TableConfig,
    pub ul: UlConfig,
}

/// Defaults for elements whose only knob is the trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineConfig {
    pub include_new_line: bool,
}

/// Defaults for the table renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub pad_columns: bool,
    pub include_new_line: bool,
}

/// Defaults for the unordered list renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UlConfig {
    pub indent: usize,
    pub indent_increment: usize,
    pub include_new_line: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            elements: ElementsConfig {
                details: NewLineConfig {
                    include_new_line: DEFAULT_INCLUDE_NEW_LINE,
                },
                github_alert: NewLineConfig {
                    include_new_line: DEFAULT_INCLUDE_NEW_LINE,
                },
                heading: NewLineConfig {
                    include_new_line: DEFAULT_INCLUDE_NEW_LINE,
                },
                markdownlint_ignore: NewLineConfig {
                    include_new_line: DEFAULT_INCLUDE_NEW_LINE,
                },
                prettier_ignore: NewLineConfig {
                    include_new_line: DEFAULT_INCLUDE_NEW_LINE,
                },
                table: TableConfig {
                    pad_columns: DEFAULT_PAD_COLUMNS,
                    include_new_line: DEFAULT_INCLUDE_NEW_LINE,
                },
                ul: UlConfig {
                    indent: DEFAULT_UL_INDENT,
                    indent_increment: DEFAULT_UL_INDENT_INCREMENT,
                    include_new_line: DEFAULT_INCLUDE_NEW_LINE,
                },
            },
        }
    }
}

impl Config {
    /// Deep-merge `partial` onto this tree in place.
    ///
    /// Leaves present in the partial replace the current value; absent leaves
    /// and branches are untouched.
    pub fn merge(&mut self, partial: &PartialConfig) {
        if let Some(elements) = &partial.elements {
            self.elements.merge(elements);
        }
    }
}

impl ElementsConfig {
    fn merge(&mut self, partial: &PartialElementsConfig) {
        if let Some(details) = &partial.details {
            self.details.merge(details);
        }
        if let Some(github_alert) = &partial.github_alert {
            self.github_alert.merge(github_alert);
        }
        if let Some(heading) = &partial.heading {
            self.heading.merge(heading);
        }
        if let Some(markdownlint_ignore) = &partial.markdownlint_ignore {
            self.markdownlint_ignore.merge(markdownlint_ignore);
        }
        if let Some(prettier_ignore) = &partial.prettier_ignore {
            self.prettier_ignore.merge(prettier_ignore);
        }
        if let Some(table) = &partial.table {
            self.table.merge(table);
        }
        if let Some(ul) = &partial.ul {
            self.ul.merge(ul);
        }
    }
}

impl NewLineConfig {
    fn merge(&mut self, partial: &PartialNewLineConfig) {
        if let Some(include_new_line) = partial.include_new_line {
            self.include_new_line = include_new_line;
        }
    }
}

impl TableConfig {
    fn merge(&mut self, partial: &PartialTableConfig) {
        if let Some(pad_columns) = partial.pad_columns {
            self.pad_columns = pad_columns;
        }
        if let Some(include_new_line) = partial.include_new_line {
            self.include_new_line = include_new_line;
        }
    }
}

impl UlConfig {
    fn merge(&mut self, partial: &PartialUlConfig) {
        if let Some(indent) = partial.indent {
            self.indent = indent;
        }
        if let Some(indent_increment) = partial.indent_increment {
            self.indent_increment = indent_increment;
        }
        if let Some(include_new_line) = partial.include_new_line {
            self.include_new_line = include_new_line;
        }
    }
}

/// A configuration overlay: the same tree as [`Config`] with every node
/// optional. Absent nodes inherit the current (or shipped) value on merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PartialConfig {
    pub elements: Option<PartialElementsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, deny_unknown_fields, rename_all = "camelCase")
)]
pub struct PartialElementsConfig {
    pub details: Option<PartialNewLineConfig>,
    pub github_alert: Option<PartialNewLineConfig>,
    pub heading: Option<PartialNewLineConfig>,
    pub markdownlint_ignore: Option<PartialNewLineConfig>,
    pub prettier_ignore: Option<PartialNewLineConfig>,
    pub table: Option<PartialTableConfig>,
    pub ul: Option<PartialUlConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, deny_unknown_fields, rename_all = "camelCase")
)]
pub struct PartialNewLineConfig {
    pub include_new_line: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, deny_unknown_fields, rename_all = "camelCase")
)]
pub struct PartialTableConfig {
    pub pad_columns: Option<bool>,
    pub include_new_line: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, deny_unknown_fields, rename_all = "camelCase")
)]
pub struct PartialUlConfig {
    pub indent: Option<usize>,
    pub indent_increment: Option<usize>,
    pub include_new_line: Option<bool>,
}

#[cfg(feature = "serde")]
impl PartialConfig {
    /// Parse a partial configuration from JSON.
    ///
    /// Keys use the camelCase names of the configuration tree
    /// (`includeNewLine`, `indentIncrement`, ...). Unknown keys and
    /// wrong-shaped values are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdgen::PartialConfig;
    ///
    /// let partial =
    ///     PartialConfig::from_json(r#"{"elements": {"ul": {"indent": 2}}}"#).unwrap();
    /// assert_eq!(
    ///     partial.elements.unwrap().ul.unwrap().indent,
    ///     Some(2)
    /// );
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}
