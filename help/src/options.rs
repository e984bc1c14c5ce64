//! Help layout configuration.
//!
//! [`HelpOptions`] is serializable so it can live in a parser configuration
//! file; every field has a default, so a partial document is enough.
//!
//! # Example YAML
//!
//! ```yaml
//! width: 100
//! indent: 2
//! group_indent: 2
//! lines_between: 1
//! lines_after_group: 0
//! line_after_wrap: false
//! use_prefix: "Usage:"
//! ```

use serde::{Deserialize, Serialize};

use crate::TextWrapper;

/// Layout settings for rendered help.
///
/// # Examples
///
/// ```
/// use clarg_help::HelpOptions;
///
/// let opts = HelpOptions::default();
/// assert_eq!(opts.width, 80);
/// assert_eq!(opts.group_depth(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpOptions {
    /// Maximum line width.
    pub width: u16,
    /// Indentation of top-level argument lines and section headings.
    pub indent: u8,
    /// Extra indentation for arguments inside a group.
    pub group_indent: u8,
    /// Blank lines between sections.
    pub lines_between: u8,
    /// Blank lines after a group heading.
    pub lines_after_group: u8,
    /// Print a blank line after a description that wrapped.
    pub line_after_wrap: bool,
    /// Prefix of the usage line.
    pub use_prefix: String,
}

impl Default for HelpOptions {
    fn default() -> Self {
        Self {
            width: 80,
            indent: 4,
            group_indent: 4,
            lines_between: 1,
            lines_after_group: 0,
            line_after_wrap: true,
            use_prefix: "usage:".to_string(),
        }
    }
}

impl HelpOptions {
    /// Indentation of arguments inside a group (`indent + group_indent`).
    pub fn group_depth(&self) -> usize {
        usize::from(self.indent) + usize::from(self.group_indent)
    }

    /// A wrapper for the configured width.
    pub fn wrapper(&self) -> TextWrapper {
        TextWrapper::new(usize::from(self.width))
    }
}
