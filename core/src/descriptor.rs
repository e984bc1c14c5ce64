//! Declared argument metadata.
//!
//! A [`Descriptor`] captures everything the parser knows about one declared
//! argument: its short and long keys, the human description, and the
//! annotations the help renderer prints next to it. Descriptors are built
//! with the `with_*` builder methods and never change once they have been
//! handed to a [`Registry`](crate::Registry).

use std::fmt;

use serde::{Deserialize, Serialize};

/// How an argument is presented in help output.
///
/// # Examples
///
/// ```
/// use clarg_core::Kind;
///
/// assert_eq!(Kind::default(), Kind::Normal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Kind {
    /// A plain option (the default).
    #[default]
    Normal,
    /// An option whose current target value is shown as `[default: …]`.
    Defaulted,
    /// A positional argument, named by its label.
    Positional,
}

/// Whether an argument must be supplied on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Requirement {
    /// Absence is an [`UnsetArgument`](crate::Error::UnsetArgument) error.
    Required,
    /// Absence leaves the target untouched (the default).
    #[default]
    Optional,
}

/// Metadata for one declared argument.
///
/// Use [`new`](Descriptor::new) or one of the shorthand constructors
/// ([`short`](Descriptor::short), [`long`](Descriptor::long),
/// [`short_long`](Descriptor::short_long)) and chain builder methods for
/// the optional annotations.
///
/// # Examples
///
/// ```
/// use clarg_core::{Descriptor, Kind, Requirement};
///
/// let output = Descriptor::short_long('o', "output", "output path")
///     .with_placeholder("FILE")
///     .defaulted();
/// assert_eq!(output.display_name(), "-o/--output");
/// assert_eq!(output.kind, Kind::Defaulted);
/// assert_eq!(output.requirement, Requirement::Optional);
///
/// let name = Descriptor::long("name", "your name").required();
/// assert_eq!(name.display_name(), "--name");
/// assert!(name.is_required());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Single-character key, matched as `-x`.
    pub short: Option<char>,
    /// Multi-character key, matched as `--name`. Positionals store their
    /// label here.
    pub long: Option<String>,
    /// Human description shown in help output.
    pub description: String,
    /// Default value annotation; empty when there is none.
    pub default: String,
    /// Value placeholder (e.g. `FILE`); empty when there is none.
    pub placeholder: String,
    /// Presentation kind.
    pub kind: Kind,
    /// Whether the argument must be supplied.
    pub requirement: Requirement,
}

impl Descriptor {
    /// Creates a descriptor from optional keys and a description.
    ///
    /// # Examples
    ///
    /// ```
    /// use clarg_core::Descriptor;
    ///
    /// let d = Descriptor::new(Some('v'), Some("verbose"), "more output");
    /// assert_eq!(d.short, Some('v'));
    /// assert_eq!(d.long.as_deref(), Some("verbose"));
    /// ```
    pub fn new(short: Option<char>, long: Option<&str>, description: &str) -> Self {
        Self {
            short,
            long: long.map(String::from),
            description: description.to_string(),
            default: String::new(),
            placeholder: String::new(),
            kind: Kind::Normal,
            requirement: Requirement::Optional,
        }
    }

    /// Creates a descriptor with only a short key.
    pub fn short(short: char, description: &str) -> Self {
        Self::new(Some(short), None, description)
    }

    /// Creates a descriptor with only a long key.
    pub fn long(long: &str, description: &str) -> Self {
        Self::new(None, Some(long), description)
    }

    /// Creates a descriptor with both keys.
    pub fn short_long(short: char, long: &str, description: &str) -> Self {
        Self::new(Some(short), Some(long), description)
    }

    /// Creates a positional descriptor named by `label`.
    ///
    /// # Examples
    ///
    /// ```
    /// use clarg_core::{Descriptor, Kind};
    ///
    /// let p = Descriptor::positional("subcommand", "what to run");
    /// assert_eq!(p.kind, Kind::Positional);
    /// assert_eq!(p.display_name(), "subcommand");
    /// ```
    pub fn positional(label: &str, description: &str) -> Self {
        Self {
            kind: Kind::Positional,
            requirement: Requirement::Required,
            ..Self::new(None, Some(label), description)
        }
    }

    /// Marks the argument as required.
    pub fn required(mut self) -> Self {
        self.requirement = Requirement::Required;
        self
    }

    /// Marks the argument as defaulted: the target's value at declaration
    /// time is shown as `[default: …]`.
    pub fn defaulted(mut self) -> Self {
        self.kind = Kind::Defaulted;
        self
    }

    /// Sets the value placeholder shown after the key (e.g. `FILE`).
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    /// Sets the default annotation explicitly.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    /// Returns `true` if the argument must be supplied.
    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }

    /// Returns `true` for positional descriptors.
    pub fn is_positional(&self) -> bool {
        self.kind == Kind::Positional
    }

    /// Returns the name used in diagnostics: `-x/--long`, `-x`, `--long`,
    /// or the bare label for positionals.
    pub fn display_name(&self) -> String {
        if self.is_positional() {
            return self.long.clone().unwrap_or_default();
        }
        key_display(self.short, self.long.as_deref())
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Formats a short/long key pair the way diagnostics name options.
///
/// # Examples
///
/// ```
/// use clarg_core::key_display;
///
/// assert_eq!(key_display(Some('o'), Some("output")), "-o/--output");
/// assert_eq!(key_display(Some('o'), None), "-o");
/// assert_eq!(key_display(None, Some("output")), "--output");
/// ```
pub fn key_display(short: Option<char>, long: Option<&str>) -> String {
    match (short, long) {
        (Some(s), Some(l)) => format!("-{s}/--{l}"),
        (Some(s), None) => format!("-{s}"),
        (None, Some(l)) => format!("--{l}"),
        (None, None) => String::new(),
    }
}
