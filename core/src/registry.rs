//! Catalog of declared arguments.
//!
//! The [`Registry`] owns every [`Descriptor`] a parser has declared, in
//! declaration order, split into top-level options, named groups, and
//! positionals. It also tracks which short and long keys are taken so a key
//! can never be declared twice on the same parser, whether at top level or
//! inside a group.
//!
//! # Examples
//!
//! ```
//! use clarg_core::*;
//!
//! let mut registry = Registry::new();
//! registry.declare(Scope::Main, Descriptor::long("mode", "first")).unwrap();
//!
//! let group = registry.add_group("outputs");
//! let err = registry
//!     .declare(Scope::Group(group), Descriptor::long("mode", "second"))
//!     .unwrap_err();
//! assert_eq!(err, Error::DuplicateKey("--mode".to_string()));
//! ```

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{Descriptor, Error, Result, validate_descriptor};

/// Where a declaration lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Top-level options.
    Main,
    /// The group at this index (see [`Registry::add_group`]).
    Group(usize),
}

/// A named section of options, used only for help layout.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArgGroup {
    /// Heading printed above the group.
    pub name: String,
    /// Descriptors in declaration order.
    pub args: Vec<Descriptor>,
}

/// Declared arguments plus duplicate-key bookkeeping for one parser.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Registry {
    #[serde(skip)]
    short_keys: BTreeSet<char>,
    #[serde(skip)]
    long_keys: BTreeSet<String>,
    options: Vec<Descriptor>,
    groups: Vec<ArgGroup>,
    positionals: Vec<Descriptor>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new named group and returns its index.
    pub fn add_group(&mut self, name: &str) -> usize {
        self.groups.push(ArgGroup {
            name: name.to_string(),
            args: Vec::new(),
        });
        self.groups.len() - 1
    }

    /// Validates and registers an option descriptor.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDeclaration`] if the keys are malformed.
    /// - [`Error::DuplicateKey`] if either key is already registered; in
    ///   that case neither key is recorded.
    /// - [`Error::InvalidState`] if `scope` names a group that does not
    ///   exist or the descriptor is positional.
    pub fn declare(&mut self, scope: Scope, desc: Descriptor) -> Result<()> {
        if desc.is_positional() {
            return Err(Error::InvalidState(
                "positionals must be declared with declare_positional",
            ));
        }
        validate_descriptor(&desc)?;
        if let Scope::Group(index) = scope {
            if index >= self.groups.len() {
                return Err(Error::InvalidState("declaration into an unknown group"));
            }
        }
        self.register_keys(&desc)?;

        match scope {
            Scope::Main => self.options.push(desc),
            Scope::Group(index) => self.groups[index].args.push(desc),
        }
        Ok(())
    }

    /// Validates and registers a positional descriptor.
    ///
    /// Positional labels live in their own namespace and are not checked
    /// against option keys.
    pub fn declare_positional(&mut self, desc: Descriptor) -> Result<()> {
        if !desc.is_positional() {
            return Err(Error::InvalidState(
                "declare_positional requires a positional descriptor",
            ));
        }
        validate_descriptor(&desc)?;
        self.positionals.push(desc);
        Ok(())
    }

    fn register_keys(&mut self, desc: &Descriptor) -> Result<()> {
        if let Some(short) = desc.short {
            if self.short_keys.contains(&short) {
                return Err(Error::DuplicateKey(format!("-{short}")));
            }
        }
        if let Some(long) = desc.long.as_deref() {
            if self.long_keys.contains(long) {
                return Err(Error::DuplicateKey(format!("--{long}")));
            }
        }

        if let Some(short) = desc.short {
            self.short_keys.insert(short);
        }
        if let Some(long) = desc.long.as_deref() {
            self.long_keys.insert(long.to_string());
        }
        Ok(())
    }

    /// Top-level option descriptors.
    pub fn options(&self) -> &[Descriptor] {
        &self.options
    }

    /// Named groups in declaration order.
    pub fn groups(&self) -> &[ArgGroup] {
        &self.groups
    }

    /// Positional descriptors in declaration order.
    pub fn positionals(&self) -> &[Descriptor] {
        &self.positionals
    }

    /// All option descriptors: top-level first, then each group's.
    pub fn all_options(&self) -> impl Iterator<Item = &Descriptor> {
        self.options
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.args.iter()))
    }

    /// Returns `true` if the short key is already taken.
    pub fn has_short(&self, short: char) -> bool {
        self.short_keys.contains(&short)
    }

    /// Returns `true` if the long key is already taken.
    pub fn has_long(&self, long: &str) -> bool {
        self.long_keys.contains(long)
    }
}
