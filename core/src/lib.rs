//! Core argument types shared by the clarg crates.
//!
//! This crate defines the declaration side of the parser:
//!
//! - [`Descriptor`]: metadata for one declared argument (keys,
//!   description, default and placeholder annotations, [`Kind`],
//!   [`Requirement`]).
//! - [`Registry`]: the catalog of declared arguments, split into
//!   top-level options, [`ArgGroup`]s, and positionals, with duplicate-key
//!   detection.
//! - [`Error`]: every declaration and binding failure.
//! - [`convert`]: the string-to-value conversion used for bound values.
//!
//! Validation ([`validate_descriptor`]) rejects malformed keys before they
//! reach the registry.
//!
//! # Example
//!
//! ```
//! use clarg_core::*;
//!
//! let mut registry = Registry::new();
//! registry
//!     .declare(Scope::Main, Descriptor::short_long('v', "verbose", "more output"))
//!     .unwrap();
//! registry
//!     .declare_positional(Descriptor::positional("file", "input file"))
//!     .unwrap();
//!
//! assert!(registry.has_short('v'));
//! assert_eq!(registry.positionals()[0].display_name(), "file");
//! ```

mod convert;
mod descriptor;
mod error;
mod registry;
mod validate;

pub use convert::{convert, convert_count};
pub use descriptor::{Descriptor, Kind, Requirement, key_display};
pub use error::{ConversionError, Error, Result};
pub use registry::{ArgGroup, Registry, Scope};
pub use validate::validate_descriptor;
