//! Declaration validation.
//!
//! Checks the shape of a descriptor's keys before it is registered: short
//! keys must be printable non-extended ASCII, long keys must be longer than
//! one character, and options need at least one key.
//!
//! # Examples
//!
//! ```
//! use clarg_core::*;
//!
//! assert!(validate_descriptor(&Descriptor::short_long('v', "verbose", "")).is_ok());
//!
//! // Invalid: a long key of a single character
//! let bad = Descriptor::long("v", "");
//! assert!(matches!(
//!     validate_descriptor(&bad),
//!     Err(Error::InvalidDeclaration(_))
//! ));
//! ```

use crate::{Descriptor, Error, Result};

/// Validates the keys of a descriptor.
///
/// # Errors
///
/// Returns [`Error::InvalidDeclaration`] describing the first problem found.
pub fn validate_descriptor(desc: &Descriptor) -> Result<()> {
    if desc.is_positional() {
        return match desc.long.as_deref() {
            Some(label) if !label.trim().is_empty() => Ok(()),
            _ => Err(Error::InvalidDeclaration(
                "positional label cannot be empty".to_string(),
            )),
        };
    }

    if desc.short.is_none() && desc.long.is_none() {
        return Err(Error::InvalidDeclaration(
            "arguments must define a short or long name".to_string(),
        ));
    }

    if let Some(short) = desc.short {
        validate_short(short)?;
    }

    if let Some(long) = desc.long.as_deref() {
        validate_long(long)?;
    }

    Ok(())
}

fn validate_short(short: char) -> Result<()> {
    if ('!'..='~').contains(&short) {
        return Ok(());
    }
    Err(Error::InvalidDeclaration(format!(
        "short names must be a printable character within the non-extended ASCII set, got {:?}",
        short
    )))
}

fn validate_long(long: &str) -> Result<()> {
    if long.chars().count() > 1 {
        return Ok(());
    }
    Err(Error::InvalidDeclaration(format!(
        "long names must be more than one character, got {long:?}"
    )))
}
