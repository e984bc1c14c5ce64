//! Error types for argument declaration and binding.
//!
//! Every failure the parser can report is a variant of [`Error`]. The
//! `Display` impl produces the message users see; options are named as
//! `-x/--long` wherever both keys exist.

use thiserror::Error;

/// Failure to convert a token into the target type.
///
/// # Examples
///
/// ```
/// use clarg_core::convert;
///
/// let err = convert::<u8>("300").unwrap_err();
/// assert_eq!(err.input, "300");
/// assert_eq!(err.target, "u8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value `{input}` for {target}: {reason}")]
pub struct ConversionError {
    /// The raw token that failed to convert.
    pub input: String,
    /// Name of the target type.
    pub target: String,
    /// Reason reported by the target's parser.
    pub reason: String,
}

/// Declaration and binding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A short or long key has an invalid shape.
    #[error("invalid declaration: {0}")]
    InvalidDeclaration(String),
    /// A key was registered twice on the same parser.
    #[error("duplicate key detected: {0}")]
    DuplicateKey(String),
    /// A required argument was never supplied.
    #[error("required argument not given: {0}")]
    UnsetArgument(String),
    /// An option had no adjacent value token.
    #[error("no argument given to {0}")]
    MissingValue(String),
    /// A positional had no remaining token to claim.
    #[error("expected a positional argument for: {0}")]
    MissingPositional(String),
    /// The claimed token could not be converted.
    #[error("error while parsing value of {argument}: {source}")]
    Conversion {
        /// Name of the argument being bound.
        argument: String,
        /// Underlying conversion failure.
        source: ConversionError,
    },
    /// A binding call was made before the arguments were partitioned.
    #[error("arguments must be partitioned with `from` before binding {0}")]
    NotParsed(String),
    /// The parser was driven in an unsupported order.
    #[error("invalid parser state: {0}")]
    InvalidState(&'static str),
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
