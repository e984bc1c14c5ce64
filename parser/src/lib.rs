//! Declarative command-line argument binding.
//!
//! A [`Parser`] classifies the raw tokens once, then each declaration
//! (`flag`, `count`, `arg`, `list`, `pos`, `gather`) resolves itself against
//! that classification and writes the converted value into a target the
//! caller owns. The declarations are kept for the generated help document.
//!
//! # Quick start
//!
//! ```
//! use clarg::prelude::*;
//!
//! #[derive(Default)]
//! struct Options {
//!     help: bool,
//!     warnings: Vec<String>,
//!     subcommand: String,
//! }
//!
//! # fn main() -> clarg::Result<()> {
//! let mut opts = Options::default();
//! let mut parser = Parser::new("testing", "just a simple testing app");
//! parser
//!     .from(["-W", "all", "-h", "parse", "-W", "abi"])?
//!     .flag(Descriptor::short_long('h', "help", "print this dialog"), &mut opts.help)?
//!     .list(Descriptor::short_long('W', "warn", "toggle a warning"), &mut opts.warnings)?
//!     .pos("subcommand", "what to run", &mut opts.subcommand)?;
//!
//! assert!(opts.help);
//! assert_eq!(opts.warnings, ["all", "abi"]);
//! assert_eq!(opts.subcommand, "parse");
//!
//! if opts.help {
//!     let help = parser.render_help();
//!     assert!(help.contains("usage: testing [-hW] subcommand"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! By default the first failure is returned from the failing call. With
//! [`ErrorMode::Accumulate`] failures are collected in [`Parser::errors`]
//! instead, the failing call has no effect, and the chain continues; check
//! [`Parser::has_errors`] before trusting any bound value.
//!
//! # Logging
//!
//! Classification, claims and conversions are logged at `debug` level and
//! accumulated errors at `warn` level through [`tracing`]. No subscriber is
//! installed.
//!
//! # Configuration
//!
//! [`ParserConfig`] fixes the terminator, error mode and help layout at
//! construction and can be loaded from YAML.

mod binder;
mod config;
mod declare;
mod error;
mod group;
mod parser;
mod partition;

pub use config::{ErrorMode, ParserConfig};
pub use declare::Declare;
pub use error::{ConfigError, ConfigResult};
pub use group::Group;
pub use parser::Parser;
pub use partition::Partition;

pub use clarg_core::{
    ArgGroup, ConversionError, Descriptor, Error, Kind, Registry, Requirement, Result, convert,
};
pub use clarg_help::{HelpOptions, ProgramInfo, TextWrapper};

/// The types needed to declare and bind arguments.
pub mod prelude {
    pub use crate::{Declare, Descriptor, ErrorMode, Group, Kind, Parser, ParserConfig, Requirement};
}
