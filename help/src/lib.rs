//! Help-text layout for clarg parsers.
//!
//! The renderer turns a [`Registry`](clarg_core::Registry) plus some
//! program-level text into a help document:
//!
//! ```text
//! testing - just a simple testing app
//!
//! usage: testing [-ho] subcommand
//!
//!     -h, --help            print this dialog
//!     -o, --output FILE     output path
//!                           [default: a.out]
//!
//!     positionals:
//!         subcommand        first positional is a subcommand
//! ```
//!
//! Layout is controlled by [`HelpOptions`]; wrapping by [`TextWrapper`].

mod options;
mod render;
mod wrap;

pub use options::HelpOptions;
pub use render::{DESCRIPTION_GAP, HelpRenderer, ProgramInfo, calc_max_prefix, prefix_width};
pub use wrap::TextWrapper;
