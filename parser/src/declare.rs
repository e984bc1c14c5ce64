//! Chainable option declarations shared by [`Parser`](crate::Parser) and
//! [`Group`](crate::Group).

use std::fmt::Display;
use std::str::FromStr;

use clarg_core::{Descriptor, Result, Scope};

use crate::binder::Session;

/// Declares options and binds them to caller-owned targets.
///
/// Each call records the descriptor for help output, resolves it against
/// the parsed input, and writes the converted value into `target`. Calls
/// return `Result<&mut Self>` so they chain with `?`:
///
/// ```
/// use clarg::prelude::*;
///
/// # fn main() -> clarg::Result<()> {
/// let mut verbose = 0u8;
/// let mut output = String::from("a.out");
///
/// let mut parser = Parser::new("demo", "");
/// parser
///     .from(["-vv", "--output", "out.bin"])?
///     .count(Descriptor::short_long('v', "verbose", "more output"), &mut verbose)?
///     .arg(Descriptor::short_long('o', "output", "output path"), &mut output)?;
///
/// assert_eq!(verbose, 2);
/// assert_eq!(output, "out.bin");
/// # Ok(())
/// # }
/// ```
///
/// In [`ErrorMode::Accumulate`](crate::ErrorMode::Accumulate) a failing call
/// records its error on the parser, leaves `target` untouched, and returns
/// `Ok`; in fail-fast mode the error is returned.
///
/// This trait is implemented by the types in this crate only.
pub trait Declare: Sized {
    #[doc(hidden)]
    fn session(&mut self) -> (&mut Session, Scope);

    /// Binds a boolean flag: `true` when either key is present.
    fn flag(&mut self, desc: Descriptor, target: &mut bool) -> Result<&mut Self> {
        let (session, scope) = self.session();
        let outcome = session.flag(scope, desc, target, false);
        session.settle(outcome)?;
        Ok(self)
    }

    /// Binds an inverted flag: `false` when present, `true` otherwise. Help
    /// output shows it with a `true` default.
    fn inverted_flag(&mut self, desc: Descriptor, target: &mut bool) -> Result<&mut Self> {
        let (session, scope) = self.session();
        let outcome = session.flag(scope, desc, target, true);
        session.settle(outcome)?;
        Ok(self)
    }

    /// Binds the number of occurrences of either key (`-vvv` counts three).
    /// An absent optional counter keeps its value.
    fn count<T>(&mut self, desc: Descriptor, target: &mut T) -> Result<&mut Self>
    where
        T: TryFrom<usize>,
        T::Error: Display,
    {
        let (session, scope) = self.session();
        let outcome = session.count(scope, desc, target);
        session.settle(outcome)?;
        Ok(self)
    }

    /// Binds the value following the option. When the option repeats, the
    /// last value wins and earlier values are discarded.
    ///
    /// A [`Defaulted`](clarg_core::Kind::Defaulted) descriptor without an
    /// explicit default shows the target's current value in help output.
    fn arg<T>(&mut self, desc: Descriptor, target: &mut T) -> Result<&mut Self>
    where
        T: FromStr + Display,
        T::Err: Display,
    {
        let (session, scope) = self.session();
        let outcome = session.arg(scope, desc, target);
        session.settle(outcome)?;
        Ok(self)
    }

    /// Appends the value following every occurrence, in input order.
    fn list<T>(&mut self, desc: Descriptor, target: &mut Vec<T>) -> Result<&mut Self>
    where
        T: FromStr,
        T::Err: Display,
    {
        let (session, scope) = self.session();
        let outcome = session.list(scope, desc, target);
        session.settle(outcome)?;
        Ok(self)
    }
}
