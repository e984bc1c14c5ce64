//! Named option groups.

use clarg_core::Scope;

use crate::binder::Session;
use crate::{Declare, Parser};

/// A named section of options declared through its parser.
///
/// A group is a handle on the parser, not a copy of it: options declared
/// here are resolved against the same input and share the parser's key
/// namespace. Groups only change where options appear in help output.
///
/// ```
/// use clarg::prelude::*;
///
/// # fn main() -> clarg::Result<()> {
/// let mut max_phys = 0u8;
/// let mut bus = 1u8;
///
/// let mut parser = Parser::new("demo", "");
/// parser
///     .from(["-m", "100", "--sound-bus", "9"])?
///     .group("architecture")
///     .arg(Descriptor::short_long('m', "max-phys", "max address"), &mut max_phys)?
///     .done()
///     .group("outputs")
///     .arg(Descriptor::short_long('s', "sound-bus", "sound bus ID"), &mut bus)?
///     .done();
///
/// assert_eq!((max_phys, bus), (100, 9));
/// assert_eq!(parser.registry().groups().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Group<'p> {
    parser: &'p mut Parser,
    index: usize,
}

impl<'p> Group<'p> {
    pub(crate) fn new(parser: &'p mut Parser, index: usize) -> Self {
        Self { parser, index }
    }

    /// Returns to the owning parser.
    pub fn done(&mut self) -> &mut Parser {
        self.parser
    }

    /// The group heading.
    pub fn name(&self) -> &str {
        self.parser
            .registry()
            .groups()
            .get(self.index)
            .map_or("", |g| g.name.as_str())
    }
}

impl Declare for Group<'_> {
    fn session(&mut self) -> (&mut Session, Scope) {
        (&mut self.parser.session, Scope::Group(self.index))
    }
}
