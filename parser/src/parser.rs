//! The parser façade.

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use clarg_core::{Descriptor, Error, Registry, Result, Scope};
use clarg_help::{HelpOptions, HelpRenderer, ProgramInfo};
use tracing::debug;

use crate::binder::Session;
use crate::{Declare, ErrorMode, Group, Partition, ParserConfig};

/// Declarative argument parser.
///
/// Call [`from`](Parser::from) (or [`from_env`](Parser::from_env)) once with
/// the input, then declare each argument with a target to bind into. The
/// same declarations drive the help document.
///
/// ```
/// use clarg::prelude::*;
///
/// # fn main() -> clarg::Result<()> {
/// let mut verbosity = 0u8;
/// let mut output = String::from("a.out");
/// let mut positionals: Vec<String> = Vec::new();
///
/// let mut parser = Parser::new("testing", "just a simple testing app");
/// parser
///     .from(["-vvv", "--output", "foo.bin", "--", "-x", "pos1"])?
///     .count(Descriptor::short('v', "verbosity"), &mut verbosity)?
///     .arg(Descriptor::long("output", "output path"), &mut output)?
///     .gather(&mut positionals)?;
///
/// assert_eq!(verbosity, 3);
/// assert_eq!(output, "foo.bin");
/// assert_eq!(positionals, ["-x", "pos1"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Parser {
    pub(crate) session: Session,
    info: ProgramInfo,
    help: HelpOptions,
}

impl Parser {
    /// Creates a fail-fast parser with the default layout.
    pub fn new(program: &str, description: &str) -> Self {
        Self::with_config(program, description, ParserConfig::default())
    }

    /// Creates a parser from explicit configuration.
    pub fn with_config(program: &str, description: &str, config: ParserConfig) -> Self {
        Self {
            session: Session::new(&config),
            info: ProgramInfo::new(program, description),
            help: config.help,
        }
    }

    /// Partitions the input tokens (program name excluded).
    ///
    /// Must be called once, before any declaration that binds a value.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingValue`] if the last token is a long option; the
    ///   tokens before it are still classified.
    /// - [`Error::InvalidState`] if the input was already partitioned.
    pub fn from<I>(&mut self, tokens: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let outcome = if self.session.partition.is_some() {
            Err(Error::InvalidState("arguments were already partitioned"))
        } else {
            let tokens = tokens.into_iter().map(Into::into).collect();
            let (partition, err) = Partition::classify(tokens, &self.session.terminator);
            self.session.partition = Some(partition);
            err.map_or(Ok(()), Err)
        };
        self.session.settle(outcome)?;
        Ok(self)
    }

    /// Partitions the process arguments.
    ///
    /// When no program name was given, the file name of the first process
    /// argument is used.
    pub fn from_env(&mut self) -> Result<&mut Self> {
        let mut args = std::env::args_os().map(|a| a.to_string_lossy().into_owned());
        let invoked = args.next();
        if self.info.name.is_empty() {
            if let Some(invoked) = invoked {
                self.info.name = Path::new(&invoked)
                    .file_name()
                    .map_or(invoked.clone(), |n| n.to_string_lossy().into_owned());
            }
        }
        debug!(program = %self.info.name, "Reading process arguments");
        self.from(args)
    }

    /// Sets the long-form text printed after the usage line.
    pub fn header(&mut self, text: &str) -> &mut Self {
        self.info.header = Some(text.to_string());
        self
    }

    /// Sets the text printed after the argument listing.
    pub fn footer(&mut self, text: &str) -> &mut Self {
        self.info.footer = Some(text.to_string());
        self
    }

    /// Sets the program name shown in help output.
    pub fn program(&mut self, name: &str) -> &mut Self {
        self.info.name = name.to_string();
        self
    }

    /// Sets the flag terminator. Only affects a later [`from`](Parser::from).
    pub fn flag_terminator(&mut self, terminator: &str) -> &mut Self {
        self.session.terminator = terminator.to_string();
        self
    }

    /// The help layout.
    pub fn help_options(&self) -> &HelpOptions {
        &self.help
    }

    /// The help layout, for modification.
    pub fn help_options_mut(&mut self) -> &mut HelpOptions {
        &mut self.help
    }

    /// Program name, description, header and footer.
    pub fn info(&self) -> &ProgramInfo {
        &self.info
    }

    /// Opens a named group of options; see [`Group`].
    pub fn group(&mut self, name: &str) -> Group<'_> {
        let index = self.session.registry.add_group(name);
        Group::new(self, index)
    }

    /// Binds the earliest unclaimed positional token.
    ///
    /// # Errors
    ///
    /// [`Error::MissingPositional`] when no positional token is left.
    pub fn pos<T>(&mut self, label: &str, description: &str, target: &mut T) -> Result<&mut Self>
    where
        T: FromStr,
        T::Err: Display,
    {
        let outcome = self
            .session
            .pos(Descriptor::positional(label, description), target);
        self.session.settle(outcome)?;
        Ok(self)
    }

    /// Binds every unclaimed positional token, in input order.
    pub fn gather<T>(&mut self, target: &mut Vec<T>) -> Result<&mut Self>
    where
        T: FromStr,
        T::Err: Display,
    {
        let outcome = self.session.gather(target);
        self.session.settle(outcome)?;
        Ok(self)
    }

    /// Number of positional tokens nothing has claimed yet.
    pub fn unclaimed(&self) -> usize {
        self.session.unclaimed()
    }

    /// Errors collected in [`ErrorMode::Accumulate`], in order.
    pub fn errors(&self) -> &[Error] {
        &self.session.errors
    }

    /// Returns `true` if any error was collected.
    pub fn has_errors(&self) -> bool {
        !self.session.errors.is_empty()
    }

    /// The failure-reporting discipline.
    pub fn error_mode(&self) -> ErrorMode {
        self.session.mode
    }

    /// Everything declared so far.
    pub fn registry(&self) -> &Registry {
        &self.session.registry
    }

    /// Renders the help document.
    pub fn render_help(&self) -> String {
        HelpRenderer::new(&self.help).render(&self.info, &self.session.registry)
    }

    /// Writes the help document to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render_help().as_bytes())
    }

    /// Writes the help document to stdout.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to stdout.
    pub fn print_help(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_help(&mut out)?;
        out.flush()
    }
}

impl Declare for Parser {
    fn session(&mut self) -> (&mut Session, Scope) {
        (&mut self.session, Scope::Main)
    }
}

impl fmt::Display for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_help())
    }
}
