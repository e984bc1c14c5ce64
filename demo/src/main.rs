use std::fmt;
use std::str::FromStr;

use clarg::prelude::*;
use serde::Serialize;

const HEADER: &str = "Lorem Ipsum is simply dummy text of the printing and typesetting industry. \
    Lorem Ipsum has been the industry's standard dummy text ever since the 1500s, when an unknown \
    printer took a galley of type and scrambled it to make a type specimen book. It has survived \
    not only five centuries, but also the leap into electronic typesetting, remaining essentially \
    unchanged.";

/// How the parsed options are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => Err(format!("unknown format '{other}' (expected text, json or yaml)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Yaml => "yaml",
        })
    }
}

/// A colon-separated vendor tuple, e.g. `abcd:123:xyz`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct Vendor(Vec<String>);

impl FromStr for Vendor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.split(':').map(String::from).collect()))
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(":"))
    }
}

#[derive(Debug, Serialize)]
struct Options {
    #[serde(skip)]
    need_help: bool,
    #[serde(skip)]
    describe: bool,
    #[serde(skip)]
    format: OutputFormat,

    verbosity: u8,
    output: String,

    max_phys: u8,
    word_size: f64,
    word_aligned: bool,

    warn: bool,
    warnings: Vec<String>,
    bus: u8,

    vendor: Vendor,
    subcommand: String,
    positionals: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            need_help: false,
            describe: false,
            format: OutputFormat::Text,
            verbosity: 0,
            output: "a.out".to_string(),
            max_phys: 0,
            word_size: 64.0,
            word_aligned: false,
            warn: false,
            warnings: Vec::new(),
            bus: 1,
            vendor: Vendor::default(),
            subcommand: "compile".to_string(),
            positionals: Vec::new(),
        }
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yn = |b: bool| if b { 'y' } else { 'n' };

        writeln!(f, "output: {}", self.output)?;
        writeln!(f, "command: {}", self.subcommand)?;
        writeln!(f, "verbosity: {}", self.verbosity)?;
        writeln!(f, "max address: {} MiB", self.max_phys)?;
        writeln!(f, "word size: {} bits", self.word_size)?;
        writeln!(f, "word aligned: {}", yn(self.word_aligned))?;
        writeln!(f, "warnings enabled: {}", yn(self.warn))?;
        if self.warn {
            writeln!(f, "warnings:")?;
            for w in &self.warnings {
                writeln!(f, "\t{w}")?;
            }
        }
        writeln!(f, "bus ID: {}", self.bus)?;
        writeln!(f, "vendor: {}", self.vendor)?;

        if !self.positionals.is_empty() {
            writeln!(f, "Positionals:")?;
        }
        for p in &self.positionals {
            writeln!(f, "\t{p}")?;
        }
        Ok(())
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut opts = Options::default();
    let mut parser = Parser::with_config("", "just a simple testing app", ParserConfig::accumulate());
    parser.from_env().map_err(|e| e.to_string())?;
    declare(&mut parser, &mut opts).map_err(|e| e.to_string())?;

    if opts.need_help {
        return parser.print_help().map_err(|e| e.to_string());
    }

    if opts.describe {
        let json = serde_json::to_string_pretty(parser.registry()).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    if parser.has_errors() {
        let messages: Vec<String> = parser.errors().iter().map(ToString::to_string).collect();
        return Err(messages.join("\nerror: "));
    }

    match opts.format {
        OutputFormat::Text => print!("Parsed:\n{opts}"),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&opts).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&opts).map_err(|e| e.to_string())?;
            print!("{yaml}");
        }
    }
    Ok(())
}

fn declare(parser: &mut Parser, opts: &mut Options) -> clarg::Result<()> {
    parser
        .header(HEADER)
        .footer("created by: the clarg authors\n")
        .flag(
            Descriptor::short_long('h', "help", "print this dialog"),
            &mut opts.need_help,
        )?
        .flag(
            Descriptor::short_long('D', "describe", "print the declared arguments as JSON"),
            &mut opts.describe,
        )?
        .arg(
            Descriptor::short_long('F', "format", "how to print the parsed options")
                .defaulted()
                .with_placeholder("FORMAT"),
            &mut opts.format,
        )?
        .count(
            Descriptor::short_long('v', "verbose", "increase the verbosity of the program"),
            &mut opts.verbosity,
        )?
        .arg(
            Descriptor::short_long('o', "output", "output path for the resulting object/binary")
                .defaulted()
                .with_placeholder("FILE"),
            &mut opts.output,
        )?
        .flag(
            Descriptor::short_long('w', "warn-all", "toggle all warnings"),
            &mut opts.warn,
        )?
        .list(
            Descriptor::short_long('W', "warn", "toggle a specific warning"),
            &mut opts.warnings,
        )?
        .group("architecture")
        .arg(
            Descriptor::short_long('m', "max-phys", "max hardware memory address")
                .with_placeholder("MiB"),
            &mut opts.max_phys,
        )?
        .arg(
            Descriptor::long("word-size", "number of bits in the maximum word size"),
            &mut opts.word_size,
        )?
        .flag(
            Descriptor::long(
                "word-aligned",
                "all memory operations and instructions must be word aligned",
            ),
            &mut opts.word_aligned,
        )?
        .done()
        .group("outputs")
        .arg(
            Descriptor::short_long('s', "sound-bus", "ID of the sound bus"),
            &mut opts.bus,
        )?
        .done()
        .arg(
            Descriptor::long("vendor-id", "a colon-separated tuple of vendor information"),
            &mut opts.vendor,
        )?
        .pos(
            "subcommand",
            "first positional is a subcommand",
            &mut opts.subcommand,
        )?
        .gather(&mut opts.positionals)?;
    Ok(())
}
