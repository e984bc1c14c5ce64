//! Help document rendering.
//!
//! The renderer lays out every declared argument in aligned columns. The
//! description column is shared by the whole document: it is computed once
//! per render from the widest argument prefix across the top-level options,
//! every group, and the positionals.

use clarg_core::{Descriptor, Registry, Requirement};
use tracing::debug;

use crate::wrap::push_spaces;
use crate::{HelpOptions, TextWrapper};

/// Columns between the widest argument prefix and the descriptions.
pub const DESCRIPTION_GAP: usize = 5;

/// Program-level text printed around the argument listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramInfo {
    /// Program name, printed in the title and usage lines.
    pub name: String,
    /// One-line description printed next to the name.
    pub description: String,
    /// Long-form text printed after the usage line.
    pub header: Option<String>,
    /// Text printed after the argument listing.
    pub footer: Option<String>,
}

impl ProgramInfo {
    /// Creates program info with a name and description.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }
}

/// Renders a [`Registry`] into a help document.
///
/// # Examples
///
/// ```
/// use clarg_core::*;
/// use clarg_help::{HelpOptions, HelpRenderer, ProgramInfo};
///
/// let mut registry = Registry::new();
/// registry
///     .declare(Scope::Main, Descriptor::short_long('h', "help", "print this dialog"))
///     .unwrap();
///
/// let options = HelpOptions::default();
/// let help = HelpRenderer::new(&options).render(&ProgramInfo::new("demo", "a demo"), &registry);
///
/// assert!(help.starts_with("demo - a demo\n\nusage: demo [-h]\n"));
/// assert!(help.contains("    -h, --help     print this dialog\n"));
/// ```
#[derive(Debug, Clone)]
pub struct HelpRenderer<'a> {
    options: &'a HelpOptions,
    wrapper: TextWrapper,
}

impl<'a> HelpRenderer<'a> {
    /// Creates a renderer for the given layout.
    pub fn new(options: &'a HelpOptions) -> Self {
        Self {
            options,
            wrapper: options.wrapper(),
        }
    }

    /// Renders the full document.
    pub fn render(&self, info: &ProgramInfo, registry: &Registry) -> String {
        let longest = self.longest_prefix(registry);
        debug!(
            program = %info.name,
            longest_prefix = longest,
            "Rendering help"
        );

        let mut sections = vec![self.title(info), self.usage(info, registry)];

        if let Some(header) = non_blank(info.header.as_deref()) {
            sections.push(self.paragraph(header));
        }

        if !registry.options().is_empty() {
            sections.push(self.args_block(
                registry.options(),
                usize::from(self.options.indent),
                longest,
            ));
        }

        for group in registry.groups() {
            if group.args.is_empty() {
                continue;
            }
            sections.push(self.section(&group.name, &group.args, longest));
        }

        if !registry.positionals().is_empty() {
            sections.push(self.section("positionals", registry.positionals(), longest));
        }

        if let Some(footer) = non_blank(info.footer.as_deref()) {
            sections.push(self.paragraph(footer));
        }

        let separator = "\n".repeat(usize::from(self.options.lines_between));
        sections.join(&separator)
    }

    /// Widest argument prefix in the registry; top-level options are
    /// measured at `indent`, groups and positionals at the group depth.
    pub fn longest_prefix(&self, registry: &Registry) -> usize {
        let indent = usize::from(self.options.indent);
        let depth = self.options.group_depth();

        registry
            .groups()
            .iter()
            .map(|g| calc_max_prefix(&g.args, depth))
            .chain([
                calc_max_prefix(registry.options(), indent),
                calc_max_prefix(registry.positionals(), depth),
            ])
            .max()
            .unwrap_or(0)
    }

    /// Builds the usage line.
    ///
    /// Optional short keys are clustered as `[-xyz]`, optional long-only
    /// keys become `[--name]`, required options follow as `[-x]` or
    /// `[--name]`, then positional labels in declaration order.
    pub fn usage(&self, info: &ProgramInfo, registry: &Registry) -> String {
        let mut out = format!("{} {}", self.options.use_prefix, info.name);
        let column = out.chars().count();

        let clusters = usage_clusters(registry);
        if !clusters.is_empty() {
            self.wrapper
                .fill(&mut out, column, column + 1, &format!(" {}", clusters.join(" ")));
        }
        out.push('\n');
        out
    }

    fn title(&self, info: &ProgramInfo) -> String {
        if info.description.is_empty() {
            return format!("{}\n", info.name);
        }
        let mut out = format!("{} - ", info.name);
        let column = out.chars().count();
        self.wrapper.wrap_into(&mut out, column, &info.description);
        out.push('\n');
        out
    }

    fn paragraph(&self, text: &str) -> String {
        let mut out = self.wrapper.wrap(0, text);
        out.push('\n');
        out
    }

    fn section(&self, name: &str, args: &[Descriptor], longest: usize) -> String {
        let mut out = String::new();
        push_spaces(&mut out, usize::from(self.options.indent));
        out.push_str(name);
        out.push_str(":\n");
        for _ in 0..self.options.lines_after_group {
            out.push('\n');
        }
        out.push_str(&self.args_block(args, self.options.group_depth(), longest));
        out
    }

    fn args_block(&self, args: &[Descriptor], indent: usize, longest: usize) -> String {
        let mut out = String::new();
        for arg in args {
            self.write_arg(&mut out, arg, indent, longest);
        }
        out
    }

    fn write_arg(&self, out: &mut String, arg: &Descriptor, indent: usize, longest: usize) {
        push_spaces(out, indent);

        if !arg.is_positional() {
            match (arg.short, arg.long.is_some()) {
                (Some(short), true) => out.push_str(&format!("-{short}, ")),
                (Some(short), false) => out.push_str(&format!("-{short}  ")),
                (None, _) => push_spaces(out, 4),
            }
        }

        if let Some(long) = arg.long.as_deref() {
            if !arg.is_positional() {
                out.push_str("--");
            }
            out.push_str(long);
        }

        if !arg.placeholder.is_empty() {
            out.push(' ');
            out.push_str(&arg.placeholder);
        }

        let column = longest + DESCRIPTION_GAP;
        let mut wrapped = false;
        if !arg.description.is_empty() {
            push_spaces(out, column.saturating_sub(prefix_width(arg, indent)));
            let description = self.wrapper.wrap(column, &arg.description);
            wrapped = description.contains('\n');
            out.push_str(&description);
        }

        if !arg.default.is_empty() {
            out.push('\n');
            push_spaces(out, column);
            self.wrapper
                .wrap_into(out, column, &format!("[default: {}]", arg.default));
        }

        if self.options.line_after_wrap && wrapped {
            out.push('\n');
        }
        out.push('\n');
    }
}

/// Rendered width of an argument's prefix: indent, the four-column short
/// key slot, `--long`, and ` PLACEHOLDER`. Positionals have no short slot
/// and no dashes.
pub fn prefix_width(arg: &Descriptor, indent: usize) -> usize {
    let mut width = indent;
    if !arg.is_positional() {
        width += 4;
    }
    if let Some(long) = arg.long.as_deref() {
        if !arg.is_positional() {
            width += 2;
        }
        width += long.chars().count();
    }
    if !arg.placeholder.is_empty() {
        width += 1 + arg.placeholder.chars().count();
    }
    width
}

/// Widest prefix among `args` at the given indent; `0` when empty.
pub fn calc_max_prefix(args: &[Descriptor], indent: usize) -> usize {
    args.iter()
        .map(|a| prefix_width(a, indent))
        .max()
        .unwrap_or(0)
}

fn usage_clusters(registry: &Registry) -> Vec<String> {
    let mut shorts = String::new();
    let mut longs = Vec::new();
    let mut required = Vec::new();

    for arg in registry.all_options() {
        let name = match (arg.short, arg.long.as_deref()) {
            (Some(short), _) => Some(format!("-{short}")),
            (None, Some(long)) => Some(format!("--{long}")),
            (None, None) => None,
        };
        let Some(name) = name else {
            continue;
        };

        match (arg.requirement, arg.short) {
            (Requirement::Optional, Some(short)) => shorts.push(short),
            (Requirement::Optional, None) => longs.push(format!("[{name}]")),
            (Requirement::Required, _) => required.push(format!("[{name}]")),
        }
    }

    let mut clusters = Vec::new();
    if !shorts.is_empty() {
        clusters.push(format!("[-{shorts}]"));
    }
    clusters.extend(longs);
    clusters.extend(required);
    clusters.extend(
        registry
            .positionals()
            .iter()
            .filter_map(|p| p.long.clone()),
    );
    clusters
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use clarg_core::Scope;

    use super::*;

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .declare(
                Scope::Main,
                Descriptor::short_long('h', "help", "print this dialog"),
            )
            .unwrap();
        registry
            .declare(
                Scope::Main,
                Descriptor::short_long('o', "output", "output path")
                    .with_placeholder("FILE")
                    .with_default("a.out")
                    .defaulted(),
            )
            .unwrap();
        let outputs = registry.add_group("outputs");
        registry
            .declare(
                Scope::Group(outputs),
                Descriptor::short_long('s', "sound-bus", "ID of the sound bus"),
            )
            .unwrap();
        registry
            .declare(
                Scope::Main,
                Descriptor::long("vendor-id", "vendor information"),
            )
            .unwrap();
        registry
            .declare_positional(Descriptor::positional(
                "subcommand",
                "first positional is a subcommand",
            ))
            .unwrap();
        registry
    }

    #[test]
    fn test_full_document_layout() {
        let options = HelpOptions::default();
        let help = HelpRenderer::new(&options)
            .render(&ProgramInfo::new("testing", "just a simple testing app"), &sample_registry());

        let pad = |n: usize| " ".repeat(n);
        let expected = [
            "testing - just a simple testing app\n".to_string(),
            "\n".to_string(),
            "usage: testing [-hos] [--vendor-id] subcommand\n".to_string(),
            "\n".to_string(),
            format!("    -h, --help{}print this dialog\n", pad(14)),
            format!(
                "    -o, --output FILE{}output path\n{}[default: a.out]\n",
                pad(7),
                pad(28)
            ),
            format!("        --vendor-id{}vendor information\n", pad(9)),
            "\n".to_string(),
            "    outputs:\n".to_string(),
            format!("        -s, --sound-bus{}ID of the sound bus\n", pad(5)),
            "\n".to_string(),
            "    positionals:\n".to_string(),
            format!(
                "        subcommand{}first positional is a subcommand\n",
                pad(10)
            ),
        ]
        .concat();

        assert_eq!(help, expected);
    }

    #[test]
    fn test_alignment_is_global() {
        let options = HelpOptions::default();
        let renderer = HelpRenderer::new(&options);
        let registry = sample_registry();

        // the grouped --sound-bus at depth 8 is the widest prefix
        assert_eq!(renderer.longest_prefix(&registry), 23);
        assert_eq!(calc_max_prefix(registry.options(), 4), 21);
        assert_eq!(calc_max_prefix(registry.positionals(), 8), 18);
        assert_eq!(calc_max_prefix(&[], 8), 0);
    }

    #[test]
    fn test_usage_required_and_long_only() {
        let mut registry = Registry::new();
        registry
            .declare(Scope::Main, Descriptor::short_long('v', "verbose", ""))
            .unwrap();
        registry
            .declare(Scope::Main, Descriptor::long("name", "").required())
            .unwrap();
        registry
            .declare(Scope::Main, Descriptor::short('q', "").required())
            .unwrap();
        registry
            .declare(Scope::Main, Descriptor::long("dry-run", ""))
            .unwrap();

        let options = HelpOptions::default();
        let usage = HelpRenderer::new(&options).usage(&ProgramInfo::new("tool", ""), &registry);
        assert_eq!(usage, "usage: tool [-v] [--dry-run] [--name] [-q]\n");
    }

    #[test]
    fn test_usage_wraps_under_program_name() {
        let mut registry = Registry::new();
        for long in ["alpha-option", "bravo-option", "charlie-option"] {
            registry
                .declare(Scope::Main, Descriptor::long(long, ""))
                .unwrap();
        }

        let options = HelpOptions {
            width: 40,
            ..HelpOptions::default()
        };
        let usage = HelpRenderer::new(&options).usage(&ProgramInfo::new("prog", ""), &registry);
        assert_eq!(
            usage,
            "usage: prog [--alpha-option]\n            [--bravo-option]\n            [--charlie-option]\n"
        );
    }

    #[test]
    fn test_wrapped_description_adds_blank_line() {
        let mut registry = Registry::new();
        registry
            .declare(
                Scope::Main,
                Descriptor::short_long('w', "warn", "toggle a specific warning by name"),
            )
            .unwrap();

        let options = HelpOptions {
            width: 40,
            ..HelpOptions::default()
        };
        let renderer = HelpRenderer::new(&options);
        let help = renderer.render(&ProgramInfo::new("p", ""), &registry);
        // prefix 14, column 19, 21 columns left for the description
        let block = format!(
            "    -w, --warn{}toggle a specific\n{}warning by name\n\n",
            " ".repeat(5),
            " ".repeat(19)
        );
        assert!(help.ends_with(&block), "{help}");

        let options = HelpOptions {
            width: 40,
            line_after_wrap: false,
            ..HelpOptions::default()
        };
        let help = HelpRenderer::new(&options).render(&ProgramInfo::new("p", ""), &registry);
        assert!(help.ends_with("warning by name\n"), "{help}");
        assert!(!help.ends_with("\n\n"));
    }

    #[test]
    fn test_header_footer_and_spacing() {
        let mut info = ProgramInfo::new("p", "desc");
        info.header = Some("long header text".to_string());
        info.footer = Some("created by: someone\n".to_string());

        let options = HelpOptions {
            lines_between: 2,
            ..HelpOptions::default()
        };
        let help = HelpRenderer::new(&options).render(&info, &Registry::new());
        assert_eq!(
            help,
            "p - desc\n\n\nusage: p\n\n\nlong header text\n\n\ncreated by: someone\n"
        );
    }

    #[test]
    fn test_title_without_description() {
        let options = HelpOptions::default();
        let help = HelpRenderer::new(&options).render(&ProgramInfo::new("p", ""), &Registry::new());
        assert_eq!(help, "p\n\nusage: p\n");
    }

    #[test]
    fn test_narrow_width_keeps_description_on_one_line() {
        let mut registry = Registry::new();
        registry
            .declare(
                Scope::Main,
                Descriptor::long("extremely-long-option", "print this dialog"),
            )
            .unwrap();

        let options = HelpOptions {
            width: 20,
            ..HelpOptions::default()
        };
        let help = HelpRenderer::new(&options).render(&ProgramInfo::new("p", ""), &registry);
        // prefix 8 + 23 = 31, column 36 is past the width
        assert!(
            help.ends_with(&format!("        --extremely-long-option{}print this dialog\n", " ".repeat(5))),
            "{help}"
        );
    }

    #[test]
    fn test_short_only_and_lines_after_group() {
        let mut registry = Registry::new();
        let g = registry.add_group("misc");
        registry
            .declare(Scope::Group(g), Descriptor::short('x', "the x"))
            .unwrap();

        let options = HelpOptions {
            lines_after_group: 1,
            ..HelpOptions::default()
        };
        let help = HelpRenderer::new(&options).render(&ProgramInfo::new("p", ""), &registry);
        // prefix = 8 + 4 = 12, column 17
        assert!(
            help.ends_with(&format!("    misc:\n\n        -x  {}the x\n", " ".repeat(5))),
            "{help}"
        );
    }
}
