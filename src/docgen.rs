//! Reference page generator for the moddoc command tree.
//!
//! Walks the clap command tree depth-first and writes one markdown page per
//! documentable subcommand. Each page embeds the live output of the matching
//! formatter, rendered against a fixture module, so the documentation always
//! shows what the tool actually prints.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Arg, Command};
use log::debug;

use crate::module::Module;
use crate::render::Format;
use crate::settings::Settings;

/// One row of the format table: command path (root stripped) mapped to the
/// formatter it documents, plus any flags the illustrative shell command
/// must carry for that format.
struct FormatDescriptor {
    identifier: &'static str,
    format: Format,
    extra_flags: &'static str,
}

const FORMATS: &[FormatDescriptor] = &[
    FormatDescriptor {
        identifier: "json",
        format: Format::Json,
        extra_flags: "",
    },
    FormatDescriptor {
        identifier: "markdown document",
        format: Format::MarkdownDocument,
        extra_flags: "",
    },
    FormatDescriptor {
        identifier: "markdown table",
        format: Format::MarkdownTable,
        extra_flags: "",
    },
    FormatDescriptor {
        identifier: "pretty",
        format: Format::Pretty,
        // embedded output is static text, so the page shows the no-color call
        extra_flags: " --no-color",
    },
    FormatDescriptor {
        identifier: "xml",
        format: Format::Xml,
        extra_flags: "",
    },
    FormatDescriptor {
        identifier: "yaml",
        format: Format::Yaml,
        extra_flags: "",
    },
];

/// Whether a node gets a reference page. Hidden commands and the
/// auto-generated help command are excluded together with their subtrees.
pub fn is_documentable(cmd: &Command) -> bool {
    !cmd.is_hide_set() && cmd.get_name() != "help"
}

/// Generates reference pages for one command tree against one fixture module.
pub struct Generator<'a> {
    root: String,
    module: &'a Module,
    settings: Settings,
    autogen_tag: bool,
}

impl<'a> Generator<'a> {
    /// `root` is the tool name stripped from command paths when resolving
    /// formatters and naming output files.
    pub fn new(root: impl Into<String>, module: &'a Module, settings: Settings) -> Self {
        Generator {
            root: root.into(),
            module,
            settings,
            autogen_tag: true,
        }
    }

    /// Disable the auto-generation footer on every page.
    pub fn autogen_tag(mut self, on: bool) -> Self {
        self.autogen_tag = on;
        self
    }

    /// Recursively generate pages for `cmd` and its documentable descendants.
    ///
    /// `path` is the fully qualified command path ("moddoc markdown table"),
    /// `inherited` the global flags collected from ancestor commands. The
    /// first error aborts the walk; pages already written stay on disk.
    pub fn generate<'c>(
        &self,
        cmd: &'c Command,
        path: &str,
        inherited: &[&'c Arg],
        dir: &Path,
    ) -> Result<()> {
        let mut child_inherited: Vec<&'c Arg> = inherited.to_vec();
        child_inherited.extend(cmd.get_arguments().filter(|a| a.is_global_set()));

        for child in cmd.get_subcommands() {
            if !is_documentable(child) {
                continue;
            }
            let child_path = format!("{path} {}", child.get_name());
            self.generate(child, &child_path, &child_inherited, dir)?;
        }

        let filename = dir.join(format!("{}.md", self.output_basename(path)));
        let page = self.render_command(cmd, path, inherited)?;
        fs::write(&filename, page)
            .with_context(|| format!("failed to write {}", filename.display()))?;
        debug!("generated {}", filename.display());
        Ok(())
    }

    /// Render the full markdown page for one command, entirely in memory.
    pub fn render_command(&self, cmd: &Command, path: &str, inherited: &[&Arg]) -> Result<String> {
        let short = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();
        let long = cmd
            .get_long_about()
            .map(|s| s.to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| short.clone());

        let mut buf = String::new();
        buf.push_str(&format!("## {path}\n\n"));
        buf.push_str(&format!("{short}\n\n"));
        buf.push_str("### Synopsis\n\n");
        buf.push_str(&format!("{long}\n\n"));

        if is_runnable(cmd) {
            buf.push_str(&format!("```\n{}\n```\n\n", usage_line(cmd, path)));
        }

        if let Some(example) = cmd.get_after_help() {
            buf.push_str("### Examples\n\n");
            buf.push_str(&format!("```\n{example}\n```\n\n"));
        }

        let own: Vec<&Arg> = cmd.get_arguments().filter(|a| is_printable(a)).collect();
        if !own.is_empty() {
            buf.push_str("### Options\n\n```\n");
            buf.push_str(&flag_lines(&own));
            buf.push_str("```\n\n");
        }

        let inherited: Vec<&Arg> = inherited.iter().copied().filter(|a| is_printable(a)).collect();
        if !inherited.is_empty() {
            buf.push_str("### Options inherited from parent commands\n\n```\n");
            buf.push_str(&flag_lines(&inherited));
            buf.push_str("```\n\n");
        }

        buf.push_str(&self.render_example(path)?);

        if self.autogen_tag {
            let date = Local::now().format("%-d-%b-%Y");
            buf.push_str(&format!("###### Auto generated by moddoc on {date}\n"));
        }
        Ok(buf)
    }

    /// Render the embedded example block: the illustrative shell command and,
    /// when the path names a known format, that formatter's output indented
    /// four spaces. Unknown paths get the shell block only — not an error.
    pub fn render_example(&self, path: &str) -> Result<String> {
        let identifier = self.normalize(path);

        let mut buf = String::new();
        buf.push_str("### Example\n\n");
        buf.push_str("Given the [`examples`](/examples/) module:\n\n");
        buf.push_str("```shell\n");
        buf.push_str(&format!("{path}{} ./examples/\n", self.extra_flags(identifier)));
        buf.push_str("```\n\n");
        buf.push_str("generates the following output:\n\n");

        if let Some(format) = self.resolve(identifier) {
            let output = format.render(self.module, &self.settings)?;
            for line in output.split('\n') {
                if line.is_empty() {
                    buf.push('\n');
                } else {
                    buf.push_str(&format!("    {line}\n"));
                }
            }
        }

        buf.push_str("\n\n");
        Ok(buf)
    }

    fn resolve(&self, identifier: &str) -> Option<Format> {
        FORMATS
            .iter()
            .find(|d| d.identifier == identifier)
            .map(|d| d.format)
    }

    fn extra_flags(&self, identifier: &str) -> &'static str {
        FORMATS
            .iter()
            .find(|d| d.identifier == identifier)
            .map(|d| d.extra_flags)
            .unwrap_or("")
    }

    /// Strip the root tool name (and its trailing separator) from a path.
    fn normalize<'p>(&self, path: &'p str) -> &'p str {
        match path.strip_prefix(self.root.as_str()) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => path,
        }
    }

    fn output_basename(&self, path: &str) -> String {
        self.normalize(path).replace(' ', "-")
    }
}

/// A pure grouping command (subcommand required) has no runnable action of
/// its own and gets no usage block.
fn is_runnable(cmd: &Command) -> bool {
    !(cmd.has_subcommands() && cmd.is_subcommand_required_set())
}

fn usage_line(cmd: &Command, path: &str) -> String {
    let mut cmd = cmd.clone().bin_name(path.to_string());
    let usage = cmd.render_usage().to_string();
    usage
        .strip_prefix("Usage: ")
        .unwrap_or(usage.as_str())
        .to_string()
}

/// Only named, visible flags are listed; positionals show up in the usage
/// line instead.
fn is_printable(arg: &Arg) -> bool {
    !arg.is_positional()
        && !arg.is_hide_set()
        && arg.get_id() != "help"
        && arg.get_id() != "version"
}

/// Format a flag set the way the CLI's own help does: aligned
/// `-s, --long <VALUE>` specs followed by the help text and default.
fn flag_lines(args: &[&Arg]) -> String {
    let specs: Vec<(String, String)> = args
        .iter()
        .map(|a| (flag_spec(a), flag_help(a)))
        .collect();
    let width = specs.iter().map(|(s, _)| s.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (spec, help) in &specs {
        out.push_str(&format!("{spec:<width$}   {help}\n"));
    }
    out
}

fn flag_spec(arg: &Arg) -> String {
    let mut spec = match (arg.get_short(), arg.get_long()) {
        (Some(s), Some(l)) => format!("  -{s}, --{l}"),
        (Some(s), None) => format!("  -{s}"),
        (None, Some(l)) => format!("      --{l}"),
        (None, None) => format!("  {}", arg.get_id()),
    };
    if takes_value(arg) {
        let name = arg
            .get_value_names()
            .and_then(|names| names.first().map(|n| n.to_string()))
            .unwrap_or_else(|| arg.get_id().to_string().to_uppercase());
        spec.push_str(&format!(" <{name}>"));
    }
    spec
}

fn flag_help(arg: &Arg) -> String {
    let mut help = arg
        .get_help()
        .map(|h| h.to_string())
        .unwrap_or_default()
        .replace('\n', " ");
    if takes_value(arg) {
        let defaults = arg.get_default_values();
        if !defaults.is_empty() {
            let values: Vec<_> = defaults.iter().map(|v| v.to_string_lossy()).collect();
            help.push_str(&format!(" (default {})", values.join(", ")));
        }
    }
    help
}

fn takes_value(arg: &Arg) -> bool {
    arg.get_action().takes_values()
}
