//! Command-line definition for the moddoc binary.
//!
//! The same tree is walked by `moddoc-docgen` via [`clap::CommandFactory`],
//! so the doc comments here double as the short descriptions in the
//! generated reference pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "moddoc",
    version,
    about = "Render documentation for reusable infrastructure modules in various output formats"
)]
pub struct Cli {
    /// List required inputs before optional ones
    #[arg(long, global = true)]
    pub sort_by_required: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate JSON output of the module manifest
    Json(TargetArgs),
    /// Generate markdown output of the module manifest
    #[command(subcommand)]
    Markdown(MarkdownCommand),
    /// Generate colorized output of the module manifest
    Pretty(PrettyArgs),
    /// Generate XML output of the module manifest
    Xml(TargetArgs),
    /// Generate YAML output of the module manifest
    Yaml(TargetArgs),
}

#[derive(Subcommand)]
pub enum MarkdownCommand {
    /// Generate markdown document output of the module manifest
    Document(TargetArgs),
    /// Generate markdown tables output of the module manifest
    Table(TargetArgs),
}

#[derive(Args)]
pub struct TargetArgs {
    /// Path to the module directory
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Args)]
pub struct PrettyArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Disable ANSI color in the rendered output
    #[arg(long)]
    pub no_color: bool,
}
