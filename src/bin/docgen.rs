//! moddoc-docgen — write one markdown reference page per moddoc subcommand.
//!
//! Walks the moddoc command tree and regenerates every page from scratch;
//! each page embeds the matching formatter's output for a fixture module.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use moddoc::cli::Cli as Moddoc;
use moddoc::docgen::{is_documentable, Generator};
use moddoc::module::Module;
use moddoc::settings::{Settings, SortOrder};

#[derive(Parser)]
#[command(
    name = "moddoc-docgen",
    about = "Generate reference pages for the moddoc command tree"
)]
struct Cli {
    /// Directory the generated pages are written to
    #[arg(short = 'o', long, default_value = "docs/formats")]
    output: PathBuf,

    /// Module directory rendered into each page's example block
    #[arg(long, default_value = "./demos")]
    fixture: PathBuf,

    /// Omit the auto-generation footer from every page
    #[arg(long)]
    no_autogen_tag: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create output directory: {}", cli.output.display()))?;

    // embedded output is static text, so color is always off
    let settings = Settings {
        show_color: false,
        sort: SortOrder::Name,
    };
    let module = Module::load(&cli.fixture, settings.sort)?;

    let generator = Generator::new("moddoc", &module, settings).autogen_tag(!cli.no_autogen_tag);

    let root = Moddoc::command();
    let inherited: Vec<&clap::Arg> = root
        .get_arguments()
        .filter(|a| a.is_global_set())
        .collect();

    for cmd in root.get_subcommands().filter(|c| is_documentable(c)) {
        let path = format!("{} {}", root.get_name(), cmd.get_name());
        generator.generate(cmd, &path, &inherited, &cli.output)?;
    }
    Ok(())
}
