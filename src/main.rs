//! moddoc — render documentation for a module manifest on stdout.

use anyhow::Result;
use clap::Parser;

use moddoc::cli::{Cli, Commands, MarkdownCommand};
use moddoc::module::Module;
use moddoc::render::Format;
use moddoc::settings::{Settings, SortOrder};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (format, target) = match &cli.command {
        Commands::Json(args) => (Format::Json, args),
        Commands::Markdown(MarkdownCommand::Document(args)) => (Format::MarkdownDocument, args),
        Commands::Markdown(MarkdownCommand::Table(args)) => (Format::MarkdownTable, args),
        Commands::Pretty(args) => (Format::Pretty, &args.target),
        Commands::Xml(args) => (Format::Xml, args),
        Commands::Yaml(args) => (Format::Yaml, args),
    };

    let settings = Settings {
        show_color: matches!(&cli.command, Commands::Pretty(p) if !p.no_color),
        sort: if cli.sort_by_required {
            SortOrder::RequiredFirst
        } else {
            SortOrder::Name
        },
    };

    let module = Module::load(&target.path, settings.sort)?;
    print!("{}", format.render(&module, &settings)?);
    Ok(())
}
