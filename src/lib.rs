//! moddoc — render documentation for reusable infrastructure modules.
//!
//! A module is described by a `module.toml` manifest (name, description,
//! inputs, outputs). The [`render`] module turns a loaded [`module::Module`]
//! into one of six output formats; [`docgen`] walks the moddoc CLI's own
//! command tree and writes one markdown reference page per subcommand, with
//! live formatter output embedded.

pub mod cli;
pub mod docgen;
pub mod module;
pub mod render;
pub mod settings;
