//! Formatter module — closed enum dispatch over the supported output formats.

pub mod document;
pub mod json;
pub mod pretty;
pub mod table;
pub mod xml;
pub mod yaml;

use anyhow::Result;

use crate::module::Module;
use crate::settings::Settings;

/// One variant per supported output format. The set is fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    MarkdownDocument,
    MarkdownTable,
    Pretty,
    Xml,
    Yaml,
}

impl Format {
    /// Render the module in this format.
    pub fn render(self, module: &Module, settings: &Settings) -> Result<String> {
        match self {
            Format::Json => json::render(module),
            Format::MarkdownDocument => Ok(document::render(module)),
            Format::MarkdownTable => Ok(table::render(module)),
            Format::Pretty => Ok(pretty::render(module, settings)),
            Format::Xml => xml::render(module),
            Format::Yaml => yaml::render(module),
        }
    }
}
