//! YAML formatter — serialization of the module model.

use anyhow::{Context, Result};

use crate::module::Module;

pub fn render(module: &Module) -> Result<String> {
    serde_yaml::to_string(module).context("failed to serialize module as YAML")
}
