//! JSON formatter — pretty-printed serialization of the module model.

use anyhow::{Context, Result};

use crate::module::Module;

pub fn render(module: &Module) -> Result<String> {
    let mut out =
        serde_json::to_string_pretty(module).context("failed to serialize module as JSON")?;
    out.push('\n');
    Ok(out)
}
