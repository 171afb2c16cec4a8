//! Module manifest model and loader.
//!
//! A module directory contains a `module.toml` manifest describing the
//! module's name, description, inputs, and outputs. The manifest is parsed
//! once per run and shared read-only by every formatter.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::settings::SortOrder;

/// A parsed module manifest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Module {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub inputs: Vec<Input>,
    #[serde(default)]
    pub outputs: Vec<Output>,
}

/// One input variable of a module. An input with no default is required.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Input {
    pub name: String,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<toml::Value>,
}

/// One output value of a module.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Output {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

fn default_type() -> String {
    "any".to_string()
}

impl Input {
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// Default value rendered as a compact JSON literal, e.g. `"us-east-1"`
    /// or `true`. Returns `None` for required inputs.
    pub fn default_display(&self) -> Option<String> {
        self.default
            .as_ref()
            .map(|v| serde_json::to_string(v).unwrap_or_else(|_| v.to_string()))
    }
}

impl Module {
    /// Load `<dir>/module.toml` and apply the requested input ordering.
    pub fn load(dir: &Path, sort: SortOrder) -> Result<Module> {
        let path = dir.join("module.toml");
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read module manifest: {}", path.display()))?;
        let mut module: Module = toml::from_str(&raw)
            .with_context(|| format!("failed to parse module manifest: {}", path.display()))?;
        module.sort(sort);
        Ok(module)
    }

    fn sort(&mut self, sort: SortOrder) {
        match sort {
            SortOrder::Name => self.inputs.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOrder::RequiredFirst => self.inputs.sort_by(|a, b| {
                b.is_required()
                    .cmp(&a.is_required())
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }
        self.outputs.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
name = "vpc"
description = "Provision a VPC."

[[inputs]]
name = "region"
type = "string"
description = "Region the module deploys into."
default = "us-east-1"

[[inputs]]
name = "name"
type = "string"
description = "Name prefix applied to every resource."

[[outputs]]
name = "vpc_id"
description = "Identifier of the provisioned VPC."
"#;

    fn parse(sort: SortOrder) -> Module {
        let mut module: Module = toml::from_str(MANIFEST).unwrap();
        module.sort(sort);
        module
    }

    #[test]
    fn required_when_no_default() {
        let module = parse(SortOrder::Name);
        let name = module.inputs.iter().find(|i| i.name == "name").unwrap();
        let region = module.inputs.iter().find(|i| i.name == "region").unwrap();
        assert!(name.is_required());
        assert!(!region.is_required());
    }

    #[test]
    fn default_rendered_as_json_literal() {
        let module = parse(SortOrder::Name);
        let region = module.inputs.iter().find(|i| i.name == "region").unwrap();
        assert_eq!(region.default_display().unwrap(), "\"us-east-1\"");
    }

    #[test]
    fn sort_by_name() {
        let module = parse(SortOrder::Name);
        let names: Vec<&str> = module.inputs.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["name", "region"]);
    }

    #[test]
    fn sort_required_first() {
        let mut module: Module = toml::from_str(MANIFEST).unwrap();
        module.inputs.push(Input {
            name: "az".to_string(),
            kind: "string".to_string(),
            description: String::new(),
            default: Some(toml::Value::String("a".to_string())),
        });
        module.sort(SortOrder::RequiredFirst);
        let names: Vec<&str> = module.inputs.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["name", "az", "region"]);
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let err = Module::load(Path::new("/nonexistent"), SortOrder::Name).unwrap_err();
        assert!(err.to_string().contains("module manifest"));
    }
}
