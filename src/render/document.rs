//! Markdown document formatter — one section per input and output.

use crate::module::Module;

pub fn render(module: &Module) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Module `{}`\n\n", module.name));
    if !module.description.is_empty() {
        out.push_str(&module.description);
        out.push_str("\n\n");
    }

    out.push_str("## Inputs\n\n");
    if module.inputs.is_empty() {
        out.push_str("None.\n\n");
    }
    for input in &module.inputs {
        out.push_str(&format!("### {} ({})\n\n", input.name, input.kind));
        if !input.description.is_empty() {
            out.push_str(&input.description);
            out.push_str("\n\n");
        }
        match input.default_display() {
            Some(default) => out.push_str(&format!("Default: `{}`\n\n", default)),
            None => out.push_str("Required: yes\n\n"),
        }
    }

    out.push_str("## Outputs\n\n");
    if module.outputs.is_empty() {
        out.push_str("None.\n");
    }
    for output in &module.outputs {
        out.push_str(&format!("### {}\n\n", output.name));
        if !output.description.is_empty() {
            out.push_str(&output.description);
            out.push_str("\n\n");
        }
    }

    out
}
