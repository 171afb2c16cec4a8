//! Markdown table formatter — one GFM table each for inputs and outputs.

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
    } else {
        out.push_str("| Name | Type | Description | Default | Required |\n");
        out.push_str("|------|------|-------------|---------|:--------:|\n");
        for input in &module.inputs {
            let default = input
                .default_display()
                .map(|d| format!("`{}`", d))
                .unwrap_or_else(|| "-".to_string());
            let required = if input.is_required() { "yes" } else { "no" };
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                escape(&input.name),
                escape(&input.kind),
                escape(&input.description),
                default,
                required
            ));
        }
        out.push('\n');
    }

    out.push_str("## Outputs\n\n");
    if module.outputs.is_empty() {
        out.push_str("None.\n");
    } else {
        out.push_str("| Name | Description |\n");
        out.push_str("|------|-------------|\n");
        for output in &module.outputs {
            out.push_str(&format!(
                "| {} | {} |\n",
                escape(&output.name),
                escape(&output.description)
            ));
        }
    }

    out
}

/// Keep cell text on one row and keep `|` from breaking the table.
fn escape(text: &str) -> String {
    text.replace('\n', " ").replace('|', "\\|")
}
