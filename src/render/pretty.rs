//! Pretty formatter — human-oriented listing, optionally colorized.

use colored::Colorize;

use crate::module::Module;
use crate::settings::Settings;

pub fn render(module: &Module, settings: &Settings) -> String {
    let color = settings.show_color;
    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!("module \"{}\"\n\n", paint(&module.name, color)));
    if !module.description.is_empty() {
        out.push_str(&format!("{}\n\n", module.description));
    }

    for input in &module.inputs {
        let label = paint(&format!("input.{}", input.name), color);
        match input.default_display() {
            Some(default) => out.push_str(&format!("  {} ({})\n", label, default)),
            None => out.push_str(&format!("  {} (required)\n", label)),
        }
        if !input.description.is_empty() {
            out.push_str(&format!("  {}\n", input.description));
        }
        out.push('\n');
    }

    for output in &module.outputs {
        let label = paint(&format!("output.{}", output.name), color);
        out.push_str(&format!("  {}\n", label));
        if !output.description.is_empty() {
            out.push_str(&format!("  {}\n", output.description));
        }
        out.push('\n');
    }

    out
}

fn paint(text: &str, color: bool) -> String {
    if color {
        text.green().to_string()
    } else {
        text.to_string()
    }
}
