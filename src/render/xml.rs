//! XML formatter — event-stream serialization with 2-space indentation.

use std::io::Write;

use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::module::Module;

pub fn render(module: &Module) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    writer.write_event(Event::Start(BytesStart::new("module")))?;
    element(&mut writer, "name", &module.name)?;
    if !module.description.is_empty() {
        element(&mut writer, "description", &module.description)?;
    }

    writer.write_event(Event::Start(BytesStart::new("inputs")))?;
    for input in &module.inputs {
        let mut start = BytesStart::new("input");
        start.push_attribute(("required", if input.is_required() { "true" } else { "false" }));
        writer.write_event(Event::Start(start))?;
        element(&mut writer, "name", &input.name)?;
        element(&mut writer, "type", &input.kind)?;
        if !input.description.is_empty() {
            element(&mut writer, "description", &input.description)?;
        }
        if let Some(default) = input.default_display() {
            element(&mut writer, "default", &default)?;
        }
        writer.write_event(Event::End(BytesEnd::new("input")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("inputs")))?;

    writer.write_event(Event::Start(BytesStart::new("outputs")))?;
    for output in &module.outputs {
        writer.write_event(Event::Start(BytesStart::new("output")))?;
        element(&mut writer, "name", &output.name)?;
        if !output.description.is_empty() {
            element(&mut writer, "description", &output.description)?;
        }
        writer.write_event(Event::End(BytesEnd::new("output")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("outputs")))?;

    writer.write_event(Event::End(BytesEnd::new("module")))?;

    let mut out = String::from_utf8(writer.into_inner())?;
    out.push('\n');
    Ok(out)
}

fn element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
