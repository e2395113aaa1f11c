//! Build descriptor for the generated project.

use std::io::Write;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::{ReportError, Result};

const TARGET_FRAMEWORK: &str = "netstandard2.1";

fn xml_err(error: impl std::fmt::Display) -> ReportError {
    ReportError::Xml {
        message: error.to_string(),
    }
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_err)?;
    Ok(())
}

/// Generate the SDK-style csproj for `module_name`, referencing each
/// assembly by file stem with its full path as hint.
///
/// References are marked non-private so the game's own copies are used.
pub fn generate_csproj(module_name: &str, assemblies: &[impl AsRef<Path>]) -> Result<String> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    let mut root = BytesStart::new("Project");
    root.push_attribute(("Sdk", "Microsoft.NET.Sdk"));
    xml.write_event(Event::Start(root)).map_err(xml_err)?;

    xml.write_event(Event::Start(BytesStart::new("PropertyGroup")))
        .map_err(xml_err)?;
    write_text_element(&mut xml, "TargetFramework", TARGET_FRAMEWORK)?;
    write_text_element(&mut xml, "AssemblyName", module_name)?;
    write_text_element(&mut xml, "RootNamespace", module_name)?;
    write_text_element(&mut xml, "LangVersion", "latest")?;
    xml.write_event(Event::End(BytesEnd::new("PropertyGroup")))
        .map_err(xml_err)?;

    xml.write_event(Event::Start(BytesStart::new("ItemGroup")))
        .map_err(xml_err)?;
    for assembly in assemblies {
        let path = assembly.as_ref();
        let include = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let hint = path.display().to_string();

        let mut reference = BytesStart::new("Reference");
        reference.push_attribute(("Include", include.as_str()));
        xml.write_event(Event::Start(reference)).map_err(xml_err)?;
        write_text_element(&mut xml, "HintPath", &hint)?;
        write_text_element(&mut xml, "Private", "false")?;
        xml.write_event(Event::End(BytesEnd::new("Reference")))
            .map_err(xml_err)?;
    }
    xml.write_event(Event::End(BytesEnd::new("ItemGroup")))
        .map_err(xml_err)?;

    xml.write_event(Event::End(BytesEnd::new("Project")))
        .map_err(xml_err)?;

    let mut text = String::from_utf8(xml.into_inner())?;
    text.push('\n');
    Ok(text)
}
