//! Assemble everything an export needs from a mod.

use std::path::Path;

use deck_model::{ExportRequest, Mod, SourceFile};

use crate::card::generate_card_source;
use crate::common::class_name_for;
use crate::csproj::generate_csproj;
use crate::error::{ReportError, Result};
use crate::plugin::generate_plugin_source;
use crate::registry::{CARD_REGISTRY_NAME, card_registry_source};

/// Source files in build order: the registry utility, the plugin, then one
/// file per card in list order.
pub fn build_sources(project: &Mod) -> Result<Vec<SourceFile>> {
    let module_name = class_name_for(&project.name)?;
    let mut sources = Vec::with_capacity(project.cards.len() + 2);
    sources.push(SourceFile::new(CARD_REGISTRY_NAME, card_registry_source()));
    sources.push(SourceFile::new(
        module_name,
        generate_plugin_source(project)?,
    ));
    for card in &project.cards {
        sources.push(SourceFile::new(
            card.class_name(),
            generate_card_source(&project.name, card)?,
        ));
    }
    tracing::debug!(
        mod_name = %project.name,
        files = sources.len(),
        "built mod sources"
    );
    Ok(sources)
}

/// Build the request handed to the export service.
pub fn build_export_request(
    project: &Mod,
    assemblies: &[impl AsRef<Path>],
) -> Result<ExportRequest> {
    let export_folder = project
        .export_folder
        .clone()
        .ok_or(ReportError::MissingExportFolder)?;
    let module_name = class_name_for(&project.name)?;
    Ok(ExportRequest {
        project_file: generate_csproj(&module_name, assemblies)?,
        export_folder,
        module_name,
        source_files: build_sources(project)?,
    })
}
