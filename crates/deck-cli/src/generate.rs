//! Writing the generated project to a folder without compiling it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use deck_export::write_package;
use deck_model::Mod;
use deck_report::{build_sources, generate_csproj};

/// Write every generated file for `project` into `output_dir`.
///
/// The layout matches what the compiler sees during an export: the card
/// registry, the plugin and one source per card, the csproj, then the
/// package metadata. Returns the written paths in that order.
pub fn write_generated(
    project: &Mod,
    output_dir: &Path,
    assemblies: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    let module_name = project.module_name();
    let span = tracing::info_span!("generate", module = %module_name);
    let _guard = span.enter();

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let sources = build_sources(project).context("failed to generate sources")?;
    let mut written = Vec::with_capacity(sources.len() + 3);
    for source in &sources {
        let path = output_dir.join(format!("{}.cs", source.name));
        fs::write(&path, &source.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }

    let csproj = output_dir.join(format!("{module_name}.csproj"));
    let descriptor =
        generate_csproj(&module_name, assemblies).context("failed to generate csproj")?;
    fs::write(&csproj, descriptor)
        .with_context(|| format!("failed to write {}", csproj.display()))?;
    written.push(csproj);

    let package = write_package(output_dir, project).context("failed to write package files")?;
    written.push(package.manifest);
    written.push(package.readme);

    tracing::info!(files = written.len(), dir = %output_dir.display(), "generated sources");
    Ok(written)
}
