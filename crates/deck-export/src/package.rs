//! Package metadata written beside the exported binary.

use std::fs;
use std::path::{Path, PathBuf};

use deck_model::Mod;
use deck_report::{generate_manifest, generate_readme};

use crate::error::{ExportError, Result};

pub const MANIFEST_FILE_NAME: &str = "manifest.json";
pub const README_FILE_NAME: &str = "README.md";

/// Paths of the written package files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFiles {
    pub manifest: PathBuf,
    pub readme: PathBuf,
}

/// Write `manifest.json` and `README.md` for `project` into `dir`.
pub fn write_package(dir: &Path, project: &Mod) -> Result<PackageFiles> {
    fs::create_dir_all(dir).map_err(|e| ExportError::io(dir, e))?;

    let manifest = dir.join(MANIFEST_FILE_NAME);
    let mut json = generate_manifest(project)?;
    json.push('\n');
    fs::write(&manifest, json).map_err(|e| ExportError::io(&manifest, e))?;

    let readme = dir.join(README_FILE_NAME);
    fs::write(&readme, generate_readme(project)).map_err(|e| ExportError::io(&readme, e))?;

    tracing::info!(dir = %dir.display(), "wrote package metadata");
    Ok(PackageFiles { manifest, readme })
}
