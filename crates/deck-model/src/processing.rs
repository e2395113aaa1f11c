use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A generated source file handed to the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// File stem; the build writes `<name>.cs`.
    pub name: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Everything the export service needs to compile a mod.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub project_file: String,
    pub export_folder: PathBuf,
    pub module_name: String,
    pub source_files: Vec<SourceFile>,
}

/// Result of a compile.
///
/// Both variants carry the full build log so a failure can be inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExportOutcome {
    Success { binary: PathBuf, output: String },
    Failure { message: String, output: String },
}

impl ExportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExportOutcome::Success { .. })
    }

    pub fn output(&self) -> &str {
        match self {
            ExportOutcome::Success { output, .. } | ExportOutcome::Failure { output, .. } => output,
        }
    }
}
