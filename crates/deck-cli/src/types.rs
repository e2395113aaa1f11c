use std::path::PathBuf;

use deck_export::PackageFiles;
use deck_model::ExportOutcome;
use deck_validate::ModReport;

#[derive(Debug)]
pub struct GenerateResult {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub report: ModReport,
    /// Non-empty when validation errors stopped the generation.
    pub blocking: Vec<String>,
}

impl GenerateResult {
    pub fn is_blocked(&self) -> bool {
        !self.blocking.is_empty()
    }
}

#[derive(Debug)]
pub enum ExportResult {
    /// A folder prompt was dismissed; nothing was written.
    Cancelled,
    Blocked {
        report: ModReport,
        blocking: Vec<String>,
    },
    Finished {
        module_name: String,
        report: ModReport,
        outcome: ExportOutcome,
        package: Option<PackageFiles>,
    },
}

impl ExportResult {
    pub fn has_errors(&self) -> bool {
        match self {
            ExportResult::Cancelled => false,
            ExportResult::Blocked { .. } => true,
            ExportResult::Finished { outcome, .. } => !outcome.is_success(),
        }
    }
}
