//! The export service contract and its process-backed implementation.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use deck_model::{ExportOutcome, ExportRequest};

use crate::config::BuildConfig;
use crate::error::{ExportError, Result};
use crate::process::run_with_timeout;

/// Hidden folder under the export folder holding generated projects.
pub const BUILD_DIR_NAME: &str = ".decksmith";

/// Folder where the compiler writes its output, relative to the project.
const OUTPUT_DIR_NAME: &str = "bin";

/// Everything the exporter needs from the outside world.
pub trait ExportService {
    /// Ask for a folder. `None` means the user cancelled.
    fn select_folder(&self, prompt: &str) -> Option<PathBuf>;

    /// Assemblies in `library_folder`, sorted by path.
    fn list_assemblies(&self, library_folder: &Path) -> Result<Vec<PathBuf>>;

    /// Write and compile the project.
    ///
    /// A failed build is an [`ExportOutcome::Failure`], not an error; errors
    /// are reserved for the service itself breaking.
    fn export_mod(&self, request: &ExportRequest) -> Result<ExportOutcome>;

    /// Show `path` in the platform file browser.
    fn reveal_file(&self, path: &Path) -> Result<()>;
}

/// Read a folder choice from a line of input. Blank input cancels.
pub fn read_folder_choice(input: &mut impl BufRead) -> Option<PathBuf> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let trimmed = line.trim();
            (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
        }
    }
}

/// Directory the project for `module_name` is generated into.
pub fn build_dir(export_folder: &Path, module_name: &str) -> PathBuf {
    export_folder.join(BUILD_DIR_NAME).join(module_name)
}

/// Compiles with an external toolchain described by [`BuildConfig`].
#[derive(Debug, Clone, Default)]
pub struct ProcessExportService {
    config: BuildConfig,
}

impl ProcessExportService {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    fn write_project(&self, request: &ExportRequest, dir: &Path) -> Result<PathBuf> {
        if dir.exists() {
            fs::remove_dir_all(dir).map_err(|e| ExportError::io(dir, e))?;
        }
        fs::create_dir_all(dir).map_err(|e| ExportError::io(dir, e))?;

        let csproj = dir.join(format!("{}.csproj", request.module_name));
        fs::write(&csproj, &request.project_file).map_err(|e| ExportError::io(&csproj, e))?;
        for source in &request.source_files {
            let path = dir.join(format!("{}.cs", source.name));
            fs::write(&path, &source.content).map_err(|e| ExportError::io(&path, e))?;
        }
        tracing::debug!(
            dir = %dir.display(),
            sources = request.source_files.len(),
            "wrote project"
        );
        Ok(csproj)
    }

    fn compiler_command(&self, dir: &Path, csproj: &Path, output_dir: &Path) -> Command {
        let mut command = Command::new(&self.config.compiler);
        command
            .current_dir(dir)
            .args(&self.config.args)
            .arg(csproj)
            .arg("-c")
            .arg(&self.config.configuration)
            .arg("-o")
            .arg(output_dir);
        command
    }
}

impl ExportService for ProcessExportService {
    fn select_folder(&self, prompt: &str) -> Option<PathBuf> {
        eprint!("{prompt}: ");
        let _ = io::stderr().flush();
        read_folder_choice(&mut io::stdin().lock())
    }

    fn list_assemblies(&self, library_folder: &Path) -> Result<Vec<PathBuf>> {
        let entries =
            fs::read_dir(library_folder).map_err(|e| ExportError::io(library_folder, e))?;
        let mut assemblies = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| ExportError::io(library_folder, e))?.path();
            let is_dll = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("dll"));
            if is_dll && path.is_file() {
                assemblies.push(path);
            }
        }
        assemblies.sort();
        Ok(assemblies)
    }

    fn export_mod(&self, request: &ExportRequest) -> Result<ExportOutcome> {
        let span = tracing::info_span!("export_mod", module = %request.module_name);
        let _guard = span.enter();

        let dir = build_dir(&request.export_folder, &request.module_name);
        let csproj = self.write_project(request, &dir)?;
        let output_dir = dir.join(OUTPUT_DIR_NAME);
        let command = self.compiler_command(&dir, &csproj, &output_dir);

        tracing::info!(compiler = %self.config.compiler, "building");
        let run = run_with_timeout(command, self.config.timeout())?;

        if run.timed_out() {
            return Ok(ExportOutcome::Failure {
                message: format!("build timed out after {}s", self.config.timeout_secs),
                output: run.output,
            });
        }
        if !run.succeeded() {
            let status = run
                .status
                .map(|status| status.to_string())
                .unwrap_or_default();
            return Ok(ExportOutcome::Failure {
                message: format!("build failed ({status})"),
                output: run.output,
            });
        }

        let file_name = format!("{}.dll", request.module_name);
        let built = output_dir.join(&file_name);
        if !built.is_file() {
            return Ok(ExportOutcome::Failure {
                message: format!("build did not produce {file_name}"),
                output: run.output,
            });
        }
        let binary = request.export_folder.join(&file_name);
        fs::copy(&built, &binary).map_err(|e| ExportError::io(&binary, e))?;

        tracing::info!(binary = %binary.display(), "build succeeded");
        Ok(ExportOutcome::Success {
            binary,
            output: run.output,
        })
    }

    fn reveal_file(&self, path: &Path) -> Result<()> {
        #[cfg(target_os = "macos")]
        let mut command = {
            let mut command = Command::new("open");
            command.arg("-R").arg(path);
            command
        };

        #[cfg(target_os = "windows")]
        let mut command = {
            let mut command = Command::new("explorer");
            command.arg(format!("/select,{}", path.display()));
            command
        };

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let mut command = {
            let mut command = Command::new("xdg-open");
            command.arg(path.parent().unwrap_or(path));
            command
        };

        command.spawn().map_err(|source| ExportError::Spawn {
            program: command.get_program().to_string_lossy().into_owned(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_folder_choice() {
        assert_eq!(
            read_folder_choice(&mut Cursor::new("  /tmp/out \n")),
            Some(PathBuf::from("/tmp/out"))
        );
        assert_eq!(read_folder_choice(&mut Cursor::new("\n")), None);
        assert_eq!(read_folder_choice(&mut Cursor::new("")), None);
    }

    #[test]
    fn test_build_dir_layout() {
        assert_eq!(
            build_dir(Path::new("/out"), "ExampleMod"),
            PathBuf::from("/out/.decksmith/ExampleMod")
        );
    }
}
