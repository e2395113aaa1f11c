//! Exporting a mod: writing the generated project, compiling it and
//! producing the package files.
//!
//! [`ExportService`] is the seam between the generators and the outside
//! world. [`ProcessExportService`] implements it with a local compiler
//! configured through [`BuildConfig`].

pub mod config;
pub mod error;
pub mod package;
pub mod process;
pub mod service;
pub mod session;

pub use config::{BuildConfig, CONFIG_FILE_NAME, DEFAULT_TIMEOUT_SECS};
pub use error::{ExportError, Result};
pub use package::{MANIFEST_FILE_NAME, PackageFiles, README_FILE_NAME, write_package};
pub use process::{CompilerRun, run_with_timeout};
pub use service::{
    BUILD_DIR_NAME, ExportService, ProcessExportService, build_dir, read_folder_choice,
};
pub use session::ExportSession;
