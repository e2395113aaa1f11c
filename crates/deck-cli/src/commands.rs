use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span, warn};

use deck_cli::editing::{
    add_card, create_project, load_project, project_path, remove_card, save_project,
};
use deck_cli::generate::write_generated;
use deck_export::{
    BuildConfig, ExportService, ExportSession, ProcessExportService, write_package,
};
use deck_model::{Card, ExportOutcome, Mod};
use deck_report::build_export_request;
use deck_validate::{Issue, ModReport, gate_export, validate_mod};

use crate::cli::{CardAddArgs, CardRemoveArgs, ExportArgs, GenerateArgs, NewArgs, ProjectArgs};
use crate::summary::{print_card_table, print_stats_table};
use crate::types::{ExportResult, GenerateResult};

pub fn run_new(args: &NewArgs) -> Result<PathBuf> {
    let path = project_path(&args.project);
    let mut project = Mod::new(args.name.trim(), args.id.trim(), args.version.trim());
    project.description = args.description.clone();
    project.library_folder = args.library_folder.clone();
    project.export_folder = args.export_folder.clone();
    create_project(&path, &project, args.force)?;
    Ok(path)
}

pub fn run_card_add(args: &CardAddArgs) -> Result<usize> {
    let mut project = load_project(&args.project)?;
    let card = Card {
        name: args.name.trim().to_string(),
        description: args.description.clone(),
        art_url: args.art_url.clone(),
        rarity: args.rarity,
        color: args.color,
        stats: args.stats.clone(),
    };
    let number = add_card(&mut project, card);
    save_project(&args.project, &project)?;
    Ok(number)
}

pub fn run_card_remove(args: &CardRemoveArgs) -> Result<Card> {
    let mut project = load_project(&args.project)?;
    let card = remove_card(&mut project, args.number)?;
    save_project(&args.project, &project)?;
    Ok(card)
}

pub fn run_card_list(args: &ProjectArgs) -> Result<()> {
    let project = load_project(&args.project)?;
    print_card_table(&project);
    Ok(())
}

pub fn run_stats() -> Result<()> {
    print_stats_table();
    Ok(())
}

pub fn run_validate(args: &ProjectArgs) -> Result<ModReport> {
    let project = load_project(&args.project)?;
    let span = info_span!("validate", mod_name = %project.name);
    let _guard = span.enter();
    let report = validate_mod(&project);
    info!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validation finished"
    );
    Ok(report)
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let project = load_project(&args.project)?;
    let span = info_span!("generate_project", mod_name = %project.name);
    let _guard = span.enter();
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| project_dir(&args.project).join("generated"));

    // Folders only matter for a real export.
    let mut report = validate_mod(&project);
    report
        .issues
        .retain(|issue| !matches!(issue, Issue::MissingLibraryFolder | Issue::MissingExportFolder));
    let decision = gate_export(&report, !args.no_fail_on_errors);
    if decision.block_export {
        warn!(blocking = ?decision.blocking, "generation blocked by validation errors");
        return Ok(GenerateResult {
            output_dir,
            files: Vec::new(),
            report,
            blocking: decision.blocking,
        });
    }

    let assemblies = match &project.library_folder {
        Some(folder) if folder.is_dir() => ProcessExportService::default()
            .list_assemblies(folder)
            .with_context(|| format!("failed to list assemblies in {}", folder.display()))?,
        Some(folder) => {
            warn!(folder = %folder.display(), "library folder not found, csproj has no references");
            Vec::new()
        }
        None => Vec::new(),
    };
    let files = write_generated(&project, &output_dir, &assemblies)?;
    Ok(GenerateResult {
        output_dir,
        files,
        report,
        blocking: Vec::new(),
    })
}

pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let mut project = load_project(&args.project)?;
    let module_name = project.module_name();
    let span = info_span!("export", module = %module_name);
    let _guard = span.enter();

    let config = match &args.config {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::load_or_default(&project_dir(&args.project))?,
    };
    let service = ProcessExportService::new(config);

    let mut prompted = false;
    if project.library_folder.is_none() {
        let Some(folder) = service.select_folder("Library folder (game assemblies)") else {
            info!("library folder selection cancelled");
            return Ok(ExportResult::Cancelled);
        };
        project.library_folder = Some(folder);
        prompted = true;
    }
    if project.export_folder.is_none() {
        let Some(folder) = service.select_folder("Export folder") else {
            info!("export folder selection cancelled");
            return Ok(ExportResult::Cancelled);
        };
        project.export_folder = Some(folder);
        prompted = true;
    }
    if prompted {
        save_project(&args.project, &project)?;
    }

    let report = validate_mod(&project);
    let decision = gate_export(&report, !args.no_fail_on_errors);
    if decision.block_export {
        warn!(blocking = ?decision.blocking, "export blocked by validation errors");
        return Ok(ExportResult::Blocked {
            report,
            blocking: decision.blocking,
        });
    }

    let library_folder = project
        .library_folder
        .as_deref()
        .ok_or_else(|| anyhow!("no library folder selected"))?;
    let assemblies = service
        .list_assemblies(library_folder)
        .with_context(|| format!("failed to list assemblies in {}", library_folder.display()))?;
    if assemblies.is_empty() {
        warn!(folder = %library_folder.display(), "no assemblies found in library folder");
    }

    let request = build_export_request(&project, &assemblies).context("failed to generate sources")?;
    let session = ExportSession::new(service);
    let outcome = session.export(&request)?;

    let package = match &outcome {
        ExportOutcome::Success { binary, .. } => {
            let package = write_package(&request.export_folder, &project)
                .context("failed to write package files")?;
            if args.reveal {
                session
                    .service()
                    .reveal_file(binary)
                    .context("failed to reveal the compiled mod")?;
            }
            Some(package)
        }
        ExportOutcome::Failure { message, .. } => {
            warn!(%message, "export failed");
            None
        }
    };

    Ok(ExportResult::Finished {
        module_name,
        report,
        outcome,
        package,
    })
}

fn project_dir(project: &Path) -> PathBuf {
    match project.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
