//! Integration tests for the export service.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use deck_export::{
    BuildConfig, ExportError, ExportService, ExportSession, ProcessExportService, build_dir,
    write_package,
};
use deck_model::{Card, ExportOutcome, ExportRequest, Mod, SourceFile, Stat, StatChange};

fn request(export_folder: &Path) -> ExportRequest {
    ExportRequest {
        project_file: "<Project Sdk=\"Microsoft.NET.Sdk\" />\n".to_string(),
        export_folder: export_folder.to_path_buf(),
        module_name: "ExampleMod".to_string(),
        source_files: vec![
            SourceFile::new("CardRegistry", "public static class CardRegistry {}\n"),
            SourceFile::new("BigGun", "public class BigGun {}\n"),
        ],
    }
}

/// A compiler stand-in: `sh -c <script>`, with `$5` the output folder.
fn fake_compiler(script: &str, timeout_secs: u64) -> ProcessExportService {
    ProcessExportService::new(BuildConfig {
        compiler: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string(), "fake".to_string()],
        configuration: "Release".to_string(),
        timeout_secs,
    })
}

#[test]
fn list_assemblies_returns_sorted_dlls() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["UnboundLib.dll", "Assembly-CSharp.dll", "notes.txt", "Upper.DLL"] {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    fs::create_dir(dir.path().join("folder.dll")).unwrap();

    let assemblies = ProcessExportService::default()
        .list_assemblies(dir.path())
        .unwrap();
    let names: Vec<_> = assemblies
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["Assembly-CSharp.dll", "UnboundLib.dll", "Upper.DLL"]);
}

#[test]
fn list_assemblies_reports_missing_folder() {
    let err = ProcessExportService::default()
        .list_assemblies(Path::new("/nonexistent/decksmith/lib"))
        .unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
}

#[cfg(unix)]
#[test]
fn successful_build_copies_binary() {
    let out = tempfile::tempdir().unwrap();
    let service = fake_compiler(
        "mkdir -p \"$5\" && printf dll > \"$5/ExampleMod.dll\" && echo \"Build succeeded for $1\"",
        30,
    );

    let outcome = service.export_mod(&request(out.path())).unwrap();
    let (binary, output) = match outcome {
        ExportOutcome::Success { binary, output } => (binary, output),
        other => panic!("expected success, got {other:?}"),
    };
    assert_eq!(binary, out.path().join("ExampleMod.dll"));
    assert_eq!(fs::read_to_string(&binary).unwrap(), "dll");
    assert!(output.contains("Build succeeded for"));
    assert!(output.contains("ExampleMod.csproj"));

    let project = build_dir(out.path(), "ExampleMod");
    assert!(project.join("ExampleMod.csproj").is_file());
    assert!(project.join("CardRegistry.cs").is_file());
    assert_eq!(
        fs::read_to_string(project.join("BigGun.cs")).unwrap(),
        "public class BigGun {}\n"
    );
}

#[cfg(unix)]
#[test]
fn failed_build_returns_failure_with_log() {
    let out = tempfile::tempdir().unwrap();
    let service = fake_compiler("echo 'error CS1002: ; expected' >&2; exit 1", 30);

    let outcome = service.export_mod(&request(out.path())).unwrap();
    let (message, output) = match outcome {
        ExportOutcome::Failure { message, output } => (message, output),
        other => panic!("expected failure, got {other:?}"),
    };
    assert!(message.starts_with("build failed"));
    assert!(output.contains("error CS1002"));
    assert!(!out.path().join("ExampleMod.dll").exists());
}

#[cfg(unix)]
#[test]
fn build_without_binary_is_a_failure() {
    let out = tempfile::tempdir().unwrap();
    let service = fake_compiler("echo nothing to do", 30);

    let outcome = service.export_mod(&request(out.path())).unwrap();
    assert!(matches!(
        outcome,
        ExportOutcome::Failure { ref message, .. } if message == "build did not produce ExampleMod.dll"
    ));
}

#[cfg(unix)]
#[test]
fn slow_build_times_out() {
    let out = tempfile::tempdir().unwrap();
    let service = fake_compiler("echo compiling; exec sleep 30", 1);

    let outcome = service.export_mod(&request(out.path())).unwrap();
    let (message, output) = match outcome {
        ExportOutcome::Failure { message, output } => (message, output),
        other => panic!("expected failure, got {other:?}"),
    };
    assert_eq!(message, "build timed out after 1s");
    assert_eq!(output, "compiling\n");
}

#[cfg(unix)]
#[test]
fn rebuild_replaces_stale_sources() {
    let out = tempfile::tempdir().unwrap();
    let service = fake_compiler("true", 30);
    service.export_mod(&request(out.path())).unwrap();

    let mut second = request(out.path());
    second.source_files.pop();
    service.export_mod(&second).unwrap();
    assert!(!build_dir(out.path(), "ExampleMod").join("BigGun.cs").exists());
}

#[test]
fn missing_compiler_is_an_error() {
    let out = tempfile::tempdir().unwrap();
    let service = ProcessExportService::new(BuildConfig {
        compiler: "decksmith-no-such-compiler".to_string(),
        ..BuildConfig::default()
    });
    let err = service.export_mod(&request(out.path())).unwrap_err();
    assert!(matches!(
        err,
        ExportError::Spawn { ref program, .. } if program == "decksmith-no-such-compiler"
    ));
}

#[test]
fn build_config_loads_from_project_folder() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        BuildConfig::load_or_default(dir.path()).unwrap(),
        BuildConfig::default()
    );

    fs::write(
        dir.path().join("decksmith.toml"),
        "compiler = \"msbuild\"\nargs = []\nconfiguration = \"Debug\"\n",
    )
    .unwrap();
    let config = BuildConfig::load_or_default(dir.path()).unwrap();
    assert_eq!(config.compiler, "msbuild");
    assert!(config.args.is_empty());
    assert_eq!(config.configuration, "Debug");
    assert_eq!(config.timeout_secs, 300);

    fs::write(dir.path().join("decksmith.toml"), "compiler = [").unwrap();
    assert!(matches!(
        BuildConfig::load_or_default(dir.path()),
        Err(ExportError::Toml { .. })
    ));
}

#[test]
fn package_files_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let mut project = Mod::new("Example Mod", "com.example.rounds.example", "1.0.0");
    project.description = "Guns".to_string();
    let mut card = Card::new("Big Gun");
    card.stats.push(StatChange::new(Stat::Damage, 1.5));
    project.cards.push(card);

    let files = write_package(dir.path(), &project).unwrap();
    let manifest = fs::read_to_string(&files.manifest).unwrap();
    assert!(manifest.contains("\"name\": \"ExampleMod\""));
    assert!(manifest.contains("\"version_number\": \"1.0.0\""));
    assert!(manifest.ends_with("}\n"));
    assert_eq!(
        fs::read_to_string(&files.readme).unwrap(),
        "\nGuns\n\n## Big Gun\n- Damage +50%\n"
    );
}

struct BlockingService {
    started: Mutex<Sender<()>>,
    release: Mutex<Receiver<()>>,
}

impl ExportService for BlockingService {
    fn select_folder(&self, _prompt: &str) -> Option<PathBuf> {
        None
    }

    fn list_assemblies(&self, _library_folder: &Path) -> deck_export::Result<Vec<PathBuf>> {
        Ok(Vec::new())
    }

    fn export_mod(&self, request: &ExportRequest) -> deck_export::Result<ExportOutcome> {
        self.started.lock().unwrap().send(()).unwrap();
        self.release.lock().unwrap().recv().unwrap();
        Ok(ExportOutcome::Success {
            binary: request.export_folder.join("ExampleMod.dll"),
            output: String::new(),
        })
    }

    fn reveal_file(&self, _path: &Path) -> deck_export::Result<()> {
        Ok(())
    }
}

#[test]
fn session_rejects_reentrant_export() {
    let (started_tx, started_rx) = channel();
    let (release_tx, release_rx) = channel();
    let session = ExportSession::new(BlockingService {
        started: Mutex::new(started_tx),
        release: Mutex::new(release_rx),
    });
    let req = request(Path::new("/out"));

    thread::scope(|scope| {
        let first = scope.spawn(|| session.export(&req));
        started_rx.recv().unwrap();
        assert!(session.is_exporting());
        assert!(matches!(
            session.export(&req),
            Err(ExportError::AlreadyExporting)
        ));
        release_tx.send(()).unwrap();
        assert!(first.join().unwrap().unwrap().is_success());
    });

    assert!(!session.is_exporting());
}
