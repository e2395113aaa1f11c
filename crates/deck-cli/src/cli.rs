//! CLI argument definitions for decksmith.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use deck_cli::editing::parse_stat_change;
use deck_model::{CardColor, Rarity, StatChange};

#[derive(Parser)]
#[command(
    name = "decksmith",
    version,
    about = "DeckSmith - author and export ROUNDS card mods",
    long_about = "Author stat-modifier cards for ROUNDS and export them as a compiled mod.\n\n\
                  Cards live in a project file; `export` generates the C# sources, \n\
                  builds them with an external compiler and writes the package metadata."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new mod project file.
    New(NewArgs),

    /// Add, remove or list cards in a project.
    #[command(subcommand)]
    Card(CardCommand),

    /// List every stat a card can modify.
    Stats,

    /// Check a project for problems that would break or block an export.
    Validate(ProjectArgs),

    /// Write the generated sources and package files without compiling.
    Generate(GenerateArgs),

    /// Generate, compile and package the mod.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct ProjectArgs {
    /// Path to the project file.
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,
}

#[derive(Args)]
pub struct NewArgs {
    /// Path of the project file to create (`.decksmith.json` is appended
    /// when no extension is given).
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    /// Display name of the mod.
    #[arg(long)]
    pub name: String,

    /// Plugin GUID, e.g. com.example.rounds.mymod.
    #[arg(long)]
    pub id: String,

    /// Mod version (MAJOR.MINOR.PATCH).
    #[arg(long = "mod-version", default_value = "1.0.0")]
    pub version: String,

    /// Short description for the manifest and readme.
    #[arg(long, default_value = "")]
    pub description: String,

    /// Folder containing the game and framework assemblies.
    #[arg(long = "library-folder", value_name = "DIR")]
    pub library_folder: Option<PathBuf>,

    /// Folder the compiled mod and package files are written to.
    #[arg(long = "export-folder", value_name = "DIR")]
    pub export_folder: Option<PathBuf>,

    /// Overwrite an existing project file.
    #[arg(long)]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum CardCommand {
    /// Append a card.
    Add(CardAddArgs),

    /// Remove a card by its number in `card list`.
    Remove(CardRemoveArgs),

    /// Show the cards in a project.
    List(ProjectArgs),
}

#[derive(Args)]
pub struct CardAddArgs {
    /// Path to the project file.
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    /// Card title; also the generated class name without spaces.
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Name of the art asset shown on the card.
    #[arg(long = "art", default_value = "")]
    pub art_url: String,

    /// Rarity tier (case-insensitive).
    #[arg(long, default_value = "Common")]
    pub rarity: Rarity,

    /// Theme color (case-insensitive).
    #[arg(long, default_value = "TechWhite")]
    pub color: CardColor,

    /// Stat change as STAT=VALUE[:positive|:negative][:AMOUNT]; repeatable.
    ///
    /// Example: --stat damage=1.5 --stat ammo=-20:negative:lower
    #[arg(long = "stat", value_name = "STAT", value_parser = parse_stat_change)]
    pub stats: Vec<StatChange>,
}

#[derive(Args)]
pub struct CardRemoveArgs {
    /// Path to the project file.
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    /// Card number as shown by `card list` (starting at 1).
    #[arg(value_name = "NUMBER")]
    pub number: usize,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the project file.
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    /// Output directory (default: <PROJECT_DIR>/generated).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Write outputs even if validation errors are detected.
    #[arg(long = "no-fail-on-errors")]
    pub no_fail_on_errors: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Path to the project file.
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    /// Build settings file (default: decksmith.toml beside the project).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Export even if validation errors are detected.
    ///
    /// By default, validation errors such as a missing required stat block
    /// the export. The compiler may still reject the generated sources.
    #[arg(long = "no-fail-on-errors")]
    pub no_fail_on_errors: bool,

    /// Show the compiled mod in the file browser afterwards.
    #[arg(long)]
    pub reveal: bool,

    /// Print the full compiler log even when the build succeeds.
    #[arg(long = "show-log")]
    pub show_log: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
