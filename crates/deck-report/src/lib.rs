//! Source and package generation for card mods.
//!
//! Everything here is a pure function of the mod snapshot:
//!
//! - **Card sources**: one `SimpleCard` class per card
//! - **Plugin source**: the BepInEx entry point registering the cards
//! - **CardRegistry**: a fixed helper class
//! - **csproj**: the build descriptor referencing the game assemblies
//! - **Package metadata**: `manifest.json` and `README.md`

mod card;
mod common;
mod csproj;
mod error;
mod manifest;
mod package;
mod plugin;
mod readme;
mod registry;

pub use card::{effect_statements, generate_card_source};
pub use common::{
    change_descriptor, descriptor, escape_csharp, format_number, render_value,
};
pub use csproj::generate_csproj;
pub use error::{ReportError, Result};
pub use manifest::{Manifest, generate_manifest};
pub use package::{build_export_request, build_sources};
pub use plugin::{generate_plugin_source, plugin_class_name};
pub use readme::{escape_readme, generate_readme};
pub use registry::{CARD_REGISTRY_NAME, card_registry_source};
