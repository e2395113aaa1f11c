//! Package manifest (`manifest.json`).

use serde::{Deserialize, Serialize};

use deck_model::Mod;
use deck_standards::{HOMEPAGE_URL, framework_dependencies};

use crate::error::Result;

/// Field order matches what the package index expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version_number: String,
    pub website_url: String,
    pub description: String,
    pub dependencies: Vec<String>,
}

impl Manifest {
    /// The package name is the module name; package names cannot hold spaces.
    pub fn for_mod(project: &Mod) -> Self {
        Self {
            name: project.module_name(),
            version_number: project.version.clone(),
            website_url: HOMEPAGE_URL.to_string(),
            description: project.description.clone(),
            dependencies: framework_dependencies()
                .iter()
                .map(|dependency| (*dependency).to_string())
                .collect(),
        }
    }

    /// Two-space indented JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn generate_manifest(project: &Mod) -> Result<String> {
    Manifest::for_mod(project).to_json()
}
