//! The mod project: the root aggregate the user edits and exports.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::{ModelError, Result};

/// File suffix for saved projects.
pub const PROJECT_EXTENSION: &str = "decksmith.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mod {
    pub name: String,
    /// Plugin GUID, e.g. `com.example.rounds.modname`.
    pub id: String,
    pub version: String,
    /// Short description used in the package manifest and readme.
    #[serde(default)]
    pub description: String,
    /// Folder containing the game and framework assemblies to compile against.
    #[serde(default)]
    pub library_folder: Option<PathBuf>,
    #[serde(default)]
    pub export_folder: Option<PathBuf>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Mod {
    pub fn new(name: impl Into<String>, id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Module (assembly) name: the mod name without spaces.
    pub fn module_name(&self) -> String {
        self.name.replace(' ', "")
    }

    /// Append a blank card and return its index.
    pub fn add_card(&mut self) -> usize {
        self.cards.push(Card::default());
        self.cards.len() - 1
    }

    pub fn remove_card(&mut self, index: usize) -> Result<Card> {
        if index >= self.cards.len() {
            return Err(ModelError::CardIndex {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    pub fn card_mut(&mut self, index: usize) -> Result<&mut Card> {
        let len = self.cards.len();
        self.cards
            .get_mut(index)
            .ok_or(ModelError::CardIndex { index, len })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| ModelError::io(path, e))?;
        serde_json::from_str(&contents).map_err(|e| ModelError::Json {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let mut json = serde_json::to_string_pretty(self).map_err(|e| ModelError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        json.push('\n');
        fs::write(path, json).map_err(|e| ModelError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_card_returns_index() {
        let mut project = Mod::new("Example Mod", "com.example.rounds.example", "0.0.1");
        assert_eq!(project.add_card(), 0);
        assert_eq!(project.add_card(), 1);
        assert_eq!(project.cards.len(), 2);
    }

    #[test]
    fn test_remove_card_out_of_range() {
        let mut project = Mod::default();
        let err = project.remove_card(3).unwrap_err();
        assert!(matches!(err, ModelError::CardIndex { index: 3, len: 0 }));
    }

    #[test]
    fn test_module_name() {
        let project = Mod::new("Example Mod", "id", "1.0.0");
        assert_eq!(project.module_name(), "ExampleMod");
    }
}
