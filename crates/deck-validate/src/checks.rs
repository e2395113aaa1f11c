//! Card and mod checks.

use std::collections::{BTreeSet, HashSet};

use deck_model::{ActivationPhase, Card, Mod, Stat};
use deck_standards::definition;

use crate::issue::Issue;
use crate::report::{CardReport, ModReport};

/// Longest description the package index accepts.
pub const MAX_DESCRIPTION_LEN: usize = 250;

/// Class emitted for the card registry utility.
const REGISTRY_CLASS: &str = "CardRegistry";

/// Whether `name` is usable as a C# class name.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Whether `version` is `major.minor.patch` with numeric parts.
pub fn is_valid_version(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

/// Check a single card in isolation.
pub fn validate_card(card: &Card) -> CardReport {
    let mut issues = Vec::new();
    let class_name = card.class_name();

    if card.name.trim().is_empty() {
        issues.push(Issue::EmptyCardName);
    } else if !is_valid_identifier(&class_name) {
        issues.push(Issue::InvalidClassName {
            class_name: class_name.clone(),
        });
    }

    let mut seen = HashSet::new();
    let mut duplicated = BTreeSet::new();
    for change in &card.stats {
        if !seen.insert(change.stat) {
            duplicated.insert(change.stat);
        }
    }
    let present: BTreeSet<Stat> = seen.into_iter().collect();

    for change in &card.stats {
        let def = definition(change.stat);
        if !def.in_bounds(change.value) {
            issues.push(Issue::ValueOutOfRange {
                stat: change.stat,
                value: change.value,
                min: def.min,
                max: def.max,
            });
        }
    }

    for &stat in &present {
        let def = definition(stat);
        if def.phase() == ActivationPhase::Inactive {
            issues.push(Issue::DisplayOnlyStat { stat });
        }
        for &required in def.requires {
            if !present.contains(&required) {
                issues.push(Issue::MissingRequiredStat { stat, required });
            }
        }
    }

    issues.extend(duplicated.into_iter().map(|stat| Issue::DuplicateStat { stat }));

    CardReport {
        card_name: card.name.clone(),
        class_name,
        issues,
    }
}

/// Check a whole mod: project metadata, every card, and class-name clashes
/// across the generated sources.
pub fn validate_mod(project: &Mod) -> ModReport {
    let mut issues = Vec::new();
    let module_name = project.module_name();

    if project.name.trim().is_empty() {
        issues.push(Issue::EmptyModName);
    } else if !is_valid_identifier(&module_name) {
        issues.push(Issue::InvalidModName {
            name: project.name.clone(),
        });
    }
    if project.id.trim().is_empty() {
        issues.push(Issue::EmptyModId);
    }
    if !is_valid_version(&project.version) {
        issues.push(Issue::InvalidVersion {
            version: project.version.clone(),
        });
    }
    if project.library_folder.is_none() {
        issues.push(Issue::MissingLibraryFolder);
    }
    if project.export_folder.is_none() {
        issues.push(Issue::MissingExportFolder);
    }
    if project.cards.is_empty() {
        issues.push(Issue::NoCards);
    }
    let length = project.description.chars().count();
    if length > MAX_DESCRIPTION_LEN {
        issues.push(Issue::DescriptionTooLong {
            length,
            max: MAX_DESCRIPTION_LEN,
        });
    }

    let mut taken: HashSet<String> = HashSet::new();
    taken.insert(REGISTRY_CLASS.to_string());
    taken.insert(format!("{module_name}Plugin"));
    // The plugin source file is named after the module.
    taken.insert(module_name.clone());

    let mut cards = Vec::with_capacity(project.cards.len());
    for card in &project.cards {
        let mut report = validate_card(card);
        if !card.name.trim().is_empty() && !taken.insert(report.class_name.clone()) {
            report.issues.push(Issue::DuplicateClassName {
                class_name: report.class_name.clone(),
            });
        }
        cards.push(report);
    }

    let report = ModReport {
        mod_name: project.name.clone(),
        issues,
        cards,
    };
    tracing::debug!(
        mod_name = %report.mod_name,
        cards = report.cards.len(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated mod"
    );
    report
}
