//! Validation issue types.
//!
//! Each variant carries only the data its message needs.

use serde::{Deserialize, Serialize};

use deck_model::Stat;

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks export
    Error,
    /// Should review
    Warning,
}

/// Validation issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    // Mod checks
    EmptyModName,
    /// Mod name does not form a valid C# identifier once spaces are removed
    InvalidModName { name: String },
    EmptyModId,
    /// Version is not `major.minor.patch`
    InvalidVersion { version: String },
    MissingLibraryFolder,
    MissingExportFolder,
    NoCards,
    DescriptionTooLong { length: usize, max: usize },

    // Card checks
    EmptyCardName,
    InvalidClassName { class_name: String },
    /// Two generated classes would share a name
    DuplicateClassName { class_name: String },

    // Stat checks
    ValueOutOfRange {
        stat: Stat,
        value: f64,
        min: f64,
        max: f64,
    },
    /// A stat is present without one of its co-stats
    MissingRequiredStat { stat: Stat, required: Stat },
    /// Stat has no effect handler; it only appears in the tooltip
    DisplayOnlyStat { stat: Stat },
    DuplicateStat { stat: Stat },
}

impl Issue {
    /// Stable identifier for reports.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::EmptyModName => "empty-mod-name",
            Issue::InvalidModName { .. } => "invalid-mod-name",
            Issue::EmptyModId => "empty-mod-id",
            Issue::InvalidVersion { .. } => "invalid-version",
            Issue::MissingLibraryFolder => "missing-library-folder",
            Issue::MissingExportFolder => "missing-export-folder",
            Issue::NoCards => "no-cards",
            Issue::DescriptionTooLong { .. } => "description-too-long",
            Issue::EmptyCardName => "empty-card-name",
            Issue::InvalidClassName { .. } => "invalid-class-name",
            Issue::DuplicateClassName { .. } => "duplicate-class-name",
            Issue::ValueOutOfRange { .. } => "value-out-of-range",
            Issue::MissingRequiredStat { .. } => "missing-required-stat",
            Issue::DisplayOnlyStat { .. } => "display-only-stat",
            Issue::DuplicateStat { .. } => "duplicate-stat",
        }
    }

    /// Stat the issue refers to, if any.
    pub fn stat(&self) -> Option<Stat> {
        match self {
            Issue::ValueOutOfRange { stat, .. }
            | Issue::MissingRequiredStat { stat, .. }
            | Issue::DisplayOnlyStat { stat }
            | Issue::DuplicateStat { stat } => Some(*stat),
            _ => None,
        }
    }

    /// Severity for this issue type.
    ///
    /// Bounds are advisory; the emitter writes out-of-range values as given.
    pub fn severity(&self) -> Severity {
        match self {
            Issue::DescriptionTooLong { .. }
            | Issue::ValueOutOfRange { .. }
            | Issue::DisplayOnlyStat { .. }
            | Issue::DuplicateStat { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Format message with issue-specific data.
    pub fn message(&self) -> String {
        match self {
            Issue::EmptyModName => "Mod name is empty".to_string(),
            Issue::InvalidModName { name } => {
                format!("Mod name '{name}' does not form a valid class name")
            }
            Issue::EmptyModId => "Mod identifier is empty".to_string(),
            Issue::InvalidVersion { version } => {
                format!("Version '{version}' is not in major.minor.patch form")
            }
            Issue::MissingLibraryFolder => "No library folder selected".to_string(),
            Issue::MissingExportFolder => "No export folder selected".to_string(),
            Issue::NoCards => "Mod has no cards".to_string(),
            Issue::DescriptionTooLong { length, max } => {
                format!("Description is {length} characters; the package index allows {max}")
            }
            Issue::EmptyCardName => "Card name is empty".to_string(),
            Issue::InvalidClassName { class_name } => {
                format!("'{class_name}' is not a valid class name")
            }
            Issue::DuplicateClassName { class_name } => {
                format!("Class name '{class_name}' is already used")
            }
            Issue::ValueOutOfRange {
                stat,
                value,
                min,
                max,
            } => format!("{stat} value {value} is outside [{min}, {max}]"),
            Issue::MissingRequiredStat { stat, required } => {
                format!("{stat} requires {required} on the same card")
            }
            Issue::DisplayOnlyStat { stat } => {
                format!("{stat} is shown on the card but has no gameplay effect")
            }
            Issue::DuplicateStat { stat } => {
                format!("{stat} appears more than once; the last assignment wins")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_stat_is_error() {
        let issue = Issue::MissingRequiredStat {
            stat: Stat::Bursts,
            required: Stat::TimeBetweenBullets,
        };
        assert_eq!(issue.severity(), Severity::Error);
        assert_eq!(issue.stat(), Some(Stat::Bursts));
        assert_eq!(
            issue.message(),
            "bursts requires timeBetweenBullets on the same card"
        );
    }

    #[test]
    fn test_out_of_range_is_warning() {
        let issue = Issue::ValueOutOfRange {
            stat: Stat::Ammo,
            value: -150.0,
            min: -100.0,
            max: 10000.0,
        };
        assert_eq!(issue.severity(), Severity::Warning);
        assert_eq!(issue.message(), "ammo value -150 is outside [-100, 10000]");
    }
}
