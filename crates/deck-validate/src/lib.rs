//! Validation for card mods.
//!
//! Checks are advisory while editing. [`gate_export`] turns a report into
//! the decision whether an export may proceed.

pub mod checks;
pub mod issue;
pub mod report;

pub use checks::{
    MAX_DESCRIPTION_LEN, is_valid_identifier, is_valid_version, validate_card, validate_mod,
};
pub use issue::{Issue, Severity};
pub use report::{CardReport, IssueScope, ModReport};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatingDecision {
    pub block_export: bool,
    /// `mod` or the names of cards with errors, in report order.
    pub blocking: Vec<String>,
}

/// Decide whether an export may proceed.
///
/// Any error blocks unless `fail_on_errors` is off; warnings never do.
pub fn gate_export(report: &ModReport, fail_on_errors: bool) -> GatingDecision {
    if !fail_on_errors {
        return GatingDecision::default();
    }
    let mut blocking = Vec::new();
    if report
        .issues
        .iter()
        .any(|issue| issue.severity() == Severity::Error)
    {
        blocking.push("mod".to_string());
    }
    for (index, card) in report.cards.iter().enumerate() {
        if card.has_errors() {
            blocking.push(if card.card_name.trim().is_empty() {
                format!("card #{}", index + 1)
            } else {
                card.card_name.clone()
            });
        }
    }
    GatingDecision {
        block_export: !blocking.is_empty(),
        blocking,
    }
}
