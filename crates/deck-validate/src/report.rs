use serde::Serialize;

use crate::issue::{Issue, Severity};

/// Issues found on one card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardReport {
    pub card_name: String,
    pub class_name: String,
    pub issues: Vec<Issue>,
}

impl CardReport {
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn error_count(&self) -> usize {
        count(&self.issues, Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        count(&self.issues, Severity::Warning)
    }
}

/// Where an issue was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueScope {
    Mod,
    /// Index into the mod's card list.
    Card(usize),
}

/// Project-level issues plus one report per card, in card order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModReport {
    pub mod_name: String,
    pub issues: Vec<Issue>,
    pub cards: Vec<CardReport>,
}

impl ModReport {
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn error_count(&self) -> usize {
        count(&self.issues, Severity::Error)
            + self.cards.iter().map(CardReport::error_count).sum::<usize>()
    }

    pub fn warning_count(&self) -> usize {
        count(&self.issues, Severity::Warning)
            + self
                .cards
                .iter()
                .map(CardReport::warning_count)
                .sum::<usize>()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.cards.iter().all(|card| card.issues.is_empty())
    }

    /// Every issue with its scope, mod-level first.
    pub fn all_issues(&self) -> impl Iterator<Item = (IssueScope, &Issue)> {
        let project = self.issues.iter().map(|issue| (IssueScope::Mod, issue));
        let cards = self.cards.iter().enumerate().flat_map(|(index, card)| {
            card.issues
                .iter()
                .map(move |issue| (IssueScope::Card(index), issue))
        });
        project.chain(cards)
    }
}

fn count(issues: &[Issue], severity: Severity) -> usize {
    issues
        .iter()
        .filter(|issue| issue.severity() == severity)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_model::Stat;

    #[test]
    fn test_counts_cover_cards_and_mod() {
        let report = ModReport {
            mod_name: "M".to_string(),
            issues: vec![Issue::NoCards],
            cards: vec![CardReport {
                card_name: "C".to_string(),
                class_name: "C".to_string(),
                issues: vec![Issue::DisplayOnlyStat { stat: Stat::Luck }],
            }],
        };
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(!report.is_clean());

        let scopes: Vec<_> = report.all_issues().map(|(scope, _)| scope).collect();
        assert_eq!(scopes, vec![IssueScope::Mod, IssueScope::Card(0)]);
    }
}
