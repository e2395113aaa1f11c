//! Tests for card and mod validation.

use std::path::PathBuf;

use deck_model::{Card, Mod, Stat, StatChange};
use deck_validate::{Issue, Severity, gate_export, validate_card, validate_mod};

fn ready_mod() -> Mod {
    let mut project = Mod::new("Example Mod", "com.example.rounds.example", "1.0.0");
    project.library_folder = Some(PathBuf::from("/game/Managed"));
    project.export_folder = Some(PathBuf::from("/out"));
    let mut card = Card::new("Big Gun");
    card.stats.push(StatChange::new(Stat::Damage, 1.5));
    project.cards.push(card);
    project
}

#[test]
fn clean_mod_passes_gate() {
    let report = validate_mod(&ready_mod());
    assert!(report.is_clean(), "{report:?}");
    assert!(!gate_export(&report, true).block_export);
}

#[test]
fn bursts_without_time_between_bullets_blocks_export() {
    let mut project = ready_mod();
    project.cards[0]
        .stats
        .push(StatChange::new(Stat::Bursts, 3.0));

    let report = validate_mod(&project);
    assert_eq!(
        report.cards[0].issues,
        vec![Issue::MissingRequiredStat {
            stat: Stat::Bursts,
            required: Stat::TimeBetweenBullets,
        }]
    );

    let decision = gate_export(&report, true);
    assert!(decision.block_export);
    assert_eq!(decision.blocking, vec!["Big Gun".to_string()]);
}

#[test]
fn paired_burst_stats_are_accepted() {
    let mut card = Card::new("Burst");
    card.stats.push(StatChange::new(Stat::Bursts, 3.0));
    card.stats
        .push(StatChange::new(Stat::TimeBetweenBullets, 0.1));
    assert!(validate_card(&card).issues.is_empty());
}

#[test]
fn warnings_do_not_block() {
    let mut project = ready_mod();
    project.cards[0].stats.push(StatChange::new(Stat::Luck, 2.0));
    project.cards[0].stats.push(StatChange::new(Stat::Ammo, -500.0));
    project.cards[0].stats.push(StatChange::new(Stat::Damage, 2.0));
    project.description = "x".repeat(251);

    let report = validate_mod(&project);
    assert_eq!(report.error_count(), 0);
    assert_eq!(report.warning_count(), 4);
    assert!(report
        .all_issues()
        .all(|(_, issue)| issue.severity() == Severity::Warning));
    assert!(!gate_export(&report, true).block_export);
}

#[test]
fn incomplete_mod_reports_every_missing_field() {
    let project = Mod::new("", "", "one");
    let report = validate_mod(&project);
    assert_eq!(
        report.issues,
        vec![
            Issue::EmptyModName,
            Issue::EmptyModId,
            Issue::InvalidVersion {
                version: "one".to_string()
            },
            Issue::MissingLibraryFolder,
            Issue::MissingExportFolder,
            Issue::NoCards,
        ]
    );
    assert_eq!(gate_export(&report, true).blocking, vec!["mod".to_string()]);
}

#[test]
fn gate_can_be_disabled() {
    let report = validate_mod(&Mod::default());
    assert!(report.has_errors());
    assert!(!gate_export(&report, false).block_export);
}

#[test]
fn class_names_must_be_unique() {
    let mut project = ready_mod();
    project.cards.push(Card::new("BigGun"));
    project.cards.push(Card::new("Card Registry"));
    project.cards.push(Card::new("Example Mod Plugin"));

    let report = validate_mod(&project);
    assert!(report.cards[0].issues.is_empty());
    for (index, class_name) in [(1, "BigGun"), (2, "CardRegistry"), (3, "ExampleModPlugin")] {
        assert_eq!(
            report.cards[index].issues,
            vec![Issue::DuplicateClassName {
                class_name: class_name.to_string()
            }]
        );
    }
}

#[test]
fn card_names_must_form_identifiers() {
    let report = validate_card(&Card::new("9 Lives"));
    assert_eq!(
        report.issues,
        vec![Issue::InvalidClassName {
            class_name: "9Lives".to_string()
        }]
    );

    let blank = validate_mod(&{
        let mut project = ready_mod();
        project.cards.push(Card::new("  "));
        project
    });
    assert_eq!(blank.cards[1].issues, vec![Issue::EmptyCardName]);
    assert_eq!(gate_export(&blank, true).blocking, vec!["card #2".to_string()]);
}

#[test]
fn duplicate_stats_warn_once() {
    let mut card = Card::new("Twice");
    card.stats.push(StatChange::new(Stat::Health, 1.2));
    card.stats.push(StatChange::new(Stat::Health, 1.4));
    card.stats.push(StatChange::new(Stat::Health, 1.6));
    assert_eq!(
        validate_card(&card).issues,
        vec![Issue::DuplicateStat { stat: Stat::Health }]
    );
}

#[test]
fn report_serializes_issue_kind() {
    let report = validate_card(&Card::new(""));
    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["issues"][0]["kind"], "empty_card_name");
}
