//! Tests for package metadata, source assembly and formatting properties.

use std::path::PathBuf;

use proptest::prelude::*;

use deck_model::{Card, Mod, Stat, StatChange};
use deck_report::{
    CARD_REGISTRY_NAME, Manifest, ReportError, build_export_request, build_sources, descriptor,
    escape_readme, format_number, generate_manifest, generate_readme,
};
use deck_standards::definition;

fn example_mod() -> Mod {
    let mut project = Mod::new("Example Mod", "com.example.rounds.example", "1.0.0");
    project.description = "Guns go brrr".to_string();
    project.export_folder = Some(PathBuf::from("/out"));

    let mut big_gun = Card::new("Big Gun");
    big_gun.stats.push(StatChange::new(Stat::Damage, 1.5));
    big_gun.stats.push(StatChange::new(Stat::Ammo, -20.0));
    project.cards.push(big_gun);

    let mut tank = Card::new("Tank");
    tank.stats.push(StatChange::new(Stat::ArmorHealth, 100.0));
    project.cards.push(tank);
    project
}

#[test]
fn manifest_snapshot() {
    let manifest = generate_manifest(&example_mod()).expect("manifest");
    insta::assert_snapshot!(manifest);
}

#[test]
fn manifest_parses_back() {
    let json = generate_manifest(&example_mod()).unwrap();
    let manifest: Manifest = serde_json::from_str(&json).unwrap();
    assert_eq!(manifest, Manifest::for_mod(&example_mod()));
    assert_eq!(manifest.dependencies.len(), 5);
}

#[test]
fn readme_lists_card_stats() {
    let mut project = example_mod();
    project.description = "Use `guns` for ${fun}".to_string();

    let readme = generate_readme(&project);
    assert_eq!(
        readme,
        "\nUse \\`guns\\` for \\${fun}\n\
         \n## Big Gun\n\
         - Damage +50%\n\
         - Ammunition -20\n\
         \n## Tank\n\
         - Armor Health +100\n"
    );
}

#[test]
fn readme_without_cards_is_the_description() {
    let mut project = Mod::new("M", "m", "1.0.0");
    project.description = "Hello".to_string();
    assert_eq!(generate_readme(&project), "\nHello\n");
}

#[test]
fn sources_are_ordered_registry_plugin_cards() {
    let sources = build_sources(&example_mod()).unwrap();
    let names: Vec<&str> = sources.iter().map(|source| source.name.as_str()).collect();
    assert_eq!(names, vec![CARD_REGISTRY_NAME, "ExampleMod", "BigGun", "Tank"]);
    assert!(sources[0].content.contains("public static class CardRegistry"));
    assert!(sources[1].content.contains("class ExampleModPlugin"));
}

#[test]
fn export_request_carries_csproj_and_sources() {
    let assemblies = vec![PathBuf::from("/game/Managed/UnboundLib.dll")];
    let request = build_export_request(&example_mod(), &assemblies).unwrap();
    assert_eq!(request.module_name, "ExampleMod");
    assert_eq!(request.export_folder, PathBuf::from("/out"));
    assert_eq!(request.source_files.len(), 4);
    assert!(request.project_file.contains("<Reference Include=\"UnboundLib\">"));
}

#[test]
fn export_request_needs_export_folder() {
    let mut project = example_mod();
    project.export_folder = None;
    let err = build_export_request(&project, &Vec::<PathBuf>::new()).unwrap_err();
    assert!(matches!(err, ReportError::MissingExportFolder));
}

#[test]
fn invalid_card_name_fails_source_build() {
    let mut project = example_mod();
    project.cards.push(Card::new("3 Lives"));
    let err = build_sources(&project).unwrap_err();
    assert!(matches!(err, ReportError::InvalidClassName { ref name } if name == "3 Lives"));
}

fn parse_signed(text: &str) -> f64 {
    text.trim_start_matches('+').parse().expect("numeric descriptor")
}

proptest! {
    #[test]
    fn additive_descriptor_is_signed_value_and_unit(value in -10_000.0f64..10_000.0) {
        for stat in [Stat::Ammo, Stat::TimeBetweenBullets, Stat::ReactivateAfterSeconds] {
            let def = definition(stat);
            let text = descriptor(def, value);
            prop_assert!(text.ends_with(def.unit));
            let number = &text[..text.len() - def.unit.len()];
            prop_assert_eq!(number.starts_with('+'), value >= 0.0);
            prop_assert_eq!(parse_signed(number), value);
        }
    }

    #[test]
    fn multiplicative_descriptor_is_floored_percent(value in -5.0f64..5.0) {
        let text = descriptor(definition(Stat::Damage), value);
        let expected = ((value - 1.0) * 100.0).floor();
        prop_assert!(text.ends_with('%'));
        let number = &text[..text.len() - 1];
        prop_assert_eq!(number.starts_with('+'), expected >= 0.0);
        prop_assert_eq!(parse_signed(number), expected);
    }

    #[test]
    fn readme_escaping_is_idempotent(text in "[a-z `${}\\\\]{0,40}") {
        let once = escape_readme(&text);
        prop_assert_eq!(escape_readme(&once), once.clone());
    }

    #[test]
    fn escaped_readme_has_no_bare_markers(text in "[a-z `${}\\\\]{0,40}") {
        let escaped = escape_readme(&text);
        let chars: Vec<char> = escaped.chars().collect();
        for (index, ch) in chars.iter().enumerate() {
            let interpolation = *ch == '$' && chars.get(index + 1) == Some(&'{');
            if *ch == '`' || interpolation {
                let backslashes = chars[..index].iter().rev().take_while(|c| **c == '\\').count();
                prop_assert!(backslashes % 2 == 1, "bare marker in {}", escaped);
            }
        }
    }

    #[test]
    fn number_format_round_trips(value in proptest::num::f64::NORMAL) {
        prop_assert_eq!(format_number(value).parse::<f64>().unwrap(), value);
    }
}
