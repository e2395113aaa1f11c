//! Tests for deck-model types.

use deck_model::{
    Card, CardColor, Mod, ModelError, Rarity, SimpleAmount, Stat, StatChange,
};

fn sample_mod() -> Mod {
    let mut project = Mod::new("Example Mod", "com.example.rounds.example", "1.0.0");
    project.description = "Guns go brrr".to_string();
    project.cards.push(Card {
        name: "Big Gun".to_string(),
        description: "More damage, less ammo".to_string(),
        art_url: String::new(),
        rarity: Rarity::Rare,
        color: CardColor::DestructiveRed,
        stats: vec![
            StatChange::new(Stat::Damage, 1.5),
            StatChange::new(Stat::Ammo, -20.0)
                .with_positive(false)
                .with_simple_amount(SimpleAmount::Lower),
        ],
    });
    project
}

#[test]
fn project_round_trips_through_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("example.decksmith.json");
    let project = sample_mod();

    project.save(&path).expect("save project");
    let loaded = Mod::load(&path).expect("load project");

    assert_eq!(loaded, project);
}

#[test]
fn project_json_uses_wire_identifiers() {
    let json = serde_json::to_string(&sample_mod()).expect("serialize");
    assert!(json.contains(r#""stat":"damage""#));
    assert!(json.contains(r#""simple_amount":"lower""#));
    assert!(json.contains(r#""rarity":"Rare""#));
    assert!(json.contains(r#""color":"DestructiveRed""#));
}

#[test]
fn unknown_stat_in_project_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("bad.decksmith.json");
    std::fs::write(
        &path,
        r#"{"name":"M","id":"m","version":"1.0.0","cards":[{"name":"C","stats":[{"stat":"mana","value":2}]}]}"#,
    )
    .unwrap();

    let err = Mod::load(&path).unwrap_err();
    assert!(matches!(err, ModelError::Json { .. }));
    assert!(err.to_string().contains("bad.decksmith.json"));
}

#[test]
fn missing_project_reports_io_error() {
    let err = Mod::load(std::path::Path::new("/nonexistent/project.json")).unwrap_err();
    assert!(matches!(err, ModelError::Io { .. }));
}

#[test]
fn card_edits_through_index() {
    let mut project = sample_mod();
    let index = project.add_card();
    project.card_mut(index).unwrap().name = "Second".to_string();
    assert_eq!(project.cards[1].name, "Second");

    let removed = project.remove_card(0).unwrap();
    assert_eq!(removed.name, "Big Gun");
    assert_eq!(project.cards.len(), 1);
    assert!(project.card_mut(5).is_err());
}
