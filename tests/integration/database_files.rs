//! Loading databases and configuration from disk

use botia::commands::{load_runtime, GlobalArgs};
use botia::database::load_database;
use botia::validation::clap_key_validator;
use botia::{Answer, Database, DatabaseError};
use tempfile::TempDir;

const ORIGINAL_LAYOUT: &str = r#"{
  "version": "2.1",
  "metadata": {"total_keywords": 5},
  "diagnostics": {
    "surchauffe": {
      "keywords": ["surchauffe", "température moteur", "liquide de refroidissement"],
      "titre": "Surchauffe moteur",
      "urgence": "critique",
      "causes": ["Fuite de liquide", "Thermostat bloqué"],
      "solutions": ["Arrêt immédiat du véhicule", "Vérifier le niveau de liquide"],
      "cout_estime": "50-1200€",
      "contributeur": "système"
    },
    "freins": {
      "keywords": ["freins qui grincent", "grincement"],
      "titre": "Freins bruyants",
      "urgence": "elevee",
      "causes": ["Plaquettes usées"],
      "solutions": ["Remplacer les plaquettes"],
      "contributeur": "bob"
    }
  }
}"#;

#[test]
fn test_load_original_layout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("diagnostics_complet.json");
    std::fs::write(&path, ORIGINAL_LAYOUT).unwrap();

    let database = load_database(&path).unwrap();
    assert_eq!(database.version(), Some("2.1"));

    let keys: Vec<_> = database.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["surchauffe", "freins"]);

    let brakes = database.get("freins").unwrap();
    assert_eq!(brakes.estimated_cost, None);
    assert_eq!(brakes.contributor, "bob");
}

#[test]
fn test_reinserting_existing_key_is_rejected() {
    let mut database = Database::builtin().unwrap();
    let copy = database.get("voyant_moteur").unwrap().clone();

    let err = database.insert(copy).unwrap_err();
    assert!(matches!(err, DatabaseError::DuplicateKey(_)));
}

#[test]
fn test_accented_key_can_be_listed_and_shown() {
    let database = Database::from_json_str(
        r#"{"diagnostics": {"freins_arrière": {"keywords": ["frein à main"], "titre": "Freins arrière", "urgence": "elevee"}}}"#,
    )
    .unwrap();

    let key = clap_key_validator("freins_arrière").unwrap();
    assert_eq!(database.get(&key).map(|r| r.title.as_str()), Some("Freins arrière"));
}

#[test]
fn test_repeated_key_in_file_fails_to_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("doublon.json");
    std::fs::write(
        &path,
        r#"{"diagnostics": {
            "a": {"keywords": ["bruit"], "titre": "Premier", "urgence": "faible"},
            "a": {"keywords": ["bruit"], "titre": "Second", "urgence": "faible"}
        }}"#,
    )
    .unwrap();

    let err = load_database(&path).unwrap_err();
    let cause = err.downcast_ref::<DatabaseError>().unwrap();
    assert!(matches!(cause, DatabaseError::DuplicateKey(k) if k == "a"));
}

#[test]
fn test_runtime_uses_config_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("db.json"), ORIGINAL_LAYOUT).unwrap();
    let config_path = temp_dir.path().join("botia.toml");
    std::fs::write(
        &config_path,
        r#"
[database]
path = "db.json"

[matching]
strategy = "whole-word"
top = 1
"#,
    )
    .unwrap();

    let args = GlobalArgs {
        config: Some(config_path),
        ..Default::default()
    };
    let mut runtime = load_runtime(&args).unwrap();

    assert_eq!(runtime.config.matching.top, 1);
    assert_eq!(runtime.session.matcher().strategy_name(), "whole-word");

    match runtime.session.ask("ma voiture est en surchauffe") {
        Answer::Diagnostic(record) => assert_eq!(record.key, "surchauffe"),
        other => panic!("expected diagnostic, got {other:?}"),
    }
    // Whole-word matching rejects "grincement" inside "grincements"
    assert!(matches!(
        runtime.session.ask("des grincements"),
        Answer::Unanswered(_)
    ));
}
