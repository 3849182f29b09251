//! Scoring properties of the matcher over the public API

use botia::matcher::{Matcher, StrategyKind, WholeWord};
use botia::{Database, DiagnosticRecord, Severity};

fn record(key: &str, title: &str, keywords: &[&str]) -> DiagnosticRecord {
    DiagnosticRecord {
        key: key.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        title: title.to_string(),
        severity: Severity::Medium,
        causes: vec![],
        solutions: vec![],
        estimated_cost: None,
        contributor: "test".to_string(),
    }
}

fn database(records: Vec<DiagnosticRecord>) -> Database {
    let mut database = Database::new();
    for record in records {
        database.insert(record).unwrap();
    }
    database
}

#[test]
fn test_example_queries_against_builtin_records() {
    let database = Database::builtin().unwrap();
    let matcher = Matcher::default();

    let found = matcher.best_match("mon voyant moteur est allumé", &database);
    assert_eq!(found.map(|r| r.title.as_str()), Some("Voyant moteur allumé"));

    assert!(matcher
        .best_match("la radio ne fonctionne pas", &database)
        .is_none());
}

#[test]
fn test_title_alone_selects_record() {
    let database = database(vec![
        record("fuite", "Fuite d'huile", &["flaque noire"]),
        record("freins", "Freins usés", &["plaquettes"]),
    ]);
    let matcher = Matcher::default();

    let found = matcher.best_match("j'ai une fuite d'huile", &database);
    assert_eq!(found.map(|r| r.key.as_str()), Some("fuite"));
    assert_eq!(matcher.score("j'ai une fuite d'huile", &database.records()[0]).score, 3);
}

#[test]
fn test_keyword_overlap_beats_title_bonus() {
    let database = database(vec![
        record("fuite", "Fuite d'huile", &["flaque noire"]),
        record("vidange", "Vidange", &["huile noire et épaisse"]),
    ]);
    let matcher = Matcher::default();

    // "fuite d'huile" earns 3, "huile noire et épaisse" earns 8
    let found = matcher.best_match("fuite d'huile, huile noire et épaisse", &database);
    assert_eq!(found.map(|r| r.key.as_str()), Some("vidange"));
}

#[test]
fn test_two_word_keywords_sum_to_eight() {
    let database = database(vec![record(
        "pneus",
        "Pneumatiques",
        &["pneu crevé", "pneu lisse"],
    )]);
    let matcher = Matcher::default();

    let score = matcher.score("pneu crevé et pneu lisse", &database.records()[0]);
    assert_eq!(score.score, 8);
}

#[test]
fn test_tie_break_is_stable_across_calls() {
    let database = database(vec![
        record("premier", "Premier", &["vibration"]),
        record("second", "Second", &["tremblement"]),
    ]);
    let matcher = Matcher::default();

    for _ in 0..5 {
        let found = matcher.best_match("vibration et tremblement", &database);
        assert_eq!(found.map(|r| r.key.as_str()), Some("premier"));
    }
}

#[test]
fn test_whole_word_only_changes_containment() {
    let database = database(vec![
        record("starter", "Démarreur", &["starter"]),
        record("batterie", "Batterie", &["batterie faible"]),
    ]);
    let substring = Matcher::from_kind(StrategyKind::Substring);
    let whole_word = Matcher::new(WholeWord);

    let query = "kickstarter, batterie faible";
    assert_eq!(substring.score(query, &database.records()[0]).score, 2);
    assert_eq!(whole_word.score(query, &database.records()[0]).score, 0);
    assert_eq!(
        substring.score(query, &database.records()[1]),
        whole_word.score(query, &database.records()[1])
    );
}

#[test]
fn test_rank_head_is_best_match() {
    let database = Database::builtin().unwrap();
    let matcher = Matcher::default();

    for query in [
        "voyant moteur et batterie",
        "démarrage difficile, check engine",
        "rien du tout",
    ] {
        let ranking = matcher.rank(query, &database, 1);
        let best = matcher.best_match(query, &database);
        assert_eq!(
            ranking.best().map(|c| c.record.key.clone()),
            best.map(|r| r.key.clone()),
            "query: {query}"
        );
    }
}
