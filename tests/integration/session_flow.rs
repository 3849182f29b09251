//! End-to-end session behaviour: asking, logging, contributing, exporting

use botia::commands::chat::{run_loop, ChatSettings};
use botia::export::ExportDocument;
use botia::{Answer, Database, DiagnosticRecord, Matcher, Session, SessionOptions, Severity};
use std::io::Cursor;
use tempfile::TempDir;

fn builtin_session(options: SessionOptions) -> Session {
    Session::new(Database::builtin().unwrap(), Matcher::default(), options)
}

fn brakes_record() -> DiagnosticRecord {
    DiagnosticRecord {
        key: "freins".to_string(),
        keywords: vec!["freins qui grincent".to_string(), "grincement".to_string()],
        title: "Freins bruyants".to_string(),
        severity: Severity::High,
        causes: vec!["Plaquettes usées".to_string()],
        solutions: vec!["Remplacer les plaquettes".to_string()],
        estimated_cost: Some("80-300€".to_string()),
        contributor: "garage-du-coin".to_string(),
    }
}

#[test]
fn test_full_session_export() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = builtin_session(SessionOptions::default());

    assert!(matches!(
        session.ask("voyant moteur allumé"),
        Answer::Diagnostic(_)
    ));
    assert!(matches!(
        session.ask("freins qui grincent"),
        Answer::Unanswered(_)
    ));
    assert!(matches!(
        session.ask("freins qui grincent"),
        Answer::Unanswered(_)
    ));

    let question_id = session.unanswered()[0].id.clone();
    session
        .contribute(brakes_record(), Some(&question_id))
        .unwrap();

    let path = session.export().write_to_dir(temp_dir.path()).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(value["statistics"]["totalQuestions"], 3);
    assert_eq!(value["statistics"]["unansweredCount"], 1);
    assert_eq!(value["statistics"]["contributionsCount"], 1);
    assert_eq!(value["unansweredQuestions"][0]["question"], "freins qui grincent");
    assert_eq!(value["contributions"][0]["recordKey"], "freins");
    assert_eq!(value["contributions"][0]["questionId"], question_id.as_str());

    let parsed: ExportDocument = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.unanswered_questions.len(), 1);
}

#[test]
fn test_contributed_record_answers_later_questions() {
    let mut session = builtin_session(SessionOptions::default());
    session.contribute(brakes_record(), None).unwrap();

    match session.ask("mes freins qui grincent au freinage") {
        Answer::Diagnostic(record) => assert_eq!(record.key, "freins"),
        other => panic!("expected diagnostic, got {other:?}"),
    }
    assert_eq!(session.stats().diagnostics, 3);
}

#[test]
fn test_merged_questions_sort_by_frequency() {
    let mut session = builtin_session(SessionOptions {
        merge_duplicates: true,
    });
    for question in [
        "clim en panne",
        "essuie-glace bloqué",
        "Essuie-glace bloqué",
        "essuie-glace  bloqué",
    ] {
        session.ask(question);
    }

    let by_frequency = session.unanswered_by_frequency();
    assert_eq!(by_frequency.len(), 2);
    assert_eq!(by_frequency[0].question_text, "essuie-glace bloqué");
    assert_eq!(by_frequency[0].occurrence_count, 3);
    assert_eq!(by_frequency[1].question_text, "clim en panne");
}

#[test]
fn test_chat_script_with_export() {
    let temp_dir = TempDir::new().unwrap();
    let export_dir = temp_dir.path().join("exports");
    let mut session = builtin_session(SessionOptions::default());
    let settings = ChatSettings {
        top: 3,
        export_dir: export_dir.clone(),
    };

    let script = "batterie à plat\nla radio ne fonctionne pas\n/export\nexit\n";
    let mut output = Vec::new();
    run_loop(&mut session, Cursor::new(script), &mut output, &settings).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Problèmes de démarrage"));
    assert!(output.contains("No diagnostic found"));
    assert!(output.contains("Export written to"));
    assert!(output.contains("Goodbye"));

    let files: Vec<_> = std::fs::read_dir(&export_dir).unwrap().collect();
    assert_eq!(files.len(), 1);
}
