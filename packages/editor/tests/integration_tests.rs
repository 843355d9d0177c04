//! Session, history and pipeline working together

use screenplay_editor::{EditSession, EditorError, HistoryError, Mutation, Pipeline};

const SAVED: &str = r#"[
    {"format": "heading-1", "text": "INT. HOUSE - DAY"},
    {"format": "character", "text": "JOHN"},
    {"format": "dialogue", "text": "Hello there"}
]"#;

#[test]
fn test_load_edit_undo_cycle() {
    let mut session = EditSession::load("local", Some(SAVED), 50).unwrap();
    let mut pipeline = Pipeline::new();

    let before = pipeline.run(session.document());
    assert!(before.report.is_empty());
    assert_eq!(before.analytics.character_stats["JOHN"].words, 2);

    session.set_active_block(1).unwrap();
    session.apply_format("action").unwrap();
    session.commit().unwrap();

    let after = pipeline.run(session.document());
    assert_eq!(after.report.len(), 1);
    assert!(after.analytics.character_stats.is_empty());

    session.undo().unwrap();
    let restored = pipeline.run(session.document());
    assert_eq!(restored, before);
}

#[test]
fn test_malformed_load_is_rejected() {
    let err = EditSession::load("local", Some("not a screenplay"), 50)
        .err()
        .unwrap();
    assert!(matches!(err, EditorError::Document(_)));
}

#[test]
fn test_redo_after_fresh_edit_fails() {
    let mut session = EditSession::load("local", Some(SAVED), 50).unwrap();

    session
        .apply(Mutation::UpdateText {
            index: 2,
            text: "Goodbye".to_string(),
        })
        .unwrap();
    session.commit().unwrap();
    session.undo().unwrap();

    session
        .apply(Mutation::UpdateText {
            index: 2,
            text: "Hi".to_string(),
        })
        .unwrap();

    let err = session.redo().unwrap_err();
    assert_eq!(err, EditorError::History(HistoryError::NothingToRedo));
    assert_eq!(session.document().blocks()[2].text, "Hi");
}
