use screenplay_document::Document;
use screenplay_linter::{validate, RuleRegistry, Severity};

#[test]
fn test_validate_markup_script() {
    let doc = Document::load(Some(
        r#"<p class="format-heading1">INT. KITCHEN - NIGHT</p>
<p class="format-action">Rain on the window.</p>
<p class="format-dialogue">Is anyone there?</p>
<p class="format-character">MARY</p>
<p class="format-dialogue">Only me.</p>
<p class="format-heading1">The next morning</p>"#,
    ))
    .unwrap();

    let report = validate(&doc);

    assert_eq!(report.len(), 2);
    assert_eq!(report.issues[0].line_number, 3);
    assert_eq!(report.issues[0].severity, Severity::High);
    assert_eq!(report.issues[1].line_number, 6);
    assert_eq!(report.issues[1].severity, Severity::Low);
}

#[test]
fn test_default_document_is_clean() {
    assert!(validate(&Document::new()).is_empty());
}

#[test]
fn test_builtin_rules_are_registered() {
    let registry = RuleRegistry::default();
    let names: Vec<_> = registry.rules().iter().map(|rule| rule.name()).collect();

    assert_eq!(
        names,
        vec![
            "dialogue-needs-speaker",
            "character-needs-dialogue",
            "scene-heading-prefix"
        ]
    );
    assert!(registry.rules().iter().all(|rule| !rule.description().is_empty()));
}
