//! Integration tests for the document model

use screenplay_document::{import, search, Block, Document, FormatKey, ImportKind};

fn scene() -> Document {
    Document::from_blocks(vec![
        Block::new(FormatKey::Heading1, "INT. HOUSE - DAY"),
        Block::new(FormatKey::Character, "JOHN (O.S.)"),
        Block::new(FormatKey::Parenthetical, "(quietly)"),
        Block::new(FormatKey::Dialogue, "Hello <i>there</i>"),
        Block::new(FormatKey::Transition, "CUT TO:"),
    ])
}

#[test]
fn test_serialized_document_loads_back() {
    let doc = scene();
    let loaded = Document::load(Some(&doc.serialize())).unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn test_markup_form_loads_back() {
    let doc = scene();
    let loaded = Document::load(Some(&doc.to_markup())).unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn test_html_import_maps_classes() {
    let html = "<html><body>\r\n<p class=\"format-heading1\">EXT. YARD - NIGHT</p>\r\n<p class='format-action'>Rain.</p>\r\n</body></html>";
    let doc = import::import(html, ImportKind::Markup).unwrap();

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.blocks()[0].format, FormatKey::Heading1);
    assert_eq!(doc.blocks()[1].text, "Rain.");
}

#[test]
fn test_search_uses_plain_text() {
    let hits = search(&scene(), "HELLO THERE", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].line_number, 4);
    assert_eq!(hits[0].text, "Hello there");
}

#[test]
fn test_serialized_import_normalizes_whitespace() {
    let doc = import::import("\u{feff}\r\n[]\r\n", ImportKind::Serialized).unwrap();
    assert!(doc.is_pristine());
}
