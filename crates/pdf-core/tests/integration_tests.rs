//! Integration tests for pdf-core
//!
//! These tests build documents, serialize them, and read them back with
//! lopdf to check the resulting object graph.

use lopdf::content::Content;
use lopdf::{Document, Object};
use pdf_core::{Align, PageSize, PdfDocument, PdfError, StandardFont};
use pretty_assertions::assert_eq;

/// Build a Helvetica 12pt document with the given number of pages
fn create_doc(pages: usize) -> PdfDocument {
    let mut doc = PdfDocument::new(PageSize::LETTER);
    doc.set_font(StandardFont::Helvetica, 12.0);
    for _ in 0..pages {
        doc.add_page();
    }
    doc
}

/// Decompressed content stream of a page (1-indexed)
fn page_content(doc: &Document, page: u32) -> Vec<u8> {
    let pages = doc.get_pages();
    let page_id = pages[&page];
    let page_dict = doc.get_object(page_id).unwrap().as_dict().unwrap();
    let contents_id = page_dict.get(b"Contents").unwrap().as_reference().unwrap();
    let stream = doc.get_object(contents_id).unwrap().as_stream().unwrap();
    stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone())
}

/// Text shown by every Tj operator on a page, in drawing order
fn shown_strings(doc: &Document, page: u32) -> Vec<String> {
    let content = Content::decode(&page_content(doc, page)).unwrap();
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .map(|op| match &op.operands[0] {
            Object::String(bytes, _) => String::from_utf8_lossy(bytes).into_owned(),
            other => panic!("unexpected Tj operand: {other:?}"),
        })
        .collect()
}

/// Numeric value of an Integer or Real object
fn number(obj: &Object) -> f64 {
    match obj {
        Object::Integer(i) => *i as f64,
        Object::Real(r) => *r as f64,
        other => panic!("not a number: {other:?}"),
    }
}

#[test]
fn test_empty_document_roundtrip() {
    let doc = create_doc(1);
    let bytes = doc.to_bytes().expect("Failed to save PDF");

    assert!(bytes.starts_with(b"%PDF-1.4"));
    let loaded = Document::load_mem(&bytes).expect("Failed to re-open PDF");
    assert_eq!(loaded.get_pages().len(), 1);
}

#[test]
fn test_insert_text_basic() {
    let mut doc = create_doc(1);
    doc.insert_text("Hello", 1, 72.0, 720.0, Align::Left)
        .expect("Failed to insert text");

    let bytes = doc.to_bytes().expect("Failed to save PDF");
    let loaded = Document::load_mem(&bytes).unwrap();

    assert_eq!(shown_strings(&loaded, 1), vec!["Hello".to_string()]);
    let content = String::from_utf8(page_content(&loaded, 1)).unwrap();
    assert!(content.contains("/F1 12 Tf"));
    assert!(content.contains("72 720 Td"));
}

#[test]
fn test_text_lands_on_requested_pages() {
    let mut doc = create_doc(3);
    doc.insert_text("first", 1, 72.0, 720.0, Align::Left).unwrap();
    doc.insert_text("third", 3, 72.0, 720.0, Align::Left).unwrap();
    doc.insert_text("again", 1, 72.0, 706.0, Align::Left).unwrap();

    let bytes = doc.to_bytes().unwrap();
    let loaded = Document::load_mem(&bytes).unwrap();

    assert_eq!(loaded.get_pages().len(), 3);
    assert_eq!(shown_strings(&loaded, 1), vec!["first", "again"]);
    assert!(shown_strings(&loaded, 2).is_empty());
    assert_eq!(shown_strings(&loaded, 3), vec!["third"]);
}

#[test]
fn test_media_box_and_font_resources() {
    let mut doc = create_doc(1);
    doc.insert_text("x", 1, 72.0, 720.0, Align::Left).unwrap();

    let bytes = doc.to_bytes().unwrap();
    let loaded = Document::load_mem(&bytes).unwrap();

    let catalog = loaded.catalog().unwrap();
    let pages_id = catalog.get(b"Pages").unwrap().as_reference().unwrap();
    let pages = loaded.get_object(pages_id).unwrap().as_dict().unwrap();

    let media_box = pages.get(b"MediaBox").unwrap().as_array().unwrap();
    let width = number(&media_box[2]);
    let height = number(&media_box[3]);
    assert_eq!((width, height), (612.0, 792.0));

    let resources_id = pages.get(b"Resources").unwrap().as_reference().unwrap();
    let resources = loaded.get_object(resources_id).unwrap().as_dict().unwrap();
    let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();
    let font_id = fonts.get(b"F1").unwrap().as_reference().unwrap();
    let font = loaded.get_object(font_id).unwrap().as_dict().unwrap();

    assert_eq!(font.get(b"BaseFont").unwrap().as_name_str().unwrap(), "Helvetica");
    assert_eq!(font.get(b"Subtype").unwrap().as_name_str().unwrap(), "Type1");
}

#[test]
fn test_mixed_fonts_get_distinct_resources() {
    let mut doc = create_doc(1);
    doc.insert_text("plain", 1, 72.0, 720.0, Align::Left).unwrap();
    doc.set_font(StandardFont::Courier, 10.0);
    doc.insert_text("mono", 1, 72.0, 700.0, Align::Left).unwrap();

    let bytes = doc.to_bytes().unwrap();
    let loaded = Document::load_mem(&bytes).unwrap();
    let content = String::from_utf8(page_content(&loaded, 1)).unwrap();

    assert!(content.contains("/F1 12 Tf"));
    assert!(content.contains("/F2 10 Tf"));
}

#[test]
fn test_info_dictionary() {
    let mut doc = create_doc(1);
    doc.set_info("Title", "Sample 50000 Words");
    doc.set_info("Creator", "sample-pdf");

    let bytes = doc.to_bytes().unwrap();
    let loaded = Document::load_mem(&bytes).unwrap();

    let info_id = loaded.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = loaded.get_object(info_id).unwrap().as_dict().unwrap();
    match info.get(b"Title").unwrap() {
        Object::String(bytes, _) => assert_eq!(bytes.as_slice(), b"Sample 50000 Words"),
        other => panic!("unexpected Title: {other:?}"),
    }
}

#[test]
fn test_info_dictionary_unicode_title() {
    let mut doc = create_doc(1);
    doc.set_info("Title", "Caf\u{e9} \u{2014} \u{0e17}\u{0e14}\u{0e2a}\u{0e2d}\u{0e1a}");

    let loaded = Document::load_mem(&doc.to_bytes().unwrap()).unwrap();
    let info_id = loaded.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = loaded.get_object(info_id).unwrap().as_dict().unwrap();

    let bytes = match info.get(b"Title").unwrap() {
        Object::String(bytes, _) => bytes.clone(),
        other => panic!("unexpected Title: {other:?}"),
    };
    assert_eq!(&bytes[..2], &[0xFE, 0xFF]);

    let units: Vec<u16> = bytes[2..]
        .chunks(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    assert_eq!(
        String::from_utf16(&units).unwrap(),
        "Caf\u{e9} \u{2014} \u{0e17}\u{0e14}\u{0e2a}\u{0e2d}\u{0e1a}"
    );
}

#[test]
fn test_winansi_punctuation_in_content() {
    let mut doc = create_doc(1);
    doc.insert_text("a\u{2014}b \u{20AC}", 1, 72.0, 720.0, Align::Left)
        .unwrap();

    let loaded = Document::load_mem(&doc.to_bytes().unwrap()).unwrap();
    let content = Content::decode(&page_content(&loaded, 1)).unwrap();
    let shown = content
        .operations
        .iter()
        .find(|op| op.operator == "Tj")
        .unwrap();
    match &shown.operands[0] {
        Object::String(bytes, _) => assert_eq!(bytes.as_slice(), &[0x61, 0x97, 0x62, 0x20, 0x80]),
        other => panic!("unexpected Tj operand: {other:?}"),
    }
}

#[test]
fn test_right_aligned_text_ends_at_anchor() {
    let mut doc = create_doc(1);
    let width = doc.get_text_width("Right").unwrap();
    doc.insert_text("Right", 1, 540.0, 720.0, Align::Right).unwrap();

    let loaded = Document::load_mem(&doc.to_bytes().unwrap()).unwrap();
    let content = Content::decode(&page_content(&loaded, 1)).unwrap();
    let td = content
        .operations
        .iter()
        .find(|op| op.operator == "Td")
        .unwrap();

    assert!((number(&td.operands[0]) - (540.0 - width)).abs() < 1e-3);
    assert_eq!(number(&td.operands[1]), 720.0);
}

#[test]
fn test_output_is_deterministic() {
    let mut doc = create_doc(2);
    doc.set_info("Title", "Determinism");
    doc.insert_text("same", 1, 72.0, 720.0, Align::Left).unwrap();
    doc.insert_text("bytes", 2, 72.0, 720.0, Align::Left).unwrap();

    let first = doc.to_bytes().unwrap();
    let second = doc.to_bytes().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");
    std::fs::write(&path, b"not a pdf").unwrap();

    let mut doc = create_doc(1);
    doc.insert_text("fresh", 1, 72.0, 720.0, Align::Left).unwrap();
    doc.save(&path).expect("Failed to save PDF");

    let loaded = Document::load(&path).unwrap();
    assert_eq!(shown_strings(&loaded, 1), vec!["fresh"]);
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.pdf");

    let doc = create_doc(1);
    let err = doc.save(&path).unwrap_err();
    assert!(matches!(err, PdfError::SaveError(_)));
}

#[test]
fn test_text_width_matches_metrics() {
    let doc = create_doc(0);
    let width = doc.get_text_width("Hello").unwrap();
    assert_eq!(
        width,
        StandardFont::Helvetica.text_width_points("Hello", 12.0)
    );
}
