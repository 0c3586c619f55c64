use std::fs;

use invoview::catalog::{Catalog, ImageStore, ReadError};
use tempfile::TempDir;

/// Build a catalog root with two models and some decoys.
fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("model-b")).unwrap();
    fs::create_dir(root.join("model-a")).unwrap();
    fs::write(
        root.join("model-a").join("b_invoice.json"),
        r#"{"type": "invoice", "amount": 10}"#,
    )
    .unwrap();
    fs::write(
        root.join("model-a").join("a_invoice.json"),
        r#"{"type": "receipt"}"#,
    )
    .unwrap();
    fs::write(root.join("model-a").join("notes.txt"), "not json").unwrap();
    fs::write(root.join("model-a").join("broken.json"), "{ not json").unwrap();
    // A stray file at the root is not a model.
    fs::write(root.join("stray.json"), "{}").unwrap();

    dir
}

#[test]
fn models_are_sorted_directories_only() {
    let dir = fixture();
    let catalog = Catalog::new(dir.path());
    assert_eq!(catalog.models(), ["model-a", "model-b"]);
}

#[test]
fn missing_root_is_an_empty_catalog() {
    let catalog = Catalog::new("/nonexistent/invoview-test-root");
    assert!(catalog.models().is_empty());
    assert!(catalog.documents("anything").is_empty());
}

#[test]
fn documents_are_sorted_json_files_only() {
    let dir = fixture();
    let catalog = Catalog::new(dir.path());
    assert_eq!(
        catalog.documents("model-a"),
        ["a_invoice.json", "b_invoice.json", "broken.json"]
    );
    assert!(catalog.documents("model-b").is_empty());
    assert!(catalog.documents("no-such-model").is_empty());
}

#[test]
fn path_escaping_selectors_are_rejected() {
    let dir = fixture();
    let catalog = Catalog::new(dir.path());
    assert!(catalog.documents("../model-a").is_empty());
    assert!(matches!(
        catalog.read_document("model-a", "../stray.json"),
        Err(ReadError::Missing)
    ));
    assert!(matches!(
        catalog.read_document("..", "stray.json"),
        Err(ReadError::Missing)
    ));
}

#[test]
fn read_document_parses_json() {
    let dir = fixture();
    let catalog = Catalog::new(dir.path());
    let doc = catalog.read_document("model-a", "b_invoice.json").unwrap();
    assert_eq!(doc["type"], "invoice");
    assert_eq!(doc["amount"], 10);
}

#[test]
fn read_failures_are_distinguished() {
    let dir = fixture();
    let catalog = Catalog::new(dir.path());
    assert!(matches!(
        catalog.read_document("model-a", "gone.json"),
        Err(ReadError::Missing)
    ));
    assert!(matches!(
        catalog.read_document("model-a", "broken.json"),
        Err(ReadError::Malformed(_))
    ));
}

#[test]
fn image_lookup_probes_directories_in_order() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("png");
    let second = dir.path().join("invoices").join("png");
    fs::create_dir_all(&first).unwrap();
    fs::create_dir_all(&second).unwrap();
    fs::write(first.join("both.png"), b"first").unwrap();
    fs::write(second.join("both.png"), b"second").unwrap();
    fs::write(second.join("only_second.png"), b"second-only").unwrap();

    let store = ImageStore::new(vec![first, second]);

    let both = store.find("both").unwrap();
    assert_eq!(both.bytes, b"first");
    assert_eq!(both.media_type, "image/png");

    assert_eq!(store.find("only_second").unwrap().bytes, b"second-only");
    assert!(store.find("missing").is_none());
    assert!(store.find("../both").is_none());
}
