use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let about = About::load(dir.path().join("about.txt")).unwrap();
    assert_eq!(about, About::default());
    assert!(!about.content.is_empty());
}

#[test]
fn save_trims_and_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("about.txt");

    let saved = About::save(&path, "\n  Hi, I write about Rust.\n\n").unwrap();
    assert_eq!(saved.content, "Hi, I write about Rust.");
    assert_eq!(About::load(&path).unwrap(), saved);
}

#[test]
fn blank_save_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("about.txt");
    About::save(&path, "Original").unwrap();

    assert!(matches!(
        About::save(&path, " \n\t"),
        Err(Error::MissingField("content"))
    ));
    assert_eq!(About::load(&path).unwrap().content, "Original");
}
