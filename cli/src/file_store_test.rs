use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use super::*;

static NEXT_JAR: AtomicU32 = AtomicU32::new(0);

/// A unique throwaway jar path per test.
fn temp_jar() -> PathBuf {
    let n = NEXT_JAR.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("thesisdesk-jar-{}-{n}.json", std::process::id()))
}

// =============================================================
// FileCookieStore
// =============================================================

#[test]
fn missing_file_behaves_as_empty_jar() {
    let store = FileCookieStore::new(temp_jar());
    assert_eq!(store.get("authState"), None);
}

#[test]
fn set_then_get_round_trips_through_disk() {
    let path = temp_jar();
    let store = FileCookieStore::new(path.clone());

    store.set(Cookie::new("authState", r#"{"userId":"u1"}"#));
    assert_eq!(store.get("authState").as_deref(), Some(r#"{"userId":"u1"}"#));

    // A second store on the same path sees the write.
    let reopened = FileCookieStore::new(path.clone());
    assert_eq!(reopened.get("authState").as_deref(), Some(r#"{"userId":"u1"}"#));

    let _ = fs::remove_file(path);
}

#[test]
fn remove_deletes_the_entry() {
    let path = temp_jar();
    let store = FileCookieStore::new(path.clone());

    store.set(Cookie::new("authState", "x"));
    store.remove("authState");
    assert_eq!(store.get("authState"), None);

    let _ = fs::remove_file(path);
}

#[test]
fn unreadable_file_behaves_as_empty_jar() {
    let path = temp_jar();
    fs::write(&path, "not a json object").unwrap();

    let store = FileCookieStore::new(path.clone());
    assert_eq!(store.get("authState"), None);

    let _ = fs::remove_file(path);
}
