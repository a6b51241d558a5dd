//! File-backed cookie jar for browserless harness runs.

#[cfg(test)]
#[path = "file_store_test.rs"]
mod file_store_test;

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use thesisdesk_shell::session::cookie::{Cookie, CookieStore};

/// Name→value cookie jar persisted as a JSON object on disk.
///
/// Cookie attributes (path, expiry, SameSite) are browser concerns and are
/// not kept. An unreadable or missing file behaves as an empty jar.
pub struct FileCookieStore {
    path: PathBuf,
}

impl FileCookieStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_jar(&self) -> BTreeMap<String, String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        match serde_json::from_str(&raw) {
            Ok(jar) => jar,
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "cookie file unreadable; starting empty");
                BTreeMap::new()
            }
        }
    }

    fn write_jar(&self, jar: &BTreeMap<String, String>) {
        match serde_json::to_string_pretty(jar) {
            Ok(raw) => {
                if let Err(error) = fs::write(&self.path, raw) {
                    tracing::warn!(%error, path = %self.path.display(), "cookie file write failed");
                }
            }
            Err(error) => {
                tracing::warn!(%error, "cookie jar serialize failed");
            }
        }
    }
}

impl CookieStore for FileCookieStore {
    fn get(&self, name: &str) -> Option<String> {
        self.read_jar().get(name).cloned()
    }

    fn set(&self, cookie: Cookie<'static>) {
        let mut jar = self.read_jar();
        jar.insert(cookie.name().to_owned(), cookie.value().to_owned());
        self.write_jar(&jar);
    }

    fn remove(&self, name: &str) {
        let mut jar = self.read_jar();
        if jar.remove(name).is_some() {
            self.write_jar(&jar);
        }
    }
}
