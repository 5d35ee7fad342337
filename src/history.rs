//! Saved-script history: an append-only (prepend) list of snapshots with a
//! write-through JSON mirror on disk.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::warn;

use crate::error::Result;

/// One saved snapshot. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedScript {
    pub id: i64,
    pub content: String,
    pub timestamp: String,
}

/// Outcome of rehydrating the store from disk. `recovered` is set when the
/// persisted file existed but could not be used, so the UI can warn once.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    pub entries: Vec<SavedScript>,
    pub recovered: bool,
}

/// Owns the history sequence (most-recent-first) and its persisted mirror.
pub struct HistoryStore {
    path: PathBuf,
    scripts: Mutex<Vec<SavedScript>>,
}

impl HistoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            scripts: Mutex::new(Vec::new()),
        }
    }

    /// Default storage location under the user's home directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".bashbuddy").join("saved_scripts.json"))
    }

    /// Rehydrates the list from disk. A missing file means an empty history;
    /// an unreadable or corrupt file degrades to an empty history with a
    /// warning rather than failing startup.
    pub async fn load(&self) -> LoadReport {
        let (entries, recovered) = match std::fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str::<Vec<SavedScript>>(&raw) {
                Ok(entries) => (entries, false),
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "saved scripts file is corrupt, starting empty");
                    (Vec::new(), true)
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => (Vec::new(), false),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read saved scripts, starting empty");
                (Vec::new(), true)
            }
        };

        *self.scripts.lock().await = entries.clone();
        LoadReport { entries, recovered }
    }

    /// Prepends a new snapshot and writes the whole list through to disk.
    /// Whitespace-only content is a no-op and returns `None`.
    pub async fn save(&self, content: &str) -> Result<Option<SavedScript>> {
        if content.trim().is_empty() {
            return Ok(None);
        }

        let now = Utc::now();
        let mut scripts = self.scripts.lock().await;

        let mut id = now.timestamp_millis();
        // Two saves inside the same millisecond would collide; keep ids
        // strictly descending from the front instead.
        if let Some(newest) = scripts.first() {
            if newest.id >= id {
                id = newest.id + 1;
            }
        }

        let entry = SavedScript {
            id,
            content: content.to_string(),
            timestamp: now.to_rfc3339(),
        };
        scripts.insert(0, entry.clone());

        persist(&self.path, &scripts)?;
        Ok(Some(entry))
    }

    /// Snapshot of the current history, most-recent-first.
    pub async fn entries(&self) -> Vec<SavedScript> {
        self.scripts.lock().await.clone()
    }
}

fn persist(path: &Path, scripts: &[SavedScript]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(scripts)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Compact one-line summary of a saved script: the first line that is
/// non-empty and not a comment, truncated to 30 characters.
pub fn preview(content: &str) -> String {
    for line in content.lines() {
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            let mut chars = trimmed.chars();
            let head: String = chars.by_ref().take(30).collect();
            return if chars.next().is_some() {
                format!("{head}...")
            } else {
                head
            };
        }
    }
    "Empty script".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> HistoryStore {
        HistoryStore::new(dir.path().join("saved_scripts.json"))
    }

    #[tokio::test]
    async fn save_prepends_and_keeps_content_unchanged() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.save("echo one").await.unwrap().unwrap();
        store.save("echo two").await.unwrap().unwrap();

        let entries = store.entries().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].content, "echo two");
        assert_eq!(entries[1].content, "echo one");
    }

    #[tokio::test]
    async fn blank_content_is_a_no_op() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.save("").await.unwrap().is_none());
        assert!(store.save("   \n\t").await.unwrap().is_none());
        assert!(store.entries().await.is_empty());
        assert!(!dir.path().join("saved_scripts.json").exists());
    }

    #[tokio::test]
    async fn ids_stay_unique_across_rapid_saves() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        for i in 0..5 {
            store.save(&format!("echo {i}")).await.unwrap();
        }

        let entries = store.entries().await;
        for pair in entries.windows(2) {
            assert!(pair[0].id > pair[1].id);
        }
    }

    #[tokio::test]
    async fn save_then_load_round_trips_losslessly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved_scripts.json");

        let store = HistoryStore::new(path.clone());
        store.save("echo hi").await.unwrap();
        let written = store.entries().await;

        let reopened = HistoryStore::new(path);
        let report = reopened.load().await;
        assert!(!report.recovered);
        assert_eq!(report.entries, written);
        assert_eq!(report.entries[0].content, "echo hi");
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty_without_warning() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let report = store.load().await;
        assert!(report.entries.is_empty());
        assert!(!report.recovered);
    }

    #[tokio::test]
    async fn corrupt_file_degrades_to_empty_with_recovery_flag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved_scripts.json");
        std::fs::write(&path, "{ definitely not a list").unwrap();

        let store = HistoryStore::new(path);
        let report = store.load().await;
        assert!(report.entries.is_empty());
        assert!(report.recovered);
    }

    #[tokio::test]
    async fn load_replaces_in_memory_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved_scripts.json");

        let writer = HistoryStore::new(path.clone());
        writer.save("echo persisted").await.unwrap();

        let store = HistoryStore::new(path);
        store.load().await;
        store.save("echo fresh").await.unwrap();

        let entries = store.entries().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].content, "echo fresh");
        assert_eq!(entries[1].content, "echo persisted");
    }

    #[test]
    fn entry_list_serialization_round_trips() {
        let entries = vec![
            SavedScript {
                id: 2,
                content: "echo two\nwith lines".into(),
                timestamp: "2025-01-02T00:00:00+00:00".into(),
            },
            SavedScript {
                id: 1,
                content: "echo one".into(),
                timestamp: "2025-01-01T00:00:00+00:00".into(),
            },
        ];
        let json = serde_json::to_string(&entries).unwrap();
        let back: Vec<SavedScript> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entries);
    }

    #[test]
    fn preview_skips_comments_and_blank_lines() {
        let script = "#!/bin/bash\n\n# setup\necho ready\n";
        assert_eq!(preview(script), "echo ready");
    }

    #[test]
    fn preview_truncates_long_lines() {
        let script = "this line is well over thirty characters long\n";
        let out = preview(script);
        assert_eq!(out, "this line is well over thirty ...");
        assert_eq!(out.chars().count(), 33);
    }

    #[test]
    fn preview_of_comment_only_script_is_placeholder() {
        assert_eq!(preview("# nothing\n\n#!/bin/bash\n"), "Empty script");
        assert_eq!(preview(""), "Empty script");
    }

    #[test]
    fn preview_is_idempotent() {
        let script = "echo hi\n";
        assert_eq!(preview(script), preview(script));
    }
}
