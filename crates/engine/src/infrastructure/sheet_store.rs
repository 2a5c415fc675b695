//! File-backed sheet store.
//!
//! Each sheet is written as `<dir>/<name>.json`. Names are reduced to a
//! filesystem-safe form before use, so a character name can be passed
//! straight through.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::infrastructure::ports::{SheetStorePort, StoreError};

/// Name used when a character has none.
pub const DEFAULT_SHEET_NAME: &str = "V20_Character";

const EXTENSION: &str = "json";

pub struct FileSheetStore {
    dir: PathBuf,
}

impl FileSheetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, EXTENSION))
    }
}

/// Keep letters, digits, spaces, `-` and `_`; replace anything else with `_`.
/// Blank names fall back to [`DEFAULT_SHEET_NAME`].
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim_matches(|c| c == '_' || c == ' ').is_empty() {
        DEFAULT_SHEET_NAME.to_string()
    } else {
        cleaned
    }
}

#[async_trait]
impl SheetStorePort for FileSheetStore {
    async fn save(&self, name: &str, document: &str) -> Result<String, StoreError> {
        let name = sanitize_sheet_name(name);
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::io("create_dir", e))?;
        fs::write(self.path_for(&name), document)
            .await
            .map_err(|e| StoreError::io("write", e))?;
        tracing::debug!(sheet = %name, dir = %self.dir.display(), "Sheet written");
        Ok(name)
    }

    async fn load(&self, name: &str) -> Result<String, StoreError> {
        let name = sanitize_sheet_name(name);
        match fs::read_to_string(self.path_for(&name)).await {
            Ok(document) => Ok(document),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::not_found(name)),
            Err(e) => Err(StoreError::io("read", e)),
        }
    }

    async fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io("read_dir", e)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io("read_dir", e))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_readable_names() {
        assert_eq!(sanitize_sheet_name("Lucita de Aragon"), "Lucita de Aragon");
        assert_eq!(sanitize_sheet_name("  Beckett "), "Beckett");
        assert_eq!(sanitize_sheet_name("../etc/passwd"), "___etc_passwd");
    }

    #[test]
    fn sanitize_blank_falls_back() {
        assert_eq!(sanitize_sheet_name(""), DEFAULT_SHEET_NAME);
        assert_eq!(sanitize_sheet_name("   "), DEFAULT_SHEET_NAME);
        assert_eq!(sanitize_sheet_name("//"), DEFAULT_SHEET_NAME);
    }

    #[tokio::test]
    async fn save_then_load() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let store = FileSheetStore::new(temp_dir.path().join("sheets"));

        let stored = store.save("Beckett", "{\"builder\":{}}").await.expect("save");
        assert_eq!(stored, "Beckett");
        assert!(temp_dir.path().join("sheets/Beckett.json").exists());

        let loaded = store.load("Beckett").await.expect("load");
        assert_eq!(loaded, "{\"builder\":{}}");
    }

    #[tokio::test]
    async fn load_missing_is_not_found() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let store = FileSheetStore::new(temp_dir.path());
        let err = store.load("Nobody").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn list_is_sorted_and_skips_other_files() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let store = FileSheetStore::new(temp_dir.path());
        assert!(store.list().await.expect("list").is_empty());

        store.save("Zelios", "{}").await.expect("save");
        store.save("Anatole", "{}").await.expect("save");
        std::fs::write(temp_dir.path().join("notes.txt"), "x").expect("write");

        assert_eq!(store.list().await.expect("list"), vec!["Anatole", "Zelios"]);
    }

    #[tokio::test]
    async fn list_missing_dir_is_empty() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let store = FileSheetStore::new(temp_dir.path().join("absent"));
        assert!(store.list().await.expect("list").is_empty());
    }
}
