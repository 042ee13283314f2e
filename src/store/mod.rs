use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

/// File extension every note is stored under.
pub const NOTE_EXTENSION: &str = "txt";

/// Characters that may not appear in a note file name.
const FORBIDDEN_CHARS: &str = "\\/:*?\"<>|";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("title contains no usable characters")]
    InvalidTitle,
    #[error("note '{0}' not found")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Maps a raw title to its file path inside `dir`.
///
/// Forbidden characters are stripped and surrounding whitespace trimmed;
/// `None` means nothing usable survived. Distinct titles can collapse to
/// the same path, in which case the last writer wins.
pub fn note_path(dir: &Path, title: &str) -> Option<PathBuf> {
    let safe: String = title
        .chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(*c))
        .collect();
    let safe = safe.trim();
    if safe.is_empty() {
        return None;
    }
    Some(dir.join(format!("{}.{}", safe, NOTE_EXTENSION)))
}

/// Flat-directory note storage: one `.txt` file per title, the file stem is
/// the title, the file body is the note content. Files with any other
/// extension are ignored.
#[derive(Debug, Clone)]
pub struct NoteStore {
    dir: PathBuf,
}

impl NoteStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the storage directory if it is missing. Idempotent.
    pub fn ensure_dir(&self) -> io::Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        Ok(())
    }

    pub fn path_for(&self, title: &str) -> Option<PathBuf> {
        note_path(&self.dir, title)
    }

    /// All note titles, sorted with plain case-sensitive string ordering.
    pub fn list_titles(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut titles: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .map(|ext| ext == NOTE_EXTENSION)
                        .unwrap_or(false)
            })
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().to_string()))
            .collect();

        titles.sort();
        titles
    }

    pub fn read(&self, title: &str) -> Result<String, StoreError> {
        let path = self
            .path_for(title)
            .filter(|p| p.exists())
            .ok_or_else(|| StoreError::NotFound(title.to_string()))?;
        Ok(fs::read_to_string(path)?)
    }

    /// Creates or overwrites the note, fully replacing prior contents.
    /// Trailing whitespace is trimmed before the write.
    pub fn write(&self, title: &str, content: &str) -> Result<(), StoreError> {
        let path = self.path_for(title).ok_or(StoreError::InvalidTitle)?;
        fs::write(path, content.trim_end())?;
        Ok(())
    }

    pub fn delete(&self, title: &str) -> Result<(), StoreError> {
        let path = self
            .path_for(title)
            .filter(|p| p.exists())
            .ok_or_else(|| StoreError::NotFound(title.to_string()))?;
        fs::remove_file(path)?;
        Ok(())
    }

    /// Linear scan over every note, matching `query` case-insensitively
    /// against the title or the full content. An empty query returns the
    /// full listing. A note that cannot be read is treated as empty and the
    /// scan continues.
    pub fn search(&self, query: &str) -> Vec<String> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.list_titles();
        }

        self.list_titles()
            .into_iter()
            .filter(|title| {
                if title.to_lowercase().contains(&query) {
                    return true;
                }
                let content = self.read(title).unwrap_or_else(|err| {
                    warn!("search: skipping '{}': {}", title, err);
                    String::new()
                });
                content.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, NoteStore) {
        let tmp = TempDir::new().unwrap();
        let store = NoteStore::new(tmp.path().join("notes"));
        store.ensure_dir().unwrap();
        (tmp, store)
    }

    #[test]
    fn test_note_path_strips_forbidden_chars() {
        let dir = Path::new("notes");
        let path = note_path(dir, "a/b\\c:d*e?f\"g<h>i|j").unwrap();
        assert_eq!(path, dir.join("abcdefghij.txt"));
    }

    #[test]
    fn test_note_path_trims_whitespace() {
        let dir = Path::new("notes");
        assert_eq!(note_path(dir, "  draft  ").unwrap(), dir.join("draft.txt"));
    }

    #[test]
    fn test_note_path_rejects_unusable_titles() {
        let dir = Path::new("notes");
        assert!(note_path(dir, "").is_none());
        assert!(note_path(dir, "   ").is_none());
        assert!(note_path(dir, "///***???").is_none());
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let (_tmp, store) = store();
        store.ensure_dir().unwrap();
        store.ensure_dir().unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let (_tmp, store) = store();
        store.write("groceries", "milk\neggs").unwrap();
        assert_eq!(store.read("groceries").unwrap(), "milk\neggs");
    }

    #[test]
    fn test_write_trims_trailing_whitespace() {
        let (_tmp, store) = store();
        store.write("draft", "body\n\n   \n").unwrap();
        assert_eq!(store.read("draft").unwrap(), "body");
    }

    #[test]
    fn test_write_overwrites_existing_note() {
        let (_tmp, store) = store();
        store.write("draft", "first").unwrap();
        store.write("draft", "second").unwrap();
        assert_eq!(store.read("draft").unwrap(), "second");
        assert_eq!(store.list_titles().len(), 1);
    }

    #[test]
    fn test_write_rejects_invalid_title() {
        let (_tmp, store) = store();
        let err = store.write("???", "body").unwrap_err();
        assert!(matches!(err, StoreError::InvalidTitle));
        assert!(store.list_titles().is_empty());
    }

    #[test]
    fn test_colliding_titles_last_write_wins() {
        let (_tmp, store) = store();
        store.write("a/b", "first").unwrap();
        store.write("ab", "second").unwrap();
        assert_eq!(store.read("a/b").unwrap(), "second");
        assert_eq!(store.list_titles(), vec!["ab".to_string()]);
    }

    #[test]
    fn test_read_missing_note_is_not_found() {
        let (_tmp, store) = store();
        assert!(matches!(
            store.read("nothing"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_removes_note() {
        let (_tmp, store) = store();
        store.write("old", "body").unwrap();
        store.delete("old").unwrap();
        assert!(matches!(store.read("old"), Err(StoreError::NotFound(_))));
        assert!(matches!(store.delete("old"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_list_titles_sorted_case_sensitively() {
        let (_tmp, store) = store();
        for title in ["beta", "Alpha", "Gamma"] {
            store.write(title, "").unwrap();
        }
        assert_eq!(
            store.list_titles(),
            vec!["Alpha".to_string(), "Gamma".to_string(), "beta".to_string()]
        );
    }

    #[test]
    fn test_list_ignores_foreign_files() {
        let (_tmp, store) = store();
        store.write("real", "body").unwrap();
        fs::write(store.dir().join("scratch.md"), "not a note").unwrap();
        fs::write(store.dir().join("noext"), "also not").unwrap();
        assert_eq!(store.list_titles(), vec!["real".to_string()]);
    }

    #[test]
    fn test_search_matches_title_and_content() {
        let (_tmp, store) = store();
        store.write("Category", "taxonomy").unwrap();
        store.write("Misc", "a stray cat wandered in").unwrap();
        store.write("Dog", "bark").unwrap();
        assert_eq!(
            store.search("cat"),
            vec!["Category".to_string(), "Misc".to_string()]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let (_tmp, store) = store();
        store.write("Shopping", "Milk and EGGS").unwrap();
        assert_eq!(store.search("eggs"), vec!["Shopping".to_string()]);
        assert_eq!(store.search("SHOP"), vec!["Shopping".to_string()]);
    }

    #[test]
    fn test_search_empty_query_lists_everything() {
        let (_tmp, store) = store();
        store.write("one", "").unwrap();
        store.write("two", "").unwrap();
        assert_eq!(store.search(""), store.list_titles());
        assert_eq!(store.search("   "), store.list_titles());
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let (_tmp, store) = store();
        store.write("Dog", "bark").unwrap();
        assert!(store.search("cat").is_empty());
    }
}
