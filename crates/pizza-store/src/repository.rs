//! # Menu Repository
//!
//! Loads and saves a [`MenuStore`] as a JSON array on disk.
//!
//! ## File Format
//! ```text
//! [
//!   {
//!     "name": "Margherita",
//!     "price": "10.00",
//!     "available": true
//!   },
//!   ...
//! ]
//! ```
//!
//! ## Load Decisions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load_into(&mut store)                                                  │
//! │       │                                                                 │
//! │       ├── file absent ──────────────────────► Ok(Missing)              │
//! │       ├── > 1 MiB ──────────────────────────► Err(FileTooLarge)        │
//! │       ├── not JSON / not an array ──────────► Err(InvalidFormat)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  each element ──► PizzaCatalogEntry::from_json                         │
//! │       │             (bad elements skipped with a warning)              │
//! │       │                                                                 │
//! │       ├── zero valid ───────────► Ok(NoValidEntries)  store untouched  │
//! │       └── some valid ───────────► Ok(Loaded)  store replaced           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Save
//! The JSON is written to a temp file in the destination directory, synced,
//! then renamed over the target. A failed save leaves the previous file
//! intact and removes the temp file.

use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use pizza_core::{MenuStore, PizzaCatalogEntry};
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::path::validate_menu_path;

/// Largest menu file that will be read (1 MiB).
pub const MAX_MENU_FILE_BYTES: u64 = 1024 * 1024;

/// What a load did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store now holds `entries` entries from the file.
    Loaded { entries: usize, skipped: usize },

    /// No file yet. The caller should seed defaults.
    Missing,

    /// The file had no usable entry. The store was left as it was.
    NoValidEntries { skipped: usize },
}

/// Repository for the menu file.
///
/// ## Usage
/// ```rust
/// use pizza_core::MenuStore;
/// use pizza_store::{LoadOutcome, MenuRepository};
///
/// let home = tempfile::tempdir().unwrap();
/// let repo = MenuRepository::open(home.path(), "data/pizza_menu.json").unwrap();
///
/// let mut menu = MenuStore::new();
/// if !matches!(repo.load_into(&mut menu).unwrap(), LoadOutcome::Loaded { .. }) {
///     menu.seed_defaults();
///     repo.save(&menu).unwrap();
/// }
/// assert_eq!(menu.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct MenuRepository {
    path: PathBuf,
}

impl MenuRepository {
    /// Validates `relative` and resolves it under `root`.
    ///
    /// Fails with `UnsafePath` before any file system access.
    pub fn open(root: impl AsRef<Path>, relative: impl AsRef<Path>) -> StoreResult<Self> {
        let relative = validate_menu_path(relative)?;
        let path = root.as_ref().join(&relative);

        debug!(path = %path.display(), "Opened menu repository");

        Ok(MenuRepository { path })
    }

    /// Full path of the menu file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file into `store`.
    pub fn load_into(&self, store: &mut MenuStore) -> StoreResult<LoadOutcome> {
        let metadata = match fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "Menu file not found");
                return Ok(LoadOutcome::Missing);
            }
            Err(err) => return Err(StoreError::LoadFailed(err.to_string())),
        };

        if !metadata.is_file() {
            return Err(StoreError::LoadFailed(format!(
                "{} is not a regular file",
                self.path.display()
            )));
        }

        if metadata.len() > MAX_MENU_FILE_BYTES {
            return Err(StoreError::FileTooLarge {
                size: metadata.len(),
                max: MAX_MENU_FILE_BYTES,
            });
        }

        let bytes = self.read_capped()?;
        let document: Value = serde_json::from_slice(&bytes)
            .map_err(|err| StoreError::InvalidFormat(err.to_string()))?;

        let Value::Array(items) = document else {
            return Err(StoreError::InvalidFormat(
                "top level must be a JSON array".to_string(),
            ));
        };

        let mut entries = Vec::with_capacity(items.len());
        let mut skipped = 0;
        for (index, item) in items.into_iter().enumerate() {
            match PizzaCatalogEntry::from_json(item) {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    warn!(index, error = %err, "Skipping invalid menu entry");
                    skipped += 1;
                }
            }
        }

        if entries.is_empty() {
            warn!(skipped, path = %self.path.display(), "Menu file has no valid entries");
            return Ok(LoadOutcome::NoValidEntries { skipped });
        }

        let report = store.replace_all(entries);
        let skipped = skipped + report.duplicates + report.over_capacity;

        info!(entries = report.kept, skipped, "Loaded menu");
        Ok(LoadOutcome::Loaded {
            entries: report.kept,
            skipped,
        })
    }

    /// Writes `store` to the file atomically.
    pub fn save(&self, store: &MenuStore) -> StoreResult<()> {
        let directory = self
            .path
            .parent()
            .ok_or_else(|| StoreError::SaveFailed("menu path has no parent".to_string()))?;

        fs::create_dir_all(directory).map_err(|err| StoreError::SaveFailed(err.to_string()))?;

        let document = Value::Array(store.iter().map(PizzaCatalogEntry::to_json).collect());
        let json = serde_json::to_string_pretty(&document)
            .map_err(|err| StoreError::SaveFailed(err.to_string()))?;

        // Dropping the temp file on any early return deletes it.
        let mut temp = NamedTempFile::new_in(directory)
            .map_err(|err| StoreError::SaveFailed(err.to_string()))?;
        temp.write_all(json.as_bytes())
            .and_then(|_| temp.write_all(b"\n"))
            .and_then(|_| temp.flush())
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|err| StoreError::SaveFailed(err.to_string()))?;

        temp.persist(&self.path)
            .map_err(|err| StoreError::SaveFailed(err.error.to_string()))?;

        info!(entries = store.len(), path = %self.path.display(), "Saved menu");
        Ok(())
    }

    // Metadata can be stale, so the read itself is bounded too.
    fn read_capped(&self) -> StoreResult<Vec<u8>> {
        let file = File::open(&self.path).map_err(|err| StoreError::LoadFailed(err.to_string()))?;

        let mut bytes = Vec::new();
        file.take(MAX_MENU_FILE_BYTES + 1)
            .read_to_end(&mut bytes)
            .map_err(|err| StoreError::LoadFailed(err.to_string()))?;

        let size = bytes.len() as u64;
        if size > MAX_MENU_FILE_BYTES {
            return Err(StoreError::FileTooLarge {
                size,
                max: MAX_MENU_FILE_BYTES,
            });
        }

        Ok(bytes)
    }
}

/// Loads `path` (relative to the current directory) into `store`.
pub fn load_menu(store: &mut MenuStore, path: impl AsRef<Path>) -> StoreResult<LoadOutcome> {
    MenuRepository::open(".", path)?.load_into(store)
}

/// Saves `store` to `path` (relative to the current directory).
pub fn save_menu(store: &MenuStore, path: impl AsRef<Path>) -> StoreResult<()> {
    MenuRepository::open(".", path)?.save(store)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::DEFAULT_MENU_PATH;
    use pizza_core::Money;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn repo() -> (TempDir, MenuRepository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = MenuRepository::open(dir.path(), DEFAULT_MENU_PATH).unwrap();
        (dir, repo)
    }

    fn write_menu(repo: &MenuRepository, contents: &str) {
        fs::create_dir_all(repo.path().parent().unwrap()).unwrap();
        fs::write(repo.path(), contents).unwrap();
    }

    fn names(store: &MenuStore) -> Vec<String> {
        store.iter().map(|e| e.name().to_string()).collect()
    }

    #[test]
    fn test_unsafe_path_rejected_before_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = MenuRepository::open(dir.path(), "data/../secret.json").unwrap_err();
        assert!(matches!(err, StoreError::UnsafePath { .. }));

        let mut store = MenuStore::new();
        assert!(matches!(
            load_menu(&mut store, "data/../secret.json"),
            Err(StoreError::UnsafePath { .. })
        ));
        assert!(matches!(
            save_menu(&store, "/tmp/menu.json"),
            Err(StoreError::UnsafePath { .. })
        ));
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let (_dir, repo) = repo();
        let mut store = MenuStore::with_defaults();
        store.set_availability("Hawaiian", false).unwrap();
        store.add("Mac & Cheese", "9.5").unwrap();

        repo.save(&store).unwrap();

        let mut loaded = MenuStore::new();
        let outcome = repo.load_into(&mut loaded).unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded { entries: 7, skipped: 0 });
        assert_eq!(loaded, store);
        assert!(!loaded.find_by_name("Hawaiian").unwrap().is_available());
    }

    #[test]
    fn test_save_creates_directory_and_pretty_prints() {
        let (dir, repo) = repo();
        let mut store = MenuStore::new();
        store.add("Margherita", "10").unwrap();

        repo.save(&store).unwrap();

        let text = fs::read_to_string(dir.path().join("data/pizza_menu.json")).unwrap();
        assert!(text.starts_with("[\n  {\n    \"name\": \"Margherita\""));
        assert!(text.contains("\"price\": \"10.00\""));

        // no temp file left behind
        let files: Vec<_> = fs::read_dir(dir.path().join("data")).unwrap().collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_save_overwrites_previous_file() {
        let (_dir, repo) = repo();
        repo.save(&MenuStore::with_defaults()).unwrap();

        let mut smaller = MenuStore::new();
        smaller.add("Funghi", "11").unwrap();
        repo.save(&smaller).unwrap();

        let mut loaded = MenuStore::new();
        repo.load_into(&mut loaded).unwrap();
        assert_eq!(names(&loaded), ["Funghi"]);
    }

    #[test]
    fn test_missing_file() {
        let (_dir, repo) = repo();
        let mut store = MenuStore::with_defaults();

        assert_eq!(repo.load_into(&mut store).unwrap(), LoadOutcome::Missing);
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_malformed_entry_skipped() {
        let (_dir, repo) = repo();
        write_menu(
            &repo,
            r#"[
                {"name": "Margherita", "price": "10.00", "available": true},
                {"name": "Bad!", "price": "abc"}
            ]"#,
        );

        let mut store = MenuStore::with_defaults();
        let outcome = repo.load_into(&mut store).unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded { entries: 1, skipped: 1 });
        assert_eq!(names(&store), ["Margherita"]);
    }

    #[test]
    fn test_all_invalid_leaves_store_untouched() {
        let (_dir, repo) = repo();
        write_menu(&repo, r#"[{"name": ""}, 42, {"name": "X", "price": "0"}]"#);

        let mut store = MenuStore::with_defaults();
        let before = store.clone();

        let outcome = repo.load_into(&mut store).unwrap();

        assert_eq!(outcome, LoadOutcome::NoValidEntries { skipped: 3 });
        assert_eq!(store, before);
    }

    #[test]
    fn test_duplicates_in_file_counted_as_skipped() {
        let (_dir, repo) = repo();
        write_menu(
            &repo,
            r#"[{"name": "Funghi", "price": "11"}, {"name": "FUNGHI", "price": "12"}]"#,
        );

        let mut store = MenuStore::new();
        let outcome = repo.load_into(&mut store).unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded { entries: 1, skipped: 1 });
        assert_eq!(store.get_by_position(1).unwrap().price().to_string(), "11.00");
    }

    #[test]
    fn test_non_array_top_level() {
        let (_dir, repo) = repo();
        write_menu(&repo, r#"{"name": "Margherita", "price": "10.00"}"#);

        let mut store = MenuStore::new();
        assert!(matches!(
            repo.load_into(&mut store),
            Err(StoreError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        let (_dir, repo) = repo();
        write_menu(&repo, "[{not json");

        let mut store = MenuStore::new();
        assert!(matches!(
            repo.load_into(&mut store),
            Err(StoreError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_oversize_file_rejected() {
        let (_dir, repo) = repo();
        let padding = " ".repeat(MAX_MENU_FILE_BYTES as usize);
        write_menu(&repo, &format!("[{padding}]"));

        let mut store = MenuStore::with_defaults();
        let err = repo.load_into(&mut store).unwrap_err();

        assert!(matches!(err, StoreError::FileTooLarge { max, .. } if max == MAX_MENU_FILE_BYTES));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_directory_in_place_of_file() {
        let (_dir, repo) = repo();
        fs::create_dir_all(repo.path()).unwrap();

        let mut store = MenuStore::new();
        assert!(matches!(
            repo.load_into(&mut store),
            Err(StoreError::LoadFailed(_))
        ));
        assert!(matches!(repo.save(&store), Err(StoreError::SaveFailed(_))));
    }

    fn menu_strategy() -> impl Strategy<Value = MenuStore> {
        let entry = (
            "[A-Za-z0-9 .'&-]{1,50}".prop_filter("blank name", |n| !n.trim().is_empty()),
            1i64..=99_999,
            any::<bool>(),
        );
        prop::collection::vec(entry, 1..=20).prop_map(|entries| {
            let mut store = MenuStore::new();
            for (name, cents, available) in entries {
                let entry =
                    PizzaCatalogEntry::new(&name, Money::from_cents(cents), available).unwrap();
                // repeated names are dropped
                let _ = store.insert(entry);
            }
            store
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_save_then_load_preserves_entries(store in menu_strategy()) {
            let (_dir, repo) = repo();
            repo.save(&store).unwrap();

            let mut loaded = MenuStore::new();
            let outcome = repo.load_into(&mut loaded).unwrap();

            prop_assert_eq!(
                outcome,
                LoadOutcome::Loaded { entries: store.len(), skipped: 0 }
            );
            prop_assert_eq!(loaded, store);
        }
    }
}
