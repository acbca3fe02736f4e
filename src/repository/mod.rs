pub mod storage;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::task::Task;
use storage::Storage;

/// The single key the task collection lives under.
pub const TODOS_KEY: &str = "todos";

/// Persists the full task collection as one JSON value in a key-value
/// [`Storage`]. Reads happen once at startup; every mutation of the
/// collection rewrites the value in full.
pub struct TaskStore {
    storage: Box<dyn Storage>,
}

impl TaskStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Loads the persisted collection. A missing, unreadable, or corrupt
    /// value degrades to an empty list; this never fails.
    pub fn load(&self) -> Vec<Task> {
        let raw = match self.storage.read(TODOS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("failed to read task store, starting empty: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!("discarding corrupt task store, starting empty: {e}");
                Vec::new()
            }
        }
    }

    /// Writes the full collection, replacing whatever was stored before.
    /// Write failures are logged and otherwise ignored.
    pub fn save(&self, tasks: &[Task]) {
        let json = match serde_json::to_string(tasks) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize tasks, skipping persist: {e}");
                return;
            }
        };

        match self.storage.write(TODOS_KEY, &json) {
            Ok(()) => debug!(count = tasks.len(), "persisted task list"),
            Err(e) => warn!("failed to persist tasks: {e}"),
        }
    }
}

/// Data directory for the on-disk store: `$TASKPAD_DATA_DIR` if set,
/// otherwise `$HOME/.taskpad`.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TASKPAD_DATA_DIR") {
        return PathBuf::from(dir);
    }

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".taskpad")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::Priority;
    use mockall::predicate::eq;
    use super::storage::{MemoryStorage, MockStorage, StorageError};

    #[test]
    fn test_load_missing_value_defaults_to_empty() {
        let store = TaskStore::new(Box::new(MemoryStorage::new()));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_value_defaults_to_empty() {
        let storage = MemoryStorage::new();
        storage.write(TODOS_KEY, "{not json").unwrap();

        let store = TaskStore::new(Box::new(storage));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_read_error_defaults_to_empty() {
        let mut storage = MockStorage::new();
        storage.expect_read().returning(|_| {
            Err(StorageError::Io(std::io::Error::other("disk on fire")))
        });

        let store = TaskStore::new(Box::new(storage));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = TaskStore::new(Box::new(MemoryStorage::new()));

        let tasks = vec![
            Task::new("Buy milk", Priority::Medium),
            Task::new("Walk dog", Priority::High),
        ];
        store.save(&tasks);

        assert_eq!(store.load(), tasks);
    }

    #[test]
    fn test_save_writes_full_json_under_todos_key() {
        let mut storage = MockStorage::new();
        storage
            .expect_write()
            .with(eq(TODOS_KEY), eq("[]"))
            .times(1)
            .returning(|_, _| Ok(()));

        let store = TaskStore::new(Box::new(storage));
        store.save(&[]);
    }

    #[test]
    fn test_save_swallows_write_errors() {
        let mut storage = MockStorage::new();
        storage.expect_write().returning(|_, _| {
            Err(StorageError::Io(std::io::Error::other("read-only")))
        });

        let store = TaskStore::new(Box::new(storage));
        // Must not panic or surface the failure
        store.save(&[Task::new("Task", Priority::Low)]);
    }
}
