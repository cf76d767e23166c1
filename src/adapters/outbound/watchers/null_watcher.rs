use crate::ports::outbound::FileWatcher;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// NullFileWatcher adapter for one-shot invocations
///
/// A one-shot CLI run has nothing to refresh, so this adapter only records
/// which files a load would watch; a long-lived host can read them back and
/// hand them to a real watcher.
pub struct NullFileWatcher {
    requested: Mutex<Vec<PathBuf>>,
}

impl NullFileWatcher {
    pub fn new() -> Self {
        Self {
            requested: Mutex::new(vec![]),
        }
    }

    /// The files watch requests were made for, in request order
    pub fn requested_paths(&self) -> Vec<PathBuf> {
        self.requested.lock().expect("lock poisoned").clone()
    }
}

impl Default for NullFileWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FileWatcher for NullFileWatcher {
    fn watch(&self, path: &Path) {
        self.requested
            .lock()
            .expect("lock poisoned")
            .push(path.to_path_buf());
    }
}
