use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::ant_project::domain::ProjectSnapshot;

struct SessionState {
    committed_generation: u64,
    snapshot: Option<Arc<ProjectSnapshot>>,
}

/// Per-folder refresh state.
///
/// Each refresh is tagged with a monotonically increasing generation when
/// it starts; a completion whose generation is not newer than the last
/// committed one is discarded, so a slow stale parse can never overwrite
/// the result of a refresh issued after it. A failed refresh commits
/// nothing and the previous snapshot stays in place.
pub struct FolderSession {
    issued_generation: AtomicU64,
    state: Mutex<SessionState>,
}

impl FolderSession {
    pub fn new() -> Self {
        Self {
            issued_generation: AtomicU64::new(0),
            state: Mutex::new(SessionState {
                committed_generation: 0,
                snapshot: None,
            }),
        }
    }

    /// Starts a refresh and returns its generation tag
    pub fn begin_refresh(&self) -> u64 {
        self.issued_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Atomically replaces the snapshot if this refresh is still the
    /// newest completed one. Returns false when the result was stale and
    /// discarded.
    pub fn commit(&self, generation: u64, snapshot: ProjectSnapshot) -> bool {
        let mut state = self.state.lock().expect("lock poisoned");
        if generation <= state.committed_generation {
            return false;
        }
        state.committed_generation = generation;
        state.snapshot = Some(Arc::new(snapshot));
        true
    }

    /// The current committed snapshot, if any load has ever succeeded
    pub fn snapshot(&self) -> Option<Arc<ProjectSnapshot>> {
        self.state.lock().expect("lock poisoned").snapshot.clone()
    }
}

impl Default for FolderSession {
    fn default() -> Self {
        Self::new()
    }
}
