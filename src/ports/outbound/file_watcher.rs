use std::path::Path;

/// FileWatcher port for change notification on build files
///
/// The core only requests watches for the files a load touched; the actual
/// watching (and triggering a refresh on change, create or delete) is an
/// external collaborator.
pub trait FileWatcher {
    /// Requests a watch on the given build file
    fn watch(&self, path: &Path);
}
