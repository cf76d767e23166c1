use std::path::PathBuf;

use crate::config::TreeOptions;
use crate::target_tree::TargetTree;

/// Request DTO for loading the target tree of one or more workspace folders
#[derive(Debug, Clone)]
pub struct LoadTreeRequest {
    /// Workspace folders, one tree root per folder with a build file
    pub workspace_folders: Vec<PathBuf>,
    pub options: TreeOptions,
}

impl LoadTreeRequest {
    pub fn new(workspace_folders: Vec<PathBuf>, options: TreeOptions) -> Self {
        Self {
            workspace_folders,
            options,
        }
    }
}

/// Response DTO carrying the loaded tree and per-folder outcome counts
pub struct LoadTreeResponse {
    pub tree: TargetTree,
    /// Folders whose build file was located and parsed
    pub loaded: usize,
    /// Folders without a build file (informational, not an error)
    pub skipped: usize,
    /// Folders whose load failed; their previous snapshot, if any, is
    /// still in the tree
    pub failed: usize,
}
