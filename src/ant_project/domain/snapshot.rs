use std::path::PathBuf;

use super::{Project, TargetIndex};

/// Immutable result of one successful build file load for one workspace
/// folder.
///
/// All tree queries for a folder read from one snapshot; a refresh replaces
/// the snapshot as a whole, never field by field.
#[derive(Debug, Clone)]
pub struct ProjectSnapshot {
    /// The build file that was located and parsed
    pub build_file: PathBuf,
    pub project: Project,
    pub targets: TargetIndex,
    /// Every file touched while parsing, including imports. The caller
    /// hands these to the file watcher collaborator.
    pub source_files: Vec<PathBuf>,
}
