use std::collections::HashMap;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ant_project::domain::{ProjectSnapshot, TargetIndex};
use crate::application::dto::{LoadTreeRequest, LoadTreeResponse};
use crate::application::session::FolderSession;
use crate::build_file::{locate_build_file, BuildFileParser};
use crate::config::TreeOptions;
use crate::ports::outbound::{BuildFileReader, FileWatcher, Notifier};
use crate::shared::error::AntError;
use crate::shared::Result;
use crate::target_tree::TargetTree;

/// LoadTargetTreeUseCase - loads the target tree for a set of workspace
/// folders
///
/// For each folder: locate the build file, parse it, extract the merged
/// target collection, and commit the result as that folder's snapshot.
/// A folder without a build file is skipped with an informational notice;
/// a folder whose load fails keeps its previous snapshot and the error is
/// surfaced as a notice. One folder's failure never affects the others.
///
/// # Type Parameters
/// * `R` - BuildFileReader implementation
/// * `N` - Notifier implementation
/// * `W` - FileWatcher implementation
pub struct LoadTargetTreeUseCase<R, N, W> {
    parser: BuildFileParser<R>,
    notifier: N,
    watcher: W,
    sessions: Mutex<HashMap<PathBuf, Arc<FolderSession>>>,
}

impl<R, N, W> LoadTargetTreeUseCase<R, N, W>
where
    R: BuildFileReader,
    N: Notifier,
    W: FileWatcher,
{
    pub fn new(reader: R, notifier: N, watcher: W) -> Self {
        Self {
            parser: BuildFileParser::new(reader),
            notifier,
            watcher,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Executes a load (or refresh) for every folder in the request
    ///
    /// # Returns
    /// The tree over all folders' current snapshots plus outcome counts.
    pub async fn execute(&self, request: LoadTreeRequest) -> Result<LoadTreeResponse> {
        if request.workspace_folders.is_empty() {
            self.notifier.info("No workspace folders to load.");
        }

        let mut loaded = 0;
        let mut skipped = 0;
        let mut failed = 0;

        for folder in &request.workspace_folders {
            let session = self.session_for(folder);
            let generation = session.begin_refresh();

            match self.load_folder(folder, &request.options) {
                Ok(Some(snapshot)) => {
                    for source_file in &snapshot.source_files {
                        self.watcher.watch(source_file);
                    }
                    self.notifier.info(&format!(
                        "Targets loaded from {}",
                        snapshot.build_file.display()
                    ));
                    if session.commit(generation, snapshot) {
                        loaded += 1;
                    }
                }
                Ok(None) => {
                    self.notifier
                        .info(&format!("No build file found in {}", folder.display()));
                    skipped += 1;
                }
                Err(e) => {
                    // Leave the previous snapshot, if any, in place.
                    self.notifier.error(&format!(
                        "Error loading targets from {}: {}",
                        folder.display(),
                        e
                    ));
                    failed += 1;
                }
            }
        }

        let mut snapshots = Vec::new();
        for folder in &request.workspace_folders {
            if let Some(snapshot) = self.session_for(folder).snapshot() {
                snapshots.push(snapshot);
            }
        }

        Ok(LoadTreeResponse {
            tree: TargetTree::new(snapshots, request.options.sort_targets_alphabetically),
            loaded,
            skipped,
            failed,
        })
    }

    fn session_for(&self, folder: &Path) -> Arc<FolderSession> {
        let mut sessions = self.sessions.lock().expect("lock poisoned");
        sessions
            .entry(folder.to_path_buf())
            .or_insert_with(|| Arc::new(FolderSession::new()))
            .clone()
    }

    /// Loads one folder. `Ok(None)` means no build file was found there.
    fn load_folder(&self, folder: &Path, options: &TreeOptions) -> Result<Option<ProjectSnapshot>> {
        let build_file = match locate_build_file(
            folder,
            &options.build_file_directories,
            &options.build_filenames,
        ) {
            Ok(path) => path,
            Err(AntError::BuildFileNotFound { .. }) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let doc = self.parser.parse(&build_file)?;
        let project = BuildFileParser::<R>::project_details(&doc);

        let mut visited = HashSet::new();
        let (targets, source_files) = self.parser.extract_targets(&doc, &mut visited)?;

        Ok(Some(ProjectSnapshot {
            build_file,
            project,
            targets: TargetIndex::new(targets),
            source_files,
        }))
    }
}
