use std::path::PathBuf;
use std::sync::Arc;

use super::node::{DependencyNode, NodeKey, RootNode, TargetNode, TreeNode};
use crate::ant_project::domain::ProjectSnapshot;
use crate::ports::outbound::{RunTargetRequest, TargetRunner};
use crate::shared::Result;

/// The most recently selected target. A new selection overwrites the
/// previous one; there is no history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTarget {
    pub name: String,
    pub source_file: PathBuf,
}

impl SelectedTarget {
    /// The target name as handed to the runner, shell-quoted when it
    /// contains a space
    pub fn quoted_name(&self) -> String {
        if self.name.contains(' ') {
            format!("\"{}\"", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Target Tree Builder
///
/// Answers the three tree queries - roots, a file's targets, a target's
/// dependencies - against one immutable snapshot per workspace folder.
/// Every query computes a fresh slice of the tree; nothing is cached
/// between calls. Selection state is owned by the instance.
pub struct TargetTree {
    folders: Vec<Arc<ProjectSnapshot>>,
    sort_alphabetically: bool,
    selected: Option<SelectedTarget>,
}

impl TargetTree {
    /// Builds a tree over the given snapshots, one per workspace folder
    /// that successfully located and parsed a build file.
    pub fn new(folders: Vec<Arc<ProjectSnapshot>>, sort_alphabetically: bool) -> Self {
        Self {
            folders,
            sort_alphabetically,
            selected: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// One root node per loaded workspace folder
    pub fn roots(&self) -> Vec<RootNode> {
        self.folders
            .iter()
            .enumerate()
            .map(|(folder, snapshot)| RootNode {
                key: NodeKey::Root { folder },
                build_file: snapshot.build_file.clone(),
                file_name: snapshot
                    .build_file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| snapshot.build_file.display().to_string()),
                project_name: snapshot.project.name.clone(),
                default_target: snapshot.project.default_target.clone(),
            })
            .collect()
    }

    /// The targets of a folder's build file, sorted alphabetically when the
    /// sort policy is enabled, in declaration order otherwise.
    pub fn targets(&self, folder: usize) -> Vec<TargetNode> {
        let Some(snapshot) = self.folders.get(folder) else {
            return vec![];
        };

        let mut nodes: Vec<TargetNode> = snapshot
            .targets
            .iter()
            .map(|target| TargetNode {
                key: NodeKey::Target {
                    folder,
                    name: target.name.clone(),
                },
                name: target.name.clone(),
                description: target.description.clone(),
                source_file: target.source_file.clone(),
                depends: target.depends.clone(),
                is_default: snapshot.project.is_default_target(&target.name),
            })
            .collect();

        if self.sort_alphabetically {
            nodes.sort_by(|a, b| a.name.cmp(&b.name));
        }
        nodes
    }

    /// Dependency nodes for an ordered list of dependency names.
    ///
    /// Each name is resolved against the folder's flat target collection
    /// (first match, parse order); an unresolved name yields a node with
    /// empty details and no further children. Declaration order is always
    /// preserved - the sort policy applies to top-level target lists only.
    pub fn dependencies_of(&self, folder: usize, depends: &[String]) -> Vec<DependencyNode> {
        let Some(snapshot) = self.folders.get(folder) else {
            return vec![];
        };

        depends
            .iter()
            .map(|name| {
                let key = NodeKey::Dependency {
                    folder,
                    name: name.clone(),
                };
                match snapshot.targets.find(name) {
                    Some(target) => DependencyNode {
                        key,
                        name: name.clone(),
                        description: target.description.clone(),
                        source_file: Some(target.source_file.clone()),
                        depends: target.depends.clone(),
                    },
                    None => DependencyNode {
                        key,
                        name: name.clone(),
                        description: None,
                        source_file: None,
                        depends: vec![],
                    },
                }
            })
            .collect()
    }

    /// Pure query interface: the children of the node with the given key.
    ///
    /// Roots expand to target nodes; target and dependency nodes expand to
    /// the dependencies of the target they name. A key that resolves to
    /// nothing yields no children.
    pub fn children(&self, key: &NodeKey) -> Vec<TreeNode> {
        match key {
            NodeKey::Root { folder } => self
                .targets(*folder)
                .into_iter()
                .map(TreeNode::Target)
                .collect(),
            NodeKey::Target { folder, name } | NodeKey::Dependency { folder, name } => {
                let Some(snapshot) = self.folders.get(*folder) else {
                    return vec![];
                };
                let Some(target) = snapshot.targets.find(name) else {
                    return vec![];
                };
                let depends = target.depends.clone();
                self.dependencies_of(*folder, &depends)
                    .into_iter()
                    .map(TreeNode::Dependency)
                    .collect()
            }
        }
    }

    /// Records the node with the given key as the current selection.
    ///
    /// Returns false (selection unchanged) for root keys and for names
    /// that do not resolve to a declared target.
    pub fn select(&mut self, key: &NodeKey) -> bool {
        match key {
            NodeKey::Root { .. } => false,
            NodeKey::Target { folder, name } | NodeKey::Dependency { folder, name } => {
                let Some(snapshot) = self.folders.get(*folder) else {
                    return false;
                };
                let Some(target) = snapshot.targets.find(name) else {
                    return false;
                };
                self.selected = Some(SelectedTarget {
                    name: target.name.clone(),
                    source_file: target.source_file.clone(),
                });
                true
            }
        }
    }

    /// Selects a target by name, searching folders in order. Used by hosts
    /// that address targets by name rather than by tree position.
    pub fn select_target_named(&mut self, name: &str) -> bool {
        for folder in 0..self.folders.len() {
            let key = NodeKey::Target {
                folder,
                name: name.to_string(),
            };
            if self.select(&key) {
                return true;
            }
        }
        false
    }

    pub fn selected(&self) -> Option<&SelectedTarget> {
        self.selected.as_ref()
    }

    /// Hands the current selection to the runner collaborator.
    ///
    /// A no-op returning `Ok(None)` when nothing is selected; otherwise
    /// returns the exit code reported by the runner.
    pub async fn run_selected(&self, runner: &dyn TargetRunner) -> Result<Option<i32>> {
        let Some(selected) = &self.selected else {
            return Ok(None);
        };

        let request = RunTargetRequest {
            name: selected.quoted_name(),
            source_file: selected.source_file.clone(),
        };
        let exit_code = runner.run_target(&request).await?;
        Ok(Some(exit_code))
    }
}
