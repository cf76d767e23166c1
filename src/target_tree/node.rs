//! View nodes for the target tree
//!
//! Nodes are recomputed on every query, never cached; their identity is the
//! key, compared by equality. They carry just enough to render a label and
//! tooltip and to answer "can this expand further".

use serde::Serialize;
use std::path::PathBuf;

/// Identity key of a tree node.
///
/// `folder` is the index of the workspace folder's snapshot within the
/// tree. Target and dependency keys both name a target; expanding either
/// resolves that name against the folder's flat target collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    Root { folder: usize },
    Target { folder: usize, name: String },
    Dependency { folder: usize, name: String },
}

/// The build file at the root of a folder's tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootNode {
    #[serde(skip)]
    pub key: NodeKey,
    pub build_file: PathBuf,
    pub file_name: String,
    pub project_name: Option<String>,
    pub default_target: Option<String>,
}

impl RootNode {
    /// Label in the form `build.xml (project name)`
    pub fn label(&self) -> String {
        match &self.project_name {
            Some(project) => format!("{} ({})", self.file_name, project),
            None => self.file_name.clone(),
        }
    }
}

/// A declared target, child of a root node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetNode {
    #[serde(skip)]
    pub key: NodeKey,
    pub name: String,
    pub description: Option<String>,
    pub source_file: PathBuf,
    pub depends: Vec<String>,
    /// Whether this is the project's default target
    pub is_default: bool,
}

impl TargetNode {
    /// Tooltip in the form `description (source file)`
    pub fn tooltip(&self) -> String {
        format!(
            "{} ({})",
            self.description.as_deref().unwrap_or(""),
            self.source_file.display()
        )
    }

    pub fn is_expandable(&self) -> bool {
        !self.depends.is_empty()
    }
}

/// A dependency reference, child of a target or of another dependency.
///
/// An unresolved reference (no target with this name exists) carries no
/// description, no source file and no further dependencies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyNode {
    #[serde(skip)]
    pub key: NodeKey,
    pub name: String,
    pub description: Option<String>,
    pub source_file: Option<PathBuf>,
    pub depends: Vec<String>,
}

impl DependencyNode {
    pub fn tooltip(&self) -> String {
        format!(
            "{} ({})",
            self.description.as_deref().unwrap_or(""),
            self.source_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    }

    pub fn is_expandable(&self) -> bool {
        !self.depends.is_empty()
    }

    /// Whether the referenced name resolved to a declared target
    pub fn is_resolved(&self) -> bool {
        self.source_file.is_some()
    }
}

/// Any node produced by the `children` query
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Root(RootNode),
    Target(TargetNode),
    Dependency(DependencyNode),
}

impl TreeNode {
    pub fn key(&self) -> &NodeKey {
        match self {
            TreeNode::Root(n) => &n.key,
            TreeNode::Target(n) => &n.key,
            TreeNode::Dependency(n) => &n.key,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::Root(n) => &n.file_name,
            TreeNode::Target(n) => &n.name,
            TreeNode::Dependency(n) => &n.name,
        }
    }
}
