//! ant-tree - target tree explorer for Apache Ant build files
//!
//! This library parses Ant build files (including their imports) and
//! exposes the declared targets and dependency relationships as a
//! navigable tree view model, with optional execution of a selected
//! target.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain** (`ant_project`): projects, targets and per-folder snapshots
//! - **Parser** (`build_file`): build file location, XML parsing, import merging
//! - **Tree** (`target_tree`): the query-driven tree view model
//! - **Application** (`application`): the load use case and refresh sessions
//! - **Ports** (`ports`): interface definitions for collaborators
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common error and result types
//!
//! # Example
//!
//! ```no_run
//! use ant_tree::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let use_case = LoadTargetTreeUseCase::new(
//!     FileSystemReader::new(),
//!     StderrNotifier::new(),
//!     NullFileWatcher::new(),
//! );
//!
//! let request = LoadTreeRequest::new(vec![PathBuf::from(".")], TreeOptions::default());
//! let response = use_case.execute(request).await?;
//!
//! let formatter = TextTreeFormatter::new(false);
//! println!("{}", formatter.format(&response.tree)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod ant_project;
pub mod application;
pub mod build_file;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod target_tree;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrNotifier;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonTreeFormatter, TextTreeFormatter};
    pub use crate::adapters::outbound::process::AntCommandRunner;
    pub use crate::adapters::outbound::watchers::NullFileWatcher;
    pub use crate::ant_project::domain::{Project, ProjectSnapshot, Target, TargetIndex};
    pub use crate::application::dto::{LoadTreeRequest, LoadTreeResponse};
    pub use crate::application::use_cases::LoadTargetTreeUseCase;
    pub use crate::build_file::{locate_build_file, BuildDocument, BuildFileParser};
    pub use crate::config::TreeOptions;
    pub use crate::ports::outbound::{
        BuildFileReader, FileWatcher, Notifier, OutputPresenter, RunTargetRequest, TargetRunner,
        TreeFormatter,
    };
    pub use crate::shared::Result;
    pub use crate::target_tree::{
        DependencyNode, NodeKey, RootNode, SelectedTarget, TargetNode, TargetTree, TreeNode,
    };
}
