use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Execution request handed to the runner for a selected target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTargetRequest {
    /// Target name, shell-quoted by the selection if it contains a space
    pub name: String,
    /// The build file that declared the target
    pub source_file: PathBuf,
}

/// TargetRunner port for executing a build target
///
/// Execution mechanics (spawning Ant, terminal integration, etc.) are an
/// external collaborator; the core only hands over name and source file.
#[async_trait]
pub trait TargetRunner {
    /// Executes the given target
    ///
    /// # Returns
    /// The exit code of the underlying build process
    ///
    /// # Errors
    /// Returns an error if the process cannot be spawned
    async fn run_target(&self, request: &RunTargetRequest) -> Result<i32>;
}
