use crate::ports::outbound::{RunTargetRequest, TargetRunner};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use tokio::process::Command;

/// AntCommandRunner adapter executing targets through the `ant` command
///
/// Implements the TargetRunner port by spawning
/// `ant -buildfile <source file> <target>` and waiting for it to finish.
pub struct AntCommandRunner {
    executable: String,
}

impl AntCommandRunner {
    pub fn new() -> Self {
        Self {
            executable: "ant".to_string(),
        }
    }

    /// Uses a different executable, e.g. a wrapper script
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl Default for AntCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Selection quoting is shell-style; arguments here are passed as an argv
/// vector, so surrounding quotes must come off again.
fn unquote(name: &str) -> &str {
    name.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(name)
}

#[async_trait]
impl TargetRunner for AntCommandRunner {
    async fn run_target(&self, request: &RunTargetRequest) -> Result<i32> {
        let mut command = Command::new(&self.executable);
        if !request.source_file.as_os_str().is_empty() {
            command.arg("-buildfile").arg(&request.source_file);
        }
        command.arg(unquote(&request.name));

        let status = command
            .status()
            .await
            .with_context(|| format!("Failed to run '{}'", self.executable))?;

        Ok(status.code().unwrap_or(-1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("build"), "build");
        assert_eq!(unquote("\"full build\""), "full build");
        assert_eq!(unquote("\"unbalanced"), "\"unbalanced");
    }

    #[tokio::test]
    async fn test_run_target_missing_executable() {
        let runner = AntCommandRunner::with_executable("ant-tree-no-such-executable");
        let request = RunTargetRequest {
            name: "build".to_string(),
            source_file: PathBuf::from("build.xml"),
        };
        let result = runner.run_target(&request).await;
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to run"));
    }

    #[tokio::test]
    async fn test_run_target_exit_code_passthrough() {
        // Use `false` as a stand-in build tool; it ignores its arguments
        // and exits 1.
        let runner = AntCommandRunner::with_executable("false");
        let request = RunTargetRequest {
            name: "build".to_string(),
            source_file: PathBuf::new(),
        };
        let code = runner.run_target(&request).await.unwrap();
        assert_eq!(code, 1);
    }
}
