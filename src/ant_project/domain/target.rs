use std::path::PathBuf;

/// A named, independently invokable unit of build work declared in a
/// build file.
///
/// The name is the target's identity for dependency lookup. Targets merged
/// in from imported files carry their own declaring file in `source_file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub description: Option<String>,
    /// Ordered dependency target names, split from the `depends` attribute
    pub depends: Vec<String>,
    /// The build file that declared this target
    pub source_file: PathBuf,
}

impl Target {
    pub fn has_depends(&self) -> bool {
        !self.depends.is_empty()
    }
}
