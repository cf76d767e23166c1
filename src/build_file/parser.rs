use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::ant_project::domain::{Project, Target};
use crate::ports::outbound::BuildFileReader;
use crate::shared::error::AntError;
use crate::shared::Result;

/// A raw `<target>` element as declared in one build file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTarget {
    pub name: String,
    pub depends: Option<String>,
    pub description: Option<String>,
}

/// Owned view of one parsed build file.
///
/// Extracted from the XML document so the borrowed DOM never escapes the
/// parse call.
#[derive(Debug, Clone)]
pub struct BuildDocument {
    pub path: PathBuf,
    pub project_name: Option<String>,
    pub default_target: Option<String>,
    pub targets: Vec<RawTarget>,
    /// `file` attributes of top-level `<import>`/`<include>` elements,
    /// relative to this file's directory
    pub imports: Vec<String>,
}

/// Parses XML content into an owned `BuildDocument`.
///
/// # Errors
/// Returns `AntError::BuildFileParseError` for malformed XML, a root
/// element other than `<project>`, or a `<target>` without a name.
pub fn parse_document(path: &Path, content: &str) -> Result<BuildDocument> {
    let doc = roxmltree::Document::parse(content).map_err(|e| AntError::BuildFileParseError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let root = doc.root_element();
    if root.tag_name().name() != "project" {
        return Err(AntError::BuildFileParseError {
            path: path.to_path_buf(),
            details: format!(
                "expected <project> root element, found <{}>",
                root.tag_name().name()
            ),
        }
        .into());
    }

    let mut targets = Vec::new();
    let mut imports = Vec::new();

    for node in root.children().filter(|n| n.is_element()) {
        match node.tag_name().name() {
            "target" => {
                let name = node.attribute("name").ok_or_else(|| {
                    AntError::BuildFileParseError {
                        path: path.to_path_buf(),
                        details: "<target> element is missing the required 'name' attribute"
                            .to_string(),
                    }
                })?;
                targets.push(RawTarget {
                    name: name.to_string(),
                    depends: node.attribute("depends").map(str::to_string),
                    description: node.attribute("description").map(str::to_string),
                });
            }
            "import" | "include" => {
                if let Some(file) = node.attribute("file") {
                    imports.push(file.to_string());
                }
            }
            _ => {}
        }
    }

    Ok(BuildDocument {
        path: path.to_path_buf(),
        project_name: root.attribute("name").map(str::to_string),
        default_target: root.attribute("default").map(str::to_string),
        targets,
        imports,
    })
}

/// Splits a `depends` attribute into ordered dependency names.
///
/// Names are comma-separated; surrounding whitespace is trimmed and empty
/// entries are dropped.
pub(crate) fn split_depends(depends: Option<&str>) -> Vec<String> {
    depends
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build Description Parser
///
/// Reads build files through the `BuildFileReader` port, extracts project
/// metadata and targets, and follows `<import>`/`<include>` references
/// recursively while guarding against cyclic imports.
pub struct BuildFileParser<R> {
    reader: R,
}

impl<R: BuildFileReader> BuildFileParser<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Reads and parses one build file into an owned document view
    ///
    /// # Errors
    /// Returns `AntError::BuildFileParseError` carrying the underlying
    /// cause for an unreadable or malformed file.
    pub fn parse(&self, path: &Path) -> Result<BuildDocument> {
        let content =
            self.reader
                .read_build_file(path)
                .map_err(|e| AntError::BuildFileParseError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                })?;
        parse_document(path, &content)
    }

    /// Reads the project metadata from a parsed document
    pub fn project_details(doc: &BuildDocument) -> Project {
        Project::new(doc.project_name.clone(), doc.default_target.clone())
    }

    /// Extracts the flat target collection for a document, merging in
    /// targets from imported files.
    ///
    /// Imports are resolved relative to the declaring file's directory and
    /// parsed depth-first in declaration order. `visited` accumulates every
    /// file seen so far; a file already in the set is neither re-parsed nor
    /// re-merged, which is what terminates cyclic imports.
    ///
    /// # Returns
    /// The merged targets (each tagged with its declaring file) and every
    /// source file touched, for the watcher collaborator.
    ///
    /// # Errors
    /// An unreadable or malformed imported file aborts extraction for the
    /// whole branch; the caller decides how to surface it.
    pub fn extract_targets(
        &self,
        doc: &BuildDocument,
        visited: &mut HashSet<PathBuf>,
    ) -> Result<(Vec<Target>, Vec<PathBuf>)> {
        visited.insert(canonical_or_self(&doc.path));

        let mut targets = Vec::with_capacity(doc.targets.len());
        let mut source_files = vec![doc.path.clone()];

        for raw in &doc.targets {
            targets.push(Target {
                name: raw.name.clone(),
                description: raw.description.clone(),
                depends: split_depends(raw.depends.as_deref()),
                source_file: doc.path.clone(),
            });
        }

        let base_dir = doc.path.parent().unwrap_or_else(|| Path::new("."));
        for import in &doc.imports {
            let import_path = base_dir.join(import);
            if visited.contains(&canonical_or_self(&import_path)) {
                continue;
            }
            let imported = self.parse(&import_path)?;
            let (mut imported_targets, mut imported_sources) =
                self.extract_targets(&imported, visited)?;
            targets.append(&mut imported_targets);
            source_files.append(&mut imported_sources);
        }

        Ok((targets, source_files))
    }
}

/// Canonical form for the visited set, so `dir/a.xml` and a round trip
/// through `dir/../dir/a.xml` count as the same file. Falls back to the
/// path as given when the file does not exist yet.
fn canonical_or_self(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
