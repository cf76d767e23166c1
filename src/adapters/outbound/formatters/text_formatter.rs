use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;
use crate::target_tree::{NodeKey, TargetTree};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TextTreeFormatter adapter rendering the tree as indented text
///
/// One line per node, two spaces of indent per level. The default target
/// is marked, unresolved dependencies are flagged, and a dependency name
/// already on the current expansion path is not expanded again (cyclic
/// `depends` chains would otherwise never terminate).
pub struct TextTreeFormatter {
    colored: bool,
}

impl TextTreeFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn target_name(&self, name: &str) -> String {
        if self.colored {
            name.green().to_string()
        } else {
            name.to_string()
        }
    }

    fn dependency_name(&self, name: &str) -> String {
        if self.colored {
            name.cyan().to_string()
        } else {
            name.to_string()
        }
    }

    fn detail(&self, text: &str) -> String {
        if self.colored {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn write_dependencies(
        &self,
        out: &mut String,
        tree: &TargetTree,
        folder: usize,
        depends: &[String],
        depth: usize,
        path: &mut Vec<String>,
    ) {
        for dep in tree.dependencies_of(folder, depends) {
            let mut line = format!("{}{}", "  ".repeat(depth), self.dependency_name(&dep.name));
            if !dep.is_resolved() {
                line.push_str(&format!(" {}", self.detail("(unresolved)")));
            } else if let Some(description) = &dep.description {
                line.push_str(&format!("  {}", self.detail(description)));
            }
            out.push_str(&line);
            out.push('\n');

            if dep.is_expandable() && !path.contains(&dep.name) {
                path.push(dep.name.clone());
                self.write_dependencies(out, tree, folder, &dep.depends, depth + 1, path);
                path.pop();
            }
        }
    }
}

impl TreeFormatter for TextTreeFormatter {
    fn format(&self, tree: &TargetTree) -> Result<String> {
        let mut out = String::new();

        for root in tree.roots() {
            let NodeKey::Root { folder } = root.key else {
                continue;
            };

            writeln!(out, "{}", root.label())?;

            for target in tree.targets(folder) {
                let mut line = format!("  {}", self.target_name(&target.name));
                if target.is_default {
                    let marker = if self.colored {
                        "(default)".yellow().to_string()
                    } else {
                        "(default)".to_string()
                    };
                    line.push_str(&format!(" {}", marker));
                }
                if let Some(description) = &target.description {
                    line.push_str(&format!("  {}", self.detail(description)));
                }
                out.push_str(&line);
                out.push('\n');

                let mut path = vec![target.name.clone()];
                self.write_dependencies(&mut out, tree, folder, &target.depends, 2, &mut path);
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ant_project::domain::{Project, ProjectSnapshot, Target, TargetIndex};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn target(name: &str, depends: &[&str], description: Option<&str>) -> Target {
        Target {
            name: name.to_string(),
            description: description.map(str::to_string),
            depends: depends.iter().map(|s| s.to_string()).collect(),
            source_file: PathBuf::from("build.xml"),
        }
    }

    fn tree(targets: Vec<Target>, default_target: Option<&str>) -> TargetTree {
        TargetTree::new(
            vec![Arc::new(ProjectSnapshot {
                build_file: PathBuf::from("build.xml"),
                project: Project::new(
                    Some("demo".to_string()),
                    default_target.map(str::to_string),
                ),
                targets: TargetIndex::new(targets),
                source_files: vec![PathBuf::from("build.xml")],
            })],
            true,
        )
    }

    #[test]
    fn test_format_plain_tree() {
        let tree = tree(
            vec![
                target("build", &["compile"], Some("main build")),
                target("compile", &[], None),
            ],
            Some("build"),
        );

        let output = TextTreeFormatter::new(false).format(&tree).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "build.xml (demo)");
        assert_eq!(lines[1], "  build (default)  main build");
        assert_eq!(lines[2], "    compile");
        assert_eq!(lines[3], "  compile");
    }

    #[test]
    fn test_format_marks_unresolved_dependency() {
        let tree = tree(vec![target("build", &["ghost"], None)], None);

        let output = TextTreeFormatter::new(false).format(&tree).unwrap();
        assert!(output.contains("ghost (unresolved)"));
    }

    #[test]
    fn test_format_terminates_on_cyclic_depends() {
        let tree = tree(
            vec![
                target("a", &["b"], None),
                target("b", &["a"], None),
            ],
            None,
        );

        let output = TextTreeFormatter::new(false).format(&tree).unwrap();
        // Expansion stops when a name reappears on its own path.
        assert!(output.lines().count() < 10);
        assert!(output.contains("a"));
        assert!(output.contains("b"));
    }

    #[test]
    fn test_format_empty_tree() {
        let tree = TargetTree::new(vec![], true);
        let output = TextTreeFormatter::new(false).format(&tree).unwrap();
        assert!(output.is_empty());
    }
}
