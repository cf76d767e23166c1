use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;
use crate::target_tree::{NodeKey, TargetTree};
use anyhow::Context;
use serde::Serialize;

/// JsonTreeFormatter adapter rendering the tree as JSON
///
/// Mirrors the lazy tree model: each target carries its dependency nodes
/// one level deep, and each dependency node lists further dependency names
/// for the consumer to expand (so cyclic `depends` chains stay finite).
pub struct JsonTreeFormatter;

impl JsonTreeFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonTreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct TreeDoc {
    roots: Vec<RootDoc>,
}

#[derive(Serialize)]
struct RootDoc {
    build_file: String,
    project: Option<String>,
    default_target: Option<String>,
    targets: Vec<TargetDoc>,
}

#[derive(Serialize)]
struct TargetDoc {
    name: String,
    description: Option<String>,
    source_file: String,
    is_default: bool,
    depends: Vec<DependencyDoc>,
}

#[derive(Serialize)]
struct DependencyDoc {
    name: String,
    resolved: bool,
    description: Option<String>,
    source_file: Option<String>,
    depends: Vec<String>,
}

impl TreeFormatter for JsonTreeFormatter {
    fn format(&self, tree: &TargetTree) -> Result<String> {
        let mut roots = Vec::new();

        for root in tree.roots() {
            let NodeKey::Root { folder } = root.key else {
                continue;
            };

            let targets = tree
                .targets(folder)
                .into_iter()
                .map(|target| {
                    let depends = tree
                        .dependencies_of(folder, &target.depends)
                        .into_iter()
                        .map(|dep| DependencyDoc {
                            name: dep.name.clone(),
                            resolved: dep.is_resolved(),
                            description: dep.description.clone(),
                            source_file: dep
                                .source_file
                                .as_ref()
                                .map(|p| p.display().to_string()),
                            depends: dep.depends.clone(),
                        })
                        .collect();

                    TargetDoc {
                        name: target.name.clone(),
                        description: target.description.clone(),
                        source_file: target.source_file.display().to_string(),
                        is_default: target.is_default,
                        depends,
                    }
                })
                .collect();

            roots.push(RootDoc {
                build_file: root.build_file.display().to_string(),
                project: root.project_name.clone(),
                default_target: root.default_target.clone(),
                targets,
            });
        }

        serde_json::to_string_pretty(&TreeDoc { roots }).context("Failed to serialize tree")
    }
}
