//! Integration tests driving the load use case over real build files.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use ant_tree::prelude::*;
use tempfile::TempDir;

struct RecordingNotifier {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    fn new() -> Self {
        Self {
            infos: Mutex::new(vec![]),
            errors: Mutex::new(vec![]),
        }
    }
}

impl Notifier for &RecordingNotifier {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// A workspace with a root build file importing a shared one, a duplicate
/// target name and an unresolved dependency.
fn sample_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "build.xml",
        r#"<project name="demo" default="dist">
            <import file="shared/common.xml"/>
            <target name="dist" depends="compile, test" description="build distribution"/>
            <target name="test" depends="compile, report"/>
            <target name="clean" description="remove outputs"/>
        </project>"#,
    );
    fs::create_dir(dir.path().join("shared")).unwrap();
    write(
        &dir.path().join("shared"),
        "common.xml",
        r#"<project name="common">
            <target name="compile" description="compile sources"/>
            <target name="clean" description="shadowed by the root file"/>
        </project>"#,
    );
    dir
}

async fn load(
    workspace: &TempDir,
    notifier: &RecordingNotifier,
    options: TreeOptions,
) -> LoadTreeResponse {
    let use_case = LoadTargetTreeUseCase::new(
        FileSystemReader::new(),
        notifier,
        NullFileWatcher::new(),
    );
    use_case
        .execute(LoadTreeRequest::new(
            vec![workspace.path().to_path_buf()],
            options,
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_load_merges_imported_targets() {
    let workspace = sample_workspace();
    let notifier = RecordingNotifier::new();
    let response = load(&workspace, &notifier, TreeOptions::default()).await;

    assert_eq!(response.loaded, 1);
    let targets = response.tree.targets(0);
    // Three targets from the root file plus two from the import, the
    // duplicate "clean" included.
    assert_eq!(targets.len(), 5);

    let compile = targets.iter().find(|t| t.name == "compile").unwrap();
    assert!(compile.source_file.ends_with("shared/common.xml"));
    assert_eq!(compile.description.as_deref(), Some("compile sources"));
}

#[tokio::test]
async fn test_targets_sorted_and_default_marked() {
    let workspace = sample_workspace();
    let notifier = RecordingNotifier::new();
    let response = load(&workspace, &notifier, TreeOptions::default()).await;

    let names: Vec<_> = response
        .tree
        .targets(0)
        .iter()
        .map(|t| t.name.clone())
        .collect();
    assert_eq!(names, vec!["clean", "clean", "compile", "dist", "test"]);

    let dist = response
        .tree
        .targets(0)
        .into_iter()
        .find(|t| t.name == "dist")
        .unwrap();
    assert!(dist.is_default);
}

#[tokio::test]
async fn test_declaration_order_when_sort_disabled() {
    let workspace = sample_workspace();
    let notifier = RecordingNotifier::new();
    let options = TreeOptions {
        sort_targets_alphabetically: false,
        ..TreeOptions::default()
    };
    let response = load(&workspace, &notifier, options).await;

    let names: Vec<_> = response
        .tree
        .targets(0)
        .iter()
        .map(|t| t.name.clone())
        .collect();
    assert_eq!(names, vec!["dist", "test", "clean", "compile", "clean"]);
}

#[tokio::test]
async fn test_dependency_expansion_and_unresolved_reference() {
    let workspace = sample_workspace();
    let notifier = RecordingNotifier::new();
    let response = load(&workspace, &notifier, TreeOptions::default()).await;

    let dist = response
        .tree
        .targets(0)
        .into_iter()
        .find(|t| t.name == "dist")
        .unwrap();
    let deps = response.tree.dependencies_of(0, &dist.depends);
    let names: Vec<_> = deps.iter().map(|d| d.name.clone()).collect();
    // depends="compile, test" in declaration order despite the sort policy.
    assert_eq!(names, vec!["compile", "test"]);
    assert!(deps.iter().all(|d| d.is_resolved()));

    // "report" is never declared anywhere.
    let test = response
        .tree
        .targets(0)
        .into_iter()
        .find(|t| t.name == "test")
        .unwrap();
    let test_deps = response.tree.dependencies_of(0, &test.depends);
    let ghost = test_deps.iter().find(|d| d.name == "report").unwrap();
    assert!(!ghost.is_resolved());
    assert!(ghost.description.is_none());
    assert!(response.tree.children(&ghost.key).is_empty());
}

#[tokio::test]
async fn test_duplicate_target_resolves_to_first_parsed() {
    let workspace = sample_workspace();
    let notifier = RecordingNotifier::new();
    let response = load(&workspace, &notifier, TreeOptions::default()).await;

    // "clean" exists in the root file and the import; the root file is
    // parsed first, so lookups resolve to its declaration.
    let deps = response.tree.dependencies_of(0, &["clean".to_string()]);
    assert_eq!(deps[0].description.as_deref(), Some("remove outputs"));
    assert!(deps[0].source_file.as_ref().unwrap().ends_with("build.xml"));
}

#[tokio::test]
async fn test_multiple_folders_with_mixed_outcomes() {
    let loaded_dir = sample_workspace();
    let empty_dir = TempDir::new().unwrap();
    let broken_dir = TempDir::new().unwrap();
    write(broken_dir.path(), "build.xml", "<project><target</project>");

    let notifier = RecordingNotifier::new();
    let use_case = LoadTargetTreeUseCase::new(
        FileSystemReader::new(),
        &notifier,
        NullFileWatcher::new(),
    );

    let response = use_case
        .execute(LoadTreeRequest::new(
            vec![
                loaded_dir.path().to_path_buf(),
                empty_dir.path().to_path_buf(),
                broken_dir.path().to_path_buf(),
            ],
            TreeOptions::default(),
        ))
        .await
        .unwrap();

    assert_eq!(response.loaded, 1);
    assert_eq!(response.skipped, 1);
    assert_eq!(response.failed, 1);
    assert_eq!(response.tree.roots().len(), 1);

    assert!(notifier
        .infos
        .lock()
        .unwrap()
        .iter()
        .any(|m| m.contains("No build file found")));
    assert!(notifier
        .errors
        .lock()
        .unwrap()
        .iter()
        .any(|m| m.contains("Error loading targets")));
}

#[tokio::test]
async fn test_custom_build_filenames_and_directories() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("build")).unwrap();
    write(
        &dir.path().join("build"),
        "main.xml",
        r#"<project name="custom"><target name="all"/></project>"#,
    );

    let notifier = RecordingNotifier::new();
    let options = TreeOptions {
        build_filenames: vec!["main.xml".to_string()],
        build_file_directories: vec![".".to_string(), "build".to_string()],
        sort_targets_alphabetically: true,
    };
    let response = load(&dir, &notifier, options).await;

    assert_eq!(response.loaded, 1);
    let roots = response.tree.roots();
    assert_eq!(roots[0].file_name, "main.xml");
    assert_eq!(roots[0].project_name.as_deref(), Some("custom"));
}

#[tokio::test]
async fn test_text_formatter_end_to_end() {
    let workspace = sample_workspace();
    let notifier = RecordingNotifier::new();
    let response = load(&workspace, &notifier, TreeOptions::default()).await;

    let output = TextTreeFormatter::new(false)
        .format(&response.tree)
        .unwrap();
    assert!(output.starts_with("build.xml (demo)"));
    assert!(output.contains("dist (default)"));
    assert!(output.contains("report (unresolved)"));
}

#[tokio::test]
async fn test_run_selected_target_from_loaded_tree() {
    use async_trait::async_trait;

    struct RecordingRunner {
        requests: Mutex<Vec<RunTargetRequest>>,
    }

    #[async_trait]
    impl TargetRunner for RecordingRunner {
        async fn run_target(&self, request: &RunTargetRequest) -> Result<i32> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(0)
        }
    }

    let workspace = sample_workspace();
    let notifier = RecordingNotifier::new();
    let response = load(&workspace, &notifier, TreeOptions::default()).await;

    let mut tree = response.tree;
    assert!(tree.select_target_named("dist"));

    let runner = RecordingRunner {
        requests: Mutex::new(vec![]),
    };
    let exit_code = tree.run_selected(&runner).await.unwrap();
    assert_eq!(exit_code, Some(0));

    let requests = runner.requests.lock().unwrap();
    assert_eq!(requests[0].name, "dist");
    assert!(requests[0].source_file.ends_with("build.xml"));
    assert!(requests[0].source_file.starts_with(workspace.path()));
}
