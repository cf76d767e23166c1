use std::path::{Path, PathBuf};
use std::process;

use ant_tree::adapters::outbound::console::StderrNotifier;
use ant_tree::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use ant_tree::adapters::outbound::process::AntCommandRunner;
use ant_tree::adapters::outbound::watchers::NullFileWatcher;
use ant_tree::application::dto::LoadTreeRequest;
use ant_tree::application::use_cases::LoadTargetTreeUseCase;
use ant_tree::cli::Args;
use ant_tree::config::{discover_config, TreeOptions};
use ant_tree::ports::outbound::OutputPresenter;
use ant_tree::shared::error::{AntError, ExitCode};
use ant_tree::shared::Result;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let workspace_folders: Vec<PathBuf> = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.iter().map(PathBuf::from).collect()
    };

    for folder in &workspace_folders {
        validate_workspace_path(folder)?;
    }

    // Config is discovered in the first workspace folder; CLI flags win.
    let config = discover_config(&workspace_folders[0])?;
    let options = TreeOptions::resolve(
        config.as_ref(),
        args.build_filenames.as_deref(),
        args.build_file_directories.as_deref(),
        args.no_sort,
    );

    let use_case = LoadTargetTreeUseCase::new(
        FileSystemReader::new(),
        StderrNotifier::new(),
        NullFileWatcher::new(),
    );

    let request = LoadTreeRequest::new(workspace_folders, options);
    let response = use_case.execute(request).await?;

    // Per-folder failures were already surfaced as notices; only give up
    // when nothing at all could be loaded.
    if response.failed > 0 && response.tree.is_empty() {
        return Ok(ExitCode::ApplicationError);
    }

    let mut tree = response.tree;

    if let Some(target_name) = &args.run {
        if !tree.select_target_named(target_name) {
            anyhow::bail!("Target '{}' not found in any loaded build file", target_name);
        }

        let runner = AntCommandRunner::new();
        // Selection was just made, so the runner is always invoked here.
        let exit_code = tree.run_selected(&runner).await?.unwrap_or(-1);
        return Ok(if exit_code == 0 {
            ExitCode::Success
        } else {
            ExitCode::TargetFailed
        });
    }

    let formatter = args.format.create_formatter(!args.no_color);
    let rendered = formatter.format(&tree)?;

    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };
    presenter.present(&rendered)?;

    Ok(ExitCode::Success)
}

fn validate_workspace_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(AntError::InvalidWorkspacePath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(AntError::InvalidWorkspacePath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
