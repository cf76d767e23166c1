mod build_file_reader;
mod file_watcher;
mod notifier;
mod output_presenter;
mod target_runner;
mod tree_formatter;

pub use build_file_reader::BuildFileReader;
pub use file_watcher::FileWatcher;
pub use notifier::Notifier;
pub use output_presenter::OutputPresenter;
pub use target_runner::{RunTargetRequest, TargetRunner};
pub use tree_formatter::TreeFormatter;
