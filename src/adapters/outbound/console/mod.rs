mod notifier;

pub use notifier::StderrNotifier;
