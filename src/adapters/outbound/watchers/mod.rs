mod null_watcher;

pub use null_watcher::NullFileWatcher;
