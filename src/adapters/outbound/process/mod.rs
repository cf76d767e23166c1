mod ant_runner;

pub use ant_runner::AntCommandRunner;
