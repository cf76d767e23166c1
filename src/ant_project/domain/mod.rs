mod project;
mod snapshot;
mod target;
mod target_index;

pub use project::Project;
pub use snapshot::ProjectSnapshot;
pub use target::Target;
pub use target_index::TargetIndex;
