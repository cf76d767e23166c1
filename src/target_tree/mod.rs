mod builder;
mod node;

pub use builder::{SelectedTarget, TargetTree};
pub use node::{DependencyNode, NodeKey, RootNode, TargetNode, TreeNode};
