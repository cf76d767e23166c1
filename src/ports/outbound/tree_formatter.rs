use crate::shared::Result;
use crate::target_tree::TargetTree;

/// TreeFormatter port for rendering a loaded target tree
pub trait TreeFormatter {
    /// Renders the tree to a string in the formatter's output format
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, tree: &TargetTree) -> Result<String>;
}
