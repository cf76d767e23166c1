use super::Target;

/// Flat, parse-ordered collection of the targets declared by a build file
/// and everything it imports.
///
/// Name collisions across merged files are not deduplicated: duplicates
/// coexist in declaration order and `find` resolves to the first-parsed
/// match, so every node referencing the same name resolves consistently
/// within one snapshot.
#[derive(Debug, Clone, Default)]
pub struct TargetIndex {
    targets: Vec<Target>,
}

impl TargetIndex {
    pub fn new(targets: Vec<Target>) -> Self {
        Self { targets }
    }

    /// Looks up a target by name. Lookup order is parse order, so a name
    /// declared more than once resolves to the first declaration.
    pub fn find(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }

    /// Iterates targets in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
