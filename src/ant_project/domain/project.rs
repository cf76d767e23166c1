/// Project metadata read from a build file's root element.
///
/// One Project exists per build file. It is replaced wholesale on every
/// refresh; there is no partial mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Project {
    /// The `name` attribute of the `<project>` element
    pub name: Option<String>,
    /// The `default` attribute of the `<project>` element
    pub default_target: Option<String>,
}

impl Project {
    pub fn new(name: Option<String>, default_target: Option<String>) -> Self {
        Self {
            name,
            default_target,
        }
    }

    /// Whether the given target name is the project's default target
    pub fn is_default_target(&self, name: &str) -> bool {
        self.default_target.as_deref() == Some(name)
    }
}
