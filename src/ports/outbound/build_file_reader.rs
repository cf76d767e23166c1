use crate::shared::Result;
use std::path::Path;

/// BuildFileReader port for reading build file contents
///
/// This port abstracts the file system operations needed to read a build
/// file, so the parser can be driven from tests or a host editor buffer.
pub trait BuildFileReader {
    /// Reads the build file at the given path
    ///
    /// # Returns
    /// The raw content of the build file as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_build_file(&self, path: &Path) -> Result<String>;
}
