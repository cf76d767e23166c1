use crate::shared::error::AntError;
use std::path::{Path, PathBuf};

/// Scans the configured (directory, filename) combinations under a
/// workspace folder and returns the first existing build file.
///
/// Directories are the outer loop and filenames the inner loop, so
/// `directories = [".", "config"]` with `filenames = ["build.xml", "b.xml"]`
/// tries `./build.xml`, `./b.xml`, `config/build.xml`, `config/b.xml` in
/// that order.
///
/// # Errors
/// Returns `AntError::BuildFileNotFound` when no combination exists. The
/// caller treats this as informational, not as a failure.
pub fn locate_build_file(
    root: &Path,
    directories: &[String],
    filenames: &[String],
) -> Result<PathBuf, AntError> {
    for directory in directories {
        for filename in filenames {
            let candidate = root.join(directory).join(filename);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    Err(AntError::BuildFileNotFound {
        root: root.to_path_buf(),
        directories: directories.join(","),
        filenames: filenames.join(","),
    })
}
