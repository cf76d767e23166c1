use crate::ports::outbound::BuildFileReader;
use crate::shared::error::AntError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum build file size (10 MB). Ant build files are small; anything
/// larger is almost certainly not one.
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// FileSystemReader adapter for reading build files from the file system
///
/// Implements the BuildFileReader port with symlink, file-type and size
/// checks before reading.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildFileReader for FileSystemReader {
    fn read_build_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path).map_err(|e| AntError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        if metadata.is_symlink() {
            return Err(AntError::FileReadError {
                path: path.to_path_buf(),
                details: "path is a symbolic link; symbolic links are not followed".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(AntError::FileReadError {
                path: path.to_path_buf(),
                details: "not a regular file".to_string(),
            }
            .into());
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(AntError::FileReadError {
                path: path.to_path_buf(),
                details: format!(
                    "file is too large ({} bytes, maximum is {} bytes)",
                    metadata.len(),
                    MAX_FILE_SIZE
                ),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            AntError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
