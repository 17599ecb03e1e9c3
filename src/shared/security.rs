use crate::shared::error::BuildError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum catalog file size (10 MB)
pub const MAX_CATALOG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum configuration file size (1 MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the symlink itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "catalog", "config file")
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| BuildError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(BuildError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("The {} path is a symbolic link", file_description),
            hint: "Point to the target file directly; symbolic links are not followed".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(BuildError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", path.display()),
        }
        .into());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds `max_size`
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(BuildError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes",
                file_size, max_size
            ),
            hint: "Component catalogs and config files are expected to be small".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Reads a text file after the regular-file and size checks pass.
pub fn read_guarded(path: &Path, file_description: &str, max_size: u64) -> Result<String> {
    validate_regular_file(path, file_description)?;

    let size = fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| BuildError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
    validate_file_size(size, path, max_size)?;

    fs::read_to_string(path).map_err(|e| {
        BuildError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
