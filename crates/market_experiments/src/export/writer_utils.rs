use std::fs::File;
use std::path::Path;

/// Guard for exporters whose output would be meaningless without rows.
///
/// # Errors
///
/// Returns an error when `items` is empty.
pub(crate) fn ensure_not_empty<T>(items: &[T]) -> Result<(), Box<dyn std::error::Error>> {
    if items.is_empty() {
        return Err("No episodes to export".into());
    }

    Ok(())
}

/// Create (or truncate) the export target.
///
/// # Errors
///
/// Returns an error if the file cannot be created, e.g. a missing parent
/// directory or insufficient permissions.
pub(crate) fn create_output_file(
    path: impl AsRef<Path>,
) -> Result<File, Box<dyn std::error::Error>> {
    Ok(File::create(path)?)
}
