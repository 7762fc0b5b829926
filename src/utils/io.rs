// src/utils/io.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write a password to a plain text file, replacing any previous content.
pub fn save_password(path: &Path, password: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, password)?;
    log::info!("Saved password to {}", path.display());
    Ok(())
}

/// Resolve where a bare file name should be saved.
///
/// Relative names go to the user's download directory when one exists,
/// otherwise they stay relative to the working directory.
pub fn resolve_output_path(file: &Path) -> PathBuf {
    if file.is_absolute() || file.components().count() > 1 {
        return file.to_path_buf();
    }
    match dirs::download_dir() {
        Some(dir) => dir.join(file),
        None => file.to_path_buf(),
    }
}
