use db::utils::text::sanitize_name;
use std::fs;
use std::path::PathBuf;
use crate::config::Config;
use crate::errors::ApiError;

/// Writes uploaded bytes under the configured storage root, mirroring the
/// folder hierarchy. Returns the path relative to the root.
pub fn store(config: &Config, folder_path: &str, file_name: &str, bytes: &[u8]) -> Result<String, ApiError> {
    let relative_path = format!("{}/{}", folder_path, sanitize_name(file_name));
    let absolute_path = absolute_path(config, &relative_path);
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&absolute_path, bytes)?;
    Ok(relative_path)
}

pub fn absolute_path(config: &Config, stored_path: &str) -> PathBuf {
    PathBuf::from(&config.document_storage_path).join(stored_path)
}

/// Removal failures are logged and swallowed; the metadata row is already
/// gone and a stray file on disk is harmless.
pub fn remove(config: &Config, stored_path: &str) {
    let absolute_path = absolute_path(config, stored_path);
    if let Err(e) = fs::remove_file(&absolute_path) {
        warn!("Could not remove stored file {}: {}", absolute_path.display(), e);
    }
}
