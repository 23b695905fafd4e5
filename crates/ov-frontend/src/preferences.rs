//! Renderer preferences persistence
//!
//! The renderer configuration is stored as RON in the eframe storage
//! directory. A missing or unreadable file falls back to defaults.

use std::path::{Path, PathBuf};

use ov_renderer::RendererConfig;

/// App id used for the storage directory
const APP_ID: &str = "OctaView";

/// Preferences file name
const PREFERENCES_FILE: &str = "renderer.ron";

/// Errors for preferences load/save
#[derive(Debug, Clone, thiserror::Error)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("No storage directory available")]
    NoStorageDir,
}

fn preferences_path() -> Result<PathBuf, PreferencesError> {
    eframe::storage_dir(APP_ID)
        .map(|dir| dir.join(PREFERENCES_FILE))
        .ok_or(PreferencesError::NoStorageDir)
}

/// Load the renderer configuration from a file
pub fn load_from(path: impl AsRef<Path>) -> Result<RendererConfig, PreferencesError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| PreferencesError::Io(e.to_string()))?;
    ron::from_str(&content).map_err(|e| PreferencesError::Deserialize(e.to_string()))
}

/// Save the renderer configuration to a file
pub fn save_to(config: &RendererConfig, path: impl AsRef<Path>) -> Result<(), PreferencesError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PreferencesError::Io(e.to_string()))?;
    }
    let content = ron::ser::to_string_pretty(config, ron::ser::PrettyConfig::default())
        .map_err(|e| PreferencesError::Serialize(e.to_string()))?;
    std::fs::write(path, content).map_err(|e| PreferencesError::Io(e.to_string()))?;
    Ok(())
}

/// Save the renderer configuration to the default location
pub fn save(config: &RendererConfig) -> Result<(), PreferencesError> {
    save_to(config, preferences_path()?)
}

/// Load the stored configuration, or defaults when none exists
pub fn load_or_default() -> RendererConfig {
    let path = match preferences_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("Using default renderer config: {e}");
            return RendererConfig::default();
        }
    };

    match load_from(&path) {
        Ok(config) => {
            tracing::info!("Loaded preferences from {}", path.display());
            config
        }
        Err(e) => {
            tracing::debug!("Using default renderer config: {e}");
            RendererConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("renderer.ron");

        let mut config = RendererConfig::default();
        config.stereo.enabled = true;
        config.model.rotation_speed = 1.25;

        save_to(&config, &path).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from(dir.path().join("missing.ron"));
        assert!(matches!(result, Err(PreferencesError::Io(_))));
    }
}
