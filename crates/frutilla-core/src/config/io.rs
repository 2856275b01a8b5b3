//! Generic configuration I/O
//!
//! YAML loading and saving for any serializable configuration type. Loading
//! never fails: a missing or unparseable file falls back to the type's
//! defaults so a broken config can't keep the application from starting.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Load configuration from a YAML file.
///
/// Missing file returns defaults; an invalid file logs a warning and
/// returns defaults.
pub fn load_config<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        log::info!("load_config: {:?} doesn't exist, using defaults", path);
        return T::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<T>(&contents) {
            Ok(config) => {
                log::info!("load_config: Loaded {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse {:?}: {}, using defaults", path, e);
                T::default()
            }
        },
        Err(e) => {
            log::warn!("load_config: Failed to read {:?}: {}, using defaults", path, e);
            T::default()
        }
    }
}

/// Save configuration to a YAML file, creating parent directories as needed.
pub fn save_config<T>(config: &T, path: &Path) -> Result<()>
where
    T: Serialize,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Saved {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct TestTheme {
        accent: String,
        grid_visible: bool,
    }

    impl Default for TestTheme {
        fn default() -> Self {
            Self {
                accent: "#FF8C42".to_string(),
                grid_visible: true,
            }
        }
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let theme: TestTheme = load_config(Path::new("/nonexistent/path/theme.yaml"));
        assert_eq!(theme, TestTheme::default());
    }

    #[test]
    fn test_load_invalid_yaml_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.yaml");
        std::fs::write(&path, "accent: [not, a, string").unwrap();

        let theme: TestTheme = load_config(&path);
        assert_eq!(theme, TestTheme::default());
    }

    #[test]
    fn test_roundtrip_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("theme.yaml");

        let theme = TestTheme {
            accent: "#00CCCC".to_string(),
            grid_visible: false,
        };
        save_config(&theme, &path).unwrap();

        let loaded: TestTheme = load_config(&path);
        assert_eq!(loaded, theme);
    }
}
