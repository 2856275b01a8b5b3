//! Standard configuration paths
//!
//! All Frutilla tools keep their YAML configuration under one directory:
//! `~/.config/frutilla` (or the platform equivalent of the user config dir).

use std::path::PathBuf;

/// The Frutilla configuration directory.
///
/// Falls back to the home directory, then to `.`, so callers always get a
/// usable path even on unusual setups.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("frutilla")
}

/// Path for a named config file inside the Frutilla config directory.
///
/// Returns: `~/.config/frutilla/{filename}`
pub fn default_config_path(filename: &str) -> PathBuf {
    config_dir().join(filename)
}
