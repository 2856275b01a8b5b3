//! Shared configuration utilities for Frutilla applications
//!
//! Generic YAML load/save plus the standard config-directory paths. Widget
//! crates layer their own typed configuration structs (theme colors, layout
//! presets) on top of these helpers.
//!
//! # Usage
//!
//! ```ignore
//! use frutilla_core::config::{load_config, save_config, default_config_path};
//!
//! let path = default_config_path("theme.yaml");
//! let theme: WaveformTheme = load_config(&path);
//! save_config(&theme, &path)?;
//! ```

mod io;
mod paths;

pub use io::{load_config, save_config};
pub use paths::{config_dir, default_config_path};
