//! Waveform style configuration
//!
//! Two layers: [`WaveformStyle`] is the resolved runtime style (iced colors
//! plus display toggles) consumed by the renderer, and [`WaveformTheme`] is
//! its serializable twin with hex-string colors, stored as YAML in the user
//! config directory. Default location: ~/.config/frutilla/theme.yaml

use frutilla_core::config::{default_config_path, load_config, save_config};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dim gray used for the "No audio loaded" placeholder label (#808080)
pub const PLACEHOLDER_TEXT_COLOR: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Resolved rendering style: colors and display toggles with fixed defaults.
///
/// Every field has a default, so `WaveformStyle::default()` is always a
/// complete, renderable configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformStyle {
    /// Surface background fill
    pub background: Color,
    /// Primary envelope color (channel 0)
    pub waveform: Color,
    /// Alternate envelope color (channel 1 in stereo split)
    pub waveform_alt: Color,
    /// Center line and stereo divider color
    pub center_line: Color,
    /// Time/amplitude grid color
    pub grid: Color,
    /// Playhead cursor color
    pub cursor: Color,
    /// Translucent selection fill
    pub selection: Color,
    pub show_grid: bool,
    pub show_center_line: bool,
    /// Split the surface into independent left/right halves
    pub stereo: bool,
}

impl Default for WaveformStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x2D, 0x2D, 0x2D),
            waveform: Color::from_rgb8(0xFF, 0x8C, 0x42),
            waveform_alt: Color::from_rgb8(0xFF, 0xA1, 0x5C),
            center_line: Color::from_rgb8(0x4A, 0x4A, 0x4A),
            grid: Color::from_rgb8(0x3C, 0x3C, 0x3C),
            cursor: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            selection: Color::from_rgba8(0xFF, 0x8C, 0x42, 0.2),
            show_grid: true,
            show_center_line: true,
            stereo: false,
        }
    }
}

/// Serializable theme configuration
///
/// Colors are hex strings ("#RRGGBB", or "#RRGGBBAA" for translucent fills
/// like the selection). Unknown or missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformTheme {
    pub background: String,
    pub waveform: String,
    pub waveform_alt: String,
    pub center_line: String,
    pub grid: String,
    pub cursor: String,
    pub selection: String,
    pub show_grid: bool,
    pub show_center_line: bool,
    pub stereo: bool,
}

impl Default for WaveformTheme {
    fn default() -> Self {
        Self {
            background: "#2D2D2D".to_string(),
            waveform: "#FF8C42".to_string(),
            waveform_alt: "#FFA15C".to_string(),
            center_line: "#4A4A4A".to_string(),
            grid: "#3C3C3C".to_string(),
            cursor: "#FFFFFF".to_string(),
            selection: "#FF8C4233".to_string(), // 0x33 = 20% alpha
            show_grid: true,
            show_center_line: true,
            stereo: false,
        }
    }
}

impl WaveformTheme {
    /// Resolve hex strings into the runtime style.
    pub fn style(&self) -> WaveformStyle {
        WaveformStyle {
            background: parse_hex_color(&self.background),
            waveform: parse_hex_color(&self.waveform),
            waveform_alt: parse_hex_color(&self.waveform_alt),
            center_line: parse_hex_color(&self.center_line),
            grid: parse_hex_color(&self.grid),
            cursor: parse_hex_color(&self.cursor),
            selection: parse_hex_color(&self.selection),
            show_grid: self.show_grid,
            show_center_line: self.show_center_line,
            stereo: self.stereo,
        }
    }

    /// Default theme file path: `~/.config/frutilla/theme.yaml`
    pub fn default_path() -> PathBuf {
        default_config_path("theme.yaml")
    }

    /// Load a theme from YAML, falling back to defaults on any problem.
    pub fn load(path: &Path) -> Self {
        load_config(path)
    }

    /// Persist the theme as YAML.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        save_config(self, path)
    }
}

/// Parse a hex color string to an iced Color.
///
/// Supports "#RRGGBB" and "#RRGGBBAA" (leading '#' optional).
/// Returns white on parse failure.
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 && hex.len() != 8 {
        log::warn!("Invalid hex color '{}', using white", hex);
        return Color::WHITE;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

    if hex.len() == 8 {
        let a = u8::from_str_radix(&hex[6..8], 16).unwrap_or(255);
        Color::from_rgba8(r, g, b, a as f32 / 255.0)
    } else {
        Color::from_rgb8(r, g, b)
    }
}
