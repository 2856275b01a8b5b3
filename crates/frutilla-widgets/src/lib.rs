//! Shared UI widgets for the Frutilla audio editor
//!
//! This crate provides reusable iced widgets and utilities for waveform
//! display: a zoomable peak-envelope view, selection and playhead overlays,
//! thumbnails, and a software rasterizer for offscreen rendering.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! Following idiomatic iced patterns:
//!
//! - **Renderer**: `WaveformRenderer` owns the offscreen surface and the
//!   view state, repainting synchronously whenever a setter changes it
//! - **Scene**: `WaveformScene` is pure draw-list data; the rasterizer and
//!   the canvas both consume it, so the two render paths always agree
//! - **View functions**: Take state + callbacks, return `Element<Message>`
//! - **Canvas Program**: Handles custom rendering and event-to-callback
//!   translation (click to seek, drag to select)
//!
//! ## View Functions
//!
//! - `waveform_view`: Waveform strip with click-to-seek and drag-to-select
//! - `surface_view`: Any offscreen surface shown as an image element

pub mod theme;
pub mod waveform;

// Re-export commonly used items
pub use theme::{WaveformStyle, WaveformTheme, PLACEHOLDER_TEXT_COLOR};

// Rendering pipeline
pub use waveform::{
    PixelSurface, Selection, Viewport, WaveformRenderer, WaveformScene,
    // Constants
    AMPLITUDE_MARGIN, MAX_ZOOM, MIN_ZOOM, THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH,
};

// Peak envelope utilities
pub use waveform::{column_peaks, column_step, thumbnail, thumbnail_sized};

// Waveform view functions (idiomatic iced 0.14 pattern)
pub use waveform::{surface_view, waveform_view, WAVEFORM_VIEW_HEIGHT};

// Canvas interaction types for advanced usage
pub use waveform::{WaveformCanvas, WaveformInteraction, DRAG_THRESHOLD};
