//! Waveform display components and utilities
//!
//! This module provides waveform visualization for audio buffers: a
//! zoomable, scrollable peak-envelope view with an amplitude/time grid,
//! selection and playhead overlays, and fixed-size thumbnails.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! Following idiomatic iced patterns, this module separates concerns:
//!
//! - **Renderer** ([`WaveformRenderer`]): owns the pixel surface plus the
//!   viewport/selection/cursor state, repaints synchronously on change
//! - **Scene** ([`WaveformScene`]): pure draw-list data composed from that
//!   state; both the software rasterizer and the canvas consume it, so the
//!   two render paths cannot drift apart
//! - **View functions** (`waveform_view`, `surface_view`): take state +
//!   callbacks, return `Element<Message>`
//! - **Canvas Program**: handles custom rendering and event-to-callback
//!   translation (click to seek, drag to select)
//!
//! ## Usage
//!
//! ```ignore
//! // In your application's view function:
//! let waveform = waveform_view(
//!     &self.renderer,
//!     |sample| Message::Seek(sample),
//!     |selection| Message::SetSelection(selection),
//! );
//! ```

mod canvas;
mod paint;
mod peaks;
mod renderer;
mod scene;
mod surface;
mod thumbnail;
mod view;
mod viewport;

pub use peaks::{column_peaks, column_step};

pub use renderer::WaveformRenderer;

pub use scene::{
    compose, ChannelLane, PeakSegment, SceneLabel, SceneLine, SelectionBox, WaveformScene,
    // Constants
    AMPLITUDE_MARGIN, EMPTY_LABEL, EMPTY_LABEL_SIZE, GRID_ROWS,
};

pub use paint::paint;
pub use surface::PixelSurface;
pub use thumbnail::{thumbnail, thumbnail_sized, THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH};
pub use view::{surface_view, waveform_view, WAVEFORM_VIEW_HEIGHT};
pub use viewport::{Viewport, MAX_ZOOM, MIN_ZOOM};

// Re-export canvas types for advanced usage (custom Program state)
pub use canvas::{WaveformCanvas, WaveformInteraction, DRAG_THRESHOLD};

/// A selected sample range
///
/// Endpoints are kept exactly as given: `start` is where the drag began,
/// `end` where it currently is, so `start > end` simply means the user
/// dragged leftwards. Consumers that need an ordered range normalize at
/// the point of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Anchor sample index
    pub start: usize,
    /// Moving sample index
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Endpoints in ascending order.
    pub fn ordered(&self) -> (usize, usize) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    /// Selected length in samples.
    pub fn len(&self) -> usize {
        let (start, end) = self.ordered();
        end - start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
