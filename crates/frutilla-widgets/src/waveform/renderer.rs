//! The waveform renderer object
//!
//! [`WaveformRenderer`] is the long-lived owner of one drawing surface
//! plus the mutable state that feeds it: the bound buffer, viewport,
//! selection, cursor and style. Every setter clamps its input, stores it,
//! and synchronously repaints the surface - there is no background work,
//! no debouncing and no failure mode beyond the designed placeholder for
//! a missing buffer.
//!
//! The buffer travels behind an [`Arc`]: callers never mutate audio in
//! place while it is bound, they decode a new buffer and rebind it.

use super::paint;
use super::scene::{self, WaveformScene};
use super::surface::PixelSurface;
use super::viewport::Viewport;
use super::Selection;
use crate::theme::WaveformStyle;
use frutilla_core::AudioBuffer;
use std::sync::Arc;

pub struct WaveformRenderer {
    surface: PixelSurface,
    buffer: Option<Arc<AudioBuffer>>,
    viewport: Viewport,
    selection: Option<Selection>,
    cursor: Option<usize>,
    style: WaveformStyle,
}

impl WaveformRenderer {
    /// Bind a renderer to a surface with the default style.
    pub fn new(surface: PixelSurface) -> Self {
        Self::with_style(surface, WaveformStyle::default())
    }

    pub fn with_style(surface: PixelSurface, style: WaveformStyle) -> Self {
        let mut renderer = Self {
            surface,
            buffer: None,
            viewport: Viewport::new(),
            selection: None,
            cursor: None,
            style,
        };
        renderer.render();
        renderer
    }

    /// Replace the bound buffer (or unbind with `None`) and repaint.
    ///
    /// Zoom, selection and cursor survive a buffer swap; only the scroll is
    /// re-clamped so it can't dangle past the new end.
    pub fn set_buffer(&mut self, buffer: Option<Arc<AudioBuffer>>) {
        match &buffer {
            Some(b) => log::debug!(
                "set_buffer: {} ch, {} samples @ {} Hz",
                b.channel_count(),
                b.len(),
                b.sample_rate()
            ),
            None => log::debug!("set_buffer: unbound"),
        }
        self.buffer = buffer;
        self.viewport.clamp_scroll(self.total_samples());
        self.render();
    }

    /// Clamp into the zoom bounds, re-clamp scroll, repaint.
    pub fn set_zoom(&mut self, level: f32) {
        self.viewport.set_zoom(level);
        self.viewport.clamp_scroll(self.total_samples());
        self.render();
    }

    /// Clamp into `[0, total - visible]`, repaint.
    pub fn set_scroll(&mut self, offset: i64) {
        let total = self.total_samples();
        self.viewport.set_scroll(offset, total);
        self.render();
    }

    /// Store the selection verbatim (including inverted ranges), repaint.
    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
        self.render();
    }

    /// Move or hide the playhead cursor, repaint.
    pub fn set_cursor(&mut self, cursor: Option<usize>) {
        self.cursor = cursor;
        self.render();
    }

    pub fn set_style(&mut self, style: WaveformStyle) {
        self.style = style;
        self.render();
    }

    /// Repaint the surface from current state.
    ///
    /// Idempotent: repeated calls with unchanged state produce
    /// byte-identical pixels.
    pub fn render(&mut self) {
        let scene = self.scene();
        paint::paint(&scene, &mut self.surface);
    }

    /// Compose the scene at the surface's logical size without painting.
    pub fn scene(&self) -> WaveformScene {
        self.scene_for(self.surface.logical_width(), self.surface.logical_height())
    }

    /// Compose the scene at an arbitrary size (used by the canvas widget,
    /// whose bounds need not match the offscreen surface).
    pub fn scene_for(&self, width: f32, height: f32) -> WaveformScene {
        scene::compose(
            self.buffer.as_deref(),
            &self.viewport,
            self.selection,
            self.cursor,
            &self.style,
            width,
            height,
        )
    }

    /// Re-run surface setup for new dimensions or scale, then repaint.
    pub fn resize(&mut self, width: f32, height: f32, scale_factor: f32) {
        self.surface.resize(width, height, scale_factor);
        self.render();
    }

    /// Absolute sample index under pixel `x`; may fall outside the buffer.
    pub fn pixel_to_sample(&self, x: f32) -> i64 {
        self.viewport
            .pixel_to_sample(x, self.surface.logical_width(), self.total_samples())
    }

    /// Pixel position of an absolute sample index.
    pub fn sample_to_pixel(&self, sample: i64) -> f32 {
        self.viewport
            .sample_to_pixel(sample, self.surface.logical_width(), self.total_samples())
    }

    /// Samples inside the visible window at the current zoom.
    pub fn visible_samples(&self) -> usize {
        self.viewport.visible_samples(self.total_samples())
    }

    pub fn total_samples(&self) -> usize {
        self.buffer.as_ref().map(|b| b.len()).unwrap_or(0)
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    pub fn buffer(&self) -> Option<&Arc<AudioBuffer>> {
        self.buffer.as_ref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn style(&self) -> &WaveformStyle {
        &self.style
    }
}
