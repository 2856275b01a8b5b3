//! Viewport state and coordinate mapping
//!
//! The viewport is the pair (zoom, scroll) that selects which slice of a
//! buffer is on screen. Zoom expresses total-samples / visible-window, so
//! zoom 1.0 shows the whole buffer and larger values zoom in. Scroll is an
//! absolute sample offset, clamped so the visible window never runs past
//! the end of the buffer.
//!
//! All mapping functions take the buffer length as a parameter instead of
//! holding a buffer reference, which keeps them pure and directly testable.

/// Minimum zoom level (10x zoomed out past full view)
pub const MIN_ZOOM: f32 = 0.1;
/// Maximum zoom level
pub const MAX_ZOOM: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    zoom: f32,
    scroll: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Full view: zoom 1.0, scroll 0.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            scroll: 0,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Set the zoom level, clamped into `[MIN_ZOOM, MAX_ZOOM]`.
    ///
    /// Non-finite input is ignored (the previous zoom survives) so a bad
    /// gesture delta can never poison the viewport.
    pub fn set_zoom(&mut self, level: f32) {
        if !level.is_finite() {
            log::warn!("set_zoom: Ignoring non-finite zoom level {}", level);
            return;
        }
        self.zoom = level.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Set the scroll offset, clamped into `[0, max_scroll]`.
    pub fn set_scroll(&mut self, offset: i64, total_samples: usize) {
        let max = self.max_scroll(total_samples) as i64;
        self.scroll = offset.clamp(0, max) as usize;
    }

    /// Re-clamp the current scroll against a (new) buffer length.
    ///
    /// Called whenever zoom or the bound buffer changes, so the scroll
    /// invariant is never left dangling.
    pub fn clamp_scroll(&mut self, total_samples: usize) {
        let max = self.max_scroll(total_samples);
        if self.scroll > max {
            self.scroll = max;
        }
    }

    /// Number of samples inside the visible window: `floor(total / zoom)`.
    ///
    /// May legally exceed `total` (zoomed out past full view) or reach 0
    /// (zoom larger than the buffer); downstream geometry guards both.
    pub fn visible_samples(&self, total_samples: usize) -> usize {
        (total_samples as f64 / self.zoom as f64).floor() as usize
    }

    /// Largest valid scroll offset for the current zoom.
    pub fn max_scroll(&self, total_samples: usize) -> usize {
        total_samples.saturating_sub(self.visible_samples(total_samples))
    }

    /// Absolute sample index under pixel `x` of a `width`-pixel surface.
    ///
    /// The result may lie outside the buffer (negative or past the end) for
    /// pixels outside the surface; callers clamp before indexing.
    pub fn pixel_to_sample(&self, x: f32, width: f32, total_samples: usize) -> i64 {
        if width <= 0.0 {
            return self.scroll as i64;
        }
        let visible = self.visible_samples(total_samples) as f64;
        self.scroll as i64 + (x as f64 / width as f64 * visible).floor() as i64
    }

    /// Pixel position of an absolute sample index on a `width`-pixel surface.
    ///
    /// A degenerate window (`visible_samples == 0`) maps everything to 0.0
    /// rather than dividing by zero.
    pub fn sample_to_pixel(&self, sample: i64, width: f32, total_samples: usize) -> f32 {
        let visible = self.visible_samples(total_samples);
        if visible == 0 {
            return 0.0;
        }
        ((sample - self.scroll as i64) as f64 / visible as f64 * width as f64) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamps_to_bounds() {
        let mut vp = Viewport::new();

        vp.set_zoom(0.01);
        assert_eq!(vp.zoom(), MIN_ZOOM, "Below minimum clamps up");

        vp.set_zoom(2500.0);
        assert_eq!(vp.zoom(), MAX_ZOOM, "Above maximum clamps down");

        vp.set_zoom(4.0);
        assert_eq!(vp.zoom(), 4.0, "In-range value stored as-is");

        vp.set_zoom(f32::NAN);
        assert_eq!(vp.zoom(), 4.0, "Non-finite input leaves zoom unchanged");
    }

    #[test]
    fn test_visible_samples() {
        let mut vp = Viewport::new();
        assert_eq!(vp.visible_samples(44100), 44100, "Zoom 1 shows everything");

        vp.set_zoom(2.0);
        assert_eq!(vp.visible_samples(44100), 22050);

        vp.set_zoom(0.1);
        assert_eq!(vp.visible_samples(44100), 441000, "Zoomed out past full view");

        vp.set_zoom(100.0);
        assert_eq!(vp.visible_samples(50), 0, "Zoom beyond buffer rounds to zero");
    }

    #[test]
    fn test_scroll_clamps_to_valid_range() {
        let mut vp = Viewport::new();
        vp.set_zoom(2.0);

        vp.set_scroll(-500, 44100);
        assert_eq!(vp.scroll(), 0, "Negative offset floors at 0");

        vp.set_scroll(1_000_000, 44100);
        assert_eq!(vp.scroll(), 22050, "Offset caps at total - visible");

        vp.set_scroll(1000, 44100);
        assert_eq!(vp.scroll(), 1000);
    }

    #[test]
    fn test_scroll_reclamps_when_buffer_shrinks() {
        let mut vp = Viewport::new();
        vp.set_zoom(2.0);
        vp.set_scroll(20000, 44100);

        vp.clamp_scroll(8000);
        assert_eq!(
            vp.scroll(),
            4000,
            "Scroll snaps back inside the shorter buffer"
        );
    }

    #[test]
    fn test_scroll_zero_when_buffer_fits() {
        let mut vp = Viewport::new();
        vp.set_zoom(0.5);
        vp.set_scroll(100, 44100);
        assert_eq!(vp.scroll(), 0, "Nothing to scroll when the window exceeds the buffer");
    }

    #[test]
    fn test_pixel_sample_round_trip() {
        let mut vp = Viewport::new();
        vp.set_zoom(4.0);
        vp.set_scroll(1000, 44100);

        let width = 200.0;
        let visible = vp.visible_samples(44100);
        for s in (1000..1000 + visible as i64).step_by(997) {
            let x = vp.sample_to_pixel(s, width, 44100);
            let back = vp.pixel_to_sample(x, width, 44100);
            assert!(
                (back - s).abs() <= 1,
                "Round trip for sample {} came back as {}",
                s,
                back
            );
        }
    }

    #[test]
    fn test_pixel_to_sample_full_view() {
        let vp = Viewport::new();
        assert_eq!(vp.pixel_to_sample(0.0, 200.0, 44100), 0);
        assert_eq!(vp.pixel_to_sample(100.0, 200.0, 44100), 22050);
        assert_eq!(
            vp.pixel_to_sample(-10.0, 200.0, 44100),
            -2205,
            "Out-of-surface pixels may map outside the buffer"
        );
    }

    #[test]
    fn test_degenerate_window_has_no_nan() {
        let mut vp = Viewport::new();
        vp.set_zoom(100.0);

        let x = vp.sample_to_pixel(25, 200.0, 50);
        assert_eq!(x, 0.0, "Zero-sample window maps to pixel 0");
        assert_eq!(vp.pixel_to_sample(50.0, 200.0, 50), 0);
    }
}
