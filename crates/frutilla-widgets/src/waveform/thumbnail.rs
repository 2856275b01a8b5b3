//! Fixed-size thumbnail rendering
//!
//! Thumbnails are one-shot offscreen renders used in clip browsers and
//! track headers: the whole buffer squeezed into a small surface, no
//! viewport, no grid, no selection. Only channel 0 is sampled; the
//! column step is `floor(len / width)`, so a buffer shorter than the
//! thumbnail is wide renders as plain background.

use super::surface::PixelSurface;
use crate::theme::WaveformStyle;
use frutilla_core::AudioBuffer;

pub const THUMBNAIL_WIDTH: f32 = 200.0;
pub const THUMBNAIL_HEIGHT: f32 = 60.0;

/// Vertical padding between the envelope and the surface edge, in pixels.
const THUMBNAIL_MARGIN: f32 = 2.0;

/// Render a thumbnail at the default 200x60 size.
pub fn thumbnail(buffer: &AudioBuffer, style: &WaveformStyle) -> PixelSurface {
    thumbnail_sized(buffer, style, THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT)
}

/// Render a thumbnail at an arbitrary size.
///
/// The surface is created at scale factor 1: thumbnails are assets, not
/// live views, and callers that need a crisper image ask for a larger one.
pub fn thumbnail_sized(
    buffer: &AudioBuffer,
    style: &WaveformStyle,
    width: f32,
    height: f32,
) -> PixelSurface {
    let mut surface = PixelSurface::new(width, height, 1.0);
    surface.clear(style.background);

    let Some(samples) = buffer.channel(0) else {
        return surface;
    };
    let columns = surface.px_width() as usize;
    if columns == 0 {
        return surface;
    }
    let step = samples.len() / columns;
    if step == 0 {
        return surface;
    }

    let mid = height / 2.0;
    let amplitude = mid - THUMBNAIL_MARGIN;
    for x in 0..columns {
        let start = x * step;
        let mut min = 0.0f32;
        let mut max = 0.0f32;
        // columns * step <= len, so the slice is always in bounds.
        for &value in &samples[start..start + step] {
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }
        let y_top = mid - max * amplitude;
        let y_bottom = mid - min * amplitude;
        surface.fill_rect(x as f32, y_top, 1.0, y_bottom - y_top, style.waveform);
    }
    surface
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_wave(len: usize) -> Vec<f32> {
        (0..len).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect()
    }

    fn pixel_at(surface: &PixelSurface, x: u32, y: u32) -> [u8; 4] {
        let offset = (y as usize * surface.px_width() as usize + x as usize) * 4;
        let data = surface.data();
        [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
    }

    #[test]
    fn test_default_dimensions() {
        let buffer = AudioBuffer::from_mono(square_wave(44100), 44100);
        let surface = thumbnail(&buffer, &WaveformStyle::default());

        assert_eq!(surface.px_width(), 200);
        assert_eq!(surface.px_height(), 60);
    }

    #[test]
    fn test_thumbnail_is_deterministic() {
        let buffer = AudioBuffer::from_mono(square_wave(44100), 44100);
        let style = WaveformStyle::default();

        let a = thumbnail(&buffer, &style);
        let b = thumbnail(&buffer, &style);
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_silence_renders_background_only() {
        let buffer = AudioBuffer::from_mono(vec![0.0; 4000], 44100);
        let surface = thumbnail(&buffer, &WaveformStyle::default());

        for chunk in surface.data().chunks_exact(4) {
            assert_eq!(chunk, [45, 45, 45, 255], "Silence leaves only background");
        }
    }

    #[test]
    fn test_short_buffer_renders_background_only() {
        // 50 samples across 200 columns floors the step to zero.
        let buffer = AudioBuffer::from_mono(square_wave(50), 44100);
        let surface = thumbnail(&buffer, &WaveformStyle::default());

        for chunk in surface.data().chunks_exact(4) {
            assert_eq!(chunk, [45, 45, 45, 255]);
        }
    }

    #[test]
    fn test_envelope_respects_margin() {
        let buffer = AudioBuffer::from_mono(square_wave(44100), 44100);
        let surface = thumbnail(&buffer, &WaveformStyle::default());

        let mut waveform_rows = Vec::new();
        for y in 0..surface.px_height() {
            if pixel_at(&surface, 100, y)[..3] == [255, 140, 66] {
                waveform_rows.push(y);
            }
        }
        assert!(!waveform_rows.is_empty(), "Full-scale audio must be visible");
        assert_eq!(*waveform_rows.first().unwrap(), 2);
        assert_eq!(*waveform_rows.last().unwrap(), 57);
    }
}
