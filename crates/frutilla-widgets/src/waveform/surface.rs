//! Software drawing surface
//!
//! An owned RGBA8 pixel buffer with a logical size and a device scale
//! factor: drawing happens in logical coordinates, the backing store is
//! `floor(size * scale)` physical pixels, so strokes stay crisp on hi-dpi
//! displays. Scale setup runs at construction and on explicit [`resize`],
//! never per frame.
//!
//! Rasterization is deliberately plain: axis-aligned fills with src-over
//! blending and no antialiasing, which keeps output byte-for-byte
//! reproducible across platforms. Text stamping goes through the
//! `embedded-graphics` `DrawTarget` impl at the bottom of this file.
//!
//! [`resize`]: PixelSurface::resize

use embedded_graphics::geometry::Size as EgSize;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, RgbColor};
use embedded_graphics::Pixel;
use iced::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct PixelSurface {
    logical_width: f32,
    logical_height: f32,
    scale: f32,
    px_width: u32,
    px_height: u32,
    data: Vec<u8>,
}

impl PixelSurface {
    /// Create a surface of `width` x `height` logical pixels backed by a
    /// store scaled for the given device pixel ratio.
    ///
    /// A non-finite or non-positive scale falls back to 1.0; negative
    /// dimensions collapse to zero.
    pub fn new(width: f32, height: f32, scale_factor: f32) -> Self {
        let mut surface = Self {
            logical_width: 0.0,
            logical_height: 0.0,
            scale: 1.0,
            px_width: 0,
            px_height: 0,
            data: Vec::new(),
        };
        surface.resize(width, height, scale_factor);
        surface
    }

    /// Re-run backing-store setup for new dimensions or a new scale.
    ///
    /// Contents are reset to transparent black; callers re-render after.
    pub fn resize(&mut self, width: f32, height: f32, scale_factor: f32) {
        self.scale = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };
        self.logical_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        self.logical_height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        self.px_width = (self.logical_width * self.scale).floor() as u32;
        self.px_height = (self.logical_height * self.scale).floor() as u32;
        self.data = vec![0; self.px_width as usize * self.px_height as usize * 4];
    }

    pub fn logical_width(&self) -> f32 {
        self.logical_width
    }

    pub fn logical_height(&self) -> f32 {
        self.logical_height
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale
    }

    pub fn px_width(&self) -> u32 {
        self.px_width
    }

    pub fn px_height(&self) -> u32 {
        self.px_height
    }

    /// Raw RGBA8 bytes, row-major, `px_width * px_height * 4` long.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Overwrite every pixel with an opaque color.
    pub fn clear(&mut self, color: Color) {
        let rgba = color_to_rgba8(color);
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[rgba[0], rgba[1], rgba[2], 255]);
        }
    }

    /// Fill an axis-aligned rectangle in logical coordinates.
    ///
    /// Negative extents are normalized (a rect from x to x+w fills the same
    /// pixels as one from x+w to x), partially or fully off-surface rects
    /// are clipped, and non-finite geometry is skipped entirely.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        if ![x, y, w, h].iter().all(|v| v.is_finite()) {
            return;
        }
        let (x, w) = if w < 0.0 { (x + w, -w) } else { (x, w) };
        let (y, h) = if h < 0.0 { (y + h, -h) } else { (y, h) };

        let x0 = ((x * self.scale).floor() as i64).clamp(0, self.px_width as i64);
        let x1 = (((x + w) * self.scale).floor() as i64).clamp(0, self.px_width as i64);
        let y0 = ((y * self.scale).floor() as i64).clamp(0, self.px_height as i64);
        let y1 = (((y + h) * self.scale).floor() as i64).clamp(0, self.px_height as i64);

        let rgba = color_to_rgba8(color);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_px(px as u32, py as u32, rgba);
            }
        }
    }

    /// Horizontal line of the given stroke width centered on `y`.
    pub fn hline(&mut self, y: f32, x0: f32, x1: f32, stroke: f32, color: Color) {
        self.fill_rect(x0.min(x1), y - stroke / 2.0, (x1 - x0).abs(), stroke, color);
    }

    /// Vertical line of the given stroke width centered on `x`.
    pub fn vline(&mut self, x: f32, y0: f32, y1: f32, stroke: f32, color: Color) {
        self.fill_rect(x - stroke / 2.0, y0.min(y1), stroke, (y1 - y0).abs(), color);
    }

    /// An iced image handle over the current pixel contents.
    pub fn image_handle(&self) -> iced::widget::image::Handle {
        iced::widget::image::Handle::from_rgba(self.px_width, self.px_height, self.data.clone())
    }

    fn blend_px(&mut self, px: u32, py: u32, rgba: [u8; 4]) {
        if px >= self.px_width || py >= self.px_height {
            return;
        }
        let idx = (py as usize * self.px_width as usize + px as usize) * 4;
        let a = rgba[3] as u32;
        if a == 255 {
            self.data[idx..idx + 4].copy_from_slice(&[rgba[0], rgba[1], rgba[2], 255]);
            return;
        }
        if a == 0 {
            return;
        }
        // Integer src-over against an opaque destination
        for c in 0..3 {
            let src = rgba[c] as u32;
            let dst = self.data[idx + c] as u32;
            self.data[idx + c] = ((src * a + dst * (255 - a)) / 255) as u8;
        }
        self.data[idx + 3] = 255;
    }

    fn set_px(&mut self, px: u32, py: u32, rgba: [u8; 4]) {
        if px >= self.px_width || py >= self.px_height {
            return;
        }
        let idx = (py as usize * self.px_width as usize + px as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&rgba);
    }
}

fn color_to_rgba8(color: Color) -> [u8; 4] {
    [
        (color.r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (color.g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (color.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        (color.a.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

impl OriginDimensions for PixelSurface {
    fn size(&self) -> EgSize {
        EgSize::new(self.px_width, self.px_height)
    }
}

impl DrawTarget for PixelSurface {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set_px(point.x as u32, point.y as u32, [color.r(), color.g(), color.b(), 255]);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::from_rgb(45.0 / 255.0, 45.0 / 255.0, 45.0 / 255.0);

    fn px_at(surface: &PixelSurface, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * surface.px_width() as usize + x as usize) * 4;
        let d = surface.data();
        [d[idx], d[idx + 1], d[idx + 2], d[idx + 3]]
    }

    #[test]
    fn test_scale_factor_sizes_backing_store() {
        let surface = PixelSurface::new(200.0, 60.0, 2.0);
        assert_eq!(surface.px_width(), 400);
        assert_eq!(surface.px_height(), 120);
        assert_eq!(surface.logical_width(), 200.0);
        assert_eq!(surface.data().len(), 400 * 120 * 4);

        let fallback = PixelSurface::new(200.0, 60.0, 0.0);
        assert_eq!(fallback.scale_factor(), 1.0, "Bad scale falls back to 1.0");
        assert_eq!(fallback.px_width(), 200);
    }

    #[test]
    fn test_clear_sets_every_pixel() {
        let mut surface = PixelSurface::new(4.0, 4.0, 1.0);
        surface.clear(BG);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(px_at(&surface, x, y), [45, 45, 45, 255]);
            }
        }
    }

    #[test]
    fn test_fill_rect_clips_and_normalizes() {
        let mut surface = PixelSurface::new(10.0, 10.0, 1.0);
        surface.clear(Color::BLACK);

        // Negative extent: same pixels as the normalized rect
        surface.fill_rect(6.0, 6.0, -4.0, -4.0, Color::WHITE);
        assert_eq!(px_at(&surface, 2, 2), [255, 255, 255, 255]);
        assert_eq!(px_at(&surface, 5, 5), [255, 255, 255, 255]);
        assert_eq!(px_at(&surface, 6, 6), [0, 0, 0, 255], "End edge is exclusive");

        // Off-surface geometry must not panic
        surface.fill_rect(-100.0, -100.0, 1000.0, 50.0, Color::WHITE);
        surface.fill_rect(f32::NAN, 0.0, 10.0, 10.0, Color::WHITE);
        surface.fill_rect(0.0, f32::INFINITY, 10.0, 10.0, Color::WHITE);
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut surface = PixelSurface::new(2.0, 2.0, 1.0);
        surface.clear(BG);

        // 20% orange over the background: (src*51 + dst*204) / 255
        surface.fill_rect(0.0, 0.0, 2.0, 2.0, Color::from_rgba8(255, 140, 66, 0.2));
        assert_eq!(px_at(&surface, 0, 0), [87, 64, 49, 255]);
    }

    #[test]
    fn test_lines_scale_with_device_ratio() {
        let mut surface = PixelSurface::new(10.0, 10.0, 2.0);
        surface.clear(Color::BLACK);
        surface.vline(5.0, 0.0, 10.0, 1.0, Color::WHITE);

        // A 1-logical-px line at scale 2 covers physical columns 9 and 10
        assert_eq!(px_at(&surface, 9, 5), [255, 255, 255, 255]);
        assert_eq!(px_at(&surface, 10, 5), [255, 255, 255, 255]);
        assert_eq!(px_at(&surface, 8, 5), [0, 0, 0, 255]);
        assert_eq!(px_at(&surface, 11, 5), [0, 0, 0, 255]);
    }

    #[test]
    fn test_resize_reconfigures_backing_store() {
        let mut surface = PixelSurface::new(10.0, 10.0, 1.0);
        surface.clear(Color::WHITE);

        surface.resize(20.0, 10.0, 1.5);
        assert_eq!(surface.px_width(), 30);
        assert_eq!(surface.px_height(), 15);
        assert!(
            surface.data().iter().all(|&b| b == 0),
            "Resize resets contents"
        );
    }
}
