//! Scene rasterization
//!
//! Draws a [`WaveformScene`] into a [`PixelSurface`] in scene order.
//! Geometry stays in logical coordinates (the surface applies the device
//! scale); only the placeholder label is stamped in physical pixels, since
//! the bitmap font has a fixed glyph size.

use super::scene::{SceneLabel, SceneLine, WaveformScene};
use super::surface::PixelSurface;
use embedded_graphics::geometry::Point as EgPoint;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::Drawable;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

/// Rasterize the scene into the surface.
pub fn paint(scene: &WaveformScene, surface: &mut PixelSurface) {
    surface.clear(scene.background);

    for line in &scene.grid {
        paint_line(surface, line);
    }
    if let Some(line) = &scene.center_line {
        paint_line(surface, line);
    }

    if let Some(sel) = &scene.selection {
        surface.fill_rect(
            sel.start_x,
            0.0,
            sel.end_x - sel.start_x,
            scene.height,
            sel.fill,
        );
        surface.vline(sel.start_x, 0.0, scene.height, 2.0, sel.border);
        surface.vline(sel.end_x, 0.0, scene.height, 2.0, sel.border);
    }

    for lane in &scene.lanes {
        for seg in &lane.segments {
            // Column x owns physical pixels [x, x+1); zero-height segments
            // (silence) fill nothing, letting the center line show through
            surface.fill_rect(seg.x, seg.y_top, 1.0, seg.y_bottom - seg.y_top, lane.color);
        }
    }

    if let Some(line) = &scene.divider {
        paint_line(surface, line);
    }
    if let Some(line) = &scene.cursor {
        paint_line(surface, line);
    }
    if let Some(label) = &scene.label {
        paint_label(surface, label);
    }
}

fn paint_line(surface: &mut PixelSurface, line: &SceneLine) {
    if line.from.y == line.to.y {
        surface.hline(line.from.y, line.from.x, line.to.x, line.width, line.color);
    } else if line.from.x == line.to.x {
        surface.vline(line.from.x, line.from.y, line.to.y, line.width, line.color);
    }
    // Scene lines are axis-aligned by construction; anything else is skipped
}

fn paint_label(surface: &mut PixelSurface, label: &SceneLabel) {
    let color = Rgb888::new(
        (label.color.r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (label.color.g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (label.color.b.clamp(0.0, 1.0) * 255.0).round() as u8,
    );
    let glyphs = MonoTextStyle::new(&FONT_6X10, color);
    let layout = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();

    let scale = surface.scale_factor();
    let center = EgPoint::new(
        (label.position.x * scale).round() as i32,
        (label.position.y * scale).round() as i32,
    );
    let _ = Text::with_text_style(&label.text, center, glyphs, layout).draw(surface);
}
