//! Scene composition
//!
//! Pure assembly of everything one render pass draws, as plain data. The
//! same [`WaveformScene`] feeds both the software rasterizer and the iced
//! canvas program, so the two paths cannot disagree about geometry, and
//! determinism is checkable with a straight equality on scenes.
//!
//! Field order mirrors draw order: background, grid, center line,
//! selection, envelope lanes, stereo divider, cursor, placeholder label.

use super::peaks;
use super::viewport::Viewport;
use super::Selection;
use crate::theme::{WaveformStyle, PLACEHOLDER_TEXT_COLOR};
use frutilla_core::AudioBuffer;
use iced::{Color, Point};

/// Vertical margin between a full-scale peak and the channel edge, in px
pub const AMPLITUDE_MARGIN: f32 = 4.0;
/// Number of horizontal grid divisions
pub const GRID_ROWS: usize = 5;
/// Placeholder text for the empty state
pub const EMPTY_LABEL: &str = "No audio loaded";
/// Placeholder label size in logical px
pub const EMPTY_LABEL_SIZE: f32 = 14.0;

/// An axis-aligned stroked line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLine {
    pub from: Point,
    pub to: Point,
    pub width: f32,
    pub color: Color,
}

impl SceneLine {
    fn horizontal(y: f32, surface_width: f32, width: f32, color: Color) -> Self {
        Self {
            from: Point::new(0.0, y),
            to: Point::new(surface_width, y),
            width,
            color,
        }
    }

    fn vertical(x: f32, surface_height: f32, width: f32, color: Color) -> Self {
        Self {
            from: Point::new(x, 0.0),
            to: Point::new(x, surface_height),
            width,
            color,
        }
    }
}

/// One envelope column: a vertical segment from the scaled max down to the
/// scaled min. `y_top <= y_bottom` always holds (screen coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakSegment {
    pub x: f32,
    pub y_top: f32,
    pub y_bottom: f32,
}

/// Peak envelope for one drawn channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelLane {
    pub color: Color,
    pub center_y: f32,
    pub amplitude: f32,
    pub segments: Vec<PeakSegment>,
}

/// Selection overlay: translucent fill between two pixel positions plus
/// solid borders. `start_x` may exceed `end_x` (inverted selection); the
/// rasterizer normalizes, so both orderings fill the same pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionBox {
    pub start_x: f32,
    pub end_x: f32,
    pub fill: Color,
    pub border: Color,
}

/// Centered placeholder text.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLabel {
    pub text: String,
    pub position: Point,
    pub size: f32,
    pub color: Color,
}

/// Everything one render pass draws, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformScene {
    pub width: f32,
    pub height: f32,
    pub background: Color,
    pub grid: Vec<SceneLine>,
    pub center_line: Option<SceneLine>,
    pub selection: Option<SelectionBox>,
    pub lanes: Vec<ChannelLane>,
    pub divider: Option<SceneLine>,
    pub cursor: Option<SceneLine>,
    pub label: Option<SceneLabel>,
}

impl WaveformScene {
    fn blank(width: f32, height: f32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            grid: Vec::new(),
            center_line: None,
            selection: None,
            lanes: Vec::new(),
            divider: None,
            cursor: None,
            label: None,
        }
    }

    /// Whether any waveform lane was composed (false for the placeholder).
    pub fn has_waveform(&self) -> bool {
        !self.lanes.is_empty()
    }
}

/// Compose the scene for the current state.
///
/// `width`/`height` are logical surface dimensions; a missing buffer (or a
/// buffer whose channel 0 is inaccessible) produces the placeholder scene.
pub fn compose(
    buffer: Option<&AudioBuffer>,
    viewport: &Viewport,
    selection: Option<Selection>,
    cursor: Option<usize>,
    style: &WaveformStyle,
    width: f32,
    height: f32,
) -> WaveformScene {
    let Some(buffer) = buffer else {
        return compose_empty(style, width, height);
    };
    let Some(primary) = buffer.channel(0) else {
        return compose_empty(style, width, height);
    };

    let mut scene = WaveformScene::blank(width, height, style.background);
    let total = buffer.len();
    let visible = viewport.visible_samples(total);

    if style.show_grid {
        compose_grid(&mut scene, visible, buffer.sample_rate(), style);
    }

    if style.show_center_line {
        scene.center_line = Some(SceneLine::horizontal(
            height / 2.0,
            width,
            2.0,
            style.center_line,
        ));
    }

    if let Some(sel) = selection {
        // A zero-sample window has no meaningful pixel positions
        if visible > 0 {
            scene.selection = Some(SelectionBox {
                start_x: viewport.sample_to_pixel(sel.start as i64, width, total),
                end_x: viewport.sample_to_pixel(sel.end as i64, width, total),
                fill: style.selection,
                border: style.waveform,
            });
        }
    }

    let columns = width.max(0.0).ceil() as usize;
    let stereo_split = style.stereo && buffer.channel_count() >= 2;
    if style.stereo && !stereo_split {
        log::debug!(
            "compose: stereo requested on a {}-channel buffer, drawing mono",
            buffer.channel_count()
        );
    }

    if stereo_split {
        let channel_height = height / 2.0;
        scene.lanes.push(compose_lane(
            primary,
            viewport.scroll(),
            visible,
            columns,
            channel_height / 2.0,
            channel_height,
            style.waveform,
        ));
        if let Some(secondary) = buffer.channel(1) {
            scene.lanes.push(compose_lane(
                secondary,
                viewport.scroll(),
                visible,
                columns,
                channel_height * 1.5,
                channel_height,
                style.waveform_alt,
            ));
        }
        scene.divider = Some(SceneLine::horizontal(
            channel_height,
            width,
            2.0,
            style.center_line,
        ));
    } else {
        scene.lanes.push(compose_lane(
            primary,
            viewport.scroll(),
            visible,
            columns,
            height / 2.0,
            height,
            style.waveform,
        ));
    }

    if let Some(position) = cursor {
        let in_window = position >= viewport.scroll()
            && (position - viewport.scroll()) < visible.max(1);
        if in_window {
            let x = viewport.sample_to_pixel(position as i64, width, total);
            if x.is_finite() && x >= 0.0 && x <= width {
                scene.cursor = Some(SceneLine::vertical(x, height, 2.0, style.cursor));
            }
        }
    }

    scene
}

/// Placeholder: background, thin flat center line, dim centered label.
fn compose_empty(style: &WaveformStyle, width: f32, height: f32) -> WaveformScene {
    let mut scene = WaveformScene::blank(width, height, style.background);
    scene.center_line = Some(SceneLine::horizontal(
        height / 2.0,
        width,
        1.0,
        style.center_line,
    ));
    scene.label = Some(SceneLabel {
        text: EMPTY_LABEL.to_string(),
        position: Point::new(width / 2.0, height / 2.0),
        size: EMPTY_LABEL_SIZE,
        color: PLACEHOLDER_TEXT_COLOR,
    });
    scene
}

/// Horizontal amplitude rows plus whole-second time columns.
///
/// The second interval adapts to pixel density (1s, 2s or 5s) so marks
/// don't crowd together when zoomed far out. A window shorter than one
/// interval gets no vertical lines at all.
fn compose_grid(scene: &mut WaveformScene, visible: usize, sample_rate: u32, style: &WaveformStyle) {
    for i in 0..=GRID_ROWS {
        let y = scene.height / GRID_ROWS as f32 * i as f32;
        scene
            .grid
            .push(SceneLine::horizontal(y, scene.width, 1.0, style.grid));
    }

    let pixels_per_second = if visible > 0 {
        scene.width as f64 / visible as f64 * sample_rate as f64
    } else {
        f64::INFINITY
    };
    let second_interval = if pixels_per_second > 50.0 {
        1
    } else if pixels_per_second > 25.0 {
        2
    } else {
        5
    };

    let vertical_lines =
        (visible as f64 / sample_rate as f64 / second_interval as f64).floor() as usize;
    if vertical_lines == 0 {
        return;
    }
    for i in 0..=vertical_lines {
        let x = scene.width / vertical_lines as f32 * i as f32;
        scene
            .grid
            .push(SceneLine::vertical(x, scene.height, 1.0, style.grid));
    }
}

fn compose_lane(
    samples: &[f32],
    scroll: usize,
    visible: usize,
    columns: usize,
    center_y: f32,
    channel_height: f32,
    color: Color,
) -> ChannelLane {
    let amplitude = channel_height / 2.0 - AMPLITUDE_MARGIN;
    let segments = peaks::column_peaks(samples, scroll, visible, columns)
        .into_iter()
        .enumerate()
        .map(|(x, (min, max))| PeakSegment {
            x: x as f32,
            y_top: center_y - max * amplitude,
            y_bottom: center_y - min * amplitude,
        })
        .collect();

    ChannelLane {
        color,
        center_y,
        amplitude,
        segments,
    }
}
