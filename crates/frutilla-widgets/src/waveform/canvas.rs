//! Canvas Program implementation for waveform rendering
//!
//! Implements the iced canvas `Program` trait on top of a composed
//! [`WaveformScene`], taking callback closures for seek and selection
//! events, following idiomatic iced 0.14 patterns.
//!
//! A press-and-release inside the canvas is a seek; a press that travels
//! further than [`DRAG_THRESHOLD`] becomes a selection drag, published on
//! every move so the application can show live feedback.

use super::renderer::WaveformRenderer;
use super::scene::WaveformScene;
use super::Selection;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program, Stroke, Text};
use iced::{mouse, Point, Rectangle, Size, Theme};

/// Horizontal travel (in px) that turns a click into a selection drag.
pub const DRAG_THRESHOLD: f32 = 3.0;

/// Canvas state for tracking mouse interaction
#[derive(Debug, Clone, Copy, Default)]
pub struct WaveformInteraction {
    /// Press position and the sample under it, while the button is down
    pub drag_origin: Option<(f32, i64)>,
    /// Whether the drag crossed the selection threshold
    pub is_selecting: bool,
}

/// Canvas program that draws a [`WaveformRenderer`]'s scene and maps mouse
/// gestures onto seek and selection messages.
///
/// Takes callback closures: `on_seek` with the absolute sample index that
/// was clicked, `on_select` with the in-progress (or final) selection.
pub struct WaveformCanvas<'a, Message, SeekFn, SelectFn>
where
    SeekFn: Fn(i64) -> Message,
    SelectFn: Fn(Option<Selection>) -> Message,
{
    pub renderer: &'a WaveformRenderer,
    pub on_seek: SeekFn,
    pub on_select: SelectFn,
}

impl<'a, Message, SeekFn, SelectFn> WaveformCanvas<'a, Message, SeekFn, SelectFn>
where
    SeekFn: Fn(i64) -> Message,
    SelectFn: Fn(Option<Selection>) -> Message,
{
    fn sample_at(&self, x: f32, bounds: Rectangle) -> i64 {
        self.renderer
            .viewport()
            .pixel_to_sample(x, bounds.width, self.renderer.total_samples())
    }
}

impl<'a, Message, SeekFn, SelectFn> Program<Message> for WaveformCanvas<'a, Message, SeekFn, SelectFn>
where
    Message: Clone,
    SeekFn: Fn(i64) -> Message,
    SelectFn: Fn(Option<Selection>) -> Message,
{
    type State = WaveformInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if let Some(position) = cursor.position_in(bounds) {
            match event {
                Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                    let anchor = self.sample_at(position.x, bounds);
                    interaction.drag_origin = Some((position.x, anchor));
                    interaction.is_selecting = false;
                }
                Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                    if let Some((origin_x, anchor)) = interaction.drag_origin {
                        if interaction.is_selecting
                            || (position.x - origin_x).abs() > DRAG_THRESHOLD
                        {
                            interaction.is_selecting = true;
                            let current = self.sample_at(position.x, bounds);
                            let selection =
                                Selection::new(anchor.max(0) as usize, current.max(0) as usize);
                            return Some(canvas::Action::publish((self.on_select)(Some(
                                selection,
                            ))));
                        }
                    }
                }
                Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                    let was_selecting = interaction.is_selecting;
                    let origin = interaction.drag_origin.take();
                    interaction.is_selecting = false;

                    if origin.is_some() && !was_selecting {
                        let sample = self.sample_at(position.x, bounds);
                        return Some(canvas::Action::publish((self.on_seek)(sample)));
                    }
                }
                _ => {}
            }
        } else if matches!(event, Event::Mouse(mouse::Event::ButtonReleased(_))) {
            interaction.drag_origin = None;
            interaction.is_selecting = false;
        }

        None
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            if interaction.is_selecting {
                mouse::Interaction::Crosshair
            } else {
                mouse::Interaction::Pointer
            }
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let scene = self.renderer.scene_for(bounds.width, bounds.height);
        draw_scene(&mut frame, &scene);
        vec![frame.into_geometry()]
    }
}

/// Draw a composed scene onto an iced frame, in scene order.
fn draw_scene(frame: &mut Frame, scene: &WaveformScene) {
    frame.fill_rectangle(
        Point::ORIGIN,
        Size::new(scene.width, scene.height),
        scene.background,
    );

    for line in &scene.grid {
        stroke_line(frame, line);
    }
    if let Some(line) = &scene.center_line {
        stroke_line(frame, line);
    }

    if let Some(sel) = &scene.selection {
        let left = sel.start_x.min(sel.end_x);
        let span = (sel.start_x - sel.end_x).abs();
        frame.fill_rectangle(
            Point::new(left, 0.0),
            Size::new(span, scene.height),
            sel.fill,
        );
        for x in [sel.start_x, sel.end_x] {
            frame.stroke(
                &Path::line(Point::new(x, 0.0), Point::new(x, scene.height)),
                Stroke::default().with_color(sel.border).with_width(2.0),
            );
        }
    }

    for lane in &scene.lanes {
        if lane.segments.is_empty() {
            continue;
        }
        let path = Path::new(|builder| {
            for seg in &lane.segments {
                if seg.y_bottom > seg.y_top {
                    builder.move_to(Point::new(seg.x, seg.y_top));
                    builder.line_to(Point::new(seg.x, seg.y_bottom));
                }
            }
        });
        frame.stroke(
            &path,
            Stroke::default().with_color(lane.color).with_width(1.0),
        );
    }

    if let Some(line) = &scene.divider {
        stroke_line(frame, line);
    }
    if let Some(line) = &scene.cursor {
        stroke_line(frame, line);
    }

    if let Some(label) = &scene.label {
        frame.fill_text(Text {
            content: label.text.clone(),
            position: label.position,
            size: label.size.into(),
            color: label.color,
            align_x: Horizontal::Center.into(),
            align_y: Vertical::Center.into(),
            ..Text::default()
        });
    }
}

fn stroke_line(frame: &mut Frame, line: &super::scene::SceneLine) {
    frame.stroke(
        &Path::line(line.from, line.to),
        Stroke::default()
            .with_color(line.color)
            .with_width(line.width),
    );
}
