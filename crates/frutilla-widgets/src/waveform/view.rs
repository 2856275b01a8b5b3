//! Waveform view functions
//!
//! These functions create waveform UI elements using the proper iced 0.14
//! pattern: plain functions that take state references and callback
//! closures, returning Elements.
//!
//! ## Usage
//!
//! ```ignore
//! // In your application's view function:
//! fn view(&self) -> Element<Message> {
//!     let waveform = waveform_view(
//!         &self.waveform_renderer,
//!         |sample| Message::Seek(sample),
//!         |selection| Message::SetSelection(selection),
//!     );
//!
//!     column![waveform, /* other widgets */].into()
//! }
//! ```

use super::canvas::WaveformCanvas;
use super::renderer::WaveformRenderer;
use super::surface::PixelSurface;
use super::Selection;
use iced::widget::Canvas;
use iced::{Element, Length};

/// Default height of the waveform strip, in logical px.
pub const WAVEFORM_VIEW_HEIGHT: f32 = 150.0;

/// Create a waveform element with click-to-seek and drag-to-select
///
/// # Arguments
///
/// * `renderer` - The renderer whose scene is drawn
/// * `on_seek` - Callback closure called with the clicked sample index
/// * `on_select` - Callback closure called with the dragged selection
pub fn waveform_view<'a, Message>(
    renderer: &'a WaveformRenderer,
    on_seek: impl Fn(i64) -> Message + 'a,
    on_select: impl Fn(Option<Selection>) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(WaveformCanvas {
        renderer,
        on_seek,
        on_select,
    })
    .width(Length::Fill)
    .height(Length::Fixed(WAVEFORM_VIEW_HEIGHT))
    .into()
}

/// Show an offscreen-rendered surface (a thumbnail, usually) as an image
/// element at its logical size.
pub fn surface_view<'a, Message>(surface: &PixelSurface) -> Element<'a, Message> {
    iced::widget::image(surface.image_handle())
        .width(Length::Fixed(surface.logical_width()))
        .height(Length::Fixed(surface.logical_height()))
        .into()
}
