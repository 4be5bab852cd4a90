use crate::error::RenderError;
use crate::font::Font;
use crate::types::{ColorTarget, PaintMode, TextOptions};
use crate::{metrics, text};
use warrant_types::{Color, Point, Rect, Size};

/// A page-oriented vector and text canvas.
///
/// The document renderer is written against this trait only, so any backend
/// that can place text and paths on fixed-size pages can produce a warrant.
/// Coordinates are points from the top-left corner of the current page, y
/// growing downwards; text is positioned by its baseline.
///
/// A surface is owned by a single render call and consumed by [`finish`].
///
/// [`finish`]: DrawingSurface::finish
pub trait DrawingSurface {
    /// Dimensions of every page produced by this surface.
    fn page_size(&self) -> Size;

    /// Number of pages started so far.
    fn page_count(&self) -> usize;

    /// Records a document title in the output metadata, where supported.
    fn set_title(&mut self, _title: &str) {}

    /// Starts a new page. Drawing calls target the most recent page.
    fn new_page(&mut self) -> Result<(), RenderError>;

    fn set_font(&mut self, font: Font);

    fn font(&self) -> Font;

    fn set_color(&mut self, target: ColorTarget, color: Color);

    fn set_line_width(&mut self, width: f32);

    /// Width of `text` in the current font.
    fn measure_text(&self, text: &str) -> f32 {
        metrics::text_width(&self.font(), text)
    }

    /// Word-wraps `text` to `max_width` in the current font; at least one line.
    fn wrap_text(&self, text: &str, max_width: f32) -> Vec<String> {
        text::wrap_text(text, max_width, |s| self.measure_text(s))
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        options: TextOptions,
    ) -> Result<(), RenderError>;

    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), RenderError>;

    fn draw_rect(&mut self, rect: Rect, paint: PaintMode) -> Result<(), RenderError>;

    fn draw_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        paint: PaintMode,
    ) -> Result<(), RenderError>;

    fn draw_circle(&mut self, center: Point, radius: f32, paint: PaintMode)
    -> Result<(), RenderError>;

    /// Finalizes every page and returns the encoded document.
    fn finish(self) -> Result<Vec<u8>, RenderError>
    where
        Self: Sized;
}
