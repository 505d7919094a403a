use crate::error::RenderError;
use playbook_types::{Color, Point, Rect, TextStyle};

/// A trait for page canvases, abstracting the PDF drawing primitives.
///
/// Coordinates are top-down with the origin at the upper-left corner of the
/// page; implementations translate to the encoder's native space. Commands
/// are serialized strictly in call order within a page; the underlying
/// format keeps font and color state across commands, so reordering would
/// change the output.
pub trait DocumentCanvas {
    /// Draws a single pre-wrapped line of text whose top edge sits at `y`.
    fn draw_text(&mut self, x: f32, y: f32, text: &str, style: &TextStyle)
    -> Result<(), RenderError>;

    /// Fills a rounded rectangle. A radius of zero fills a plain rectangle.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color)
    -> Result<(), RenderError>;

    /// Strokes the outline of a rounded rectangle.
    fn stroke_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        line_width: f32,
        color: Color,
    ) -> Result<(), RenderError>;

    /// Strokes an open polyline through the given points.
    fn stroke_polyline(
        &mut self,
        points: &[Point],
        line_width: f32,
        color: Color,
    ) -> Result<(), RenderError>;

    /// Closes the current page and starts a new one.
    fn break_page(&mut self) -> Result<(), RenderError>;
}
