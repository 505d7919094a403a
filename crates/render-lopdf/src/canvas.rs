use crate::writer::{to_win_ansi, StreamingPdfWriter};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use playbook_render_core::{DocumentCanvas, RenderError};
use playbook_types::{Color, DocumentInfo, Point, Rect, TextStyle};
use std::io::Write;

/// Cubic Bézier circle approximation constant for rounded corners.
const KAPPA: f32 = 0.552_284_75;

#[derive(Default, Clone, PartialEq)]
struct PageState {
    font_name: &'static str,
    font_size: f32,
    fill_color: Option<Color>,
}

/// A `DocumentCanvas` backed by the streaming lopdf writer.
///
/// Drawing commands accumulate as content operations for the current page
/// only; a page break (or `finish`) encodes them and hands the page to the
/// writer, so at most one page of commands is ever held in memory.
pub struct LopdfCanvas<W: Write> {
    writer: StreamingPdfWriter<W>,
    operations: Vec<Operation>,
    state: PageState,
    page_height: f32,
}

impl<W: Write> LopdfCanvas<W> {
    pub fn new(
        sink: W,
        info: &DocumentInfo,
        page_width: f32,
        page_height: f32,
    ) -> Result<Self, RenderError> {
        let writer = StreamingPdfWriter::new(sink, info, page_width, page_height)?;
        Ok(Self {
            writer,
            operations: Vec::new(),
            state: PageState::default(),
            page_height,
        })
    }

    /// Convert a top-down layout Y coordinate to the PDF bottom-up axis.
    fn flip_y(&self, y: f32) -> f32 {
        self.page_height - y
    }

    fn set_font(&mut self, style: &TextStyle) {
        let name = style.font.resource_name();
        if self.state.font_name != name || self.state.font_size != style.size {
            self.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(name.as_bytes().to_vec()), style.size.into()],
            ));
            self.state.font_name = name;
            self.state.font_size = style.size;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.operations.push(Operation::new(
                "rg",
                vec![
                    (color.r as f32 / 255.0).into(),
                    (color.g as f32 / 255.0).into(),
                    (color.b as f32 / 255.0).into(),
                ],
            ));
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, line_width: f32, color: Color) {
        self.operations
            .push(Operation::new("w", vec![line_width.into()]));
        self.operations.push(Operation::new(
            "RG",
            vec![
                (color.r as f32 / 255.0).into(),
                (color.g as f32 / 255.0).into(),
                (color.b as f32 / 255.0).into(),
            ],
        ));
    }

    /// Emits path operations for a rectangle with rounded corners, in PDF
    /// coordinates. The input rect is in top-down layout space.
    fn rounded_rect_path(&mut self, rect: Rect, radius: f32) {
        let x = rect.x;
        let y = self.flip_y(rect.y + rect.height);
        let w = rect.width;
        let h = rect.height;

        if radius <= 0.0 {
            self.operations.push(Operation::new(
                "re",
                vec![x.into(), y.into(), w.into(), h.into()],
            ));
            return;
        }

        let r = radius.min(w / 2.0).min(h / 2.0);
        let k = r * KAPPA;
        let ops: [(&str, Vec<f32>); 9] = [
            ("m", vec![x + r, y]),
            ("l", vec![x + w - r, y]),
            ("c", vec![x + w - r + k, y, x + w, y + r - k, x + w, y + r]),
            ("l", vec![x + w, y + h - r]),
            ("c", vec![x + w, y + h - r + k, x + w - r + k, y + h, x + w - r, y + h]),
            ("l", vec![x + r, y + h]),
            ("c", vec![x + r - k, y + h, x, y + h - r + k, x, y + h - r]),
            ("l", vec![x, y + r]),
            ("c", vec![x, y + r - k, x + r - k, y, x + r, y]),
        ];
        for (op, operands) in ops {
            self.operations.push(Operation::new(
                op,
                operands.into_iter().map(Object::from).collect(),
            ));
        }
        self.operations.push(Operation::new("h", vec![]));
    }

    fn flush_page(&mut self) -> Result<(), RenderError> {
        let content = Content {
            operations: std::mem::take(&mut self.operations),
        };
        let content_id = self.writer.write_content_stream(content)?;
        self.writer.write_page(content_id)?;
        // Graphics state does not carry across content streams.
        self.state = PageState::default();
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.writer.page_count()
    }

    /// Closes the final page and the document structure, returning the sink.
    pub fn finish(mut self) -> Result<W, RenderError> {
        self.flush_page()?;
        self.writer.finish()
    }
}

impl<W: Write> DocumentCanvas for LopdfCanvas<W> {
    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        self.operations.push(Operation::new("BT", vec![]));
        self.set_font(style);
        self.set_fill_color(style.color);
        let baseline_y = y + style.size * 0.8;
        let pdf_y = self.flip_y(baseline_y);
        self.operations
            .push(Operation::new("Td", vec![x.into(), pdf_y.into()]));
        self.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        self.operations.push(Operation::new("ET", vec![]));
        Ok(())
    }

    fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.set_fill_color(color);
        self.rounded_rect_path(rect, radius);
        self.operations.push(Operation::new("f", vec![]));
        Ok(())
    }

    fn stroke_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        line_width: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.set_stroke(line_width, color);
        self.rounded_rect_path(rect, radius);
        self.operations.push(Operation::new("S", vec![]));
        Ok(())
    }

    fn stroke_polyline(
        &mut self,
        points: &[Point],
        line_width: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        let Some(first) = points.first() else {
            return Ok(());
        };
        self.set_stroke(line_width, color);
        self.operations.push(Operation::new(
            "m",
            vec![first.x.into(), self.flip_y(first.y).into()],
        ));
        for point in &points[1..] {
            self.operations.push(Operation::new(
                "l",
                vec![point.x.into(), self.flip_y(point.y).into()],
            ));
        }
        self.operations.push(Operation::new("S", vec![]));
        Ok(())
    }

    fn break_page(&mut self) -> Result<(), RenderError> {
        self.flush_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playbook_types::Font;

    fn sample_info() -> DocumentInfo {
        DocumentInfo {
            title: "Canvas test".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn canvas_pages_match_break_count() {
        let mut canvas = LopdfCanvas::new(Vec::new(), &sample_info(), 612.0, 792.0).unwrap();
        let style = TextStyle::new(Font::Helvetica, 12.0, Color::default());
        canvas.draw_text(56.0, 56.0, "one", &style).unwrap();
        canvas.break_page().unwrap();
        canvas.draw_text(56.0, 56.0, "two", &style).unwrap();
        let bytes = canvas.finish().unwrap();

        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn draws_shapes_without_error() {
        let mut canvas = LopdfCanvas::new(Vec::new(), &sample_info(), 612.0, 792.0).unwrap();
        canvas
            .fill_rounded_rect(Rect::new(70.0, 100.0, 400.0, 34.0), 14.0, Color::rgb(63, 85, 112))
            .unwrap();
        canvas
            .stroke_rounded_rect(Rect::new(70.0, 100.0, 400.0, 170.0), 14.0, 1.5, Color::rgb(63, 85, 112))
            .unwrap();
        canvas
            .stroke_polyline(
                &[Point::new(90.0, 200.0), Point::new(170.0, 170.0), Point::new(250.0, 194.0)],
                1.0,
                Color::rgb(239, 131, 84),
            )
            .unwrap();
        let bytes = canvas.finish().unwrap();
        assert_eq!(lopdf::Document::load_mem(&bytes).unwrap().get_pages().len(), 1);
    }
}
