use crate::constants::*;
use crate::text::wrap_text;
use playbook_render_core::{DocumentCanvas, RenderError};
use playbook_types::{Font, Point, Rect, TextStyle};

/// Draws the fixed-geometry "screen mockup" illustration with its top edge
/// at `top`: rounded frame, header bar, content panel, two buttons, a
/// five-bar chart and a trend polyline. Purely decorative; nothing about it
/// varies with page content except the vertical position.
pub fn draw_mock_frame<C: DocumentCanvas + ?Sized>(
    canvas: &mut C,
    top: f32,
) -> Result<(), RenderError> {
    let left = MOCK_LEFT;
    let width = MOCK_WIDTH;
    let height = MOCK_HEIGHT;

    canvas.stroke_rounded_rect(
        Rect::new(left, top, width, height),
        MOCK_CORNER_RADIUS,
        1.5,
        ACCENT_COLOR,
    )?;
    canvas.fill_rounded_rect(
        Rect::new(left, top, width, MOCK_HEADER_HEIGHT),
        MOCK_CORNER_RADIUS,
        ACCENT_COLOR,
    )?;
    canvas.fill_rounded_rect(
        Rect::new(left + 16.0, top + 48.0, width - 32.0, 44.0),
        10.0,
        PANEL_COLOR,
    )?;
    canvas.fill_rounded_rect(
        Rect::new(left + 16.0, top + 104.0, width - 180.0, 26.0),
        8.0,
        HIGHLIGHT_COLOR,
    )?;
    canvas.fill_rounded_rect(
        Rect::new(left + width - 140.0, top + 104.0, 124.0, 26.0),
        8.0,
        WHITE,
    )?;

    let bar_left = left + 20.0;
    let bar_bottom = top + height - 32.0;
    for (i, bar_height) in MOCK_BAR_HEIGHTS.iter().enumerate() {
        let x = bar_left + i as f32 * (MOCK_BAR_WIDTH + MOCK_BAR_GAP);
        canvas.fill_rounded_rect(
            Rect::new(x, bar_bottom - bar_height, MOCK_BAR_WIDTH, *bar_height),
            4.0,
            BAR_COLOR,
        )?;
    }

    let trend = [
        Point::new(left + 20.0, top + height - 64.0),
        Point::new(left + 100.0, top + height - 94.0),
        Point::new(left + 180.0, top + height - 70.0),
        Point::new(left + 260.0, top + height - 112.0),
        Point::new(left + 340.0, top + height - 80.0),
    ];
    canvas.stroke_polyline(&trend, 1.0, HIGHLIGHT_COLOR)?;

    Ok(())
}

/// Draws a checklist starting at `y_start`: one square checkbox glyph per
/// item with word-wrapped text to its right, advancing a constant row height
/// per item. The row height does not grow with wrapped line count, so items
/// long enough to wrap past one extra line will run into the next row; that
/// is a known limitation of the fixed row grid.
pub fn draw_checklist<C: DocumentCanvas + ?Sized>(
    canvas: &mut C,
    y_start: f32,
    items: &[String],
) -> Result<(), RenderError> {
    let style = TextStyle::new(Font::Helvetica, CHECKLIST_SIZE, BODY_COLOR);
    let mut y = y_start;
    for item in items {
        canvas.stroke_rounded_rect(
            Rect::new(MOCK_LEFT, y, CHECKBOX_SIZE, CHECKBOX_SIZE),
            CHECKBOX_RADIUS,
            1.0,
            ACCENT_COLOR,
        )?;
        let mut line_y = y - 2.0;
        for line in wrap_text(item, style.font, style.size, CHECKLIST_TEXT_WIDTH) {
            canvas.draw_text(CHECKLIST_TEXT_X, line_y, &line, &style)?;
            line_y += crate::metrics::line_height(style.size);
        }
        y += CHECKLIST_ROW_HEIGHT;
    }
    Ok(())
}
