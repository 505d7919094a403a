use crate::constants::*;
use crate::metrics::{line_height, text_width};
use crate::primitives::{draw_checklist, draw_mock_frame};
use crate::text::wrap_text;
use playbook_content::PageContent;
use playbook_render_core::{DocumentCanvas, RenderError};
use playbook_types::{Font, Point, TextStyle};

/// Draws word-wrapped text and returns the Y coordinate below the block.
fn draw_wrapped<C: DocumentCanvas + ?Sized>(
    canvas: &mut C,
    x: f32,
    y: f32,
    max_width: f32,
    text: &str,
    style: &TextStyle,
    line_gap: f32,
) -> Result<f32, RenderError> {
    let mut y = y;
    for line in wrap_text(text, style.font, style.size, max_width) {
        canvas.draw_text(x, y, &line, style)?;
        y += line_height(style.size) + line_gap;
    }
    Ok(y)
}

fn checklist_items(page: &PageContent) -> Vec<String> {
    vec![
        format!(
            "Align teams on {} and define measurement cadences.",
            page.metrics.to_lowercase()
        ),
        format!(
            "Configure {} inside the active tool stack.",
            page.automation.to_lowercase()
        ),
        format!(
            "Ship creative assets highlighting {}.",
            page.creative.to_lowercase()
        ),
        format!(
            "Enable data syncs that feed insight back into {}.",
            page.theme.to_lowercase()
        ),
        format!("Schedule experiment: {}", page.experiment),
    ]
}

fn render_page<C: DocumentCanvas + ?Sized>(
    canvas: &mut C,
    page: &PageContent,
    page_number: usize,
    total_pages: usize,
) -> Result<(), RenderError> {
    let title_style = TextStyle::new(Font::HelveticaBold, TITLE_SIZE, HEADING_COLOR);
    let subtitle_style = TextStyle::new(Font::Helvetica, SUBTITLE_SIZE, ACCENT_COLOR);
    let body_style = TextStyle::new(Font::TimesRoman, BODY_SIZE, BODY_COLOR);
    let heading_style = TextStyle::new(Font::HelveticaBold, HEADING_SIZE, HEADING_COLOR);
    let points_style = TextStyle::new(Font::Helvetica, BODY_SIZE, BODY_COLOR);

    let mut y = MARGIN;

    y = draw_wrapped(canvas, MARGIN, y, CONTENT_WIDTH, &page.title, &title_style, 0.0)?;
    y += TITLE_GAP;

    y = draw_wrapped(canvas, MARGIN, y, CONTENT_WIDTH, &page.subtitle, &subtitle_style, 0.0)?;
    y += SUBTITLE_GAP;

    y = draw_wrapped(
        canvas,
        MARGIN,
        y,
        CONTENT_WIDTH,
        &page.narrative,
        &body_style,
        BODY_LINE_GAP,
    )?;
    y += NARRATIVE_GAP;

    canvas.draw_text(MARGIN, y, "Key Moves", &heading_style)?;
    let underline_y = y + HEADING_SIZE + 1.0;
    let underline_width = text_width(heading_style.font, heading_style.size, "Key Moves");
    canvas.stroke_polyline(
        &[
            Point::new(MARGIN, underline_y),
            Point::new(MARGIN + underline_width, underline_y),
        ],
        0.6,
        HEADING_COLOR,
    )?;
    y += line_height(HEADING_SIZE) + HEADING_GAP;

    for point in &page.key_points {
        let bullet = format!("• {}", point);
        y = draw_wrapped(canvas, MARGIN, y, CONTENT_WIDTH, &bullet, &points_style, BODY_LINE_GAP)?;
    }

    // Everything below here sits at fixed offsets from the mockup top; see
    // the constants module for the coupling between these positions.
    let mock_top = y + MOCK_GAP;
    draw_mock_frame(canvas, mock_top)?;

    let checklist_start = mock_top + CHECKLIST_HEADING_OFFSET;
    canvas.draw_text(
        MOCK_LEFT,
        checklist_start,
        "Implementation Checklist",
        &heading_style,
    )?;
    draw_checklist(
        canvas,
        checklist_start + CHECKLIST_ROWS_OFFSET,
        &checklist_items(page),
    )?;

    let metrics_style = TextStyle::new(Font::HelveticaBold, CALLOUT_SIZE, ACCENT_COLOR);
    draw_wrapped(
        canvas,
        MOCK_LEFT,
        checklist_start + METRICS_OFFSET,
        METRICS_WIDTH,
        &page.metrics,
        &metrics_style,
        0.0,
    )?;

    let experiment_style = TextStyle::new(Font::Helvetica, EXPERIMENT_SIZE, BODY_COLOR);
    draw_wrapped(
        canvas,
        MOCK_LEFT,
        checklist_start + EXPERIMENT_OFFSET,
        CONTENT_WIDTH,
        &format!("Featured Experiment · {}", page.experiment),
        &experiment_style,
        BODY_LINE_GAP,
    )?;

    let cta_style = TextStyle::new(Font::HelveticaBold, CALLOUT_SIZE, HIGHLIGHT_COLOR);
    draw_wrapped(
        canvas,
        MOCK_LEFT,
        checklist_start + CTA_OFFSET,
        CONTENT_WIDTH,
        &page.call_to_action,
        &cta_style,
        BODY_LINE_GAP,
    )?;

    let footer_style = TextStyle::new(Font::Helvetica, FOOTER_SIZE, ACCENT_COLOR);
    let footer = format!("Page {} of {}", page_number, total_pages);
    let footer_x = PAGE_WIDTH - MARGIN - text_width(footer_style.font, footer_style.size, &footer);
    canvas.draw_text(
        footer_x,
        PAGE_HEIGHT - FOOTER_BOTTOM_OFFSET,
        &footer,
        &footer_style,
    )?;

    Ok(())
}

/// Renders the ordered page sequence in a single pass.
///
/// A page-break command is issued before every page except the first, so the
/// canvas ends up holding exactly `pages.len()` pages once it is finished.
pub fn render_pages<C: DocumentCanvas + ?Sized>(
    pages: &[PageContent],
    canvas: &mut C,
) -> Result<(), RenderError> {
    let total = pages.len();
    for (index, page) in pages.iter().enumerate() {
        if index > 0 {
            canvas.break_page()?;
        }
        render_page(canvas, page, index + 1, total)?;
        log::debug!("rendered page {}/{}", index + 1, total);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use playbook_content::{build_pages, ContentPools};
    use playbook_types::{Color, Rect};

    /// Records command counts instead of bytes, for asserting pipeline
    /// structure without a PDF encoder.
    #[derive(Default)]
    struct CountingCanvas {
        texts: Vec<String>,
        fills: usize,
        strokes: usize,
        polylines: usize,
        page_breaks: usize,
    }

    impl DocumentCanvas for CountingCanvas {
        fn draw_text(
            &mut self,
            _x: f32,
            _y: f32,
            text: &str,
            _style: &TextStyle,
        ) -> Result<(), RenderError> {
            self.texts.push(text.to_string());
            Ok(())
        }

        fn fill_rounded_rect(
            &mut self,
            _rect: Rect,
            _radius: f32,
            _color: Color,
        ) -> Result<(), RenderError> {
            self.fills += 1;
            Ok(())
        }

        fn stroke_rounded_rect(
            &mut self,
            _rect: Rect,
            _radius: f32,
            _line_width: f32,
            _color: Color,
        ) -> Result<(), RenderError> {
            self.strokes += 1;
            Ok(())
        }

        fn stroke_polyline(
            &mut self,
            _points: &[Point],
            _line_width: f32,
            _color: Color,
        ) -> Result<(), RenderError> {
            self.polylines += 1;
            Ok(())
        }

        fn break_page(&mut self) -> Result<(), RenderError> {
            self.page_breaks += 1;
            Ok(())
        }
    }

    fn render_n(total: usize) -> CountingCanvas {
        let pools = ContentPools::default();
        let pages = build_pages(&pools, total).unwrap();
        let mut canvas = CountingCanvas::default();
        render_pages(&pages, &mut canvas).unwrap();
        canvas
    }

    #[test]
    fn emits_one_fewer_break_than_pages() {
        assert_eq!(render_n(1).page_breaks, 0);
        assert_eq!(render_n(5).page_breaks, 4);
        assert_eq!(render_n(80).page_breaks, 79);
    }

    #[test]
    fn zero_pages_emit_nothing() {
        let canvas = render_n(0);
        assert_eq!(canvas.page_breaks, 0);
        assert!(canvas.texts.is_empty());
    }

    #[test]
    fn footer_text_counts_from_one() {
        let canvas = render_n(3);
        for n in 1..=3 {
            let footer = format!("Page {} of 3", n);
            assert!(canvas.texts.contains(&footer), "missing footer {footer:?}");
        }
        assert!(!canvas.texts.contains(&"Page 0 of 3".to_string()));
    }

    #[test]
    fn single_page_scenario() {
        let canvas = render_n(1);
        assert!(canvas.texts.contains(&"Page 1 of 1".to_string()));
        assert!(canvas.texts.contains(&"Implementation Checklist".to_string()));
        assert!(canvas.texts.contains(&"Key Moves".to_string()));
    }

    #[test]
    fn each_page_draws_the_fixed_illustration() {
        let canvas = render_n(2);
        // Per page: frame header + panel + 2 buttons + 5 bars = 9 fills,
        // frame outline + 5 checkboxes = 6 stroked rects,
        // trend line + heading underline = 2 polylines.
        assert_eq!(canvas.fills, 18);
        assert_eq!(canvas.strokes, 12);
        assert_eq!(canvas.polylines, 4);
    }

    #[test]
    fn checklist_rows_reference_page_fragments() {
        let pools = ContentPools::default();
        let pages = build_pages(&pools, 1).unwrap();
        let items = checklist_items(&pages[0]);
        assert_eq!(items.len(), CHECKLIST_LEN);
        assert!(items[0].contains("north-star kpi"));
        assert!(items[1].contains("behavior-triggered journeys"));
        assert!(items[4].starts_with("Schedule experiment:"));
    }
}
