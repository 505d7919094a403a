//! Named layout constants shared by the primitives and the pipeline.
//!
//! The vertical offsets below the screen mockup are tuned to each other, not
//! measured from rendered content: `CHECKLIST_HEADING_OFFSET` assumes the
//! mockup is `MOCK_HEIGHT` tall, and the callout offsets assume the checklist
//! has exactly `CHECKLIST_LEN` rows of `CHECKLIST_ROW_HEIGHT` points each.
//! Changing any row count or height means revisiting every offset in this
//! file. Content that wraps beyond the common-case line count will overlap
//! the block below it; that is accepted behavior of the fixed layout, not
//! something the pipeline measures around.

use playbook_types::Color;

// Page geometry (US Letter, 56pt margin)
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 56.0;
pub const CONTENT_WIDTH: f32 = 480.0;

// Palette
pub const HEADING_COLOR: Color = Color::rgb(0x1b, 0x26, 0x3b);
pub const ACCENT_COLOR: Color = Color::rgb(0x3f, 0x55, 0x70);
pub const BODY_COLOR: Color = Color::rgb(0x2f, 0x3b, 0x52);
pub const HIGHLIGHT_COLOR: Color = Color::rgb(0xef, 0x83, 0x54);
pub const PANEL_COLOR: Color = Color::rgb(0xf6, 0xf7, 0xfb);
pub const BAR_COLOR: Color = Color::rgb(0x8f, 0xb4, 0xff);
pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

// Typography
pub const TITLE_SIZE: f32 = 20.0;
pub const SUBTITLE_SIZE: f32 = 12.0;
pub const BODY_SIZE: f32 = 11.0;
pub const HEADING_SIZE: f32 = 12.0;
pub const CHECKLIST_SIZE: f32 = 10.0;
pub const CALLOUT_SIZE: f32 = 11.0;
pub const EXPERIMENT_SIZE: f32 = 10.0;
pub const FOOTER_SIZE: f32 = 9.0;
pub const BODY_LINE_GAP: f32 = 2.0;

// Vertical gaps between the flowed text blocks
pub const TITLE_GAP: f32 = 7.0;
pub const SUBTITLE_GAP: f32 = 14.0;
pub const NARRATIVE_GAP: f32 = 10.0;
pub const HEADING_GAP: f32 = 6.0;

// Screen mockup illustration
pub const MOCK_LEFT: f32 = 70.0;
pub const MOCK_WIDTH: f32 = 400.0;
pub const MOCK_HEIGHT: f32 = 170.0;
pub const MOCK_GAP: f32 = 14.0;
pub const MOCK_CORNER_RADIUS: f32 = 14.0;
pub const MOCK_HEADER_HEIGHT: f32 = 34.0;
pub const MOCK_BAR_WIDTH: f32 = 18.0;
pub const MOCK_BAR_GAP: f32 = 14.0;
pub const MOCK_BAR_HEIGHTS: [f32; 5] = [60.0, 88.0, 48.0, 102.0, 76.0];

// Checklist block, positioned a fixed distance below the mockup top
pub const CHECKLIST_HEADING_OFFSET: f32 = 190.0;
pub const CHECKLIST_ROWS_OFFSET: f32 = 22.0;
pub const CHECKLIST_ROW_HEIGHT: f32 = 18.0;
pub const CHECKLIST_LEN: usize = 5;
pub const CHECKBOX_SIZE: f32 = 12.0;
pub const CHECKBOX_RADIUS: f32 = 3.0;
pub const CHECKLIST_TEXT_X: f32 = 88.0;
pub const CHECKLIST_TEXT_WIDTH: f32 = 470.0;

// Callouts, positioned relative to the checklist heading
pub const METRICS_OFFSET: f32 = 138.0;
pub const METRICS_WIDTH: f32 = 220.0;
pub const EXPERIMENT_OFFSET: f32 = 156.0;
pub const CTA_OFFSET: f32 = 198.0;

// Footer, pinned to the bottom edge regardless of content above
pub const FOOTER_BOTTOM_OFFSET: f32 = 56.0;
