//! Streaming PDF canvas using lopdf.
//!
//! This crate serializes a PDF incrementally: each page's content stream and
//! page object are written to the output sink as soon as the page completes,
//! so bytes start flowing before the last page is generated. Only the page
//! tree, catalog, cross-reference table and trailer wait for `finish`.

mod canvas;
mod writer;

pub use canvas::LopdfCanvas;
pub use writer::StreamingPdfWriter;
