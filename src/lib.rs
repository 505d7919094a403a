//! # playbook
//!
//! Deterministic streaming PDF generator for marketing playbook ebooks.
//!
//! Given a page count and a set of content pools, [`generate_playbook`]
//! produces an N-page, richly laid-out PDF and streams it incrementally into
//! any byte sink. Generation is a pure function of its inputs: the same page
//! count and pools always yield byte-identical output, so regeneration is
//! naturally idempotent and needs no coordination across callers.
//!
//! The HTTP layer that usually fronts this (method checks, response headers)
//! is deliberately not part of this crate; [`CONTENT_TYPE`],
//! [`ATTACHMENT_FILENAME`] and [`CACHE_CONTROL`] are exported for it.

mod error;

pub use error::PipelineError;
pub use playbook_content::{build_page, build_pages, ContentPools, PageContent};
pub use playbook_layout::render_pages;
pub use playbook_render_core::{DocumentCanvas, RenderError};
pub use playbook_render_lopdf::LopdfCanvas;
pub use playbook_types::DocumentInfo;

use playbook_layout::constants::{PAGE_HEIGHT, PAGE_WIDTH};
use std::io::Write;

/// Media type the external HTTP collaborator should declare for the stream.
pub const CONTENT_TYPE: &str = "application/pdf";

/// Suggested download filename for a `Content-Disposition` header.
pub const ATTACHMENT_FILENAME: &str = "digital-marketing-blueprint.pdf";

/// Generated documents should not be cached; regeneration is cheap and pure.
pub const CACHE_CONTROL: &str = "no-store";

/// Page count of the standard playbook edition.
pub const DEFAULT_PAGE_COUNT: usize = 80;

/// Metadata embedded once into the document at creation.
pub fn document_info(total_pages: usize) -> DocumentInfo {
    DocumentInfo {
        title: "Digital Marketing Blueprint".to_string(),
        author: "Agentic Marketing Studio".to_string(),
        subject: format!("{}-page digital marketing product playbook", total_pages),
        keywords: "digital marketing, ebook, growth, automation, demand generation".to_string(),
    }
}

/// Generates the complete playbook document into `sink`, streaming each page
/// as soon as it is laid out, and returns the sink once the document
/// structure is closed.
///
/// `total_pages` must be at least 1; zero pages is rejected as a
/// configuration error before any byte is written. A sink failure (for
/// example the consumer closing the connection) aborts generation with
/// [`PipelineError::Render`] wrapping the I/O error; nothing is retried.
pub fn generate_playbook<W: Write>(
    total_pages: usize,
    pools: &ContentPools,
    sink: W,
) -> Result<W, PipelineError> {
    if total_pages == 0 {
        return Err(PipelineError::Config(
            "total_pages must be at least 1".to_string(),
        ));
    }
    pools.validate()?;

    log::info!("generating {}-page playbook", total_pages);
    let pages = build_pages(pools, total_pages)?;

    let info = document_info(total_pages);
    let mut canvas = LopdfCanvas::new(sink, &info, PAGE_WIDTH, PAGE_HEIGHT)?;
    render_pages(&pages, &mut canvas)?;
    let sink = canvas.finish()?;
    log::info!("finished streaming {} pages", total_pages);
    Ok(sink)
}
