//! Core rendering abstractions for playbook PDF generation.
//!
//! This crate provides the narrow interface between the layout pipeline and
//! a concrete document encoder:
//! - `DocumentCanvas` trait for ordered drawing/text/page-break commands
//! - Error types for rendering operations

mod error;
mod traits;

pub use error::RenderError;
pub use traits::DocumentCanvas;
