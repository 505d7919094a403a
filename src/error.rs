//! Unified error type for whole-document generation.

use playbook_content::ContentError;
use playbook_render_core::RenderError;
use thiserror::Error;

/// The main error enum for all high-level operations within the generator.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}
