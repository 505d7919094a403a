//! Fixed-position page layout and the pagination pipeline.
//!
//! Pages are laid out top-down in points with the origin at the upper-left
//! corner. Text blocks flow a cursor downwards; the illustration, checklist
//! and callouts sit at fixed offsets from the cursor position recorded after
//! the key-points list (see `constants` for the coupling between them).

pub mod constants;
pub mod metrics;
mod pipeline;
mod primitives;
mod text;

pub use pipeline::render_pages;
pub use primitives::{draw_checklist, draw_mock_frame};
pub use text::wrap_text;
