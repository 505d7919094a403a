pub mod color;
pub mod document;
pub mod font;
pub mod geometry;

pub use color::Color;
pub use document::DocumentInfo;
pub use font::{Font, TextStyle};
pub use geometry::{Point, Rect};
