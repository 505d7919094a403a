//! Content pools and the deterministic page content builder.
//!
//! Every page of the generated playbook is a pure function of its page index
//! and the pool contents: fragments are selected by `(index * stride) % len`
//! with a distinct small stride per pool, so consecutive pages combine
//! fragments differently without any randomness.

mod builder;
mod error;
mod pools;

pub use builder::{build_page, build_pages, PageContent};
pub use error::ContentError;
pub use pools::ContentPools;
