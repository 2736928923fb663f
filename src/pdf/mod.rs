//! PDF page extraction
//!
//! Binary PDF bytes in, ordered per-page plain text out. The parsing itself
//! is delegated to `lopdf`; this module only guarantees the shape of the
//! result: one [`Page`] per source page, numbered contiguously from 1, and a
//! reported error (never a silently empty collection) for malformed input.

mod extractor;
mod types;

pub use extractor::{extract_pages, ExtractError};
pub use types::{Page, PageCollection};
