//! Email extraction primitives
//!
//! Two layers: a pure regex extractor over arbitrary text, and HTML
//! slicing that carves a fetched page into the sub-locations the
//! discovery strategies scan (body text, metadata, scripts, comments,
//! mailto anchors, outbound links).

mod page;
mod pattern;

pub use page::{PageSlices, slice_page};
pub use pattern::EmailPattern;
