//! Search intent source: raw text changes → debounced, de-duplicated queries.

mod pipeline;
mod source;

pub use pipeline::SearchPipeline;
pub use source::run_search_source;
