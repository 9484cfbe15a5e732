pub mod classifier;
pub mod pipeline;
pub mod scoring;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod traits;

pub use classifier::classify;
pub use pipeline::{filter_by_types, rank, ResourcePipeline, MAX_API_RESULTS};
pub use scoring::{credibility, relevance};
pub use traits::WebSearcher;
