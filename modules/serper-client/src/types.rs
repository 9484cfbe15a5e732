use serde::{Deserialize, Serialize};

/// Request body for `POST /search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub q: String,
    pub num: usize,
}

/// Top-level search response. Only the organic block is modelled; knowledge
/// graph, ads and "people also ask" sections are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
}

/// A single organic result. Serper omits fields freely, so everything is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub position: Option<u32>,
}
