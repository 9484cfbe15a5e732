use std::sync::Arc;

use tracing::{debug, info};

use edufind_common::{Resource, ResourceType, Result, SearchHit, SearchQuery};

use crate::classifier::classify;
use crate::scoring::{credibility, relevance};
use crate::traits::WebSearcher;

/// Terms appended to every topic to bias the provider toward learning material.
const QUERY_BOOST: &str = "tutorial education course";

/// Results requested from the provider per search.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Upper bound on resources returned by the HTTP search endpoint.
pub const MAX_API_RESULTS: usize = 5;

/// Search → classify/score → rank.
///
/// Built once at startup and shared; holds no mutable state, so one instance
/// serves any number of concurrent requests.
pub struct ResourcePipeline {
    searcher: Arc<dyn WebSearcher>,
    page_size: usize,
}

impl ResourcePipeline {
    pub fn new(searcher: Arc<dyn WebSearcher>) -> Self {
        Self {
            searcher,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn build_query(topic: &str) -> String {
        format!("{} {QUERY_BOOST}", topic.trim())
    }

    /// Every usable hit for `topic`, best first. Hits without a link are dropped.
    /// Any searcher failure aborts the whole search.
    pub async fn search_resources(&self, topic: &str) -> Result<Vec<Resource>> {
        let query = Self::build_query(topic);
        let hits = self.searcher.search(&query, self.page_size).await?;
        let hit_count = hits.len();

        let resources: Vec<Resource> = hits
            .into_iter()
            .filter_map(|hit| to_resource(topic, hit))
            .collect();

        debug!(topic, "Searched topic");
        info!(
            hits = hit_count,
            kept = resources.len(),
            "Resource search complete"
        );
        Ok(rank(resources))
    }

    /// Console entry point: validated, ranked and filtered, never truncated.
    pub async fn find_resources(&self, query: &SearchQuery) -> Result<Vec<Resource>> {
        query.validate()?;
        let resources = self.search_resources(&query.topic).await?;
        Ok(filter_by_types(resources, query.resource_types.as_deref()))
    }

    /// HTTP entry point: filter first, then keep the best [`MAX_API_RESULTS`].
    pub async fn top_resources(&self, query: &SearchQuery) -> Result<Vec<Resource>> {
        let mut resources = self.find_resources(query).await?;
        resources.truncate(MAX_API_RESULTS);
        Ok(resources)
    }
}

/// Classify and score one raw hit. `None` when the hit has no usable link.
pub fn to_resource(topic: &str, hit: SearchHit) -> Option<Resource> {
    let url = hit.link.filter(|l| !l.trim().is_empty())?;
    let title = hit.title.unwrap_or_default();
    let description = hit.snippet.unwrap_or_default();

    let resource_type = classify(&url, &title);
    let credibility_score = credibility(&url, &title, &description);
    let relevance_score = relevance(topic, &title, &description);

    debug!(
        %url,
        %resource_type,
        credibility_score,
        relevance_score,
        "Scored search hit"
    );

    Some(Resource {
        title,
        url,
        description,
        resource_type,
        credibility_score,
        relevance_score,
    })
}

/// Sort by combined score, highest first. The sort is stable, so exact ties
/// keep discovery order.
pub fn rank(mut resources: Vec<Resource>) -> Vec<Resource> {
    resources.sort_by(|a, b| b.combined_score().total_cmp(&a.combined_score()));
    resources
}

/// Keep only the requested categories, preserving order. `None` or an empty
/// list means no filter.
pub fn filter_by_types(resources: Vec<Resource>, types: Option<&[ResourceType]>) -> Vec<Resource> {
    match types {
        Some(types) if !types.is_empty() => resources
            .into_iter()
            .filter(|r| types.contains(&r.resource_type))
            .collect(),
        _ => resources,
    }
}
