// Test mocks for the resource pipeline.
//
// MockSearcher (WebSearcher) returns canned hits or a canned failure and
// records every (query, max_results) it is asked for.

use std::sync::Mutex;

use async_trait::async_trait;

use edufind_common::{EduFindError, Result, SearchHit};

use crate::traits::WebSearcher;

enum Outcome {
    Hits(Vec<SearchHit>),
    MissingCredential,
    Unavailable(String),
}

pub struct MockSearcher {
    outcome: Outcome,
    calls: Mutex<Vec<(String, usize)>>,
}

impl MockSearcher {
    pub fn with_hits(hits: Vec<SearchHit>) -> Self {
        Self::new(Outcome::Hits(hits))
    }

    pub fn missing_credential() -> Self {
        Self::new(Outcome::MissingCredential)
    }

    pub fn unavailable(reason: &str) -> Self {
        Self::new(Outcome::Unavailable(reason.to_string()))
    }

    fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every `(query, max_results)` seen so far, in call order.
    pub fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebSearcher for MockSearcher {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), max_results));

        match &self.outcome {
            Outcome::Hits(hits) => Ok(hits.iter().take(max_results).cloned().collect()),
            Outcome::MissingCredential => Err(EduFindError::MissingCredential),
            Outcome::Unavailable(reason) => Err(EduFindError::Provider(reason.clone())),
        }
    }
}
