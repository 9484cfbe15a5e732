// WebSearcher is the single seam between the pipeline and the outside world.
// SerperClient implements it for production; testing::MockSearcher for tests.

use async_trait::async_trait;

use edufind_common::{EduFindError, Result, SearchHit};
use serper_client::{SerperClient, SerperError};

#[async_trait]
pub trait WebSearcher: Send + Sync {
    /// Run one search and return up to `max_results` raw hits.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>>;
}

#[async_trait]
impl WebSearcher for SerperClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        let organic = SerperClient::search(self, query, max_results)
            .await
            .map_err(provider_error)?;

        Ok(organic
            .into_iter()
            .map(|r| SearchHit {
                link: r.link,
                title: r.title,
                snippet: r.snippet,
            })
            .collect())
    }
}

fn provider_error(err: SerperError) -> EduFindError {
    match err {
        SerperError::MissingApiKey => EduFindError::MissingCredential,
        other => EduFindError::Provider(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_maps_to_missing_credential() {
        assert!(matches!(
            provider_error(SerperError::MissingApiKey),
            EduFindError::MissingCredential
        ));
    }

    #[test]
    fn other_failures_map_to_provider_error() {
        let err = provider_error(SerperError::Api {
            status: 502,
            message: "bad gateway".into(),
        });
        match err {
            EduFindError::Provider(msg) => assert!(msg.contains("502")),
            other => panic!("expected Provider, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unconfigured_client_reports_missing_credential() {
        let client = SerperClient::new(None, std::time::Duration::from_secs(1)).unwrap();
        let searcher: &dyn WebSearcher = &client;
        let err = searcher.search("algebra", 20).await.unwrap_err();
        assert!(matches!(err, EduFindError::MissingCredential));
    }
}
