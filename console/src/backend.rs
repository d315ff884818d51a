use data::{SearchRequest, SearchResponse};
use log::{debug, error};
use reqwest::{Client, StatusCode, Url};
use std::future::Future;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("request to search backend failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("search backend answered with status {0}")]
    Status(StatusCode),
    #[error("malformed search response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// The external search service. One call per submission.
pub trait SearchBackend: Send + Sync {
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<SearchResponse, SearchError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: Client,
    endpoint: Url,
}

impl HttpSearchBackend {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, SearchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SearchBackend for HttpSearchBackend {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("search backend {} answered {}", self.endpoint, status);
            return Err(SearchError::Status(status));
        }

        let text = response.text().await?;
        let parsed = serde_json::from_str::<SearchResponse>(&text).inspect_err(|err| {
            error!("Failed to parse SearchResponse: {err}");
        })?;
        debug!("search backend returned {} results", parsed.results.len());
        Ok(parsed)
    }
}
