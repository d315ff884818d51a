//! The page as data. A `ConsoleView` is rebuilt from scratch on every
//! interaction and rendered by [`crate::page`].

use data::{SearchResponse, SearchResult};
use reqwest::Url;

pub const NO_RESULTS_NOTICE: &str =
    "No matching images found. Please try a different query or image!";

/// Decides which result URLs may be handed to the browser as `<img src>`.
#[derive(Debug, Clone, Default)]
pub struct ImagePolicy {
    allowed_hosts: Vec<String>,
}

impl ImagePolicy {
    pub fn new(allowed_hosts: Vec<String>) -> Self {
        Self {
            allowed_hosts: allowed_hosts
                .into_iter()
                .map(|host| host.trim().to_ascii_lowercase())
                .filter(|host| !host.is_empty())
                .collect(),
        }
    }

    /// Only absolute http(s) URLs, and only from the allow-list when one is set.
    pub fn admit(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            return false;
        }
        if self.allowed_hosts.is_empty() {
            return true;
        }
        parsed.host_str().is_some_and(|host| {
            self.allowed_hosts
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(host))
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellImage {
    Trusted(String),
    /// Rejected by the policy; the URL is kept for logs and tooltips only.
    Withheld(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultCell {
    pub image: CellImage,
    pub label: String,
}

impl ResultCell {
    pub fn new(result: SearchResult, policy: &ImagePolicy) -> Self {
        let image = if policy.admit(&result.url) {
            CellImage::Trusted(result.url)
        } else {
            log::warn!("withholding result image {}", result.url);
            CellImage::Withheld(result.url)
        };
        Self {
            image,
            label: similarity_label(result.similarity),
        }
    }
}

pub fn similarity_label(similarity: f64) -> String {
    format!("Similarity: {similarity:.3}")
}

/// Results laid out row-major; only the last row may be short.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGrid {
    pub columns: usize,
    pub rows: Vec<Vec<ResultCell>>,
}

impl ResultGrid {
    pub fn layout(results: Vec<SearchResult>, columns: usize, policy: &ImagePolicy) -> Self {
        let columns = columns.max(1);
        let cells: Vec<ResultCell> = results
            .into_iter()
            .map(|result| ResultCell::new(result, policy))
            .collect();
        Self {
            columns,
            rows: cells.chunks(columns).map(<[ResultCell]>::to_vec).collect(),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Idle,
    Results(ResultGrid),
    NoResults,
    /// Description of what went wrong, shown in the error banner.
    Failed(String),
}

impl Outcome {
    pub fn from_response(response: SearchResponse, columns: usize, policy: &ImagePolicy) -> Self {
        if response.results.is_empty() {
            Outcome::NoResults
        } else {
            Outcome::Results(ResultGrid::layout(response.results, columns, policy))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleView {
    /// Echoed back into the text input.
    pub query: String,
    pub preview: Option<String>,
    pub outcome: Outcome,
}

impl ConsoleView {
    pub fn idle(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            preview: None,
            outcome: Outcome::Idle,
        }
    }

    pub fn failed(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            preview: None,
            outcome: Outcome::Failed(message.into()),
        }
    }
}
