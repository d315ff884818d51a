use serde::{Deserialize, Serialize};

/// Body sent to the search backend. Keys that are not populated are left out
/// of the JSON entirely.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Standard base64 of an RGB JPEG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}

impl SearchRequest {
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.image_base64.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchResult {
    pub url: String,
    pub similarity: f64,
}

impl SearchResult {
    pub fn new(url: impl Into<String>, similarity: f64) -> Self {
        Self {
            url: url.into(),
            similarity,
        }
    }
}
