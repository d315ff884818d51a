//! Shared fixtures for the unit tests.

use crate::backend::{SearchBackend, SearchError};
use data::{SearchRequest, SearchResponse, SearchResult};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use reqwest::StatusCode;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum Reply {
    Results(Vec<SearchResult>),
    Status(StatusCode),
    Malformed,
}

/// Records every request and answers with a fixed reply.
#[derive(Debug, Clone)]
pub struct StubBackend {
    reply: Reply,
    requests: Arc<Mutex<Vec<SearchRequest>>>,
}

impl StubBackend {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl SearchBackend for StubBackend {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Results(results) => Ok(SearchResponse {
                results: results.clone(),
            }),
            Reply::Status(status) => Err(SearchError::Status(*status)),
            Reply::Malformed => Err(SearchError::MalformedResponse(
                serde_json::from_str::<SearchResponse>("{}").unwrap_err(),
            )),
        }
    }
}

/// A PNG with an alpha channel, so normalization has something to flatten.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 7) as u8, (y * 11) as u8, 128, 200])
    });
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}
