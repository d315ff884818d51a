use crate::console::ConsoleSettings;
use crate::view::ImagePolicy;
use clap::Parser;
use reqwest::Url;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ArgumentError {
    #[error("invalid listen address '{0}'")]
    InvalidAddr(String),
    #[error("invalid search endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("search endpoint must use http or https, got '{0}'")]
    UnsupportedScheme(String),
    #[error("the result grid needs at least one column")]
    NoColumns,
    #[error("jpeg quality must be between 1 and 100, got {0}")]
    JpegQuality(u8),
}

#[derive(Parser, Debug, Clone)]
#[clap(name = "search_console", about = "Image Search Platform console")]
pub struct ConsoleArguments {
    #[clap(short = 'a', long = "addr", default_value = "127.0.0.1")]
    pub addr: String,
    #[clap(short = 'p', long = "port", default_value_t = 8501)]
    pub port: u16,
    #[clap(
        short = 'e',
        long = "endpoint",
        default_value = "http://localhost:8000/api/search"
    )]
    pub endpoint: String,
    #[clap(short = 'c', long = "columns", default_value_t = 5)]
    pub columns: usize,
    #[clap(long = "jpeg-quality", default_value_t = 75)]
    pub jpeg_quality: u8,
    #[clap(long = "max-upload-bytes", default_value_t = 200 * 1024 * 1024)]
    pub max_upload_bytes: usize,
    /// Unset means the HTTP client default (no timeout).
    #[clap(long = "request-timeout-secs")]
    pub request_timeout_secs: Option<u64>,
    /// Hosts result images may be loaded from. Empty allows any http(s) host.
    #[clap(long = "allowed-image-host")]
    pub allowed_image_hosts: Vec<String>,
    #[clap(
        long = "static-dir",
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/static")
    )]
    pub static_dir: String,
}

impl ConsoleArguments {
    pub fn get_socket_addr(&self) -> Result<SocketAddr, ArgumentError> {
        let ip: IpAddr = self
            .addr
            .parse()
            .map_err(|_| ArgumentError::InvalidAddr(self.addr.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn endpoint_url(&self) -> Result<Url, ArgumentError> {
        let url = Url::parse(&self.endpoint).map_err(|source| ArgumentError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ArgumentError::UnsupportedScheme(other.to_string())),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<(), ArgumentError> {
        self.get_socket_addr()?;
        self.endpoint_url()?;
        if self.columns == 0 {
            return Err(ArgumentError::NoColumns);
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ArgumentError::JpegQuality(self.jpeg_quality));
        }
        Ok(())
    }

    pub fn settings(&self) -> Arc<ConsoleSettings> {
        Arc::new(ConsoleSettings {
            columns: self.columns,
            jpeg_quality: self.jpeg_quality,
            image_policy: ImagePolicy::new(self.allowed_image_hosts.clone()),
        })
    }
}
