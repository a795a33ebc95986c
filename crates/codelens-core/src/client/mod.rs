mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::analysis::AnalysisResult;

pub use http::HttpAnalysisClient;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/analyze";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection parameters for the analysis backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Transport-level failures. A JSON body of the wrong shape is not an error;
/// it normalizes through [`AnalysisResult::from_value`] instead.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("analysis request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("analysis endpoint returned {status}")]
    Status { status: reqwest::StatusCode },
    #[error("analysis endpoint returned a non-JSON body")]
    MalformedBody(#[source] serde_json::Error),
}

/// Client abstraction over the external analysis backend.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Submit one file's raw bytes and return the normalized result. Issues
    /// exactly one network submission per call; no retries, no cancellation.
    async fn analyze(&self, file_name: &str, bytes: Vec<u8>)
        -> Result<AnalysisResult, ClientError>;
}
