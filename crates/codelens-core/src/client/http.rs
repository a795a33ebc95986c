use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, instrument};

use super::{Analyzer, ClientError, ClientSettings};
use crate::analysis::AnalysisResult;

/// `reqwest`-backed client posting one multipart request per analysis.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    http: Client,
    url: String,
}

impl HttpAnalysisClient {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let http = Client::builder()
            .user_agent("codelens/0.3")
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("failed to build analysis HTTP client")?;
        Ok(Self {
            http,
            url: settings.endpoint.clone(),
        })
    }
}

#[async_trait]
impl Analyzer for HttpAnalysisClient {
    #[instrument(
        name = "analyze_file",
        skip(self, bytes),
        fields(file = %file_name, size = bytes.len())
    )]
    async fn analyze(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<AnalysisResult, ClientError> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_owned()));
        let response = self
            .http
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status });
        }

        let body = response.text().await.map_err(ClientError::Transport)?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(ClientError::MalformedBody)?;

        let result = AnalysisResult::from_value(&value);
        debug!(score = ?result.score, issues = result.issues.len(), "analysis completed");
        Ok(result)
    }
}
