use anyhow::Context;
use async_trait::async_trait;
use protocol::{AnalyzeRequest, Sentiment, ANALYZE_PATH};
use reqwest::Client;

use crate::form::Analyzer;

/// Posts to a running sentiment server.
pub(crate) struct HttpAnalyzer {
    client: Client,
    url: String,
}

impl HttpAnalyzer {
    pub(crate) fn new(server: &str) -> anyhow::Result<Self> {
        let server = server.trim().trim_end_matches('/');
        if server.is_empty() {
            anyhow::bail!("server url is empty");
        }
        let client = Client::builder()
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            client,
            url: format!("{server}{ANALYZE_PATH}"),
        })
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Analyzer for HttpAnalyzer {
    async fn analyze(&self, text: &str) -> anyhow::Result<Sentiment> {
        let response = self
            .client
            .post(&self.url)
            .json(&AnalyzeRequest::new(text))
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.url))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("analysis failed status={} body={}", status, body);
        }
        response
            .json::<Sentiment>()
            .await
            .context("invalid analysis response")
    }
}
