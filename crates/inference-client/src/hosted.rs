use std::fmt;
use std::time::Instant;

use anyhow::Context;
use async_trait::async_trait;
use protocol::{Sentiment, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};

use crate::http::{http_client, join_base_path};
use crate::TextClassifier;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_TOKEN_ENV: &str = "HUGGINGFACE_API_TOKEN";

#[derive(Clone)]
pub struct HostedConfig {
    pub base_url: String,
    pub model: String,
    pub token: Option<String>,
}

impl Default for HostedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            token: None,
        }
    }
}

impl fmt::Debug for HostedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostedConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Serialize)]
struct ClassificationInput<'a> {
    inputs: &'a str,
}

/// The service answers `[[{label, score}, ...]]` for a single input, older
/// deployments answer the flat list.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClassificationOutput {
    Nested(Vec<Vec<Sentiment>>),
    Flat(Vec<Sentiment>),
}

impl ClassificationOutput {
    fn into_predictions(self) -> Vec<Sentiment> {
        match self {
            ClassificationOutput::Nested(batches) => {
                batches.into_iter().next().unwrap_or_default()
            }
            ClassificationOutput::Flat(predictions) => predictions,
        }
    }
}

pub(crate) fn parse_predictions(body: &str) -> anyhow::Result<Vec<Sentiment>> {
    let output: ClassificationOutput =
        serde_json::from_str(body).context("unexpected classification payload")?;
    Ok(output.into_predictions())
}

/// Classifier backed by a hosted inference endpoint at `{base_url}/models/{model}`.
pub struct HostedClassifier {
    url: String,
    model: String,
    token: Option<String>,
}

impl HostedClassifier {
    pub fn new(config: HostedConfig) -> anyhow::Result<Self> {
        let model = config.model.trim();
        if model.is_empty() {
            anyhow::bail!("model must not be empty");
        }
        let url = join_base_path(&config.base_url, &format!("models/{model}"))?;
        Ok(Self {
            url,
            model: model.to_string(),
            token: config.token.filter(|token| !token.trim().is_empty()),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TextClassifier for HostedClassifier {
    async fn classify(&self, text: &str) -> anyhow::Result<Vec<Sentiment>> {
        let client = http_client()?;
        let mut request = client
            .post(&self.url)
            .json(&ClassificationInput { inputs: text });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let started = Instant::now();
        let response = request.send().await.map_err(|err| {
            tracing::debug!(
                event = "inference.request_failed",
                is_timeout = err.is_timeout(),
                is_connect = err.is_connect(),
                "inference request failed"
            );
            err
        })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .context("failed to read inference response")?;
        tracing::debug!(
            event = "inference.response",
            model = %self.model,
            status = %status,
            body_len = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
        );
        if !status.is_success() {
            anyhow::bail!("inference request failed status={} body={}", status, body);
        }
        parse_predictions(&body)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
