mod hosted;
mod http;

use async_trait::async_trait;
use protocol::Sentiment;

pub use hosted::{HostedClassifier, HostedConfig, DEFAULT_BASE_URL, DEFAULT_TOKEN_ENV};
pub use http::join_base_path;

/// A text-classification backend.
///
/// Predictions come back in the order the backend ranks them, best first.
#[async_trait]
pub trait TextClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> anyhow::Result<Vec<Sentiment>>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}
