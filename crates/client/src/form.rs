//! In-memory state of the analyzer form.
//!
//! idle -> loading -> (success | error) -> idle. Only one submission can be
//! in flight; a new one clears the previous outcome.

use async_trait::async_trait;
use protocol::{char_counter, is_blank, Sentiment, CLIENT_FAILURE_MESSAGE, DISPLAY_CHAR_LIMIT};

#[async_trait]
pub(crate) trait Analyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> anyhow::Result<Sentiment>;
}

#[derive(Debug, Default)]
pub(crate) struct AnalyzerForm {
    text: String,
    loading: bool,
    error: Option<String>,
    sentiment: Option<Sentiment>,
}

impl AnalyzerForm {
    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(crate) fn can_submit(&self) -> bool {
        !self.loading && !is_blank(&self.text)
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Result to display; hidden while an error is set.
    pub(crate) fn sentiment(&self) -> Option<&Sentiment> {
        match self.error {
            Some(_) => None,
            None => self.sentiment.as_ref(),
        }
    }

    pub(crate) fn counter(&self) -> String {
        char_counter(&self.text)
    }

    pub(crate) fn will_truncate(&self) -> bool {
        self.text.chars().count() > DISPLAY_CHAR_LIMIT
    }

    /// Moves to loading and hands back the text to send, or `None` when
    /// submission is not allowed.
    pub(crate) fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.sentiment = None;
        Some(self.text.clone())
    }

    pub(crate) fn finish(&mut self, outcome: anyhow::Result<Sentiment>) {
        match outcome {
            Ok(sentiment) => self.sentiment = Some(sentiment),
            Err(err) => {
                tracing::debug!(error = %format!("{err:#}"), "analysis failed");
                self.error = Some(CLIENT_FAILURE_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    /// Runs one submission to completion. Returns `false` when nothing was sent.
    pub(crate) async fn submit(&mut self, analyzer: &dyn Analyzer) -> bool {
        let Some(text) = self.begin_submit() else {
            return false;
        };
        let outcome = analyzer.analyze(&text).await;
        self.finish(outcome);
        true
    }
}
