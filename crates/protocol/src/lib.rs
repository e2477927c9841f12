use serde::{Deserialize, Serialize};

pub mod tone;

pub use tone::{star_rating, SentimentIcon, Tone};

/// Token budget of the hosted model.
pub const MAX_LENGTH: usize = 512;
/// Characters forwarded to the classification service; roughly four per token.
/// Counted in Unicode scalar values, so astral-plane text such as emoji can
/// forward up to twice as many UTF-16 code units as a browser-side count.
pub const MAX_INPUT_CHARS: usize = MAX_LENGTH * 4;
/// Length past which the form warns that the text will be truncated.
pub const DISPLAY_CHAR_LIMIT: usize = 2000;

pub const DEFAULT_MODEL: &str = "nlptown/bert-base-multilingual-uncased-sentiment";
pub const ANALYZE_PATH: &str = "/api/analyze";

pub const TEXT_REQUIRED_MESSAGE: &str = "Text is required";
pub const ANALYZE_FAILED_MESSAGE: &str = "Failed to analyze sentiment";
pub const CLIENT_FAILURE_MESSAGE: &str = "Failed to analyze text. Please try again.";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// The submitted text, or `None` when it is missing or whitespace only.
    pub fn non_blank_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !is_blank(text))
    }
}

/// One label/score prediction as returned by the classification service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sentiment {
    pub label: String,
    pub score: f64,
}

impl Sentiment {
    pub fn tone(&self) -> Tone {
        Tone::from_label(&self.label)
    }

    /// Confidence rendered the way the form shows it, e.g. `87.5%`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.score * 100.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Counter line shown under the text box. Counts Unicode scalar values.
pub fn char_counter(text: &str) -> String {
    let count = text.chars().count();
    if count > DISPLAY_CHAR_LIMIT {
        format!("{count} / {DISPLAY_CHAR_LIMIT} characters (Text will be truncated)")
    } else {
        format!("{count} / {DISPLAY_CHAR_LIMIT} characters")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn truncate_cuts_at_char_budget() {
        let long = "a".repeat(MAX_INPUT_CHARS + 50);
        let cut = truncate_chars(&long, MAX_INPUT_CHARS);
        assert_eq!(cut.len(), MAX_INPUT_CHARS);
        assert_eq!(truncate_chars(cut, MAX_INPUT_CHARS), cut);
    }

    #[test]
    fn truncate_never_splits_multibyte_chars() {
        let text = "héllo wörld";
        assert_eq!(truncate_chars(text, 2), "hé");
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
    }

    #[test]
    fn truncate_counts_emoji_as_one_char() {
        let text = "👍👎👍";
        assert_eq!(truncate_chars(text, 2), "👍👎");
        assert_eq!(char_counter(text), "3 / 2000 characters");
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(AnalyzeRequest::default().non_blank_text().is_none());
        assert!(AnalyzeRequest::new("   \n\t").non_blank_text().is_none());
        assert_eq!(AnalyzeRequest::new(" ok ").non_blank_text(), Some(" ok "));
    }

    #[test]
    fn request_without_text_field_parses() {
        let request: AnalyzeRequest = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(request.text, None);
    }

    #[test]
    fn request_with_non_string_text_fails() {
        let parsed: Result<AnalyzeRequest, _> = serde_json::from_str(r#"{"text": 42}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn sentiment_serializes_label_and_score() {
        let sentiment = Sentiment {
            label: "4 stars".to_string(),
            score: 0.5,
        };
        let value = serde_json::to_value(&sentiment).expect("serialize");
        assert_eq!(value, serde_json::json!({ "label": "4 stars", "score": 0.5 }));
    }

    #[test]
    fn confidence_uses_one_decimal() {
        let sentiment = Sentiment {
            label: "5 stars".to_string(),
            score: 0.87654,
        };
        assert_eq!(sentiment.confidence_percent(), "87.7%");
    }

    #[test]
    fn counter_warns_past_display_limit() {
        assert_eq!(char_counter("abc"), "3 / 2000 characters");
        let long = "x".repeat(DISPLAY_CHAR_LIMIT + 1);
        assert!(char_counter(&long).ends_with("(Text will be truncated)"));
    }
}
