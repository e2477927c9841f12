//! Presentation buckets for star-rating labels.
//!
//! The hosted model answers with labels such as `"1 star"` or `"5 stars"`.
//! Everything here hinges on the leading digit; a model whose labels do not
//! start with one maps to [`Tone::Unknown`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentIcon {
    ThumbsUp,
    ThumbsDown,
}

/// Star rating encoded in the first character of `label`.
pub fn star_rating(label: &str) -> Option<u8> {
    label
        .chars()
        .next()
        .and_then(|ch| ch.to_digit(10))
        .map(|digit| digit as u8)
}

impl Tone {
    pub fn from_label(label: &str) -> Self {
        match star_rating(label) {
            Some(rating) if rating >= 4 => Tone::Positive,
            Some(rating) if rating >= 3 => Tone::Neutral,
            Some(_) => Tone::Negative,
            None => Tone::Unknown,
        }
    }

    pub fn color_class(self) -> &'static str {
        match self {
            Tone::Positive => "bg-green-100 text-green-800",
            Tone::Neutral => "bg-yellow-100 text-yellow-800",
            Tone::Negative => "bg-red-100 text-red-800",
            Tone::Unknown => "bg-gray-100",
        }
    }

    /// Neutral ratings still get a thumbs up.
    pub fn icon(self) -> Option<SentimentIcon> {
        match self {
            Tone::Positive | Tone::Neutral => Some(SentimentIcon::ThumbsUp),
            Tone::Negative => Some(SentimentIcon::ThumbsDown),
            Tone::Unknown => None,
        }
    }
}
