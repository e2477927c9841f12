use crossterm::style::{Color, Stylize};
use protocol::{Sentiment, SentimentIcon, Tone};

pub(crate) fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => Color::Green,
        Tone::Neutral => Color::Yellow,
        Tone::Negative => Color::Red,
        Tone::Unknown => Color::Grey,
    }
}

fn icon_glyph(icon: Option<SentimentIcon>) -> &'static str {
    match icon {
        Some(SentimentIcon::ThumbsUp) => "👍",
        Some(SentimentIcon::ThumbsDown) => "👎",
        None => "",
    }
}

/// Headline and confidence line, uncolored.
pub(crate) fn result_lines(sentiment: &Sentiment) -> (String, String) {
    let icon = icon_glyph(sentiment.tone().icon());
    let headline = format!("Sentiment Score: {} {}", sentiment.label, icon);
    let confidence = format!("Confidence: {}", sentiment.confidence_percent());
    (headline.trim_end().to_string(), confidence)
}

pub(crate) fn render_result(sentiment: &Sentiment) -> String {
    let color = tone_color(sentiment.tone());
    let (headline, confidence) = result_lines(sentiment);
    format!(
        "{}\n{}",
        headline.with(color).bold(),
        confidence.with(color)
    )
}

pub(crate) fn render_error(message: &str) -> String {
    format!("{}", format!("! {message}").with(Color::Red))
}

pub(crate) fn render_warning(message: &str) -> String {
    format!("{}", message.with(Color::DarkYellow))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentiment(label: &str, score: f64) -> Sentiment {
        Sentiment {
            label: label.to_string(),
            score,
        }
    }

    #[test]
    fn five_stars_renders_green_thumbs_up() {
        let result = sentiment("5 stars", 0.912);
        assert_eq!(tone_color(result.tone()), Color::Green);
        let (headline, confidence) = result_lines(&result);
        assert_eq!(headline, "Sentiment Score: 5 stars 👍");
        assert_eq!(confidence, "Confidence: 91.2%");
    }

    #[test]
    fn one_star_renders_red_thumbs_down() {
        let result = sentiment("1 star", 0.5);
        assert_eq!(tone_color(result.tone()), Color::Red);
        let (headline, _) = result_lines(&result);
        assert!(headline.ends_with("👎"));
    }

    #[test]
    fn unknown_label_has_no_icon() {
        let result = sentiment("POSITIVE", 0.99);
        assert_eq!(tone_color(result.tone()), Color::Grey);
        let (headline, _) = result_lines(&result);
        assert_eq!(headline, "Sentiment Score: POSITIVE");
    }

    #[test]
    fn rendered_output_keeps_text() {
        let rendered = render_result(&sentiment("3 stars", 0.4));
        assert!(rendered.contains("3 stars"));
        assert!(rendered.contains("40.0%"));
    }
}
