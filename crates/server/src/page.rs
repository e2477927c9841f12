use axum::response::Html;

const INDEX_HTML: &str = include_str!("../assets/index.html");

pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::{ANALYZE_PATH, CLIENT_FAILURE_MESSAGE, DISPLAY_CHAR_LIMIT};

    #[tokio::test]
    async fn page_posts_to_analyze_route() {
        let Html(body) = index().await;
        assert!(body.contains(ANALYZE_PATH));
        assert!(body.contains(CLIENT_FAILURE_MESSAGE));
        assert!(body.contains(&DISPLAY_CHAR_LIMIT.to_string()));
    }

    #[tokio::test]
    async fn page_carries_tone_classes() {
        let Html(body) = index().await;
        for tone in [
            protocol::Tone::Positive,
            protocol::Tone::Neutral,
            protocol::Tone::Negative,
            protocol::Tone::Unknown,
        ] {
            assert!(body.contains(tone.color_class()), "{tone:?}");
        }
    }
}
