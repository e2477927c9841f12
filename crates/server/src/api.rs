use std::sync::Arc;
use std::time::Instant;

use axum::body::{Body, Bytes};
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use inference_client::TextClassifier;
use protocol::{
    truncate_chars, AnalyzeRequest, ErrorResponse, ANALYZE_FAILED_MESSAGE, ANALYZE_PATH,
    MAX_INPUT_CHARS, TEXT_REQUIRED_MESSAGE,
};
use uuid::Uuid;

use crate::page;

#[derive(Clone)]
pub(crate) struct AppState {
    classifier: Arc<dyn TextClassifier>,
}

impl AppState {
    pub(crate) fn new(classifier: Arc<dyn TextClassifier>) -> Self {
        Self { classifier }
    }
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/health", get(health))
        .route(ANALYZE_PATH, post(analyze).layer(DefaultBodyLimit::disable()))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(log_http_request))
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn log_http_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let host = req
        .headers()
        .get("host")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let started = Instant::now();
    let response = next.run(req).await;
    tracing::info!(
        method = %method,
        uri = %uri,
        host = %host,
        status = %response.status(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "http request"
    );
    response
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

fn analyze_failed() -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, ANALYZE_FAILED_MESSAGE)
}

/// `POST /api/analyze`: classify the submitted text and relay the top prediction.
///
/// Blank text is the only failure reported as such; anything else becomes a
/// generic 500 and the cause stays in the server log.
/// The body is read as JSON whatever its content type, and without a size
/// cap; oversized text is cut down by truncation, not rejected.
pub(crate) async fn analyze(State(state): State<AppState>, body: Bytes) -> Response {
    let request_id = Uuid::new_v4();
    let request: AnalyzeRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::error!(
                event = "analyze.invalid_body",
                request_id = %request_id,
                body_len = body.len(),
                error = %err,
                "sentiment analysis error"
            );
            return analyze_failed();
        }
    };
    let Some(text) = request.non_blank_text() else {
        tracing::info!(
            event = "analyze.rejected",
            request_id = %request_id,
            "empty text"
        );
        return error_response(StatusCode::BAD_REQUEST, TEXT_REQUIRED_MESSAGE);
    };

    let truncated = truncate_chars(text, MAX_INPUT_CHARS);
    tracing::info!(
        event = "analyze.request",
        request_id = %request_id,
        model = %state.classifier.model(),
        text_len = text.chars().count(),
        forwarded_len = truncated.chars().count(),
    );

    match state.classifier.classify(truncated).await {
        Ok(predictions) => match predictions.into_iter().next() {
            Some(top) => {
                tracing::info!(
                    event = "analyze.completed",
                    request_id = %request_id,
                    label = %top.label,
                    score = top.score,
                );
                Json(top).into_response()
            }
            None => {
                tracing::error!(
                    event = "analyze.empty_result",
                    request_id = %request_id,
                    "sentiment analysis error: no predictions"
                );
                analyze_failed()
            }
        },
        Err(err) => {
            tracing::error!(
                event = "analyze.failed",
                request_id = %request_id,
                error = %format!("{err:#}"),
                "sentiment analysis error"
            );
            analyze_failed()
        }
    }
}
