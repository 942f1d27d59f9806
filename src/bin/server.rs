//! Thin HTTP boundary for the 5S analyzer
//!
//! Exposes `POST /api/analyze-5s` accepting `{"image": "<data-url or
//! base64>"}` and returning the analysis JSON, or `{"error": "..."}` with
//! status 400 when the payload cannot be decoded. All analysis logic lives
//! in the library; this binary only unwraps the transport envelope.

use axum::extract::{DefaultBodyLimit, Request};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::{from_fn, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use base64::Engine;
use gemba_scan::analyze_image;
use serde::Deserialize;
use serde_json::json;
use std::env;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Uploads are base64-encoded camera photos; cap them well above any
/// realistic size.
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    /// Base64 image payload, with or without a `data:*;base64,` prefix
    image: String,
}

async fn analyze_handler(Json(request): Json<AnalyzeRequest>) -> Response {
    // Browsers send data URLs; the payload is whatever follows the comma.
    let encoded = match request.image.split_once(',') {
        Some((_, payload)) => payload,
        None => request.image.as_str(),
    };

    let bytes = match base64::engine::general_purpose::STANDARD.decode(encoded.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, "rejected request with invalid base64 payload");
            return error_response(StatusCode::BAD_REQUEST, &format!("invalid base64 image: {e}"));
        }
    };

    match analyze_image(&bytes) {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            warn!(error = %e, "analysis failed");
            error_response(StatusCode::BAD_REQUEST, &e.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Permissive CORS: the original service is called straight from browser
/// pages on arbitrary origins.
async fn cors_middleware(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(&mut response);
        return response;
    }
    let mut response = next.run(request).await;
    apply_cors_headers(&mut response);
    response
}

fn apply_cors_headers(response: &mut Response) {
    let headers = response.headers_mut();
    headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("POST,OPTIONS"),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("content-type"),
    );
}

fn build_router() -> Router {
    Router::new()
        .route("/api/analyze-5s", post(analyze_handler))
        .layer(from_fn(cors_middleware))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

fn env_port() -> u16 {
    env::var("GEMBA_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let bind = env::var("GEMBA_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
    let addr = format!("{}:{}", bind, env_port());

    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %addr, "failed to bind listener");
            std::process::exit(1);
        }
    };

    info!(%addr, "gemba-scan listening");
    if let Err(e) = axum::serve(listener, build_router()).await {
        error!(error = %e, "server exited with error");
        std::process::exit(1);
    }
}
