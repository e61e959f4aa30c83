//! HTTP routes for the header mapping service.
//!
//! One endpoint does the work: `POST /map-headers` takes a multipart CSV
//! upload, consults the oracle, and streams back the renamed and reordered
//! file. Everything else is a static upload page and a health probe.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::{error, info};

use hmap_ingest::{read_csv, write_csv};
use hmap_map::{apply_reconciliation, reconcile};
use hmap_model::TemplateSchema;
use hmap_oracle::{HeaderOracle, build_mapping_prompt};

const OUTPUT_DISPOSITION: &str = "attachment; filename=\"mapped_headers.csv\"";

#[derive(Clone)]
pub struct AppState {
    pub template: Arc<TemplateSchema>,
    pub oracle: Arc<dyn HeaderOracle>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn json_error(status: StatusCode, message: String) -> ApiError {
    (status, Json(ErrorResponse { error: message }))
}

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/map-headers", post(map_headers))
        .with_state(state)
}

/// Binds `addr` and serves the router until the process exits.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, router(state)).await
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn map_headers(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut upload: Option<Vec<u8>> = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        json_error(StatusCode::BAD_REQUEST, format!("invalid multipart body: {e}"))
    })? {
        if field.name() != Some("file") {
            continue;
        }
        if field.file_name().is_none_or(str::is_empty) {
            return Err(json_error(
                StatusCode::BAD_REQUEST,
                "Empty file".to_string(),
            ));
        }
        let bytes = field.bytes().await.map_err(|e| {
            json_error(StatusCode::BAD_REQUEST, format!("failed to read upload: {e}"))
        })?;
        upload = Some(bytes.to_vec());
        break;
    }
    let Some(bytes) = upload else {
        return Err(json_error(
            StatusCode::BAD_REQUEST,
            "No file uploaded".to_string(),
        ));
    };

    info!(bytes = bytes.len(), "received upload on /map-headers");
    let body = run_pipeline(&state, &bytes).await.map_err(|message| {
        error!(%message, "header mapping failed");
        json_error(StatusCode::INTERNAL_SERVER_ERROR, message)
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static(OUTPUT_DISPOSITION),
    );
    Ok((headers, body).into_response())
}

/// Runs the full mapping pipeline on an uploaded CSV body.
///
/// Either the whole pipeline completes or the request fails with a single
/// message; there is no partial output.
async fn run_pipeline(state: &AppState, bytes: &[u8]) -> Result<String, String> {
    let table = read_csv(bytes).map_err(|e| e.to_string())?;
    info!(headers = ?table.headers, "actual headers");

    let prompt = build_mapping_prompt(&state.template, &table.headers);
    let raw = state
        .oracle
        .propose_mapping(&prompt)
        .await
        .map_err(|e| e.to_string())?;

    let reconciliation =
        reconcile(&state.template, &table.headers, &raw).map_err(|e| e.to_string())?;
    info!(
        matched = reconciliation.matched_count(&state.template),
        columns = reconciliation.column_order.len(),
        "reconciled header mapping"
    );
    let mapped = apply_reconciliation(&reconciliation, &state.template, &table);
    write_csv(&mapped).map_err(|e| e.to_string())
}
