//! HTTP route definitions and handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::de::Error as _;
use serde::Serialize;
use serde_json::Value;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use produce_domain::{validate_code, Produce};
use produce_server::handlers::batch::{BatchStatus, RejectedProduce};
use produce_storage::{Outcome, ProduceStore};

use super::state::AppState;

/// Default request body size limit (1MB).
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Decodes the body of `POST /produce`: one record object or a list of
/// record objects.
///
/// Records must be JSON objects. Serde would otherwise also accept the
/// fields of `Produce` as a positional array.
fn decode_records(body: &[u8]) -> Result<Vec<Produce>, serde_json::Error> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => items.into_iter().map(decode_record).collect(),
        other => decode_record(other).map(|produce| vec![produce]),
    }
}

fn decode_record(value: Value) -> Result<Produce, serde_json::Error> {
    match value {
        Value::Object(fields) => serde_json::from_value(Value::Object(fields)),
        _ => Err(serde_json::Error::custom("expected a produce object")),
    }
}

/// One rejected record and its error messages.
#[derive(Debug, Serialize)]
pub struct ErrorProduce {
    #[serde(rename = "Produce", skip_serializing_if = "Option::is_none")]
    pub produce: Option<Produce>,
    #[serde(rename = "Errors")]
    pub errors: Vec<String>,
}

impl From<RejectedProduce> for ErrorProduce {
    fn from(rejected: RejectedProduce) -> Self {
        Self {
            produce: Some(rejected.produce),
            errors: rejected.errors,
        }
    }
}

/// Response body for `POST /produce`.
#[derive(Debug, Default, Serialize)]
pub struct AddResponse {
    #[serde(rename = "Produce", skip_serializing_if = "Vec::is_empty")]
    pub produce: Vec<Produce>,
    #[serde(rename = "Rejected Produce", skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<ErrorProduce>,
}

/// Response body for the fetch endpoints.
#[derive(Debug, Default, Serialize)]
pub struct FetchResponse {
    #[serde(rename = "Error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "Produce", skip_serializing_if = "Option::is_none")]
    pub produce: Option<Vec<Produce>>,
}

impl FetchResponse {
    fn records(produce: Vec<Produce>) -> Self {
        Self {
            error: None,
            produce: Some(produce),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            produce: None,
        }
    }
}

/// Response body for `DELETE /produce/{produce_code}`.
#[derive(Debug, Default, Serialize)]
pub struct DeleteResponse {
    #[serde(rename = "Msg", skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(rename = "Error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

const BAD_PRODUCE_CODE: &str = "bad produce code";
const PRODUCE_NOT_FOUND: &str = "produce not found";
const INTERNAL_ERROR: &str = "internal error detected";

/// Maps a batch classification to its HTTP status.
///
/// - `Complete` → 200 OK
/// - `Partial` → 206 Partial Content
/// - `Invalid` → 400 Bad Request (the store was never called)
pub fn batch_status_code(status: BatchStatus) -> StatusCode {
    match status {
        BatchStatus::Complete => StatusCode::OK,
        BatchStatus::Partial => StatusCode::PARTIAL_CONTENT,
        BatchStatus::Invalid => StatusCode::BAD_REQUEST,
    }
}

fn api_routes<S: ProduceStore>() -> Router<Arc<AppState<S>>> {
    Router::new()
        .route("/produce", get(fetch_produce::<S>).post(add_produce::<S>))
        .route(
            "/produce/:produce_code",
            get(fetch_produce_by_code::<S>).delete(delete_produce::<S>),
        )
}

/// Creates the HTTP router with all produce endpoints.
///
/// Applies the default body size limit (1MB) to protect against oversized payloads.
pub fn create_router<S: ProduceStore>(state: AppState<S>) -> Router {
    create_router_with_body_limit(state, DEFAULT_BODY_LIMIT)
}

/// Creates the HTTP router with a custom body size limit.
///
/// # Arguments
///
/// * `state` - Application state with storage backend
/// * `body_limit` - Maximum request body size in bytes
pub fn create_router_with_body_limit<S: ProduceStore>(
    state: AppState<S>,
    body_limit: usize,
) -> Router {
    let shared_state = Arc::new(state);
    api_routes::<S>()
        .route("/health", get(health_check))
        .with_state(shared_state)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// `POST /produce`
///
/// The body is decoded here rather than with the `Json` extractor so that
/// both a single object and a list are accepted, and so that decode failures
/// use the same response shape as record rejections.
async fn add_produce<S: ProduceStore>(
    State(state): State<Arc<AppState<S>>>,
    body: Bytes,
) -> Response {
    let records = match decode_records(&body) {
        Ok(records) => records,
        Err(e) => {
            warn!(error = %e, "failed to decode add produce request body");
            let response = AddResponse {
                produce: Vec::new(),
                rejected: vec![ErrorProduce {
                    produce: None,
                    errors: vec!["failed to decode request body".to_string()],
                }],
            };
            return (StatusCode::BAD_REQUEST, Json(response)).into_response();
        }
    };

    let result = state.handler.batch_add(records).await;
    let status = batch_status_code(result.status());

    let response = AddResponse {
        produce: result.accepted,
        rejected: result.rejected.into_iter().map(ErrorProduce::from).collect(),
    };

    (status, Json(response)).into_response()
}

/// `GET /produce`
async fn fetch_produce<S: ProduceStore>(State(state): State<Arc<AppState<S>>>) -> Response {
    let result = state.handler.fetch_all().await;

    if result.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    if !result.rejected.is_empty() {
        error!(failures = result.rejected.len(), "fetch all produce reported failures");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(FetchResponse::error(INTERNAL_ERROR)),
        )
            .into_response();
    }

    (StatusCode::OK, Json(FetchResponse::records(result.accepted))).into_response()
}

/// `GET /produce/{produce_code}`
async fn fetch_produce_by_code<S: ProduceStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(produce_code): Path<String>,
) -> Response {
    if !validate_code(&produce_code) {
        debug!(%produce_code, "rejected malformed produce code");
        return (
            StatusCode::BAD_REQUEST,
            Json(FetchResponse::error(BAD_PRODUCE_CODE)),
        )
            .into_response();
    }

    let outcome = state.handler.fetch_one(&produce_code).await;
    match SingleKeyResult::of(&outcome) {
        SingleKeyResult::Found => {
            (StatusCode::OK, Json(FetchResponse::records(vec![outcome.produce]))).into_response()
        }
        SingleKeyResult::Missing => (
            StatusCode::NOT_FOUND,
            Json(FetchResponse::error(PRODUCE_NOT_FOUND)),
        )
            .into_response(),
        SingleKeyResult::Failed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(FetchResponse::error(INTERNAL_ERROR)),
        )
            .into_response(),
    }
}

/// `DELETE /produce/{produce_code}`
async fn delete_produce<S: ProduceStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(produce_code): Path<String>,
) -> Response {
    if !validate_code(&produce_code) {
        debug!(%produce_code, "rejected malformed produce code");
        let response = DeleteResponse {
            msg: None,
            error: Some(BAD_PRODUCE_CODE.to_string()),
        };
        return (StatusCode::BAD_REQUEST, Json(response)).into_response();
    }

    let outcome = state.handler.delete_one(&produce_code).await;
    let (status, response) = match SingleKeyResult::of(&outcome) {
        SingleKeyResult::Found => (
            StatusCode::OK,
            DeleteResponse {
                msg: Some(format!("produce {} deleted", outcome.produce.code)),
                error: None,
            },
        ),
        SingleKeyResult::Missing => (
            StatusCode::NOT_FOUND,
            DeleteResponse {
                msg: None,
                error: Some(PRODUCE_NOT_FOUND.to_string()),
            },
        ),
        SingleKeyResult::Failed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            DeleteResponse {
                msg: None,
                error: Some(INTERNAL_ERROR.to_string()),
            },
        ),
    };

    (status, Json(response)).into_response()
}

/// Classification of a fetch-one or delete-one outcome.
enum SingleKeyResult {
    Found,
    Missing,
    Failed,
}

impl SingleKeyResult {
    fn of(outcome: &Outcome) -> Self {
        if outcome.is_success() {
            SingleKeyResult::Found
        } else if outcome.is_not_found() {
            SingleKeyResult::Missing
        } else {
            error!(error = ?outcome.error, "single-key operation failed");
            SingleKeyResult::Failed
        }
    }
}
