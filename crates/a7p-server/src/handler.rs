use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use a7p_sdk::{ProfileService, SdkResult};

use crate::error::{ServerError, ServerResult};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ProfileService>,
}

impl AppState {
    pub fn new(service: ProfileService) -> Self {
        Self { service: Arc::new(service) }
    }
}

/// `?filename=` query of the `/files` endpoints. A missing parameter is
/// treated as an empty name and fails the filename policy.
#[derive(Debug, Deserialize)]
pub struct FileQuery {
    pub filename: Option<String>,
}

impl FileQuery {
    fn into_name(self) -> String {
        self.filename.unwrap_or_default()
    }
}

/// Body of `PUT /files`.
#[derive(Debug, Deserialize)]
pub struct PutFileRequest {
    pub content: Value,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Run a service call on the blocking pool; every call does file I/O.
async fn run_blocking<T, F>(state: &AppState, f: F) -> ServerResult<T>
where
    F: FnOnce(&ProfileService) -> SdkResult<T> + Send + 'static,
    T: Send + 'static,
{
    let service = Arc::clone(&state.service);
    tokio::task::spawn_blocking(move || f(&service))
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))?
        .map_err(ServerError::from)
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// `GET /filelist`
pub async fn list_handler(State(state): State<AppState>) -> ServerResult<Json<Vec<String>>> {
    let names = run_blocking(&state, |svc| svc.list()).await?;
    Ok(Json(names))
}

/// `GET /files?filename=NAME`
pub async fn get_file_handler(
    State(state): State<AppState>,
    Query(query): Query<FileQuery>,
) -> ServerResult<impl IntoResponse> {
    let name = query.into_name();
    let text = run_blocking(&state, move |svc| svc.load(&name)).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], text))
}

/// `PUT /files?filename=NAME` with `{"content": <profile document>}`.
pub async fn put_file_handler(
    State(state): State<AppState>,
    Query(query): Query<FileQuery>,
    body: Bytes,
) -> ServerResult<&'static str> {
    let name = query.into_name();
    let request: PutFileRequest =
        serde_json::from_slice(&body).map_err(|e| ServerError::BadRequest(e.to_string()))?;
    run_blocking(&state, move |svc| svc.store_value(&name, request.content)).await?;
    Ok("OK")
}

/// `DELETE /files?filename=NAME`
pub async fn delete_file_handler(
    State(state): State<AppState>,
    Query(query): Query<FileQuery>,
) -> ServerResult<&'static str> {
    let name = query.into_name();
    run_blocking(&state, move |svc| svc.delete(&name)).await?;
    Ok("OK")
}

pub async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_defaults() {
        let h = HealthResponse::default();
        assert_eq!(h.status, "ok");
        assert_eq!(h.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn missing_filename_is_empty() {
        let q = FileQuery { filename: None };
        assert_eq!(q.into_name(), "");
    }

    #[test]
    fn put_request_requires_content() {
        assert!(serde_json::from_str::<PutFileRequest>(r#"{"content": {}}"#).is_ok());
        assert!(serde_json::from_str::<PutFileRequest>(r#"{"profile": {}}"#).is_err());
    }
}
