//! HTTP API
//!
//! Two placeholder endpoints plus a health check. Neither endpoint reaches
//! the video platform: info is canned and downloads are refused.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::commands::download::{request_direct_download, DOWNLOAD_REFUSAL, DOWNLOAD_SUGGESTION};
use crate::core::models::{AppError, VideoInfo};
use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/video-info/:video_id", get(video_info))
        .route("/api/download", post(download))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        timestamp: Utc::now(),
    })
}

async fn video_info(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Json<VideoInfo> {
    debug!("Video info requested for {}", video_id);
    Json(state.downloader.video_info(&video_id))
}

async fn download(payload: Option<Json<Value>>) -> Result<StatusCode, ApiError> {
    let body = payload.map(|Json(body)| body).unwrap_or(Value::Null);
    let video_id = body_field(&body, "videoId");
    let quality = body_field(&body, "quality");
    let format = body_field(&body, "format");
    debug!(
        "Download requested: video={:?} title={:?} quality={} format={}",
        video_id,
        body_field(&body, "title"),
        quality.as_deref().unwrap_or("high"),
        format.as_deref().unwrap_or("mp4"),
    );

    request_direct_download(video_id.as_deref())?;
    Ok(StatusCode::NO_CONTENT)
}

/// Text of a request-body field, or `None` when it is absent or falsy
/// (`null`, `false`, `0`, `""`).
fn body_field(body: &Value, name: &str) -> Option<String> {
    match body.get(name)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("download not supported")]
    NotImplemented,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::MissingRequiredField("videoId") => {
                ApiError::BadRequest("Video ID is required".to_string())
            }
            AppError::MissingRequiredField(field) => {
                ApiError::BadRequest(format!("{} is required", field))
            }
            AppError::NotAVideoReference(input) => {
                ApiError::BadRequest(format!("Not a video reference: {}", input))
            }
            AppError::DownloadNotSupported => ApiError::NotImplemented,
            other => ApiError::Internal(other.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message,
                    suggestion: None,
                },
            ),
            ApiError::NotImplemented => (
                StatusCode::NOT_IMPLEMENTED,
                ErrorBody {
                    error: DOWNLOAD_REFUSAL.to_string(),
                    suggestion: Some(DOWNLOAD_SUGGESTION.to_string()),
                },
            ),
            ApiError::Internal(err) => {
                error!("Internal server error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Internal server error".to_string(),
                        suggestion: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
