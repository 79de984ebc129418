use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_color::ColorError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Plot not found: {0}")]
    PlotNotFound(String),

    #[error("Not found")]
    NotFound,

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}

impl From<ColorError> for ApiError {
    fn from(e: ColorError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unknown function: {0:?}")]
    UnknownFunction(String),

    #[error("Invalid range for {axis}: [{min}, {max}]")]
    InvalidRange {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Color mapping error: {0}")]
    Color(#[from] ColorError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Render task failed: {0}")]
    Task(String),
}

impl RenderError {
    /// True when the caller's input, not the server, is at fault.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            RenderError::UnknownFunction(_) | RenderError::InvalidRange { .. } | RenderError::Color(_)
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::PlotNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Render(e) if e.is_usage_error() => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Render(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
