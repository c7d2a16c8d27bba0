//! HTTP error mapping for API handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pasteview_core::AppError;
use serde_json::json;

/// Handler error rendered as a JSON `{"error": ...}` body.
#[derive(Debug)]
pub struct HttpError(pub AppError);

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self.0 {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            other => {
                tracing::error!("Internal error: {:?}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::HttpError;
    use axum::{http::StatusCode, response::IntoResponse};
    use pasteview_core::AppError;

    #[test]
    fn maps_domain_errors_to_status_codes() {
        let cases = [
            (AppError::NotFound, StatusCode::NOT_FOUND),
            (AppError::BadRequest("nope".into()), StatusCode::BAD_REQUEST),
            (
                AppError::Internal("catalog".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Io(std::io::Error::other("disk")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            let response = HttpError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
