//! Language catalog HTTP handlers.

use crate::{error::HttpError, AppState};
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use pasteview_core::constants::LANGUAGES_CACHE_MAX_AGE_SECS;
use pasteview_core::Language;

/// `GET /languages.json`: every group with its languages.
pub async fn list_languages(State(state): State<AppState>) -> Result<Response, HttpError> {
    let body = state.languages.to_json()?;
    let cache_control = format!("public, max-age={}", LANGUAGES_CACHE_MAX_AGE_SECS);
    let mut response = (
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response();
    if let Ok(value) = HeaderValue::from_str(&cache_control) {
        response.headers_mut().insert(header::CACHE_CONTROL, value);
    }
    Ok(response)
}

/// `GET /api/language/:name`: resolve an id or alternate id.
///
/// Unknown names resolve to the `Unknown` language rather than 404.
pub async fn get_language(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Language> {
    Json(state.languages.resolve(&name).clone())
}
