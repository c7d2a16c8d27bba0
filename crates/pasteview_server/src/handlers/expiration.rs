//! Expiration preview handler.

use crate::error::HttpError;
use axum::{extract::Path, Json};
use pasteview_core::controls::Expiration;

/// `GET /api/expiration/:value`: parse an `expire` form value into seconds,
/// `null` for never.
pub async fn parse_expiration(Path(value): Path<String>) -> Result<Json<Expiration>, HttpError> {
    let expiration = Expiration::parse(&value)?;
    tracing::debug!(value = %value, ?expiration, "parsed expiration");
    Ok(Json(expiration))
}
