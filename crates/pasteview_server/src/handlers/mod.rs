//! HTTP request handlers.

/// Expiration preview endpoint for the paste form.
pub mod expiration;
/// Language catalog endpoints.
pub mod languages;
/// Page bootstrap settings for the client glue.
pub mod page;

use crate::error::HttpError;
use pasteview_core::AppError;

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpError {
    HttpError(AppError::NotFound)
}
