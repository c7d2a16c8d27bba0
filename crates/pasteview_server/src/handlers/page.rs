//! Page bootstrap settings handler.

use crate::AppState;
use axum::{extract::State, Json};
use pasteview_core::constants::LINE_FRAGMENT_PREFIX;
use serde::Serialize;

/// Settings the page glue needs before wiring the gutter and controls.
#[derive(Debug, Serialize)]
pub struct PageConfig {
    pub narrow_layout_query: String,
    pub line_fragment_prefix: &'static str,
}

/// `GET /api/page-config`
pub async fn page_config(State(state): State<AppState>) -> Json<PageConfig> {
    Json(PageConfig {
        narrow_layout_query: state.config.narrow_layout_query.clone(),
        line_fragment_prefix: LINE_FRAGMENT_PREFIX,
    })
}
