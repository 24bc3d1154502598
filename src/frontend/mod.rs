pub mod page;
pub mod static_files;
pub mod templates;


use askama::Template;
use axum::{
    extract::State,
    http::Uri,
    response::Html,
    routing::get,
    Router,
};
use chrono::Utc;
use std::time::Instant;
use tracing::error;

use crate::{api::ApiError, metrics, state::AppState};
use page::PageData;
use templates::IndexTemplate;

pub fn create_frontend_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
}

/// Main landing page with the latest blocks and statistics charts.
pub async fn index(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Html<String>, ApiError> {
    let started = Instant::now();

    let data = state.index_data.latest_index_page_data();
    let mut page = PageData::index(data, Utc::now(), state.version);

    let stats = state.statistics.positive_statistics().await.map_err(|e| {
        error!("error retrieving statistics data for route {}: {}", uri, e);
        metrics::record_handler_failure("index");
        ApiError::from(e)
    })?;
    page.data.chart_data = Some(stats);

    let html = IndexTemplate { page }.render().map_err(|e| {
        error!("error executing template for {} route: {}", uri, e);
        metrics::record_handler_failure("index");
        ApiError::from(e)
    })?;

    metrics::record_index_page_render(started.elapsed());

    Ok(Html(html))
}
