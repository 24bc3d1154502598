use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use tracing::error;

use super::types::ApiError;
use crate::{metrics, state::AppState};

pub const INDEX_DATA_CACHE_CONTROL: &str = "public, max-age=15, s-maxage=15";

/// Latest index page snapshot as JSON, without chart data.
pub async fn index_page_data(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let data = state.index_data.latest_index_page_data();

    let body = serde_json::to_vec(&data).map_err(|e| {
        error!("error sending latest index page data: {}", e);
        metrics::record_handler_failure("index_data");
        ApiError::from(e)
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, INDEX_DATA_CACHE_CONTROL),
        ],
        body,
    ))
}
