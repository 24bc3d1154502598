use axum::{
    routing::get,
    Router,
};

use super::handlers;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/index/data", get(handlers::index_page_data))
}
