use axum::Router;

use crate::{api, frontend, state::AppState};

/// Page, data and asset routes bound to `state`.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(frontend::create_frontend_router())
        .merge(frontend::static_files::create_static_router())
        .merge(api::create_router())
        .with_state(state)
}
