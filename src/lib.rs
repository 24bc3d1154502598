pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod frontend;
pub mod metrics;
pub mod services;
pub mod state;
pub mod version;

pub use api::types::ApiError;
pub use app::create_app;
pub use config::Settings;
pub use db::models::{IndexPageBlock, Statistic};
pub use services::index_data::{IndexDataService, IndexPageData, IndexPageDataCache};
pub use state::AppState;
