use std::sync::Arc;

use crate::db::StatisticsStore;
use crate::services::IndexDataService;
use crate::version::VERSION;

/// Collaborators shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub index_data: Arc<dyn IndexDataService>,
    pub statistics: Arc<dyn StatisticsStore>,
    pub version: &'static str,
}

impl AppState {
    pub fn new(index_data: Arc<dyn IndexDataService>, statistics: Arc<dyn StatisticsStore>) -> Self {
        Self {
            index_data,
            statistics,
            version: VERSION,
        }
    }
}
