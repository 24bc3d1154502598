use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

use crate::db::models::{IndexPageBlock, Statistic};

/// Snapshot of everything the index page shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexPageData {
    pub blocks: Vec<IndexPageBlock>,
    pub latest_height: i64,
    /// Mean seconds between consecutive blocks in `blocks`.
    pub average_block_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<Vec<Statistic>>,
}

impl IndexPageData {
    /// Builds a snapshot from blocks ordered newest first.
    pub fn from_blocks(blocks: Vec<IndexPageBlock>) -> Self {
        let latest_height = blocks.first().map(|b| b.height).unwrap_or(0);

        let average_block_time = match (blocks.first(), blocks.last()) {
            (Some(newest), Some(oldest)) if blocks.len() > 1 => {
                let span = (newest.ts - oldest.ts).num_milliseconds() as f64 / 1000.0;
                span / (blocks.len() - 1) as f64
            }
            _ => 0.0,
        };

        Self {
            blocks,
            latest_height,
            average_block_time,
            chart_data: None,
        }
    }
}

/// Source of index page snapshots.
///
/// Every call hands out an owned snapshot, so callers may modify it freely.
pub trait IndexDataService: Send + Sync {
    fn latest_index_page_data(&self) -> IndexPageData;
}

/// In-memory snapshot kept current by [`crate::services::IndexDataUpdater`].
#[derive(Default)]
pub struct IndexPageDataCache {
    snapshot: RwLock<Arc<IndexPageData>>,
}

impl IndexPageDataCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, data: IndexPageData) {
        let mut guard = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(data);
    }
}

impl IndexDataService for IndexPageDataCache {
    fn latest_index_page_data(&self) -> IndexPageData {
        let current = {
            let guard = self.snapshot.read().unwrap_or_else(|e| e.into_inner());
            Arc::clone(&*guard)
        };
        (*current).clone()
    }
}
