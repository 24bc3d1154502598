use anyhow::Result;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::{interval_at, Interval, MissedTickBehavior};
use tracing::{debug, error, info};

use super::index_data::{IndexPageData, IndexPageDataCache};
use crate::db::fetch_latest_blocks;
use crate::metrics;

/// Periodically rebuilds the index page snapshot from the database.
pub struct IndexDataUpdater {
    pool: PgPool,
    cache: Arc<IndexPageDataCache>,
    refresh_interval: Duration,
    latest_blocks_limit: i64,
}

impl IndexDataUpdater {
    pub fn new(
        pool: PgPool,
        cache: Arc<IndexPageDataCache>,
        refresh_interval: Duration,
        latest_blocks_limit: i64,
    ) -> Self {
        info!(
            "Initializing IndexDataUpdater with refresh interval: {:?}, latest blocks limit: {}",
            refresh_interval, latest_blocks_limit
        );

        Self {
            pool,
            cache,
            refresh_interval,
            latest_blocks_limit,
        }
    }

    /// Fetches the latest blocks once and swaps the snapshot in.
    /// The previous snapshot is kept when the query fails.
    pub async fn refresh(&self) -> Result<()> {
        let started = Instant::now();

        let blocks = fetch_latest_blocks(&self.pool, self.latest_blocks_limit).await?;
        let data = IndexPageData::from_blocks(blocks);
        let latest_height = data.latest_height;
        let block_count = data.blocks.len();

        self.cache.replace(data);

        metrics::record_index_data_refresh(started.elapsed(), latest_height);
        debug!(
            "Index page data refreshed: {} blocks, latest height {}",
            block_count, latest_height
        );

        Ok(())
    }

    pub async fn run(self) {
        info!("Starting index page data updater...");

        let mut ticker = refresh_ticker(self.refresh_interval);

        loop {
            ticker.tick().await;

            if let Err(e) = self.refresh().await {
                metrics::record_index_data_refresh_failure();
                error!("Error refreshing index page data: {:?}", e);
            }
        }
    }
}

/// Ticks every `period`, starting one period from now; the caller primes the
/// snapshot before the loop starts.
fn refresh_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(tokio::time::Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
