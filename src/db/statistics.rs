use async_trait::async_trait;
use sqlx::PgPool;

use super::models::Statistic;

/// Read access to the `statistics` time series.
#[async_trait]
pub trait StatisticsStore: Send + Sync {
    /// All rows with a positive value, ordered by timestamp then indicator.
    async fn positive_statistics(&self) -> Result<Vec<Statistic>, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgStatisticsStore {
    pool: PgPool,
}

impl PgStatisticsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Chart rows: only positive values, oldest first, indicators alphabetical
/// within one timestamp.
pub const POSITIVE_STATISTICS_QUERY: &str = r#"
    SELECT ts, indicator, value
    FROM statistics
    WHERE value > 0
    ORDER BY ts, indicator
"#;

#[async_trait]
impl StatisticsStore for PgStatisticsStore {
    async fn positive_statistics(&self) -> Result<Vec<Statistic>, sqlx::Error> {
        sqlx::query_as::<_, Statistic>(POSITIVE_STATISTICS_QUERY)
            .fetch_all(&self.pool)
            .await
    }
}
