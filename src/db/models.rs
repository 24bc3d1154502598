use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of a recent block as shown in the index page table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct IndexPageBlock {
    pub height: i64,
    pub state_hash: String,
    pub creator: String,
    pub transaction_count: i64,
    pub ts: DateTime<Utc>,
}

/// One row of the `statistics` time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Statistic {
    pub ts: DateTime<Utc>,
    pub indicator: String,
    pub value: f64,
}
