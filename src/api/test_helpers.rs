use anyhow::Result;
use async_trait::async_trait;
use axum::response::Response;
use chrono::{DateTime, Duration, Utc};
use dotenv::from_filename;
use sqlx::PgPool;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::db::models::{IndexPageBlock, Statistic};
use crate::db::StatisticsStore;
use crate::services::{IndexDataService, IndexPageData};
use crate::state::AppState;

pub async fn setup_test_db() -> Result<PgPool> {
    // Load test environment variables
    from_filename(".env.test").ok();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set in .env.test"))?;

    let pool = PgPool::connect(&database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;

    // Clean up any existing data
    cleanup_test_db(&pool).await?;

    // Initialize schema
    crate::db::schema::initialize_database(&pool).await?;

    Ok(pool)
}

pub async fn cleanup_test_db(pool: &PgPool) -> Result<()> {
    sqlx::query("DROP TABLE IF EXISTS statistics CASCADE")
        .execute(pool)
        .await?;

    sqlx::query("DROP TABLE IF EXISTS blocks CASCADE")
        .execute(pool)
        .await?;

    Ok(())
}

/// Always returns the same snapshot.
pub struct StaticIndexData(pub IndexPageData);

impl IndexDataService for StaticIndexData {
    fn latest_index_page_data(&self) -> IndexPageData {
        self.0.clone()
    }
}

/// Returns fixed rows and counts how often it was asked.
#[derive(Default)]
pub struct FixedStatistics {
    pub rows: Vec<Statistic>,
    pub calls: AtomicUsize,
}

impl FixedStatistics {
    pub fn new(rows: Vec<Statistic>) -> Self {
        Self {
            rows,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatisticsStore for FixedStatistics {
    async fn positive_statistics(&self) -> Result<Vec<Statistic>, sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.clone())
    }
}

pub struct FailingStatistics;

#[async_trait]
impl StatisticsStore for FailingStatistics {
    async fn positive_statistics(&self) -> Result<Vec<Statistic>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

pub fn test_state(
    index_data: Arc<dyn IndexDataService>,
    statistics: Arc<dyn StatisticsStore>,
) -> AppState {
    AppState::new(index_data, statistics)
}

pub fn block_at(height: i64, ts: DateTime<Utc>) -> IndexPageBlock {
    IndexPageBlock {
        height,
        state_hash: format!("3NKstatehash{:06}", height),
        creator: "B62qjsV6WQwTeEWrNrRRBP6VaaLvQhwWTnFi4WP4LQjGvpfZEumXzxb".to_string(),
        transaction_count: height % 5,
        ts,
    }
}

/// Snapshot whose newest block is `age` old.
pub fn snapshot_with_newest_age(age: Duration) -> IndexPageData {
    let newest = Utc::now() - age;
    IndexPageData::from_blocks(vec![
        block_at(1002, newest),
        block_at(1001, newest - Duration::minutes(3)),
        block_at(1000, newest - Duration::minutes(6)),
    ])
}

pub async fn read_body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
