use sqlx::PgPool;

use super::models::IndexPageBlock;

/// Newest `limit` blocks, highest first.
pub async fn fetch_latest_blocks(pool: &PgPool, limit: i64) -> Result<Vec<IndexPageBlock>, sqlx::Error> {
    sqlx::query_as::<_, IndexPageBlock>(
        r#"
        SELECT
            height,
            state_hash,
            creator,
            transaction_count,
            ts
        FROM blocks
        ORDER BY height DESC
        LIMIT $1
        "#
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
