use sqlx::PgPool;

pub async fn initialize_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    // Execute each statement separately
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS blocks (
            height BIGINT PRIMARY KEY,
            state_hash TEXT NOT NULL,
            creator TEXT NOT NULL,
            transaction_count BIGINT NOT NULL DEFAULT 0,
            ts TIMESTAMPTZ NOT NULL
        )"
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS statistics (
            ts TIMESTAMPTZ NOT NULL,
            indicator TEXT NOT NULL,
            value DOUBLE PRECISION NOT NULL,
            PRIMARY KEY (ts, indicator)
        )"
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_blocks_ts
            ON blocks(ts)"
    )
    .execute(pool)
    .await?;

    Ok(())
}
