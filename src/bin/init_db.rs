use anyhow::Result;
use coda_explorer::config::Settings;
use coda_explorer::db::schema::initialize_database;
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let settings = Settings::new("config")?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&settings.database.connection_string())
        .await?;

    initialize_database(&pool).await?;
    println!("Database initialized successfully");

    Ok(())
}
