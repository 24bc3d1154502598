pub mod blocks;
pub mod models;
pub mod schema;
pub mod statistics;


pub use blocks::fetch_latest_blocks;
pub use statistics::{PgStatisticsStore, StatisticsStore};
