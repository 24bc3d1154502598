use anyhow::{Result, anyhow};

use super::Settings;

pub fn validate_database_settings(settings: &Settings) -> Result<()> {
    if settings.database.max_connections < settings.database.min_connections {
        return Err(anyhow!(
            "max_connections ({}) must be greater than min_connections ({})",
            settings.database.max_connections,
            settings.database.min_connections
        ));
    }

    Ok(())
}

pub fn validate_index_settings(settings: &Settings) -> Result<()> {
    if settings.index.refresh_interval_seconds == 0 {
        return Err(anyhow!("index.refresh_interval_seconds must be greater than 0"));
    }

    if !(1..=1000).contains(&settings.index.latest_blocks_limit) {
        return Err(anyhow!(
            "index.latest_blocks_limit ({}) must be between 1 and 1000",
            settings.index.latest_blocks_limit
        ));
    }

    Ok(())
}
