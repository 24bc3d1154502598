mod settings;
mod validation;

pub use settings::{ApplicationSettings, DatabaseSettings, IndexSettings, Settings};
pub use validation::{validate_database_settings, validate_index_settings};
