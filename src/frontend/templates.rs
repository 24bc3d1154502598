use askama::Template;

use super::page::PageData;

/// Landing page, rendered inside `layout.html`.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: PageData,
}

/// Helper functions available to every template.
pub mod filters {
    use chrono::{DateTime, Utc};
    use serde::Serialize;
    use std::borrow::Borrow;
    use std::fmt::Display;

    pub fn format_ts<T: Borrow<DateTime<Utc>>>(ts: T) -> askama::Result<String> {
        Ok(ts.borrow().format("%Y-%m-%d %H:%M:%S").to_string())
    }

    /// Keeps the head and tail of long hashes.
    pub fn short_hash<T: Display>(hash: T) -> askama::Result<String> {
        let hash = hash.to_string();
        let chars: Vec<char> = hash.chars().collect();
        if chars.len() <= 16 {
            return Ok(hash);
        }

        let head: String = chars[..8].iter().collect();
        let tail: String = chars[chars.len() - 6..].iter().collect();
        Ok(format!("{}…{}", head, tail))
    }

    pub fn to_json<T: Serialize>(value: T) -> askama::Result<String> {
        serde_json::to_string(&value).map_err(|e| askama::Error::Custom(Box::new(e)))
    }
}
