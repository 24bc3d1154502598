use chrono::{DateTime, Duration, Utc};

use crate::db::models::IndexPageBlock;
use crate::services::IndexPageData;

/// Age of the newest block after which the page warns that it is still syncing.
pub const SYNCING_THRESHOLD_HOURS: i64 = 12;

pub const INDEX_TITLE: &str = "coda explorer";

#[derive(Debug, Clone, Default)]
pub struct Meta {
    pub title: String,
    pub description: String,
    pub path: String,
}

/// Everything the layout and a page template need for one response.
#[derive(Debug, Clone)]
pub struct PageData {
    pub meta: Meta,
    pub show_syncing_message: bool,
    /// Navigation entry highlighted in the layout.
    pub active: &'static str,
    pub data: IndexPageData,
    pub version: &'static str,
}

impl PageData {
    pub fn index(data: IndexPageData, now: DateTime<Utc>, version: &'static str) -> Self {
        Self {
            meta: Meta {
                title: INDEX_TITLE.to_string(),
                description: String::new(),
                path: String::new(),
            },
            show_syncing_message: show_syncing_message(&data.blocks, now),
            active: "index",
            data,
            version,
        }
    }
}

/// True when the newest block is strictly older than the threshold, or when
/// no block has been seen yet.
pub fn show_syncing_message(blocks: &[IndexPageBlock], now: DateTime<Utc>) -> bool {
    match blocks.first() {
        Some(newest) => newest.ts < now - Duration::hours(SYNCING_THRESHOLD_HOURS),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn block_at(ts: DateTime<Utc>) -> IndexPageBlock {
        IndexPageBlock {
            height: 100,
            state_hash: "3NKstate".to_string(),
            creator: "B62qcreator".to_string(),
            transaction_count: 0,
            ts,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_recent_block_is_not_syncing() {
        let blocks = vec![block_at(now() - Duration::minutes(3))];
        assert!(!show_syncing_message(&blocks, now()));
    }

    #[test]
    fn test_stale_block_is_syncing() {
        let blocks = vec![block_at(now() - Duration::hours(13))];
        assert!(show_syncing_message(&blocks, now()));
    }

    #[test]
    fn test_threshold_boundary() {
        let threshold = now() - Duration::hours(SYNCING_THRESHOLD_HOURS);

        assert!(!show_syncing_message(&[block_at(threshold)], now()));
        assert!(show_syncing_message(&[block_at(threshold - Duration::seconds(1))], now()));
        assert!(!show_syncing_message(&[block_at(threshold + Duration::seconds(1))], now()));
    }

    #[test]
    fn test_only_first_block_counts() {
        let blocks = vec![
            block_at(now() - Duration::minutes(1)),
            block_at(now() - Duration::days(30)),
        ];
        assert!(!show_syncing_message(&blocks, now()));
    }

    #[test]
    fn test_empty_snapshot_is_syncing() {
        assert!(show_syncing_message(&[], now()));
    }

    #[test]
    fn test_index_envelope() {
        let data = IndexPageData::from_blocks(vec![block_at(now())]);
        let page = PageData::index(data.clone(), now(), "1.2.3");

        assert_eq!(page.meta.title, "coda explorer");
        assert!(page.meta.description.is_empty());
        assert!(page.meta.path.is_empty());
        assert_eq!(page.active, "index");
        assert_eq!(page.version, "1.2.3");
        assert!(!page.show_syncing_message);
        assert_eq!(page.data, data);
    }
}
