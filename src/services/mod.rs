pub mod index_data;
pub mod updater;

pub use index_data::{IndexDataService, IndexPageData, IndexPageDataCache};
pub use updater::IndexDataUpdater;
