pub mod detail_store;
pub mod filter_store;
pub mod generation;
pub mod genre_catalog;
pub mod listing_store;
pub mod pagination;
pub mod preferences;
pub mod search_store;

#[cfg(test)]
pub(crate) mod test_support;

pub use detail_store::{DetailState, DetailStore};
pub use filter_store::FilterStore;
pub use generation::{RequestTicket, RequestTracker};
pub use genre_catalog::GenreCatalog;
pub use listing_store::{ListingKind, ListingState, ListingStore};
pub use pagination::{compute_window, PageItem, PageWindow, DEFAULT_MAX_VISIBLE};
pub use preferences::{
    JsonFilePreferenceStorage, MemoryPreferenceStorage, PreferenceError, PreferenceStorage,
    Preferences, Theme,
};
pub use search_store::{SearchState, SearchStore};
