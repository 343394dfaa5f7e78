pub mod error;
pub mod place_store;
pub mod seed_service;

// Re-export commonly used items
pub use error::{SeedError, StoreError};
pub use place_store::{sort_by_rating, PlaceStore};
pub use seed_service::{build_place_store, load_places_from_file, sample_places, sample_regions};

/// Returns the current UTC timestamp as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
