use std::sync::Arc;

use crate::models::region::Region;
use crate::services::PlaceStore;

#[derive(Clone)]
pub struct AppState {
    /// Shared handle; clones see the same places.
    pub places: PlaceStore,
    pub regions: Arc<Vec<Region>>,
    pub public_base_url: String,
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl AppState {
    pub fn new(places: PlaceStore, regions: Vec<Region>) -> Self {
        Self {
            places,
            regions: Arc::new(regions),
            public_base_url: crate::config::get_public_base_url(),
            default_page_size: crate::config::get_default_page_size(),
            max_page_size: crate::config::get_max_page_size(),
        }
    }

    /// Clamp a requested page size to `1..=max_page_size`, falling back to the default.
    pub fn page_size(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size.max(1))
    }
}
