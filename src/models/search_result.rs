use serde::Serialize;

use crate::models::filter::PlaceFilter;
use crate::models::place::Place;

/// One page of search results plus the filter that produced it.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub items: Vec<Place>,
    /// Match count before pagination.
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub has_more: bool,
    pub filter: PlaceFilter,
}

impl SearchResult {
    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }
}
