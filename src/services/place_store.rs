use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::{Place, PlaceCategory, PlaceFilter, PlacePatch, RegionCount, SearchResult};
use crate::utils::page_window;

use super::error::StoreError;

type PlaceMap = HashMap<String, Place>;

/// Thread-safe in-memory collection of places keyed by id.
///
/// Cloning the store yields another handle onto the same map. Each call holds
/// the lock for its whole duration, so mutations never interleave.
#[derive(Clone, Debug, Default)]
pub struct PlaceStore {
    inner: Arc<Mutex<PlaceMap>>,
}

impl PlaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed records. Later records overwrite earlier ones
    /// with the same id.
    pub fn with_places<I>(places: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = Place>,
    {
        let store = Self::new();
        for place in places {
            store.add(place)?;
        }
        Ok(store)
    }

    fn lock(&self) -> Result<MutexGuard<'_, PlaceMap>, StoreError> {
        Ok(self.inner.lock()?)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.is_empty())
    }

    /// Filter, rank and paginate. `page` is 1-indexed; pages past the end
    /// return no items rather than an error.
    pub fn search(&self, filter: &PlaceFilter, page: usize, limit: usize) -> Result<SearchResult, StoreError> {
        let mut matches = self.collect(|place| filter.matches(place))?;
        sort_by_rating(&mut matches);

        let total = matches.len();
        let window = page_window(page, limit, total);
        let items = matches.drain(window.start..window.end).collect();

        Ok(SearchResult {
            items,
            total,
            page: window.page,
            limit: window.limit,
            has_more: window.has_more,
            filter: filter.clone(),
        })
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Place>, StoreError> {
        Ok(self.lock()?.get(id).cloned())
    }

    pub fn get_by_slug(&self, slug: &str) -> Result<Option<Place>, StoreError> {
        Ok(self.lock()?.values().find(|p| p.slug == slug).cloned())
    }

    /// Places in `sido`, optionally narrowed to `sigungu`, best rated first.
    pub fn get_by_region(&self, sido: &str, sigungu: Option<&str>) -> Result<Vec<Place>, StoreError> {
        let mut places = self.collect(|p| {
            p.location.sido == sido && sigungu.map_or(true, |s| p.location.sigungu == s)
        })?;
        sort_by_rating(&mut places);
        Ok(places)
    }

    pub fn get_by_category(&self, category: PlaceCategory) -> Result<Vec<Place>, StoreError> {
        let mut places = self.collect(|p| p.category == category)?;
        sort_by_rating(&mut places);
        Ok(places)
    }

    /// Featured places, best rated first, at most `limit` of them.
    pub fn get_recommended(&self, limit: usize) -> Result<Vec<Place>, StoreError> {
        let mut places = self.collect(|p| p.metadata.featured)?;
        sort_by_rating(&mut places);
        places.truncate(limit);
        Ok(places)
    }

    /// Every place, best rated first.
    pub fn all(&self) -> Result<Vec<Place>, StoreError> {
        let mut places = self.collect(|_| true)?;
        sort_by_rating(&mut places);
        Ok(places)
    }

    /// Number of places per category.
    pub fn category_counts(&self) -> Result<BTreeMap<PlaceCategory, usize>, StoreError> {
        let map = self.lock()?;
        let mut counts = BTreeMap::new();
        for place in map.values() {
            *counts.entry(place.category).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Number of places per sido, most populated first.
    pub fn region_counts(&self) -> Result<Vec<RegionCount>, StoreError> {
        let map = self.lock()?;
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for place in map.values() {
            *counts.entry(place.location.sido.as_str()).or_insert(0) += 1;
        }
        let mut out: Vec<RegionCount> = counts
            .into_iter()
            .map(|(sido, count)| RegionCount { sido: sido.to_string(), count })
            .collect();
        out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.sido.cmp(&b.sido)));
        Ok(out)
    }

    /// Insert or overwrite by id. Fails if the record is invalid or another
    /// place already owns the slug.
    pub fn add(&self, place: Place) -> Result<(), StoreError> {
        place.validate().map_err(StoreError::Invalid)?;
        let mut map = self.lock()?;
        ensure_slug_free(&map, &place.slug, &place.id)?;
        let replaced = map.insert(place.id.clone(), place);
        if let Some(old) = replaced {
            tracing::debug!(id = %old.id, "Overwrote existing place");
        }
        Ok(())
    }

    /// Shallow-merge `patch` onto the stored place and return the result.
    /// The stored record is left untouched when the merged one is invalid.
    pub fn update(&self, id: &str, patch: PlacePatch) -> Result<Place, StoreError> {
        let mut map = self.lock()?;
        let mut place = map.get(id).cloned().ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if let Some(slug) = &patch.slug {
            ensure_slug_free(&map, slug, id)?;
        }
        patch.apply_to(&mut place);
        place.validate().map_err(StoreError::Invalid)?;
        place.metadata.updated_at = crate::services::now_rfc3339();
        map.insert(id.to_string(), place.clone());
        Ok(place)
    }

    /// Remove and return the place stored under `id`.
    pub fn delete(&self, id: &str) -> Result<Place, StoreError> {
        let mut map = self.lock()?;
        map.remove(id).ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn collect<F>(&self, keep: F) -> Result<Vec<Place>, StoreError>
    where
        F: Fn(&Place) -> bool,
    {
        let map = self.lock()?;
        Ok(map.values().filter(|p| keep(p)).cloned().collect())
    }
}

fn ensure_slug_free(map: &PlaceMap, slug: &str, id: &str) -> Result<(), StoreError> {
    match map.values().find(|p| p.slug == slug && p.id != id) {
        Some(owner) => Err(StoreError::SlugConflict {
            slug: slug.to_string(),
            existing_id: owner.id.clone(),
        }),
        None => Ok(()),
    }
}

/// Highest `rating.overall` first; equal ratings fall back to id order.
pub fn sort_by_rating(places: &mut [Place]) {
    places.sort_by(|a, b| {
        b.rating
            .overall
            .total_cmp(&a.rating.overall)
            .then_with(|| a.id.cmp(&b.id))
    });
}
