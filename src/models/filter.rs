use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;
use crate::models::place::{PetSize, Place, PlaceCategory, PriceRange};

/// Center point and radius for a proximity search.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoRadius {
    pub center: Coordinates,
    pub radius_km: f64,
}

/// Optional criteria narrowing a place search. Every supplied field must
/// match; unset fields match everything.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceFilter {
    /// Place category must be one of these. Empty means any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<PlaceCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sido: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigungu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_size: Option<PetSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    /// Facility tags the place must offer, all of them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near: Option<GeoRadius>,
}

type Predicate = fn(&PlaceFilter, &Place) -> bool;

/// Applied in order; the first failing predicate rejects the place.
const PREDICATES: &[Predicate] = &[
    matches_category,
    matches_sido,
    matches_sigungu,
    matches_pet_size,
    matches_price_range,
    matches_amenities,
    matches_min_rating,
    matches_verified,
    matches_featured,
    matches_near,
];

impl PlaceFilter {
    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self == &PlaceFilter::default()
    }

    pub fn matches(&self, place: &Place) -> bool {
        PREDICATES.iter().all(|predicate| predicate(self, place))
    }
}

fn matches_category(filter: &PlaceFilter, place: &Place) -> bool {
    filter.categories.is_empty() || filter.categories.contains(&place.category)
}

fn matches_sido(filter: &PlaceFilter, place: &Place) -> bool {
    filter.sido.as_ref().map_or(true, |sido| &place.location.sido == sido)
}

fn matches_sigungu(filter: &PlaceFilter, place: &Place) -> bool {
    filter.sigungu.as_ref().map_or(true, |sigungu| &place.location.sigungu == sigungu)
}

fn matches_pet_size(filter: &PlaceFilter, place: &Place) -> bool {
    filter.pet_size.map_or(true, |size| {
        let restriction = place.pet_policy.size_restriction;
        restriction == PetSize::All || restriction == size
    })
}

fn matches_price_range(filter: &PlaceFilter, place: &Place) -> bool {
    filter.price_range.map_or(true, |range| place.pricing.range == range)
}

fn matches_amenities(filter: &PlaceFilter, place: &Place) -> bool {
    filter.amenities.iter().all(|tag| place.pet_policy.has_facility(tag))
}

fn matches_min_rating(filter: &PlaceFilter, place: &Place) -> bool {
    filter.min_rating.map_or(true, |min| place.rating.overall >= min)
}

fn matches_verified(filter: &PlaceFilter, place: &Place) -> bool {
    filter.verified.map_or(true, |verified| place.metadata.verified == verified)
}

fn matches_featured(filter: &PlaceFilter, place: &Place) -> bool {
    filter.featured.map_or(true, |featured| place.metadata.featured == featured)
}

/// Places without coordinates never satisfy a radius search.
fn matches_near(filter: &PlaceFilter, place: &Place) -> bool {
    match (&filter.near, place.coordinates()) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(near), Some(at)) => near.center.distance_km(at) <= near.radius_km,
    }
}
