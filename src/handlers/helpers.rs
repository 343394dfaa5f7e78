use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::geo::Coordinates;
use crate::models::{AppState, GeoRadius, PetSize, PlaceCategory, PlaceFilter, PriceRange};
use crate::templates::BaseTemplate;
use crate::utils::{parse_csv_list, parse_flag, parse_optional_number};

use super::error::ApiError;

/// Filter plus pagination parsed from a query string.
#[derive(Debug)]
pub struct SearchParams {
    pub filter: PlaceFilter,
    pub page: usize,
    pub limit: usize,
}

/// Map query parameters onto a `PlaceFilter`.
///
/// Recognised keys: `category`, `sido`, `sigungu`, `petSize`, `priceRange`,
/// `amenities`, `minRating`, `verified`, `featured`, `lat`, `lng`, `radius`,
/// `page`, `limit`. Unknown keys are ignored; malformed values are rejected.
pub fn search_params_from_query(state: &AppState, q: &HashMap<String, String>) -> Result<SearchParams, ApiError> {
    let mut filter = PlaceFilter::default();

    for raw in parse_csv_list(q.get("category")) {
        let category = PlaceCategory::from_str(&raw)
            .ok_or_else(|| ApiError::BadRequest(format!("unknown category '{raw}'")))?;
        if !filter.categories.contains(&category) {
            filter.categories.push(category);
        }
    }
    filter.sido = non_empty(q.get("sido"));
    filter.sigungu = non_empty(q.get("sigungu"));
    if let Some(raw) = non_empty(q.get("petSize")) {
        let size = PetSize::from_str(&raw).ok_or_else(|| ApiError::BadRequest(format!("unknown petSize '{raw}'")))?;
        filter.pet_size = Some(size);
    }
    if let Some(raw) = non_empty(q.get("priceRange")) {
        let range =
            PriceRange::from_str(&raw).ok_or_else(|| ApiError::BadRequest(format!("unknown priceRange '{raw}'")))?;
        filter.price_range = Some(range);
    }
    filter.amenities = parse_csv_list(q.get("amenities"));
    filter.min_rating = number(q, "minRating")?;
    filter.verified = flag(q, "verified")?;
    filter.featured = flag(q, "featured")?;

    let lat = number::<f64>(q, "lat")?;
    let lng = number::<f64>(q, "lng")?;
    let radius = number::<f64>(q, "radius")?;
    filter.near = match (lat, lng, radius) {
        (None, None, None) => None,
        (Some(latitude), Some(longitude), Some(radius_km)) => {
            let center = Coordinates::new(latitude, longitude);
            if !center.is_valid() {
                return Err(ApiError::BadRequest("lat/lng out of range".into()));
            }
            if radius_km.is_nan() || radius_km < 0.0 {
                return Err(ApiError::BadRequest("radius must be non-negative".into()));
            }
            Some(GeoRadius { center, radius_km })
        }
        _ => return Err(ApiError::BadRequest("lat, lng and radius must be given together".into())),
    };

    let page = number::<usize>(q, "page")?.unwrap_or(1).max(1);
    let limit = state.page_size(number::<usize>(q, "limit")?);

    Ok(SearchParams { filter, page, limit })
}

/// The query pairs that reproduce `filter`, for building pagination links.
pub fn filter_query_pairs(filter: &PlaceFilter) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if !filter.categories.is_empty() {
        let joined = filter.categories.iter().map(|c| c.as_str()).collect::<Vec<_>>().join(",");
        pairs.push(("category".to_string(), joined));
    }
    if let Some(sido) = &filter.sido {
        pairs.push(("sido".to_string(), sido.clone()));
    }
    if let Some(sigungu) = &filter.sigungu {
        pairs.push(("sigungu".to_string(), sigungu.clone()));
    }
    if let Some(size) = filter.pet_size {
        pairs.push(("petSize".to_string(), size.as_str().to_string()));
    }
    if let Some(range) = filter.price_range {
        pairs.push(("priceRange".to_string(), range.as_str().to_string()));
    }
    if !filter.amenities.is_empty() {
        pairs.push(("amenities".to_string(), filter.amenities.join(",")));
    }
    if let Some(min) = filter.min_rating {
        pairs.push(("minRating".to_string(), min.to_string()));
    }
    if let Some(verified) = filter.verified {
        pairs.push(("verified".to_string(), verified.to_string()));
    }
    if let Some(featured) = filter.featured {
        pairs.push(("featured".to_string(), featured.to_string()));
    }
    if let Some(near) = &filter.near {
        pairs.push(("lat".to_string(), near.center.latitude.to_string()));
        pairs.push(("lng".to_string(), near.center.longitude.to_string()));
        pairs.push(("radius".to_string(), near.radius_km.to_string()));
    }
    pairs
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty()).map(str::to_string)
}

fn number<T: std::str::FromStr>(q: &HashMap<String, String>, key: &str) -> Result<Option<T>, ApiError> {
    parse_optional_number(q.get(key)).map_err(|raw| ApiError::BadRequest(format!("invalid {key} '{raw}'")))
}

fn flag(q: &HashMap<String, String>, key: &str) -> Result<Option<bool>, ApiError> {
    match non_empty(q.get(key)) {
        None => Ok(None),
        Some(raw) => parse_flag(&raw)
            .map(Some)
            .ok_or_else(|| ApiError::BadRequest(format!("invalid {key} '{raw}'"))),
    }
}

pub fn plain_html<S: AsRef<str>>(status: StatusCode, s: S) -> Response {
    (status, Html(format!("<!DOCTYPE html><html><body><p>{}</p></body></html>", s.as_ref()))).into_response()
}

pub fn render_template<T: askama::Template + BaseTemplate>(t: T) -> Response {
    tracing::debug!(title = t.page_title(), "Rendering page");
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::PlaceStore;

    fn state() -> AppState {
        AppState {
            places: PlaceStore::new(),
            regions: std::sync::Arc::new(vec![]),
            public_base_url: "http://localhost:8080".into(),
            default_page_size: 20,
            max_page_size: 50,
        }
    }

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn empty_query_gives_defaults() {
        let params = search_params_from_query(&state(), &HashMap::new()).unwrap();
        assert!(params.filter.is_empty());
        assert_eq!((params.page, params.limit), (1, 20));
    }

    #[test]
    fn parses_every_field() {
        let q = query(&[
            ("category", "cafe,park"),
            ("sido", "서울특별시"),
            ("petSize", "large"),
            ("priceRange", "budget"),
            ("amenities", "water_bowl,pet_seat"),
            ("minRating", "4.5"),
            ("verified", "true"),
            ("lat", "37.5"),
            ("lng", "127.0"),
            ("radius", "3"),
            ("page", "2"),
            ("limit", "500"),
        ]);
        let params = search_params_from_query(&state(), &q).unwrap();
        assert_eq!(params.filter.categories, vec![PlaceCategory::Cafe, PlaceCategory::Park]);
        assert_eq!(params.filter.pet_size, Some(PetSize::Large));
        assert_eq!(params.filter.amenities.len(), 2);
        assert_eq!(params.filter.min_rating, Some(4.5));
        assert_eq!(params.filter.verified, Some(true));
        assert_eq!(params.filter.featured, None);
        assert_eq!(params.filter.near.unwrap().radius_km, 3.0);
        assert_eq!(params.page, 2);
        assert_eq!(params.limit, 50);
    }

    #[test]
    fn partial_geo_is_rejected() {
        let q = query(&[("lat", "37.5"), ("lng", "127.0")]);
        assert!(matches!(search_params_from_query(&state(), &q), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn unknown_enum_is_rejected() {
        let q = query(&[("petSize", "giant")]);
        assert!(matches!(search_params_from_query(&state(), &q), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn query_pairs_reproduce_filter() {
        let q = query(&[("category", "cafe"), ("sido", "경기도"), ("featured", "1")]);
        let params = search_params_from_query(&state(), &q).unwrap();
        let pairs = filter_query_pairs(&params.filter);
        let rebuilt: HashMap<String, String> = pairs.into_iter().collect();
        let again = search_params_from_query(&state(), &rebuilt).unwrap();
        assert_eq!(again.filter, params.filter);
    }
}
