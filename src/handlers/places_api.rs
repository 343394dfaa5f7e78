use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::config::DEFAULT_RECOMMENDED_LIMIT;
use crate::models::{AppState, Place, PlaceCategory, PlacePatch, SearchResult};

use super::error::ApiError;
use super::helpers::search_params_from_query;

/// GET /api/places: filtered, ranked, paginated search.
pub async fn search_places(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
) -> Result<Json<SearchResult>, ApiError> {
    let params = search_params_from_query(&state, &q)?;
    let result = state.places.search(&params.filter, params.page, params.limit)?;
    tracing::debug!(total = result.total, page = result.page, "Place search");
    Ok(Json(result))
}

/// GET /api/places/:id
pub async fn get_place(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Place>, ApiError> {
    state
        .places
        .get_by_id(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Place not found: {id}")))
}

/// GET /api/places/slug/:slug
pub async fn get_place_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Place>, ApiError> {
    state
        .places
        .get_by_slug(&slug)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Place not found: {slug}")))
}

/// GET /api/regions: known regions with per-sido place counts.
pub async fn list_regions(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let counts = state.places.region_counts()?;
    Ok(Json(json!({ "regions": state.regions.as_ref(), "counts": counts })))
}

/// GET /api/regions/:sido: optional `sigungu` query narrows the result.
pub async fn places_by_region(
    State(state): State<AppState>,
    Path(sido): Path<String>,
    Query(q): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Place>>, ApiError> {
    let sigungu = q.get("sigungu").map(|s| s.trim()).filter(|s| !s.is_empty());
    Ok(Json(state.places.get_by_region(&sido, sigungu)?))
}

/// GET /api/categories: place count per category.
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let counts = state.places.category_counts()?;
    let body: Vec<_> = PlaceCategory::all()
        .iter()
        .map(|c| {
            json!({
                "category": c,
                "label": c.label(),
                "count": counts.get(c).copied().unwrap_or(0),
            })
        })
        .collect();
    Ok(Json(body))
}

/// GET /api/categories/:category
pub async fn places_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Place>>, ApiError> {
    let category = PlaceCategory::from_str(&category)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown category '{category}'")))?;
    Ok(Json(state.places.get_by_category(category)?))
}

/// GET /api/recommended?limit=
pub async fn recommended_places(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Place>>, ApiError> {
    let limit = crate::utils::parse_optional_number::<usize>(q.get("limit"))
        .map_err(|raw| ApiError::BadRequest(format!("invalid limit '{raw}'")))?
        .unwrap_or(DEFAULT_RECOMMENDED_LIMIT)
        .min(state.max_page_size);
    Ok(Json(state.places.get_recommended(limit)?))
}

/// POST /api/places: insert or overwrite by id.
pub async fn create_place(
    State(state): State<AppState>,
    Json(place): Json<Place>,
) -> Result<impl IntoResponse, ApiError> {
    let id = place.id.clone();
    if let Err(e) = state.places.add(place.clone()) {
        tracing::warn!(%e, %id, "Rejected place");
        return Err(e.into());
    }
    tracing::info!(%id, "Place saved");
    Ok((StatusCode::CREATED, Json(place)))
}

/// PATCH /api/places/:id: shallow merge.
pub async fn update_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<PlacePatch>,
) -> Result<Json<Place>, ApiError> {
    match state.places.update(&id, patch) {
        Ok(place) => {
            tracing::info!(%id, "Place updated");
            Ok(Json(place))
        }
        Err(e) => {
            tracing::warn!(%e, %id, "Update rejected");
            Err(e.into())
        }
    }
}

/// DELETE /api/places/:id
pub async fn delete_place(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Place>, ApiError> {
    let removed = state.places.delete(&id)?;
    tracing::info!(%id, "Place deleted");
    Ok(Json(removed))
}

/// GET /healthz
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let places = state.places.len()?;
    Ok(Json(json!({ "status": "ok", "places": places })))
}
