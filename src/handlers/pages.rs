use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::config::DEFAULT_RECOMMENDED_LIMIT;
use crate::models::{AppState, PetSize, PlaceCard, PlaceCategory, PlaceDetailView, PlaceFilter, SearchResult};
use crate::templates::{PlaceDetailTemplate, PlacesTemplate, SelectOption};
use crate::utils::build_query_string;

use super::error::ApiError;
use super::helpers::{filter_query_pairs, plain_html, render_template, search_params_from_query};

/// GET /: search page.
pub async fn places_page(State(state): State<AppState>, Query(q): Query<HashMap<String, String>>) -> Response {
    let (filter, page, limit, error_message) = match search_params_from_query(&state, &q) {
        Ok(p) => (p.filter, p.page, p.limit, String::new()),
        Err(e) => (PlaceFilter::default(), 1, state.page_size(None), e.to_string()),
    };

    let result = match state.places.search(&filter, page, limit) {
        Ok(r) => r,
        Err(e) => return store_failure(e.into()),
    };
    // Only surface recommendations on an unfiltered landing page.
    let recommended = if filter.is_empty() && page == 1 {
        match state.places.get_recommended(DEFAULT_RECOMMENDED_LIMIT) {
            Ok(places) => places.iter().map(|p| PlaceCard::from_place(p, &state.public_base_url)).collect(),
            Err(e) => return store_failure(e.into()),
        }
    } else {
        vec![]
    };

    let (prev_url, next_url) = pager_urls(&result);
    let cards = result
        .items
        .iter()
        .map(|p| PlaceCard::from_place(p, &state.public_base_url))
        .collect();

    render_template(PlacesTemplate {
        base_url: state.public_base_url.clone(),
        page_title: "어서오개 - 반려견 동반 장소 찾기".to_string(),
        cards,
        recommended,
        total: result.total,
        page: result.page,
        total_pages: result.total_pages().max(1),
        prev_url,
        next_url,
        sido: filter.sido.clone().unwrap_or_default(),
        category_options: category_options(&filter),
        pet_size_options: pet_size_options(&filter),
        error_message,
    })
}

/// GET /places/:slug: detail page.
pub async fn place_detail_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let place = match state.places.get_by_slug(&slug) {
        Ok(Some(p)) => p,
        Ok(None) => return plain_html(StatusCode::NOT_FOUND, "장소를 찾을 수 없습니다."),
        Err(e) => return store_failure(e.into()),
    };
    let view = PlaceDetailView::from_place(&place, &state.public_base_url);
    render_template(PlaceDetailTemplate {
        base_url: state.public_base_url.clone(),
        page_title: view.seo_title.clone(),
        place: view,
    })
}

fn store_failure(e: ApiError) -> Response {
    tracing::error!(%e, "Failed to read places");
    plain_html(StatusCode::INTERNAL_SERVER_ERROR, "일시적인 오류가 발생했습니다.")
}

/// Links to the neighbouring pages, empty when there is none.
fn pager_urls(result: &SearchResult) -> (String, String) {
    let link = |page: usize| {
        let mut pairs = filter_query_pairs(&result.filter);
        pairs.push(("page".to_string(), page.to_string()));
        pairs.push(("limit".to_string(), result.limit.to_string()));
        format!("/?{}", build_query_string(&pairs))
    };
    let prev = if result.page > 1 { link(result.page - 1) } else { String::new() };
    let next = if result.has_more { link(result.page + 1) } else { String::new() };
    (prev, next)
}

fn category_options(filter: &PlaceFilter) -> Vec<SelectOption> {
    PlaceCategory::all()
        .iter()
        .map(|c| SelectOption {
            value: c.as_str().to_string(),
            label: c.label().to_string(),
            selected: filter.categories.len() == 1 && filter.categories[0] == *c,
        })
        .collect()
}

fn pet_size_options(filter: &PlaceFilter) -> Vec<SelectOption> {
    [PetSize::Small, PetSize::Medium, PetSize::Large]
        .iter()
        .map(|s| SelectOption {
            value: s.as_str().to_string(),
            label: s.label().to_string(),
            selected: filter.pet_size == Some(*s),
        })
        .collect()
}
