use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::{
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{pages, places_api};
use crate::models::AppState;

/// Directory served under `/static`.
pub const STATIC_DIR: &str = "static";

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/places", get(places_api::search_places).post(places_api::create_place))
        .route("/places/slug/:slug", get(places_api::get_place_by_slug))
        .route(
            "/places/:id",
            get(places_api::get_place)
                .patch(places_api::update_place)
                .delete(places_api::delete_place),
        )
        .route("/regions", get(places_api::list_regions))
        .route("/regions/:sido", get(places_api::places_by_region))
        .route("/categories", get(places_api::list_categories))
        .route("/categories/:category", get(places_api::places_by_category))
        .route("/recommended", get(places_api::recommended_places))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(pages::places_page))
        .route("/places/:slug", get(pages::place_detail_page))
        .route("/healthz", get(places_api::health))
        .nest("/api", api)
        // Serve static files with cache-control header
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=31536000, immutable"),
                ))
                .service(ServeDir::new(STATIC_DIR)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
