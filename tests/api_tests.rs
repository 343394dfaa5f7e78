use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use eoseoogae::models::AppState;
use eoseoogae::routes::build_router;
use eoseoogae::services::{sample_places, sample_regions, PlaceStore};

fn test_state() -> AppState {
    AppState {
        places: PlaceStore::with_places(sample_places()).unwrap(),
        regions: Arc::new(sample_regions()),
        public_base_url: "http://localhost:8080".to_string(),
        default_page_size: 3,
        max_page_size: 5,
    }
}

fn app() -> Router {
    build_router(test_state())
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn send_json(app: Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn search_uses_default_page_size() {
    let (status, body) = get_json(app(), "/api/places").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 9);
    assert_eq!(body["limit"], 3);
    assert_eq!(body["hasMore"], true);
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
    assert_eq!(body["items"][0]["id"], "place-006");
}

#[tokio::test]
async fn search_caps_limit_and_echoes_filter() {
    let uri = "/api/places?category=cafe,park&limit=50&page=1";
    let (status, body) = get_json(app(), uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["limit"], 5);
    assert_eq!(body["total"], 3);
    assert_eq!(body["hasMore"], false);
    assert_eq!(body["filter"]["categories"], json!(["cafe", "park"]));
}

#[tokio::test]
async fn search_by_radius() {
    // 10km around Seoul City Hall reaches Seongsu, Yeonnam, Gangnam and Banpo.
    let uri = "/api/places?lat=37.5663&lng=126.9779&radius=10&limit=5";
    let (status, body) = get_json(app(), uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
}

#[tokio::test]
async fn search_rejects_bad_input() {
    for uri in [
        "/api/places?petSize=giant",
        "/api/places?minRating=high",
        "/api/places?lat=37.5",
        "/api/places?verified=perhaps",
        "/api/places?lat=100&lng=0&radius=1",
    ] {
        let (status, body) = get_json(app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["error"].as_str().unwrap().starts_with("Bad request"));
    }
}

#[tokio::test]
async fn lookup_by_id_and_slug() {
    let (status, body) = get_json(app(), "/api/places/place-002").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "yeonnam-puppy-bakery");

    let (status, body) = get_json(app(), "/api/places/slug/yeonnam-puppy-bakery").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "place-002");

    let (status, _) = get_json(app(), "/api/places/slug/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn region_and_category_listings() {
    let (status, body) = get_json(app(), "/api/regions/%EA%B2%BD%EA%B8%B0%EB%8F%84").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body.as_array().unwrap().iter().map(|p| p["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["place-006", "place-007"]);

    let (status, body) = get_json(app(), "/api/categories/beach").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = get_json(app(), "/api/categories/bar").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get_json(app(), "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    let cafe = body.as_array().unwrap().iter().find(|c| c["category"] == "cafe").unwrap();
    assert_eq!(cafe["count"], 2);

    let (status, body) = get_json(app(), "/api/regions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["counts"][0]["sido"], "서울특별시");
    assert_eq!(body["counts"][0]["count"], 4);
}

#[tokio::test]
async fn recommended_respects_limit() {
    let (status, body) = get_json(app(), "/api/recommended?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|p| p["metadata"]["featured"] == true));
}

#[tokio::test]
async fn create_update_delete_roundtrip() {
    let state = test_state();
    let router = build_router(state.clone());

    let new_place = json!({
        "id": "place-100",
        "slug": "ilsan-lake-park",
        "name": "일산 호수공원",
        "category": "park",
        "location": {
            "address": "경기도 고양시 일산동구 호수로 595",
            "sido": "경기도",
            "sigungu": "고양시 일산동구",
            "coordinates": { "latitude": 37.6575, "longitude": 126.7683 }
        },
        "rating": { "overall": 4.6, "reviewCount": 10 }
    });
    let (status, _) = send_json(router.clone(), "POST", "/api/places", new_place).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(state.places.len().unwrap(), 10);

    let (status, body) =
        send_json(router.clone(), "PATCH", "/api/places/place-100", json!({ "name": "일산 호수공원 놀이터" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "일산 호수공원 놀이터");
    assert_eq!(body["location"]["sido"], "경기도");

    let req = Request::builder().method("DELETE").uri("/api/places/place-100").body(Body::empty()).unwrap();
    let (status, _) = send(router.clone(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.places.get_by_id("place-100").unwrap(), None);
}

#[tokio::test]
async fn mutations_report_not_found_and_conflict() {
    let (status, body) = send_json(app(), "PATCH", "/api/places/missing", json!({ "name": "x" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Place not found: missing");

    let req = Request::builder().method("DELETE").uri("/api/places/missing").body(Body::empty()).unwrap();
    let (status, _) = send(app(), req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let clash = json!({
        "id": "place-200",
        "slug": "haeundae-pet-beach",
        "name": "Copycat",
        "category": "beach",
        "location": { "address": "부산", "sido": "부산광역시", "sigungu": "해운대구" }
    });
    let (status, _) = send_json(app(), "POST", "/api/places", clash).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn patch_with_invalid_values_is_rejected() {
    let state = test_state();
    let router = build_router(state.clone());
    let before = state.places.get_by_id("place-001").unwrap().unwrap();

    let bad_patches = [
        json!({ "slug": "" }),
        json!({ "rating": { "overall": 42 } }),
        json!({
            "location": {
                "address": "서울특별시 성동구",
                "sido": "서울특별시",
                "sigungu": "성동구",
                "coordinates": { "latitude": 999, "longitude": -999 }
            }
        }),
    ];
    for patch in bad_patches {
        let (status, body) = send_json(router.clone(), "PATCH", "/api/places/place-001", patch).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Bad request"));
    }
    assert_eq!(state.places.get_by_id("place-001").unwrap().unwrap(), before);
}

#[tokio::test]
async fn create_with_invalid_values_is_rejected() {
    let state = test_state();
    let router = build_router(state.clone());
    let base = json!({
        "id": "place-300",
        "slug": "suwon-dog-park",
        "name": "수원 반려견 놀이터",
        "category": "park",
        "location": { "address": "경기도 수원시", "sido": "경기도", "sigungu": "수원시" }
    });

    let mut off_map = base.clone();
    off_map["location"]["coordinates"] = json!({ "latitude": 37.3, "longitude": 200.0 });
    let mut overrated = base.clone();
    overrated["rating"] = json!({ "overall": 5.5 });
    let mut blank_id = base.clone();
    blank_id["id"] = json!(" ");

    for body in [off_map, overrated, blank_id] {
        let (status, _) = send_json(router.clone(), "POST", "/api/places", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
    assert_eq!(state.places.len().unwrap(), sample_places().len());
}

#[tokio::test]
async fn health_reports_count() {
    let (status, body) = get_json(app(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "places": 9 }));
}

#[tokio::test]
async fn html_pages_render() {
    let req = Request::builder().uri("/?category=cafe").body(Body::empty()).unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("성수 멍멍카페"));
    assert!(!html.contains("해운대 펫 비치"));

    let req = Request::builder().uri("/places/jeju-olle-dog-stay").body(Body::empty()).unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("제주 올레 독스테이"));

    let req = Request::builder().uri("/places/unknown").body(Body::empty()).unwrap();
    let (status, _) = send(app(), req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
