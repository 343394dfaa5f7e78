use std::path::Path;

use crate::geo::Coordinates;
use crate::models::{
    Amenities, Contact, DataSource, Images, Location, Metadata, Operation, PetPolicy, PetSize, Place, PlaceCategory,
    PriceRange, Pricing, Rating, Region, RegionLevel, Seo, WeeklyHours,
};

use super::error::SeedError;
use super::place_store::PlaceStore;

const SEED_TIMESTAMP: &str = "2024-03-01T09:00:00Z";

/// Load places from a JSON file.
///
/// Accepts either an array of places or an object keyed by id. Entries that
/// fail to parse or validate are skipped with a warning; a file that is
/// unreadable or not JSON at all is an error.
pub async fn load_places_from_file(path: &str) -> Result<Vec<Place>, SeedError> {
    let text = tokio::fs::read_to_string(Path::new(path))
        .await
        .map_err(|source| SeedError::Io { path: path.to_string(), source })?;
    let root: serde_json::Value =
        serde_json::from_str(&text).map_err(|source| SeedError::Json { path: path.to_string(), source })?;

    // Object-form entries remember their key so it can be checked against the id.
    let entries: Vec<(Option<String>, serde_json::Value)> = if let Some(arr) = root.as_array() {
        arr.iter().map(|v| (None, v.clone())).collect()
    } else if let Some(obj) = root.as_object() {
        obj.iter().map(|(k, v)| (Some(k.clone()), v.clone())).collect()
    } else {
        return Err(SeedError::UnexpectedShape(path.to_string()));
    };

    let mut places = Vec::with_capacity(entries.len());
    for (index, (key, entry)) in entries.into_iter().enumerate() {
        let place = match serde_json::from_value::<Place>(entry) {
            Ok(place) => place,
            Err(e) => {
                tracing::warn!(%e, index, path, "Skipping malformed place entry");
                continue;
            }
        };
        if let Err(e) = place.validate() {
            tracing::warn!(%e, index, id = %place.id, path, "Skipping invalid place entry");
            continue;
        }
        if let Some(key) = key.filter(|k| *k != place.id) {
            tracing::warn!(%key, id = %place.id, path, "Seed key does not match place id; using the id");
        }
        places.push(place);
    }
    Ok(places)
}

/// Build the store from `places_file` when given, otherwise from the bundled
/// sample data.
pub async fn build_place_store(places_file: Option<&str>) -> Result<PlaceStore, SeedError> {
    let places = match places_file {
        Some(path) => {
            let places = load_places_from_file(path).await?;
            tracing::info!(count = places.len(), path, "Loaded places from file");
            places
        }
        None => {
            let places = sample_places();
            tracing::info!(count = places.len(), "Seeded sample places");
            places
        }
    };
    Ok(PlaceStore::with_places(places)?)
}

/// Sido-level regions plus the sigungu entries referenced by the sample data.
pub fn sample_regions() -> Vec<Region> {
    let sido = |code: &str, name: &str| Region {
        code: code.to_string(),
        name: name.to_string(),
        level: RegionLevel::Sido,
        parent_code: None,
    };
    let sigungu = |code: &str, name: &str, parent: &str| Region {
        code: code.to_string(),
        name: name.to_string(),
        level: RegionLevel::Sigungu,
        parent_code: Some(parent.to_string()),
    };
    vec![
        sido("11", "서울특별시"),
        sido("26", "부산광역시"),
        sido("41", "경기도"),
        sido("51", "강원특별자치도"),
        sido("50", "제주특별자치도"),
        sigungu("11200", "성동구", "11"),
        sigungu("11440", "마포구", "11"),
        sigungu("11650", "서초구", "11"),
        sigungu("11680", "강남구", "11"),
        sigungu("26350", "해운대구", "26"),
        sigungu("41135", "성남시 분당구", "41"),
        sigungu("41820", "가평군", "41"),
        sigungu("51150", "강릉시", "51"),
        sigungu("50110", "제주시", "50"),
    ]
}

struct SeedPlace<'a> {
    id: &'a str,
    slug: &'a str,
    name: &'a str,
    category: PlaceCategory,
    description: &'a str,
    address: &'a str,
    sido: &'a str,
    sigungu: &'a str,
    at: (f64, f64),
    size: PetSize,
    facilities: &'a [&'a str],
    price: PriceRange,
    overall: f64,
    reviews: u32,
    verified: bool,
    featured: bool,
}

impl SeedPlace<'_> {
    fn build(self) -> Place {
        Place {
            id: self.id.to_string(),
            slug: self.slug.to_string(),
            name: self.name.to_string(),
            category: self.category,
            subcategory: None,
            description: self.description.to_string(),
            short_description: None,
            location: Location {
                address: self.address.to_string(),
                road_address: None,
                sido: self.sido.to_string(),
                sigungu: self.sigungu.to_string(),
                dong: None,
                coordinates: Some(Coordinates::new(self.at.0, self.at.1)),
            },
            contact: Contact::default(),
            operation: Operation {
                hours: WeeklyHours::every_day("10:00", "21:00"),
                ..Default::default()
            },
            pet_policy: PetPolicy {
                allowed: true,
                size_restriction: self.size,
                facilities: self.facilities.iter().map(|f| f.to_string()).collect(),
                ..Default::default()
            },
            amenities: Amenities { parking: true, indoor_seating: true, ..Default::default() },
            pricing: Pricing { range: self.price, ..Default::default() },
            rating: Rating {
                overall: self.overall,
                pet_friendliness: self.overall,
                review_count: self.reviews,
                ..Default::default()
            },
            images: Images::default(),
            metadata: Metadata {
                verified: self.verified,
                featured: self.featured,
                created_at: SEED_TIMESTAMP.to_string(),
                updated_at: SEED_TIMESTAMP.to_string(),
                source: DataSource::Manual,
            },
            seo: Seo {
                title: format!("{} | 어서오개", self.name),
                description: self.description.to_string(),
                keywords: vec!["반려견 동반".to_string(), self.sigungu.to_string()],
            },
        }
    }
}

/// Static sample data used when no seed file is configured.
pub fn sample_places() -> Vec<Place> {
    vec![
        SeedPlace {
            id: "place-001",
            slug: "seongsu-mungmung-cafe",
            name: "성수 멍멍카페",
            category: PlaceCategory::Cafe,
            description: "대형견도 함께 들어갈 수 있는 넓은 루프탑 카페",
            address: "서울특별시 성동구 성수이로 88",
            sido: "서울특별시",
            sigungu: "성동구",
            at: (37.5446, 127.0557),
            size: PetSize::All,
            facilities: &["water_bowl", "pet_menu", "off_leash_area"],
            price: PriceRange::Moderate,
            overall: 4.8,
            reviews: 212,
            verified: true,
            featured: true,
        }
        .build(),
        SeedPlace {
            id: "place-002",
            slug: "yeonnam-puppy-bakery",
            name: "연남 퍼피 베이커리",
            category: PlaceCategory::Cafe,
            description: "강아지 전용 수제 케이크를 파는 소형견 전용 카페",
            address: "서울특별시 마포구 동교로 241",
            sido: "서울특별시",
            sigungu: "마포구",
            at: (37.5622, 126.9255),
            size: PetSize::Small,
            facilities: &["water_bowl", "pet_menu"],
            price: PriceRange::Budget,
            overall: 4.6,
            reviews: 98,
            verified: true,
            featured: false,
        }
        .build(),
        SeedPlace {
            id: "place-003",
            slug: "gangnam-bistro-dog",
            name: "강남 비스트로 독",
            category: PlaceCategory::Restaurant,
            description: "반려견 동반 테라스석이 있는 브런치 레스토랑",
            address: "서울특별시 강남구 강남대로 396",
            sido: "서울특별시",
            sigungu: "강남구",
            at: (37.4979, 127.0276),
            size: PetSize::Medium,
            facilities: &["water_bowl", "pet_seat"],
            price: PriceRange::Expensive,
            overall: 4.3,
            reviews: 57,
            verified: false,
            featured: false,
        }
        .build(),
        SeedPlace {
            id: "place-004",
            slug: "banpo-hangang-dog-park",
            name: "반포 한강 반려견 놀이터",
            category: PlaceCategory::Park,
            description: "한강 둔치에 마련된 무료 반려견 놀이터",
            address: "서울특별시 서초구 신반포로11길 40",
            sido: "서울특별시",
            sigungu: "서초구",
            at: (37.5100, 126.9960),
            size: PetSize::All,
            facilities: &["off_leash_area", "water_fountain", "waste_bags"],
            price: PriceRange::Budget,
            overall: 4.5,
            reviews: 340,
            verified: true,
            featured: true,
        }
        .build(),
        SeedPlace {
            id: "place-005",
            slug: "haeundae-pet-beach",
            name: "해운대 펫 비치",
            category: PlaceCategory::Beach,
            description: "비수기에 반려견 입장이 가능한 해변 구역",
            address: "부산광역시 해운대구 우동 1394",
            sido: "부산광역시",
            sigungu: "해운대구",
            at: (35.1587, 129.1604),
            size: PetSize::All,
            facilities: &["shower", "waste_bags"],
            price: PriceRange::Budget,
            overall: 4.4,
            reviews: 121,
            verified: true,
            featured: false,
        }
        .build(),
        SeedPlace {
            id: "place-006",
            slug: "gapyeong-forest-pet-pension",
            name: "가평 숲속 펫 펜션",
            category: PlaceCategory::Accommodation,
            description: "전 객실 개별 마당이 있는 반려견 동반 펜션",
            address: "경기도 가평군 가평읍 북한강로 1234",
            sido: "경기도",
            sigungu: "가평군",
            at: (37.8315, 127.5105),
            size: PetSize::All,
            facilities: &["private_yard", "pet_bed", "shower", "water_bowl"],
            price: PriceRange::Luxury,
            overall: 4.9,
            reviews: 187,
            verified: true,
            featured: true,
        }
        .build(),
        SeedPlace {
            id: "place-007",
            slug: "pangyo-24h-animal-hospital",
            name: "판교 24시 동물병원",
            category: PlaceCategory::Hospital,
            description: "야간 응급 진료가 가능한 동물병원",
            address: "경기도 성남시 분당구 판교역로 166",
            sido: "경기도",
            sigungu: "성남시 분당구",
            at: (37.3948, 127.1112),
            size: PetSize::All,
            facilities: &["waiting_room"],
            price: PriceRange::Expensive,
            overall: 4.7,
            reviews: 76,
            verified: true,
            featured: false,
        }
        .build(),
        SeedPlace {
            id: "place-008",
            slug: "jeju-olle-dog-stay",
            name: "제주 올레 독스테이",
            category: PlaceCategory::Accommodation,
            description: "대형견 전용 잔디 운동장을 갖춘 제주 숙소",
            address: "제주특별자치도 제주시 애월읍 애월해안로 200",
            sido: "제주특별자치도",
            sigungu: "제주시",
            at: (33.4996, 126.5312),
            size: PetSize::Large,
            facilities: &["off_leash_area", "pet_bed", "shower"],
            price: PriceRange::Expensive,
            overall: 4.8,
            reviews: 143,
            verified: false,
            featured: true,
        }
        .build(),
        SeedPlace {
            id: "place-009",
            slug: "gangneung-sea-grooming",
            name: "강릉 바다 애견미용",
            category: PlaceCategory::Grooming,
            description: "스파와 미용을 함께 받을 수 있는 애견 미용실",
            address: "강원특별자치도 강릉시 창해로 307",
            sido: "강원특별자치도",
            sigungu: "강릉시",
            at: (37.7955, 128.9180),
            size: PetSize::Small,
            facilities: &["spa", "waiting_room"],
            price: PriceRange::Moderate,
            overall: 4.2,
            reviews: 39,
            verified: false,
            featured: false,
        }
        .build(),
    ]
}
