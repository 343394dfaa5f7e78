use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// Top-level venue category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Cafe,
    Restaurant,
    Accommodation,
    Park,
    Hospital,
    Grooming,
    Shopping,
    Playground,
    Beach,
    #[default]
    Other,
}

impl PlaceCategory {
    /// Korean label shown in pages and CLI tables.
    pub fn label(&self) -> &'static str {
        match self {
            PlaceCategory::Cafe => "카페",
            PlaceCategory::Restaurant => "식당",
            PlaceCategory::Accommodation => "숙소",
            PlaceCategory::Park => "공원",
            PlaceCategory::Hospital => "동물병원",
            PlaceCategory::Grooming => "미용",
            PlaceCategory::Shopping => "쇼핑",
            PlaceCategory::Playground => "운동장",
            PlaceCategory::Beach => "해변",
            PlaceCategory::Other => "기타",
        }
    }

    /// Parse from the value used in query strings and JSON.
    pub fn from_str(s: &str) -> Option<PlaceCategory> {
        match s.trim().to_lowercase().as_str() {
            "cafe" => Some(PlaceCategory::Cafe),
            "restaurant" => Some(PlaceCategory::Restaurant),
            "accommodation" => Some(PlaceCategory::Accommodation),
            "park" => Some(PlaceCategory::Park),
            "hospital" => Some(PlaceCategory::Hospital),
            "grooming" => Some(PlaceCategory::Grooming),
            "shopping" => Some(PlaceCategory::Shopping),
            "playground" => Some(PlaceCategory::Playground),
            "beach" => Some(PlaceCategory::Beach),
            "other" => Some(PlaceCategory::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceCategory::Cafe => "cafe",
            PlaceCategory::Restaurant => "restaurant",
            PlaceCategory::Accommodation => "accommodation",
            PlaceCategory::Park => "park",
            PlaceCategory::Hospital => "hospital",
            PlaceCategory::Grooming => "grooming",
            PlaceCategory::Shopping => "shopping",
            PlaceCategory::Playground => "playground",
            PlaceCategory::Beach => "beach",
            PlaceCategory::Other => "other",
        }
    }

    /// All categories, in display order.
    pub fn all() -> &'static [PlaceCategory] {
        &[
            PlaceCategory::Cafe,
            PlaceCategory::Restaurant,
            PlaceCategory::Accommodation,
            PlaceCategory::Park,
            PlaceCategory::Hospital,
            PlaceCategory::Grooming,
            PlaceCategory::Shopping,
            PlaceCategory::Playground,
            PlaceCategory::Beach,
            PlaceCategory::Other,
        ]
    }
}

/// Which dog sizes a place accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetSize {
    #[default]
    All,
    Small,
    Medium,
    Large,
}

impl PetSize {
    pub fn label(&self) -> &'static str {
        match self {
            PetSize::All => "모든 크기",
            PetSize::Small => "소형견",
            PetSize::Medium => "중형견",
            PetSize::Large => "대형견",
        }
    }

    pub fn from_str(s: &str) -> Option<PetSize> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(PetSize::All),
            "small" => Some(PetSize::Small),
            "medium" => Some(PetSize::Medium),
            "large" => Some(PetSize::Large),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PetSize::All => "all",
            PetSize::Small => "small",
            PetSize::Medium => "medium",
            PetSize::Large => "large",
        }
    }
}

/// Coarse price tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceRange {
    Budget,
    #[default]
    Moderate,
    Expensive,
    Luxury,
}

impl PriceRange {
    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::Budget => "₩",
            PriceRange::Moderate => "₩₩",
            PriceRange::Expensive => "₩₩₩",
            PriceRange::Luxury => "₩₩₩₩",
        }
    }

    pub fn from_str(s: &str) -> Option<PriceRange> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Some(PriceRange::Budget),
            "moderate" => Some(PriceRange::Moderate),
            "expensive" => Some(PriceRange::Expensive),
            "luxury" => Some(PriceRange::Luxury),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Budget => "budget",
            PriceRange::Moderate => "moderate",
            PriceRange::Expensive => "expensive",
            PriceRange::Luxury => "luxury",
        }
    }
}

/// Where a record's data came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    #[default]
    Manual,
    Google,
    Kakao,
    User,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road_address: Option<String>,
    /// 시/도, e.g. "서울특별시".
    pub sido: String,
    /// 시/군/구, e.g. "마포구".
    pub sigungu: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dong: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kakao_channel: Option<String>,
}

/// Opening window for one day, as "HH:MM" strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DayHours {
    pub open: String,
    pub close: String,
}

/// Weekly table; `None` means closed that day.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyHours {
    pub monday: Option<DayHours>,
    pub tuesday: Option<DayHours>,
    pub wednesday: Option<DayHours>,
    pub thursday: Option<DayHours>,
    pub friday: Option<DayHours>,
    pub saturday: Option<DayHours>,
    pub sunday: Option<DayHours>,
}

impl WeeklyHours {
    /// Same hours every day of the week.
    pub fn every_day(open: &str, close: &str) -> Self {
        let day = Some(DayHours { open: open.to_string(), close: close.to_string() });
        Self {
            monday: day.clone(),
            tuesday: day.clone(),
            wednesday: day.clone(),
            thursday: day.clone(),
            friday: day.clone(),
            saturday: day.clone(),
            sunday: day,
        }
    }

    /// Days paired with their Korean label, Monday first.
    pub fn days(&self) -> [(&'static str, &Option<DayHours>); 7] {
        [
            ("월", &self.monday),
            ("화", &self.tuesday),
            ("수", &self.wednesday),
            ("목", &self.thursday),
            ("금", &self.friday),
            ("토", &self.saturday),
            ("일", &self.sunday),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub hours: WeeklyHours,
    #[serde(default)]
    pub closed_days: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_order: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetPolicy {
    pub allowed: bool,
    #[serde(default)]
    pub size_restriction: PetSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_limit_kg: Option<f64>,
    /// Extra charge per pet, in KRW.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<u32>,
    #[serde(default)]
    pub required_documents: Vec<String>,
    /// Facility tags matched by the amenities filter (e.g. "water_bowl").
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub rules: Vec<String>,
}

impl PetPolicy {
    pub fn has_facility(&self, tag: &str) -> bool {
        self.facilities.iter().any(|f| f == tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Amenities {
    pub parking: bool,
    pub wifi: bool,
    pub outdoor_seating: bool,
    pub indoor_seating: bool,
    pub wheelchair_accessible: bool,
    pub reservation: bool,
    pub custom: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(default)]
    pub range: PriceRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_price: Option<u32>,
    /// Fee breakdown, label to KRW.
    #[serde(default)]
    pub fees: BTreeMap<String, u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rating {
    /// 0.0 to 5.0; default sort key.
    pub overall: f64,
    pub cleanliness: f64,
    pub pet_friendliness: f64,
    pub service: f64,
    pub value: f64,
    pub review_count: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    pub thumbnail: String,
    pub gallery: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    pub verified: bool,
    pub featured: bool,
    /// RFC 3339 timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp.
    pub updated_at: String,
    pub source: DataSource,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// A single pet-friendly venue.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Unique key in the store.
    pub id: String,
    /// Unique URL segment used by the detail page.
    pub slug: String,
    pub name: String,
    pub category: PlaceCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    pub location: Location,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub operation: Operation,
    #[serde(default)]
    pub pet_policy: PetPolicy,
    #[serde(default)]
    pub amenities: Amenities,
    #[serde(default)]
    pub pricing: Pricing,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub images: Images,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub seo: Seo,
}

impl Place {
    pub fn coordinates(&self) -> Option<&Coordinates> {
        self.location.coordinates.as_ref()
    }

    /// Check the record-level invariants: non-blank id and slug, an overall
    /// rating within 0.0..=5.0 and, when present, in-range coordinates.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("id must not be empty".to_string());
        }
        if self.slug.trim().is_empty() {
            return Err("slug must not be empty".to_string());
        }
        if !(0.0..=5.0).contains(&self.rating.overall) {
            return Err(format!("rating.overall {} is outside 0.0-5.0", self.rating.overall));
        }
        if let Some(at) = self.coordinates() {
            if !at.is_valid() {
                return Err(format!("coordinates ({}, {}) out of range", at.latitude, at.longitude));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_roundtrip() {
        for category in PlaceCategory::all() {
            let parsed = PlaceCategory::from_str(category.as_str()).expect("should parse back");
            assert_eq!(category, &parsed);
            assert!(!category.label().is_empty());
        }
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(PlaceCategory::from_str(" Cafe "), Some(PlaceCategory::Cafe));
        assert!(PlaceCategory::from_str("bar").is_none());
    }

    #[test]
    fn pet_size_invalid_returns_none() {
        assert!(PetSize::from_str("giant").is_none());
        assert_eq!(PetSize::from_str("LARGE"), Some(PetSize::Large));
    }

    #[test]
    fn place_deserializes_with_missing_sections() {
        let json = r#"{
            "id": "p1",
            "slug": "p1-cafe",
            "name": "멍멍카페",
            "category": "cafe",
            "location": { "address": "서울 마포구", "sido": "서울특별시", "sigungu": "마포구" }
        }"#;
        let place: Place = serde_json::from_str(json).expect("valid place json");
        assert_eq!(place.category, PlaceCategory::Cafe);
        assert_eq!(place.pet_policy.size_restriction, PetSize::All);
        assert!(place.coordinates().is_none());
        assert_eq!(place.rating.overall, 0.0);
    }

    #[test]
    fn validate_rejects_broken_records() {
        let valid = Place { id: "p1".into(), slug: "p1-cafe".into(), ..Default::default() };
        assert!(valid.validate().is_ok());

        let blank_slug = Place { slug: "  ".into(), ..valid.clone() };
        assert!(blank_slug.validate().unwrap_err().contains("slug"));

        let mut rating = valid.clone();
        rating.rating.overall = 5.1;
        assert!(rating.validate().is_err());
        rating.rating.overall = f64::NAN;
        assert!(rating.validate().is_err());

        let mut coords = valid.clone();
        coords.location.coordinates = Some(Coordinates::new(91.0, 127.0));
        assert!(coords.validate().unwrap_err().contains("coordinates"));
    }

    #[test]
    fn place_serializes_camel_case() {
        let place = Place {
            id: "p1".into(),
            pet_policy: PetPolicy { allowed: true, facilities: vec!["water_bowl".into()], ..Default::default() },
            ..Default::default()
        };
        let value = serde_json::to_value(&place).unwrap();
        assert_eq!(value["petPolicy"]["sizeRestriction"], "all");
        assert_eq!(value["petPolicy"]["facilities"][0], "water_bowl");
        assert!(value.get("pet_policy").is_none());
    }
}
