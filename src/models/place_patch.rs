use serde::{Deserialize, Deserializer};

use crate::models::place::{
    Amenities, Contact, Images, Location, Metadata, Operation, PetPolicy, Place, PlaceCategory, Pricing, Rating, Seo,
};

/// Partial update for a place. Each supplied section replaces the stored one
/// wholesale; nested fields are not merged. The id cannot be patched.
///
/// The optional text fields distinguish an absent key (keep) from an explicit
/// `null` (clear).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacePatch {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub category: Option<PlaceCategory>,
    #[serde(deserialize_with = "nullable")]
    pub subcategory: Option<Option<String>>,
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub short_description: Option<Option<String>>,
    pub location: Option<Location>,
    pub contact: Option<Contact>,
    pub operation: Option<Operation>,
    pub pet_policy: Option<PetPolicy>,
    pub amenities: Option<Amenities>,
    pub pricing: Option<Pricing>,
    pub rating: Option<Rating>,
    pub images: Option<Images>,
    pub metadata: Option<Metadata>,
    pub seo: Option<Seo>,
}

// Only called when the key is present, so `null` becomes `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl PlacePatch {
    /// Shallow-merge the supplied sections onto `place`.
    pub fn apply_to(self, place: &mut Place) {
        if let Some(v) = self.slug {
            place.slug = v;
        }
        if let Some(v) = self.name {
            place.name = v;
        }
        if let Some(v) = self.category {
            place.category = v;
        }
        if let Some(v) = self.subcategory {
            place.subcategory = v;
        }
        if let Some(v) = self.description {
            place.description = v;
        }
        if let Some(v) = self.short_description {
            place.short_description = v;
        }
        if let Some(v) = self.location {
            place.location = v;
        }
        if let Some(v) = self.contact {
            place.contact = v;
        }
        if let Some(v) = self.operation {
            place.operation = v;
        }
        if let Some(v) = self.pet_policy {
            place.pet_policy = v;
        }
        if let Some(v) = self.amenities {
            place.amenities = v;
        }
        if let Some(v) = self.pricing {
            place.pricing = v;
        }
        if let Some(v) = self.rating {
            place.rating = v;
        }
        if let Some(v) = self.images {
            place.images = v;
        }
        if let Some(v) = self.metadata {
            place.metadata = v;
        }
        if let Some(v) = self.seo {
            place.seo = v;
        }
    }
}
