use crate::models::place::Place;

/// Display strings for one place in a listing.
#[derive(Clone, Debug)]
pub struct PlaceCard {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub category_display: String,
    pub region_display: String,
    pub rating_display: String,
    pub pet_size_display: String,
    pub price_display: String,
    pub thumbnail: String,
    pub detail_url: String,
    pub verified: bool,
    pub featured: bool,
}

impl PlaceCard {
    pub fn from_place(place: &Place, base_url: &str) -> Self {
        Self {
            id: place.id.clone(),
            slug: place.slug.clone(),
            name: place.name.clone(),
            category_display: place.category.label().to_string(),
            region_display: format!("{} {}", place.location.sido, place.location.sigungu),
            rating_display: rating_display(place),
            pet_size_display: place.pet_policy.size_restriction.label().to_string(),
            price_display: place.pricing.range.label().to_string(),
            thumbnail: place.images.thumbnail.clone(),
            detail_url: crate::utils::absolute_url(base_url, &format!("/places/{}", place.slug)),
            verified: place.metadata.verified,
            featured: place.metadata.featured,
        }
    }
}

/// One row of the weekly hours table.
#[derive(Clone, Debug)]
pub struct HoursRow {
    pub day: String,
    pub hours: String,
}

/// Display strings for the place detail page.
#[derive(Clone, Debug)]
pub struct PlaceDetailView {
    pub card: PlaceCard,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub pet_allowed: bool,
    pub pet_fee_display: String,
    pub facilities: Vec<String>,
    pub rules: Vec<String>,
    pub required_documents: Vec<String>,
    pub hours: Vec<HoursRow>,
    pub closed_days: String,
    pub gallery: Vec<String>,
    pub seo_title: String,
    pub seo_description: String,
}

impl PlaceDetailView {
    pub fn from_place(place: &Place, base_url: &str) -> Self {
        let hours = place
            .operation
            .hours
            .days()
            .iter()
            .map(|(day, hours)| HoursRow {
                day: day.to_string(),
                hours: match hours {
                    Some(h) => format!("{} - {}", h.open, h.close),
                    None => "휴무".to_string(),
                },
            })
            .collect();
        let seo_title = if place.seo.title.is_empty() { place.name.clone() } else { place.seo.title.clone() };
        Self {
            card: PlaceCard::from_place(place, base_url),
            description: place.description.clone(),
            address: place
                .location
                .road_address
                .clone()
                .unwrap_or_else(|| place.location.address.clone()),
            phone: place.contact.phone.clone().unwrap_or_default(),
            website: place.contact.website.clone().unwrap_or_default(),
            pet_allowed: place.pet_policy.allowed,
            pet_fee_display: match place.pet_policy.fee {
                Some(fee) if fee > 0 => format!("{}원", fee),
                _ => "무료".to_string(),
            },
            facilities: place.pet_policy.facilities.clone(),
            rules: place.pet_policy.rules.clone(),
            required_documents: place.pet_policy.required_documents.clone(),
            hours,
            closed_days: place.operation.closed_days.join(", "),
            gallery: place.images.gallery.clone(),
            seo_title,
            seo_description: place.seo.description.clone(),
        }
    }
}

fn rating_display(place: &Place) -> String {
    format!("★ {:.1} ({})", place.rating.overall, place.rating.review_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::place::{DayHours, PetPolicy};

    #[test]
    fn card_formats_rating_and_url() {
        let mut place = Place { slug: "a-cafe".into(), ..Default::default() };
        place.rating.overall = 4.75;
        place.rating.review_count = 12;
        let card = PlaceCard::from_place(&place, "http://localhost:8080/");
        assert_eq!(card.rating_display, "★ 4.8 (12)");
        assert_eq!(card.detail_url, "http://localhost:8080/places/a-cafe");
    }

    #[test]
    fn detail_marks_closed_days_and_free_entry() {
        let mut place = Place {
            pet_policy: PetPolicy { allowed: true, fee: Some(0), ..Default::default() },
            ..Default::default()
        };
        place.operation.hours.monday = Some(DayHours { open: "09:00".into(), close: "18:00".into() });
        let view = PlaceDetailView::from_place(&place, "http://x");
        assert_eq!(view.hours[0].hours, "09:00 - 18:00");
        assert_eq!(view.hours[1].hours, "휴무");
        assert_eq!(view.pet_fee_display, "무료");
    }
}
