use askama::Template;

use crate::models::PlaceCard;

/// An `<option>` in a filter dropdown.
#[derive(Clone, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "places.html")]
pub struct PlacesTemplate {
    pub base_url: String,
    pub page_title: String,
    pub cards: Vec<PlaceCard>,
    pub recommended: Vec<PlaceCard>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub prev_url: String,
    pub next_url: String,
    pub sido: String,
    pub category_options: Vec<SelectOption>,
    pub pet_size_options: Vec<SelectOption>,
    pub error_message: String,
}

crate::impl_base_template!(PlacesTemplate);
