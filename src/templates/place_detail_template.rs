use askama::Template;

use crate::models::PlaceDetailView;

#[derive(Template)]
#[template(path = "place_detail.html")]
pub struct PlaceDetailTemplate {
    pub base_url: String,
    pub page_title: String,
    pub place: PlaceDetailView,
}

crate::impl_base_template!(PlaceDetailTemplate);
