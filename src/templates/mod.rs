// Base template trait for inheritance
pub mod base_template;
pub use base_template::BaseTemplate;

pub mod place_detail_template;
pub mod places_template;

pub use place_detail_template::PlaceDetailTemplate;
pub use places_template::{PlacesTemplate, SelectOption};
