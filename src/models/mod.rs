pub mod app_state;
pub mod filter;
pub mod place;
pub mod place_patch;
pub mod place_view;
pub mod region;
pub mod search_result;

pub use app_state::AppState;
pub use filter::{GeoRadius, PlaceFilter};
pub use place::{
    Amenities, Contact, DataSource, DayHours, Images, Location, Metadata, Operation, PetPolicy, PetSize, Place,
    PlaceCategory, PriceRange, Pricing, Rating, Seo, WeeklyHours,
};
pub use place_patch::PlacePatch;
pub use place_view::{HoursRow, PlaceCard, PlaceDetailView};
pub use region::{Region, RegionCount, RegionLevel};
pub use search_result::SearchResult;
