pub mod error;
pub mod helpers;
pub mod pages;
pub mod places_api;

pub use error::ApiError;
