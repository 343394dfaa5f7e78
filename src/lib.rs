//! 어서오개: a directory of dog-friendly places in Korea.
//!
//! The heart of the crate is [`services::PlaceStore`], an in-memory place
//! collection with filtered search. The `handlers`/`routes` modules expose it
//! over HTTP and the binary wraps it in a CLI.

pub mod config;
pub mod geo;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod templates;
pub mod utils;

pub use models::{AppState, Place, PlaceFilter, SearchResult};
pub use services::{PlaceStore, StoreError};
