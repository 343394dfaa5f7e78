// URL handling utilities
pub mod query_string;
pub mod url_builder;

// Parsing utilities
pub mod parse_flag;
pub mod parse_list;
pub mod parse_number;

pub mod pagination;

// Re-export all utilities for convenient access
pub use pagination::{page_window, PageWindow};
pub use parse_flag::parse_flag;
pub use parse_list::parse_csv_list;
pub use parse_number::parse_optional_number;
pub use query_string::build_query_string;
pub use url_builder::absolute_url;
