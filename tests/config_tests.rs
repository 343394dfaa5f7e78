use eoseoogae::config;
use std::env;

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(config::sanitize_base_url("https://eoseoogae.kr/"), "https://eoseoogae.kr");
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(config::sanitize_base_url("https://eoseoogae.kr///"), "https://eoseoogae.kr");
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(config::sanitize_base_url("  https://eoseoogae.kr/  "), "https://eoseoogae.kr");
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url("   "), "http://localhost:8080");
}

#[test]
fn test_get_port_reads_env() {
    env::set_var("PORT", "9191");
    assert_eq!(config::get_port(), 9191);
    env::set_var("PORT", "not-a-port");
    assert_eq!(config::get_port(), config::DEFAULT_PORT);
    env::remove_var("PORT");
}

#[test]
fn test_max_page_size_is_at_least_one() {
    env::set_var("MAX_PAGE_SIZE", "0");
    assert_eq!(config::get_max_page_size(), 1);
    env::remove_var("MAX_PAGE_SIZE");
    assert_eq!(config::get_max_page_size(), config::MAX_PAGE_SIZE);
}

#[test]
fn test_places_file_blank_is_none() {
    env::set_var("PLACES_FILE", "  ");
    assert_eq!(config::get_places_file(), None);
    env::set_var("PLACES_FILE", "data/places.json");
    assert_eq!(config::get_places_file().as_deref(), Some("data/places.json"));
    env::remove_var("PLACES_FILE");
}
