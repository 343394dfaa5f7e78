use std::env;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PUBLIC_BASE_URL: &str = "";
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;
pub const DEFAULT_RECOMMENDED_LIMIT: usize = 6;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        if let Err(e) = dotenvy::from_path(Path::new(path)) {
            tracing::warn!(%e, path, "Could not load env file");
        }
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_host() -> String {
    env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string())
}

pub fn get_port() -> u16 {
    parse_or_default("PORT", DEFAULT_PORT)
}

/// Optional JSON seed file; the bundled sample data is used when unset.
pub fn get_places_file() -> Option<String> {
    env::var("PLACES_FILE")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn get_default_page_size() -> usize {
    parse_or_default("DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE).max(1)
}

pub fn get_max_page_size() -> usize {
    parse_or_default("MAX_PAGE_SIZE", MAX_PAGE_SIZE).max(1)
}

pub fn get_public_base_url() -> String {
    sanitize_base_url(&env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string()))
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        format!("http://localhost:{}", DEFAULT_PORT)
    } else {
        trimmed.to_string()
    }
}

fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!(key, %e, %default, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}
