/// Build an absolute URL from a base URL and a path
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return base_url.to_string();
    }
    format!("{}/{}", base_url.trim_end_matches('/'), trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_slash() {
        assert_eq!(absolute_url("http://localhost:8080/", "/places/a"), "http://localhost:8080/places/a");
        assert_eq!(absolute_url("http://localhost:8080", "places/a"), "http://localhost:8080/places/a");
    }

    #[test]
    fn keeps_absolute_paths() {
        assert_eq!(absolute_url("http://x", "https://cdn.example.com/a.jpg"), "https://cdn.example.com/a.jpg");
    }
}
