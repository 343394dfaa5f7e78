use urlencoding::encode;

/// Build a query string from key-value pairs
pub fn build_query_string(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_korean_values() {
        let pairs = vec![
            ("sido".to_string(), "서울특별시".to_string()),
            ("page".to_string(), "2".to_string()),
        ];
        assert_eq!(
            build_query_string(&pairs),
            "sido=%EC%84%9C%EC%9A%B8%ED%8A%B9%EB%B3%84%EC%8B%9C&page=2"
        );
    }
}
