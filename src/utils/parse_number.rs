use std::str::FromStr;

/// Parse an optional number. Missing or blank input is `Ok(None)`; anything
/// that does not parse is returned as the error value.
pub fn parse_optional_number<T: FromStr>(value: Option<&String>) -> Result<Option<T>, String> {
    match value.map(|v| v.trim()) {
        None | Some("") => Ok(None),
        Some(t) => t.parse::<T>().map(Some).map_err(|_| t.to_string()),
    }
}
