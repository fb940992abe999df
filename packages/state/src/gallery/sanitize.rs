//! Clean-up of raw image sources.

use serde_json::Value;

fn is_wrapping(c: char) -> bool {
    c.is_whitespace() || c == '"' || c == '\''
}

/// Strip surrounding whitespace and quote characters. `None` if nothing is left.
pub fn sanitize_source(raw: &str) -> Option<String> {
    let cleaned = raw.trim_matches(is_wrapping);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Only absolute URLs and site-relative paths are displayable.
pub fn is_displayable(url: &str) -> bool {
    !url.is_empty() && (url.starts_with("http") || url.starts_with('/'))
}

/// Sanitize and validate string sources, keeping input order.
pub fn validate_sources<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|s| sanitize_source(s.as_ref()))
        .filter(|url| is_displayable(url))
        .collect()
}

/// Same as [`validate_sources`] over JSON values; non-strings are dropped.
pub fn validate_values(raw: &[Value]) -> Vec<String> {
    validate_sources(raw.iter().filter_map(Value::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_documented_example() {
        let raw = ["  \"http://a.jpg\"  ", "", "not-a-url", "/b.png"];
        assert_eq!(validate_sources(raw), vec!["http://a.jpg", "/b.png"]);
    }

    #[test]
    fn test_non_strings_dropped() {
        let raw = vec![json!("'/one.jpg'"), json!(42), json!(null), json!({"src": "/x"}), json!("https://cdn/two.jpg")];
        assert_eq!(validate_values(&raw), vec!["/one.jpg", "https://cdn/two.jpg"]);
    }

    #[test]
    fn test_no_dedup_or_reorder() {
        let raw = ["/b.png", "/a.png", "/b.png"];
        assert_eq!(validate_sources(raw), vec!["/b.png", "/a.png", "/b.png"]);
    }

    #[test]
    fn test_idempotent() {
        let inputs: Vec<Vec<&str>> = vec![
            vec!["  \"http://a.jpg\"  ", "", "not-a-url", "/b.png"],
            vec!["\"a\" \"", "'/x.jpg' ", "\" /y.jpg\"", "  ' '  "],
            vec!["http", "/", "\"\"", "ftp://z.jpg"],
        ];
        for input in inputs {
            let once = validate_sources(&input);
            let twice = validate_sources(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_quotes_only_entry_is_empty() {
        assert_eq!(sanitize_source(" \"\" "), None);
        assert_eq!(sanitize_source("'\"/c.png\"'"), Some("/c.png".to_string()));
    }
}
