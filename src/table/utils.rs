/// Trim surrounding whitespace from a cell.
pub fn clean_str(raw: &str) -> &str {
    raw.trim()
}

/// Parse a string-encoded count. Anything that is not a plain integer
/// after trimming is `None`.
pub fn parse_count(raw: &str) -> Option<i64> {
    clean_str(raw).parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("100"), Some(100));
        assert_eq!(parse_count("  42 "), Some(42));
        assert_eq!(parse_count("-3"), Some(-3));
        assert_eq!(parse_count("bad"), None);
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("12.5"), None);
        assert_eq!(parse_count("1,200"), None);
    }
}
