//! Line-level helpers shared by the `settings.conf` and `theme.conf` parsers.

/// What: Check if a config line carries no setting.
///
/// Details:
/// - Skips blank lines and lines starting with `#`, `//`, or `;`.
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Split a `key = value` line on its first `=`.
///
/// Output:
/// - Trimmed `(key, value)` borrowed from `line`, or `None` when there is no `=` or the key is blank.
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_pairs() {
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# note"));
        assert!(skip_comment_or_empty("// note"));
        assert!(!skip_comment_or_empty("sort = recent"));
        assert_eq!(
            split_key_value(" api_base_url = http://h/a?b=c "),
            Some(("api_base_url", "http://h/a?b=c"))
        );
        assert_eq!(split_key_value("= value"), None);
        assert_eq!(split_key_value("no pair"), None);
    }
}
