// Key/value line tokenizer
//
// One config line holds one `key: value` pair. The key begins at the first
// non-space character and runs to the FIRST colon; its right edge is not
// re-trimmed, so embedded spaces survive and a key written with trailing
// spaces before the colon keeps them. After the colon, leading space
// characters are skipped and the remainder is the value.

/// Tokenizes one raw config line into `(key, value)`.
///
/// Returns `None` when the line has no colon, or when no non-space
/// character precedes the first colon (an empty key is rejected). An empty
/// value after the colon is valid. A trailing newline is excluded from the
/// value. Lines consisting solely of whitespace are expected to be skipped
/// upstream and never reach this tokenizer.
pub fn key_value(line: &str) -> Option<(&str, &str)> {
    let line = line.strip_suffix('\n').unwrap_or(line);

    let colon = line.find(':')?;
    let before = &line[..colon];
    let key_start = before.find(|c: char| c != ' ')?;
    let key = &before[key_start..];

    let value = line[colon + 1..].trim_start_matches(' ');

    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_pair() {
        assert_eq!(key_value("name: value\n"), Some(("name", "value")));
        assert_eq!(key_value("name:value"), Some(("name", "value")));
    }

    #[test]
    fn test_leading_spaces_before_key_skipped() {
        assert_eq!(key_value("   name: value"), Some(("name", "value")));
    }

    #[test]
    fn test_key_right_edge_not_trimmed() {
        assert_eq!(key_value("name : value"), Some(("name ", "value")));
    }

    #[test]
    fn test_key_keeps_embedded_spaces() {
        assert_eq!(key_value("exit key: ctrl-c"), Some(("exit key", "ctrl-c")));
    }

    #[test]
    fn test_first_colon_terminates_key() {
        assert_eq!(key_value("url: http://example"), Some(("url", "http://example")));
    }

    #[test]
    fn test_multiple_value_spaces_skipped() {
        assert_eq!(key_value("name:    value"), Some(("name", "value")));
    }

    #[test]
    fn test_empty_value_is_valid() {
        assert_eq!(key_value("name:"), Some(("name", "")));
        assert_eq!(key_value("name: \n"), Some(("name", "")));
    }

    #[test]
    fn test_no_colon_fails() {
        assert_eq!(key_value("just some text"), None);
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(key_value(":value"), None);
        assert_eq!(key_value("   : value"), None);
    }
}
