// Line-oriented schema reader for the optio generator
//
// Each non-empty schema line declares one option:
//
//   <name> <type> <default> "<description>"
//
// where <default> is either a bare token or a double-quoted string. The
// quoted form is tried first so that defaults containing spaces survive.

use regex::Regex;

use crate::internal::error::{Error, Result};
use crate::schema::types::{OptionDescriptor, OptionType, Schema};

/// Grammar of a declaration whose default is double-quoted.
const QUOTED_FORM: &str = r#"^(\S*)\s+(\S*)\s+"([^"]*)"\s+"([^"]*)"$"#;

/// Grammar of a declaration whose default is a bare token.
const BARE_FORM: &str = r#"^(\S*)\s+(\S*)\s+(\S*)\s+"([^"]*)"$"#;

/// Parses schema text into an ordered descriptor sequence.
///
/// Empty lines are skipped; no comments are supported. Any other line that
/// matches neither grammar, or that names an unknown option type, aborts
/// the whole compilation with a [`Error::SchemaFormatError`] carrying the
/// 1-based line number. Source order is preserved.
pub fn read_schema(text: &str) -> Result<Schema> {
    let quoted = Regex::new(QUOTED_FORM)
        .map_err(|e| Error::InternalError(format!("Invalid schema grammar pattern: {}", e)))?;
    let bare = Regex::new(BARE_FORM)
        .map_err(|e| Error::InternalError(format!("Invalid schema grammar pattern: {}", e)))?;

    let mut options = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let ln = idx + 1;
        if line.is_empty() {
            continue;
        }

        // Quoted-default form first, then the bare-token form.
        let captures = quoted
            .captures(line)
            .or_else(|| bare.captures(line))
            .ok_or_else(|| {
                Error::SchemaFormatError(format!("Malformed declaration at line {}", ln))
            })?;

        let name = captures[1].to_string();
        let type_token = &captures[2];
        let option_type = OptionType::from_token(type_token).ok_or_else(|| {
            Error::SchemaFormatError(format!(
                "Unknown option type '{}' at line {}",
                type_token, ln
            ))
        })?;

        options.push(OptionDescriptor {
            name,
            option_type,
            default: captures[3].to_string(),
            description: captures[4].to_string(),
        });
    }

    tracing::debug!(options = options.len(), "schema read");
    Ok(Schema::new(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_default_form() {
        let schema = read_schema("port int 8080 \"Listening port\"").unwrap();
        assert_eq!(schema.len(), 1);

        let opt = &schema.options()[0];
        assert_eq!(opt.name, "port");
        assert_eq!(opt.option_type, OptionType::Int);
        assert_eq!(opt.default, "8080");
        assert_eq!(opt.description, "Listening port");
    }

    #[test]
    fn test_quoted_default_form() {
        let schema = read_schema("greeting string \"hello world\" \"Greeting text\"").unwrap();
        let opt = &schema.options()[0];
        assert_eq!(opt.default, "hello world");
        assert_eq!(opt.description, "Greeting text");
    }

    #[test]
    fn test_quoted_form_wins_over_bare_form() {
        // A quoted default with no spaces also matches the bare form; the
        // quoted form must strip the quotes.
        let schema = read_schema("name string \"anon\" \"User name\"").unwrap();
        assert_eq!(schema.options()[0].default, "anon");
    }

    #[test]
    fn test_empty_lines_skipped_and_order_preserved() {
        let text = "port int 8080 \"Port\"\n\nhost string localhost \"Host\"\n";
        let schema = read_schema(text).unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.options()[0].name, "port");
        assert_eq!(schema.options()[1].name, "host");
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let text = "port int 8080 \"Port\"\nnot a declaration\n";
        let err = read_schema(text).unwrap_err();
        match err {
            Error::SchemaFormatError(msg) => assert!(msg.contains("line 2"), "{}", msg),
            other => panic!("Expected SchemaFormatError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_token_rejected() {
        let err = read_schema("flag bool true \"A flag\"").unwrap_err();
        match err {
            Error::SchemaFormatError(msg) => assert!(msg.contains("bool"), "{}", msg),
            other => panic!("Expected SchemaFormatError, got {:?}", other),
        }
    }

    #[test]
    fn test_unmatched_quote_falls_back_to_bare_form() {
        // An unbalanced default quote degrades silently: the bare form
        // still matches and the stray quote lands inside the default.
        let schema = read_schema("name string \"anon \"User name\"").unwrap();
        assert_eq!(schema.options()[0].default, "\"anon");
        assert_eq!(schema.options()[0].description, "User name");
    }

    #[test]
    fn test_unquoted_description_fails_both_forms() {
        let err = read_schema("greet string hi Greeting").unwrap_err();
        assert!(matches!(err, Error::SchemaFormatError(_)));
    }

    #[test]
    fn test_whitespace_only_line_is_not_blank() {
        // Only exactly-empty lines are filtered; a spaces-only line matches
        // neither grammar.
        let err = read_schema("   \n").unwrap_err();
        assert!(matches!(err, Error::SchemaFormatError(_)));
    }

    #[test]
    fn test_list_declaration() {
        let schema = read_schema("keys list \"a, b, c\" \"Bound keys\"").unwrap();
        let opt = &schema.options()[0];
        assert_eq!(opt.option_type, OptionType::List);
        assert_eq!(opt.default, "a, b, c");
    }
}
