// Schema validation for the optio generator
//
// This module checks a parsed schema before anything is emitted. The
// runtime loader never runs these checks; it stays lenient by design.

use std::collections::HashSet;

use crate::internal::error::{Error, Result};
use crate::runtime::coerce::numeric_prefix_len;
use crate::schema::types::Schema;

/// Validates a parsed schema prior to emission.
///
/// Rejected as schema-format errors:
/// - duplicate option names (names must be unique within a schema)
/// - names that are not valid identifiers in the emitted record
/// - `int`/`double` defaults with no parseable numeric prefix (such a
///   default would silently coerce to zero at every startup)
pub fn validate_schema(schema: &Schema) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for opt in schema.options() {
        if !is_identifier(&opt.name) {
            return Err(Error::SchemaFormatError(format!(
                "Option name '{}' is not a valid identifier",
                opt.name
            )));
        }

        if !seen.insert(opt.name.as_str()) {
            return Err(Error::SchemaFormatError(format!(
                "Duplicate option name '{}'",
                opt.name
            )));
        }

        if opt.option_type.is_numeric() && numeric_prefix_len(&opt.default) == 0 {
            return Err(Error::SchemaFormatError(format!(
                "Default '{}' for {} option '{}' is not numeric",
                opt.default,
                opt.option_type,
                opt.name
            )));
        }
    }

    Ok(())
}

/// Returns true if `name` is a valid record field identifier.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{OptionDescriptor, OptionType};

    fn descriptor(name: &str, option_type: OptionType, default: &str) -> OptionDescriptor {
        OptionDescriptor {
            name: name.to_string(),
            option_type,
            default: default.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_valid_schema_passes() {
        let schema = Schema::new(vec![
            descriptor("port", OptionType::Int, "8080"),
            descriptor("scale", OptionType::Double, "1.5"),
            descriptor("keys", OptionType::List, "a,b"),
            descriptor("_hidden", OptionType::String, ""),
        ]);
        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let schema = Schema::new(vec![
            descriptor("port", OptionType::Int, "1"),
            descriptor("port", OptionType::Int, "2"),
        ]);
        let err = validate_schema(&schema).unwrap_err();
        assert!(matches!(err, Error::SchemaFormatError(_)));
    }

    #[test]
    fn test_invalid_identifier_rejected() {
        for bad in ["", "9lives", "with-dash", "with space"] {
            let schema = Schema::new(vec![descriptor(bad, OptionType::String, "x")]);
            assert!(validate_schema(&schema).is_err(), "accepted '{}'", bad);
        }
    }

    #[test]
    fn test_non_numeric_default_rejected_for_numeric_types() {
        let schema = Schema::new(vec![descriptor("port", OptionType::Int, "default")]);
        assert!(validate_schema(&schema).is_err());

        let schema = Schema::new(vec![descriptor("scale", OptionType::Double, "big")]);
        assert!(validate_schema(&schema).is_err());
    }

    #[test]
    fn test_numeric_prefix_default_accepted() {
        // Lenient coercion only reads the prefix, so a trailing unit is
        // tolerated here the same way it is at runtime.
        let schema = Schema::new(vec![descriptor("timeout", OptionType::Int, "30s")]);
        assert!(validate_schema(&schema).is_ok());
    }
}
