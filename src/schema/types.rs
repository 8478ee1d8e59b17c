// Option type system for the optio generator
//
// This module defines the core types of the schema: the closed set of
// option types, the per-option descriptor, and the immutable descriptor
// sequence that the rest of the pipeline is threaded with.

use std::fmt;

/// The data types an option declaration may carry.
///
/// This is a closed enumeration; the schema reader rejects any other type
/// token. `List` is a sequence-of-string type and additionally contributes
/// a derived element-count field to the record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// Owned character sequence, copied verbatim from the config value
    String,
    /// Signed integer, coerced leniently (numeric prefix, zero on failure)
    Int,
    /// Floating point, coerced leniently (numeric prefix, zero on failure)
    Double,
    /// Comma-separated sequence of strings plus a derived count
    List,
}

impl OptionType {
    /// Parses a schema type token into an `OptionType`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "string" => Some(OptionType::String),
            "int" => Some(OptionType::Int),
            "double" => Some(OptionType::Double),
            "list" => Some(OptionType::List),
            _ => None,
        }
    }

    /// Returns the schema token for this type.
    pub fn token(&self) -> &'static str {
        match self {
            OptionType::String => "string",
            OptionType::Int => "int",
            OptionType::Double => "double",
            OptionType::List => "list",
        }
    }

    /// Returns true if values of this type are coerced numerically.
    pub fn is_numeric(&self) -> bool {
        matches!(self, OptionType::Int | OptionType::Double)
    }

    /// Number of record fields this type contributes.
    ///
    /// Every type contributes its value field; `List` also contributes the
    /// element-count field.
    pub fn field_count(&self) -> usize {
        match self {
            OptionType::List => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One parsed schema line: an option's name, type, default literal, and
/// documentation text.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDescriptor {
    /// Option name; unique within a schema and a valid identifier
    pub name: String,
    /// Declared option type
    pub option_type: OptionType,
    /// Default value, kept as literal text and coerced like a config value
    pub default: String,
    /// Free documentation text; never consulted by the parser
    pub description: String,
}

/// An ordered, immutable sequence of option descriptors.
///
/// Declaration order is part of the observable contract: it fixes both the
/// emitted record field order and the first-match-wins dispatch order of
/// the generated parser.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    options: Vec<OptionDescriptor>,
}

impl Schema {
    /// Creates a schema from an ordered descriptor sequence.
    pub fn new(options: Vec<OptionDescriptor>) -> Self {
        Self { options }
    }

    /// Returns the descriptors in declaration order.
    pub fn options(&self) -> &[OptionDescriptor] {
        &self.options
    }

    /// Returns the first descriptor whose name matches exactly.
    pub fn find(&self, name: &str) -> Option<&OptionDescriptor> {
        self.options.iter().find(|opt| opt.name == name)
    }

    /// Number of declared options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the schema declares no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Total number of record fields the schema maps to, counting the
    /// extra element-count field of each list option.
    pub fn record_field_count(&self) -> usize {
        self.options.iter().map(|opt| opt.option_type.field_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_token_round_trip() {
        for token in ["string", "int", "double", "list"] {
            let ty = OptionType::from_token(token).unwrap();
            assert_eq!(ty.token(), token);
        }
        assert_eq!(OptionType::from_token("float"), None);
        assert_eq!(OptionType::from_token("String"), None);
    }

    #[test]
    fn test_field_count_per_type() {
        assert_eq!(OptionType::String.field_count(), 1);
        assert_eq!(OptionType::Int.field_count(), 1);
        assert_eq!(OptionType::Double.field_count(), 1);
        assert_eq!(OptionType::List.field_count(), 2);
    }

    #[test]
    fn test_find_is_first_match_in_declaration_order() {
        let schema = Schema::new(vec![
            OptionDescriptor {
                name: "speed".to_string(),
                option_type: OptionType::Int,
                default: "10".to_string(),
                description: "first".to_string(),
            },
            OptionDescriptor {
                name: "speed".to_string(),
                option_type: OptionType::Double,
                default: "2.5".to_string(),
                description: "second".to_string(),
            },
        ]);

        let hit = schema.find("speed").unwrap();
        assert_eq!(hit.option_type, OptionType::Int);
        assert_eq!(hit.description, "first");
    }

    #[test]
    fn test_record_field_count_counts_list_twice() {
        let schema = Schema::new(vec![
            OptionDescriptor {
                name: "host".to_string(),
                option_type: OptionType::String,
                default: "localhost".to_string(),
                description: String::new(),
            },
            OptionDescriptor {
                name: "keys".to_string(),
                option_type: OptionType::List,
                default: "a,b".to_string(),
                description: String::new(),
            },
        ]);

        assert_eq!(schema.record_field_count(), 3);
    }
}
