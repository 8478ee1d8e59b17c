// Schema module for the optio generator
//
// This module covers the compile-time half of the pipeline:
//
// 1. Option type system with coercion and field-contribution rules
// 2. Line-oriented schema reader
// 3. Schema-level validation run before any emission

// Re-export public types and functions
pub use self::reader::read_schema;
pub use self::types::{OptionDescriptor, OptionType, Schema};
pub use self::validator::validate_schema;

// Sub-modules
pub mod reader;
pub mod types;
pub mod validator;
