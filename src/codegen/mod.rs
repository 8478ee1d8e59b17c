// Code generation module for the optio generator
//
// This module covers the emission half of the pipeline:
//
// 1. Record layout derivation from the descriptor sequence
// 2. Record struct and parser function emission (target syntax)
// 3. Documentation template substitution
// 4. The compiler driver state machine tying the stages together

// Re-export public types and functions
pub use self::docs::render_options;
pub use self::driver::{compile_schema, CompileContext, CompileState, GeneratedModule};
pub use self::layout::{FieldKind, RecordField, RecordLayout};
pub use self::parser::emit_parser;
pub use self::record::emit_record;

// Sub-modules
pub mod docs;
pub mod driver;
pub mod layout;
pub mod parser;
pub mod record;

/// Naming configuration for the emitted module.
#[derive(Debug, Clone)]
pub struct EmitConfig {
    /// Name of the emitted record struct
    pub struct_name: String,
    /// Name of the emitted parse entry point
    pub entry_point: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            struct_name: "Config".to_string(),
            entry_point: "parse_config".to_string(),
        }
    }
}
