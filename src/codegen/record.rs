// Record struct emission
//
// Renders the derived record layout as the target-syntax struct
// definition, one public field per layout entry.

use crate::codegen::layout::RecordLayout;
use crate::codegen::EmitConfig;

/// Renders the record struct for the given layout.
pub fn emit_record(layout: &RecordLayout, emit: &EmitConfig) -> String {
    let mut out = String::new();

    out.push_str("/// Configuration record, one field per option declaration\n");
    out.push_str("/// (plus an element-count field per list option).\n");
    out.push_str("#[derive(Debug, Clone, PartialEq)]\n");
    out.push_str(&format!("pub struct {} {{\n", emit.struct_name));
    for field in layout.fields() {
        out.push_str(&format!("    pub {}: {},\n", field.name, field.kind.rust_type()));
    }
    out.push_str("}\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::layout::RecordLayout;
    use crate::schema::read_schema;

    #[test]
    fn test_emitted_struct_fields() {
        let schema = read_schema(
            "port int 8080 \"Port\"\nkeys list \"a, b\" \"Keys\"\n",
        )
        .unwrap();
        let layout = RecordLayout::derive(&schema);
        let source = emit_record(&layout, &EmitConfig::default());

        assert!(source.contains("pub struct Config {"));
        assert!(source.contains("    pub port: i64,"));
        assert!(source.contains("    pub keys: Vec<String>,"));
        assert!(source.contains("    pub keys_len: usize,"));
    }

    #[test]
    fn test_struct_name_is_configurable() {
        let schema = read_schema("port int 8080 \"Port\"").unwrap();
        let layout = RecordLayout::derive(&schema);
        let emit = EmitConfig {
            struct_name: "DaemonConfig".to_string(),
            ..EmitConfig::default()
        };
        let source = emit_record(&layout, &emit);
        assert!(source.contains("pub struct DaemonConfig {"));
    }

    #[test]
    fn test_empty_schema_emits_empty_struct() {
        let layout = RecordLayout::derive(&read_schema("").unwrap());
        let source = emit_record(&layout, &EmitConfig::default());
        assert!(source.contains("pub struct Config {\n}"));
    }
}
