// Parser function emission
//
// Renders the parse entry point of the generated module. The emitted
// function initializes every field by coercing its default literal,
// returns the defaults when the file cannot be read, and otherwise walks
// the file line by line: blank lines are skipped, malformed lines
// terminate the process with a diagnostic naming the file and 1-based
// line number, and recognized keys are dispatched over an if/else-if
// chain in schema declaration order (first match wins). All coercion
// routes through the optio runtime helpers, so generated parsers share
// the library's semantics.

use crate::codegen::EmitConfig;
use crate::schema::types::{OptionType, Schema};

/// Renders the parse function for the given schema.
pub fn emit_parser(schema: &Schema, emit: &EmitConfig) -> String {
    let mut out = String::new();

    out.push_str("/// Reads the config file at `path` into a populated record.\n");
    out.push_str("///\n");
    out.push_str("/// Every field starts at its schema default; a missing file returns\n");
    out.push_str("/// the defaults unchanged. A malformed line terminates the process\n");
    out.push_str("/// with a diagnostic naming the file and line.\n");
    out.push_str(&format!(
        "pub fn {}(path: &std::path::Path) -> {} {{\n",
        emit.entry_point, emit.struct_name
    ));

    // Default initialization, one coercion per field.
    let binding = if schema.is_empty() { "let cfg" } else { "let mut cfg" };
    out.push_str(&format!("    {} = {} {{\n", binding, emit.struct_name));
    for opt in schema.options() {
        out.push_str(&format!(
            "        {}: {},\n",
            opt.name,
            coercion_call(opt.option_type, &rust_string_literal(&opt.default))
        ));
        if opt.option_type == OptionType::List {
            out.push_str(&format!("        {}_len: 0,\n", opt.name));
        }
    }
    out.push_str("    };\n");
    for opt in schema.options() {
        if opt.option_type == OptionType::List {
            out.push_str(&format!("    cfg.{0}_len = cfg.{0}.len();\n", opt.name));
        }
    }
    out.push('\n');

    // Missing-file fallback.
    out.push_str("    let text = match std::fs::read_to_string(path) {\n");
    out.push_str("        Ok(text) => text,\n");
    out.push_str("        Err(_) => return cfg,\n");
    out.push_str("    };\n");
    out.push('\n');

    // Line scan: skip blanks, tokenize, dispatch.
    out.push_str("    for (idx, line) in text.lines().enumerate() {\n");
    out.push_str("        if line.trim().is_empty() {\n");
    out.push_str("            continue;\n");
    out.push_str("        }\n");
    out.push('\n');

    let pair = if schema.is_empty() { "(_key, _value)" } else { "(key, value)" };
    out.push_str(&format!(
        "        let {} = match optio::runtime::key_value(line) {{\n",
        pair
    ));
    out.push_str("            Some(pair) => pair,\n");
    out.push_str("            None => {\n");
    out.push_str(
        "                eprintln!(\"Invalid entry in {} at line {}.\", path.display(), idx + 1);\n",
    );
    out.push_str("                std::process::exit(1);\n");
    out.push_str("            }\n");
    out.push_str("        };\n");

    // Declaration-order dispatch chain, first match wins.
    for (i, opt) in schema.options().iter().enumerate() {
        if i == 0 {
            out.push('\n');
            out.push_str("        if ");
        } else {
            out.push_str(" else if ");
        }
        out.push_str(&format!("key == {} {{\n", rust_string_literal(&opt.name)));
        out.push_str(&format!(
            "            cfg.{} = {};\n",
            opt.name,
            coercion_call(opt.option_type, "value")
        ));
        if opt.option_type == OptionType::List {
            out.push_str(&format!("            cfg.{0}_len = cfg.{0}.len();\n", opt.name));
        }
        out.push_str("        }");
    }
    if !schema.is_empty() {
        out.push('\n');
    }

    out.push_str("    }\n");
    out.push('\n');
    out.push_str("    cfg\n");
    out.push_str("}\n");

    out
}

/// Renders the runtime coercion call for one option type.
fn coercion_call(option_type: OptionType, input: &str) -> String {
    match option_type {
        OptionType::String => format!("optio::runtime::coerce_string({})", input),
        OptionType::Int => format!("optio::runtime::coerce_int({})", input),
        OptionType::Double => format!("optio::runtime::coerce_double({})", input),
        OptionType::List => format!("optio::runtime::split_list({})", input),
    }
}

/// Quotes text as a valid Rust string literal.
fn rust_string_literal(text: &str) -> String {
    format!("\"{}\"", text.escape_default())
}
