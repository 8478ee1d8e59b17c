// Documentation template substitution
//
// Replaces every `{opts}` placeholder in a template with one formatted
// entry per descriptor, in declaration order. The rendered text is handed
// to external packaging; nothing here feeds back into the parser.

use crate::schema::types::Schema;

/// Placeholder replaced with the formatted option entries.
const OPTS_PLACEHOLDER: &str = "{opts}";

/// Renders the option entries of a schema into a documentation template.
pub fn render_options(template: &str, schema: &Schema) -> String {
    let mut entries = String::new();
    for opt in schema.options() {
        entries.push_str(&format!(
            "*{}*: {} (default: {}).\n\n",
            opt.name, opt.description, opt.default
        ));
    }

    template.replace(OPTS_PLACEHOLDER, &entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::read_schema;

    #[test]
    fn test_entries_substituted_in_order() {
        let schema = read_schema(
            "port int 8080 \"Listening port\"\nhost string localhost \"Bind host\"\n",
        )
        .unwrap();
        let rendered = render_options("# Options\n\n{opts}end", &schema);

        assert!(rendered.starts_with("# Options\n\n*port*: Listening port (default: 8080).\n\n"));
        assert!(rendered.contains("*host*: Bind host (default: localhost).\n\n"));
        assert!(rendered.ends_with("end"));

        let port_at = rendered.find("*port*").unwrap();
        let host_at = rendered.find("*host*").unwrap();
        assert!(port_at < host_at);
    }

    #[test]
    fn test_every_placeholder_replaced() {
        let schema = read_schema("port int 8080 \"Port\"").unwrap();
        let rendered = render_options("{opts}---{opts}", &schema);
        assert!(!rendered.contains("{opts}"));
        assert_eq!(rendered.matches("*port*").count(), 2);
    }

    #[test]
    fn test_template_without_placeholder_untouched() {
        let schema = read_schema("port int 8080 \"Port\"").unwrap();
        assert_eq!(render_options("plain text", &schema), "plain text");
    }
}
