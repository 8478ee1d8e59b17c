// Runtime behavior of the generated parser
//
// Everything a generated config parser does at startup lives here: the
// lenient text coercions, the list-value splitter, the key/value line
// tokenizer, and the loader that resolves defaults against a config file.
// Generated modules call into these helpers so the emitted code and the
// library share a single implementation of the semantics.

// Re-export the helpers generated code routes through
pub use self::coerce::{coerce_double, coerce_int, coerce_string};
pub use self::line::key_value;
pub use self::list::split_list;
pub use self::loader::{load_config, ConfigInstance, ConfigValue};

// Sub-modules
pub mod coerce;
pub mod line;
pub mod list;
pub mod loader;
