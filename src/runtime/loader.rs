// Config-file loader
//
// The loader is the reference implementation of the generated parser's
// resolution algorithm: every option starts at its coerced default, then a
// single pass over the config file overwrites matching options in file
// order. A missing config file returns the defaults unmodified; that is an
// intentional fallback, not an error.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::internal::error::{Error, Result};
use crate::runtime::coerce::{coerce_double, coerce_int, coerce_string};
use crate::runtime::line::key_value;
use crate::runtime::list::split_list;
use crate::schema::types::{OptionType, Schema};

/// One resolved option value, typed according to its descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Str(String),
    Int(i64),
    Double(f64),
    List(Vec<String>),
}

impl ConfigValue {
    /// Coerces raw text into a value of the given type, applying the
    /// type's coercion rule. Defaults and runtime values both go through
    /// here, so a malformed default degrades exactly like a malformed
    /// runtime value.
    pub fn coerce(option_type: OptionType, raw: &str) -> Self {
        match option_type {
            OptionType::String => ConfigValue::Str(coerce_string(raw)),
            OptionType::Int => ConfigValue::Int(coerce_int(raw)),
            OptionType::Double => ConfigValue::Double(coerce_double(raw)),
            OptionType::List => ConfigValue::List(split_list(raw)),
        }
    }

    /// Returns the string value, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the floating-point value, if this is a `Double`.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            ConfigValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the list elements, if this is a `List`.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ConfigValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Str(s) => write!(f, "{}", s),
            ConfigValue::Int(v) => write!(f, "{}", v),
            ConfigValue::Double(v) => write!(f, "{}", v),
            ConfigValue::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

/// A populated configuration record: one value per descriptor, in schema
/// declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigInstance {
    entries: Vec<(String, ConfigValue)>,
}

impl ConfigInstance {
    /// Creates an instance with every option at its coerced default.
    pub fn defaults(schema: &Schema) -> Self {
        let entries = schema
            .options()
            .iter()
            .map(|opt| {
                let value = ConfigValue::coerce(opt.option_type, &opt.default);
                (opt.name.clone(), value)
            })
            .collect();
        Self { entries }
    }

    /// Returns the value of the named option, first match in declaration
    /// order.
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| value)
    }

    /// Returns the element count of the named list option.
    pub fn list_len(&self, name: &str) -> Option<usize> {
        self.get(name).and_then(ConfigValue::as_list).map(|items| items.len())
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of options in the instance.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the instance holds no options.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies one `(key, value)` pair: scan descriptors in declaration
    /// order, exact name equality, first match wins. Unknown keys are
    /// silently ignored; a later pair for the same key overwrites the
    /// earlier value.
    fn assign(&mut self, schema: &Schema, key: &str, raw: &str) {
        for (i, opt) in schema.options().iter().enumerate() {
            if opt.name == key {
                tracing::debug!(option = %opt.name, "config override");
                self.entries[i].1 = ConfigValue::coerce(opt.option_type, raw);
                return;
            }
        }
    }
}

/// Reads a config file into a populated instance.
///
/// The instance starts at schema defaults. If the file cannot be opened it
/// is returned unmodified. Otherwise the file is scanned once, line by
/// line: whitespace-only lines are skipped as blank, every other line must
/// tokenize into a `(key, value)` pair or the whole parse aborts with a
/// [`Error::ConfigLineError`] naming the file and 1-based line number.
pub fn load_config(schema: &Schema, path: &Path) -> Result<ConfigInstance> {
    let mut instance = ConfigInstance::defaults(schema);

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => {
            tracing::debug!(path = %path.display(), "config file not readable, using defaults");
            return Ok(instance);
        }
    };

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (key, value) = key_value(line).ok_or_else(|| Error::ConfigLineError {
            file: path.display().to_string(),
            line: idx + 1,
        })?;

        instance.assign(schema, key, value);
    }

    Ok(instance)
}
