// Record layout derivation
//
// The layout is the intermediate form between the abstract schema and the
// emitted target syntax: an ordered field sequence, one field per
// descriptor, plus an element-count field after each list field. It is
// derived once and never mutated afterwards.

use crate::schema::types::{OptionType, Schema};

/// The kind of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Owned string value
    Str,
    /// Signed integer value
    Int,
    /// Floating-point value
    Double,
    /// Sequence-of-strings value
    List,
    /// Derived element count of the preceding list field
    ListLen,
}

impl FieldKind {
    /// Returns the Rust type the field is emitted with.
    pub fn rust_type(&self) -> &'static str {
        match self {
            FieldKind::Str => "String",
            FieldKind::Int => "i64",
            FieldKind::Double => "f64",
            FieldKind::List => "Vec<String>",
            FieldKind::ListLen => "usize",
        }
    }
}

/// One field of the emitted record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordField {
    /// Field identifier in the emitted struct
    pub name: String,
    /// Field kind, fixing the emitted type
    pub kind: FieldKind,
}

/// The ordered field sequence of the emitted record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordLayout {
    fields: Vec<RecordField>,
}

impl RecordLayout {
    /// Derives the layout from a schema. Field order follows declaration
    /// order; every list option contributes its value field immediately
    /// followed by its `<name>_len` count field.
    pub fn derive(schema: &Schema) -> Self {
        let mut fields = Vec::with_capacity(schema.record_field_count());

        for opt in schema.options() {
            let kind = match opt.option_type {
                OptionType::String => FieldKind::Str,
                OptionType::Int => FieldKind::Int,
                OptionType::Double => FieldKind::Double,
                OptionType::List => FieldKind::List,
            };
            fields.push(RecordField {
                name: opt.name.clone(),
                kind,
            });

            if opt.option_type == OptionType::List {
                fields.push(RecordField {
                    name: format!("{}_len", opt.name),
                    kind: FieldKind::ListLen,
                });
            }
        }

        Self { fields }
    }

    /// Returns the fields in emission order.
    pub fn fields(&self) -> &[RecordField] {
        &self.fields
    }

    /// Number of fields in the layout.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the layout holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
