//! Default-value derivation for generated forms.
//!
//! Every field gets an initial value in the generated form's
//! `defaultValues` / `initialValues` block: `false` for boolean-typed
//! fields, `0` for number inputs, and the empty string for everything else.
//! Total over the field-type enumeration.

use serde_json::{json, Value};

use formsmith_schema::{FieldDeclaration, FieldType};

/// Derives the default runtime value for a field.
pub fn default_value(field: &FieldDeclaration) -> Value {
    match field.field_type {
        FieldType::Checkbox | FieldType::Switch => json!(false),
        FieldType::Input => match field.input_type.as_deref() {
            Some("number") => json!(0),
            _ => json!(""),
        },
        _ => json!(""),
    }
}

/// Renders the `key: value` default lines for a field list, one per field
/// in declaration order, with the given indent.
pub fn defaults_block(fields: &[FieldDeclaration], indent: &str) -> String {
    fields
        .iter()
        .map(|field| format!("{indent}{}: {}", field.name, default_value(field)))
        .collect::<Vec<_>>()
        .join(",\n")
}
