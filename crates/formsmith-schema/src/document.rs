//! The ordered form document and its edit operations.
//!
//! A [`FormDocument`] is the ordered sequence of field declarations the user
//! assembles in the builder. Order is meaningful: it is the render and
//! submit order, and the generation pipeline preserves it exactly. The
//! document lives only for a browser session; there is no persistence.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use formsmith_core::{FormsmithError, FormsmithResult};

use crate::fields::FieldDeclaration;

/// An ordered sequence of field declarations plus the transient selection
/// index used by the edit dialog.
///
/// The selection index is UI bookkeeping only and never reaches the
/// generated output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDocument {
    /// The fields, in render/submit order.
    pub fields: Vec<FieldDeclaration>,
    /// The index of the field currently open in the edit dialog, if any.
    #[serde(
        rename = "selectedFormFieldIndex",
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_field_index: Option<usize>,
}

impl FormDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from an existing field list.
    pub fn from_fields(fields: Vec<FieldDeclaration>) -> Self {
        Self {
            fields,
            selected_field_index: None,
        }
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Appends a field to the end of the document.
    pub fn push(&mut self, field: FieldDeclaration) {
        self.fields.push(field);
    }

    /// Removes and returns the field at `index`, if it exists.
    ///
    /// Clears the selection if it pointed at the removed field.
    pub fn remove(&mut self, index: usize) -> Option<FieldDeclaration> {
        if index >= self.fields.len() {
            return None;
        }
        if self.selected_field_index == Some(index) {
            self.selected_field_index = None;
        }
        Some(self.fields.remove(index))
    }

    /// Replaces the field at `index` with `field`. Returns `false` if the
    /// index is out of bounds.
    pub fn update(&mut self, index: usize, field: FieldDeclaration) -> bool {
        match self.fields.get_mut(index) {
            Some(slot) => {
                *slot = field;
                true
            }
            None => false,
        }
    }

    /// Moves the field at `from` to position `to`, shifting the fields in
    /// between (the drag-reorder splice).
    ///
    /// Returns `false` if either index is out of bounds.
    pub fn move_field(&mut self, from: usize, to: usize) -> bool {
        if from >= self.fields.len() || to >= self.fields.len() {
            return false;
        }
        let field = self.fields.remove(from);
        self.fields.insert(to, field);
        true
    }

    /// Selects the field at `index` for editing. Returns `false` if the
    /// index is out of bounds.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.fields.len() {
            return false;
        }
        self.selected_field_index = Some(index);
        true
    }

    /// Returns the currently selected field, if any.
    pub fn selected(&self) -> Option<&FieldDeclaration> {
        self.selected_field_index
            .and_then(|i| self.fields.get(i))
    }

    /// Validates the document invariants:
    ///
    /// - choice-based fields carry at least one option
    /// - one-time-code fields carry a positive `maxLength`
    /// - field `name`s are unique across the document
    ///
    /// Duplicate names are rejected rather than silently letting the later
    /// entry win in the generated schema object.
    pub fn validate(&self) -> FormsmithResult<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.field_type.is_choice()
                && field.options.as_ref().map_or(true, Vec::is_empty)
            {
                return Err(FormsmithError::MissingOptions(field.name.clone()));
            }
            if field.field_type == crate::fields::FieldType::InputOtp
                && field.max_length.map_or(true, |len| len == 0)
            {
                return Err(FormsmithError::InvalidMaxLength(field.name.clone()));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(FormsmithError::DuplicateFieldName(field.name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FieldOption, FieldType};

    fn field(id: &str, name: &str) -> FieldDeclaration {
        FieldDeclaration::new(id, FieldType::Input, "Input", name, "Label")
    }

    #[test]
    fn test_push_and_remove() {
        let mut doc = FormDocument::new();
        assert!(doc.is_empty());
        doc.push(field("a", "one"));
        doc.push(field("b", "two"));
        assert_eq!(doc.len(), 2);

        let removed = doc.remove(0).unwrap();
        assert_eq!(removed.name, "one");
        assert_eq!(doc.fields[0].name, "two");
        assert!(doc.remove(5).is_none());
    }

    #[test]
    fn test_move_field_splices() {
        let mut doc = FormDocument::from_fields(vec![
            field("a", "one"),
            field("b", "two"),
            field("c", "three"),
        ]);
        assert!(doc.move_field(0, 2));
        let names: Vec<&str> = doc.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["two", "three", "one"]);
        assert!(!doc.move_field(0, 9));
    }

    #[test]
    fn test_update_and_select() {
        let mut doc = FormDocument::from_fields(vec![field("a", "one")]);
        assert!(doc.select(0));
        assert_eq!(doc.selected().unwrap().name, "one");

        let replacement = field("a", "renamed");
        assert!(doc.update(0, replacement));
        assert_eq!(doc.selected().unwrap().name, "renamed");
        assert!(!doc.select(3));
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut doc = FormDocument::from_fields(vec![field("a", "one"), field("b", "two")]);
        doc.select(1);
        doc.remove(1);
        assert!(doc.selected().is_none());
    }

    #[test]
    fn test_validate_duplicate_names() {
        let doc = FormDocument::from_fields(vec![field("a", "email"), field("b", "email")]);
        let err = doc.validate().unwrap_err();
        assert!(matches!(err, FormsmithError::DuplicateFieldName(name) if name == "email"));
    }

    #[test]
    fn test_validate_choice_requires_options() {
        let bare = FieldDeclaration::new("a", FieldType::Select, "Select", "role", "Role");
        let doc = FormDocument::from_fields(vec![bare.clone()]);
        assert!(matches!(
            doc.validate().unwrap_err(),
            FormsmithError::MissingOptions(name) if name == "role"
        ));

        let with_options = bare.options(vec![FieldOption::new("Admin", "admin")]);
        let doc = FormDocument::from_fields(vec![with_options]);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_validate_otp_max_length() {
        let otp = FieldDeclaration::new("a", FieldType::InputOtp, "Input OTP", "otp", "OTP");
        let doc = FormDocument::from_fields(vec![otp.clone()]);
        assert!(matches!(
            doc.validate().unwrap_err(),
            FormsmithError::InvalidMaxLength(name) if name == "otp"
        ));

        let doc = FormDocument::from_fields(vec![otp.max_length(6)]);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_selection_index_not_serialized_when_absent() {
        let doc = FormDocument::from_fields(vec![field("a", "one")]);
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("selectedFormFieldIndex").is_none());
    }
}
