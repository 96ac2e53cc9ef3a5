//! Field types, options, and declarations.
//!
//! [`FieldType`] is the closed enumeration of every field kind the builder
//! supports. [`FieldDeclaration`] is one entry in a user-built form and
//! serializes to the same JSON wire shape the builder UI exchanges
//! (`fieldType`, `fieldLabel`, `maxLength`, `type` keys; absent optionals
//! omitted).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use formsmith_core::FormsmithError;

/// The closed set of field types a form can contain.
///
/// No other value is valid: deserialization and [`FromStr`] reject anything
/// outside this enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    /// A generic text input, refined by an optional HTML `type` attribute
    /// (e.g. "email", "number").
    Input,
    /// A password input with visibility toggle.
    PasswordInput,
    /// A multi-line text area.
    Textarea,
    /// A single-choice dropdown.
    Select,
    /// An on/off switch.
    Switch,
    /// A checkbox.
    Checkbox,
    /// A calendar date picker.
    DatePicker,
    /// A group of mutually exclusive radio buttons.
    RadioGroup,
    /// A searchable single-choice combobox.
    Combobox,
    /// A segmented one-time-code input.
    InputOtp,
    /// A numeric slider.
    Slider,
    /// A file upload control.
    FileUpload,
    /// A multiple-choice selector.
    MultiSelect,
    /// A free-form tags input.
    TagsInput,
    /// A rich-text editor.
    TiptapEditor,
}

impl FieldType {
    /// All field types, in palette order.
    pub const ALL: [Self; 15] = [
        Self::Input,
        Self::PasswordInput,
        Self::Textarea,
        Self::Select,
        Self::Switch,
        Self::Checkbox,
        Self::DatePicker,
        Self::RadioGroup,
        Self::Combobox,
        Self::InputOtp,
        Self::Slider,
        Self::FileUpload,
        Self::MultiSelect,
        Self::TagsInput,
        Self::TiptapEditor,
    ];

    /// Returns the kebab-case wire name of this field type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::PasswordInput => "password-input",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Switch => "switch",
            Self::Checkbox => "checkbox",
            Self::DatePicker => "date-picker",
            Self::RadioGroup => "radio-group",
            Self::Combobox => "combobox",
            Self::InputOtp => "input-otp",
            Self::Slider => "slider",
            Self::FileUpload => "file-upload",
            Self::MultiSelect => "multi-select",
            Self::TagsInput => "tags-input",
            Self::TiptapEditor => "tiptap-editor",
        }
    }

    /// Returns `true` if this field type carries an options list
    /// (select, radio group, combobox, multi select).
    pub const fn is_choice(self) -> bool {
        matches!(
            self,
            Self::Select | Self::RadioGroup | Self::Combobox | Self::MultiSelect
        )
    }

    /// Returns `true` if this field type holds a boolean value
    /// (checkbox, switch).
    pub const fn is_boolean(self) -> bool {
        matches!(self, Self::Checkbox | Self::Switch)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FormsmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ft| ft.as_str() == s)
            .ok_or_else(|| FormsmithError::UnknownFieldType(s.to_string()))
    }
}

/// One entry in a choice-based field's options list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    /// The display label shown to the user.
    pub label: String,
    /// The value submitted when this option is chosen.
    pub value: String,
}

impl FieldOption {
    /// Creates a new option from a label and a value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// One form field's configuration record.
///
/// Created when the user picks a field type from the palette (seeded from
/// the [`FieldCatalog`](crate::catalog::FieldCatalog)), mutated in place by
/// the edit dialog, and consumed by the generation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    /// Opaque stable identifier, unique within a form. Used for reordering
    /// and matching, never for display.
    pub id: String,
    /// The field type.
    #[serde(rename = "fieldType")]
    pub field_type: FieldType,
    /// The palette display label (e.g. "Password Input"). Used only to
    /// derive the markup component name; never serialized as a prop.
    #[serde(rename = "fieldLabel")]
    pub field_label: String,
    /// The runtime field key used in submitted values. Unique per form.
    pub name: String,
    /// The label rendered above the field.
    pub label: String,
    /// Optional help text rendered below the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional placeholder text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Optional HTML input sub-type ("email", "number", "text", ...).
    /// Meaningful only when `field_type` is [`FieldType::Input`].
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    /// Ordered options for choice-based field types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    /// Whether the field must be filled in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Whether the field is rendered but not editable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Code length for the one-time-code field type.
    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

impl FieldDeclaration {
    /// Creates a new declaration with the given identity and no optional
    /// attributes set.
    pub fn new(
        id: impl Into<String>,
        field_type: FieldType,
        field_label: impl Into<String>,
        name: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            field_type,
            field_label: field_label.into(),
            name: name.into(),
            label: label.into(),
            description: None,
            placeholder: None,
            input_type: None,
            options: None,
            required: None,
            disabled: None,
            max_length: None,
        }
    }

    /// Sets the help text.
    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Sets the HTML input sub-type.
    #[must_use]
    pub fn input_type(mut self, ty: impl Into<String>) -> Self {
        self.input_type = Some(ty.into());
        self
    }

    /// Sets the options list.
    #[must_use]
    pub fn options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = Some(options);
        self
    }

    /// Sets whether the field is required.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Sets whether the field is disabled.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Sets the one-time-code length.
    #[must_use]
    pub const fn max_length(mut self, len: u32) -> Self {
        self.max_length = Some(len);
        self
    }

    /// Returns `true` if the field is marked required.
    pub fn is_required(&self) -> bool {
        self.required == Some(true)
    }

    /// Returns the markup component name for this field: the palette label
    /// with all whitespace stripped, suffixed with `FormField`.
    ///
    /// "Password Input" becomes `PasswordInputFormField`.
    pub fn component_name(&self) -> String {
        let stripped: String = self
            .field_label
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!("{stripped}FormField")
    }
}
