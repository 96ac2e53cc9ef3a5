//! The palette catalog seeding new fields with per-type defaults.
//!
//! When the user picks a field type from the palette, the new declaration is
//! not blank: it starts from a [`FieldSeed`] with an example label,
//! description, placeholder, and (for choice types) a starter options list.
//! The catalog is an explicit immutable value handed to whoever needs it,
//! not module-level shared state, so tests can swap in fixture catalogs.

use std::collections::HashMap;

use crate::fields::{FieldDeclaration, FieldOption, FieldType};
use crate::ids::short_id;

/// The palette defaults for one field type.
///
/// Seeds carry no `name`: the name key is minted from the fresh field id at
/// creation time so that picking the same palette type twice never collides.
#[derive(Debug, Clone)]
pub struct FieldSeed {
    /// The palette display label ("Input", "Password Input", ...).
    pub field_label: String,
    /// The example field label.
    pub label: String,
    /// Optional example help text.
    pub description: Option<String>,
    /// Optional example placeholder.
    pub placeholder: Option<String>,
    /// Default HTML input sub-type, for the generic input only.
    pub input_type: Option<String>,
    /// Starter options for choice-based types.
    pub options: Option<Vec<FieldOption>>,
    /// Default code length for the one-time-code type.
    pub max_length: Option<u32>,
}

impl FieldSeed {
    fn new(field_label: &str, label: &str) -> Self {
        Self {
            field_label: field_label.to_string(),
            label: label.to_string(),
            description: None,
            placeholder: None,
            input_type: None,
            options: None,
            max_length: None,
        }
    }

    fn description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }

    fn input_type(mut self, ty: &str) -> Self {
        self.input_type = Some(ty.to_string());
        self
    }

    fn options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = Some(options);
        self
    }

    const fn max_length(mut self, len: u32) -> Self {
        self.max_length = Some(len);
        self
    }
}

/// The catalog of palette defaults, keyed by field type.
///
/// Covers every [`FieldType`]; [`FieldCatalog::new_field`] is total over the
/// enumeration.
#[derive(Debug, Clone)]
pub struct FieldCatalog {
    entries: HashMap<FieldType, FieldSeed>,
}

impl FieldCatalog {
    /// Builds the built-in catalog with the standard palette defaults.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            FieldType::Input,
            FieldSeed::new("Input", "Username")
                .description("Enter your username.")
                .placeholder("Sarath")
                .input_type("text"),
        );
        entries.insert(
            FieldType::PasswordInput,
            FieldSeed::new("Password Input", "Password")
                .description("Enter your password.")
                .placeholder("********"),
        );
        entries.insert(
            FieldType::Textarea,
            FieldSeed::new("Textarea", "Bio")
                .description("Enter a short bio about yourself.")
                .placeholder("I am a frontend developer."),
        );
        entries.insert(
            FieldType::Select,
            FieldSeed::new("Select", "Role")
                .description("Select a role from the list.")
                .placeholder("Select a role")
                .options(vec![
                    FieldOption::new("Frontend Developer", "frontend-developer"),
                    FieldOption::new("Backend Developer", "backend-developer"),
                ]),
        );
        entries.insert(
            FieldType::Switch,
            FieldSeed::new("Switch", "Security emails")
                .description("Receive emails about your account security."),
        );
        entries.insert(
            FieldType::Checkbox,
            FieldSeed::new("Checkbox", "Terms and conditions")
                .description("Accept the terms and conditions."),
        );
        entries.insert(
            FieldType::DatePicker,
            FieldSeed::new("Date Picker", "Date of birth")
                .description("Select your date of birth."),
        );
        entries.insert(
            FieldType::RadioGroup,
            FieldSeed::new("Radio Group", "Notify me about...").options(vec![
                FieldOption::new("New products", "new-products"),
                FieldOption::new("Promotions", "promotions"),
            ]),
        );
        entries.insert(
            FieldType::Combobox,
            FieldSeed::new("Combobox", "Select a framework")
                .placeholder("Select a framework")
                .options(vec![
                    FieldOption::new("Next.js", "next.js"),
                    FieldOption::new("SvelteKit", "sveltekit"),
                    FieldOption::new("Nuxt.js", "nuxt.js"),
                    FieldOption::new("Remix", "remix"),
                    FieldOption::new("Astro", "astro"),
                ]),
        );
        entries.insert(
            FieldType::InputOtp,
            FieldSeed::new("Input OTP", "Enter OTP")
                .description("Enter the OTP sent to your mobile.")
                .max_length(6),
        );
        entries.insert(
            FieldType::Slider,
            FieldSeed::new("Slider", "Select a number")
                .description("Select a number between 0 and 100."),
        );
        entries.insert(
            FieldType::FileUpload,
            FieldSeed::new("File Upload", "Upload a file")
                .description("Upload a file from your device."),
        );
        entries.insert(
            FieldType::MultiSelect,
            FieldSeed::new("Multi Select", "Select multiple options")
                .description("Select multiple options from the list.")
                .options(vec![
                    FieldOption::new("Frontend Developer", "frontend-developer"),
                    FieldOption::new("Backend Developer", "backend-developer"),
                    FieldOption::new("Fullstack Developer", "fullstack-developer"),
                ]),
        );
        entries.insert(
            FieldType::TagsInput,
            FieldSeed::new("Tags Input", "Enter tags")
                .description("Enter tags separated by commas."),
        );
        entries.insert(
            FieldType::TiptapEditor,
            FieldSeed::new("Tiptap Editor", "Enter content")
                .description("Enter content using the rich text editor."),
        );

        Self { entries }
    }

    /// Returns the seed for a field type.
    pub fn seed(&self, field_type: FieldType) -> Option<&FieldSeed> {
        self.entries.get(&field_type)
    }

    /// Returns the palette entries as `(field_type, display_label)` pairs,
    /// in palette order.
    pub fn palette(&self) -> Vec<(FieldType, &str)> {
        FieldType::ALL
            .into_iter()
            .filter_map(|ft| self.entries.get(&ft).map(|s| (ft, s.field_label.as_str())))
            .collect()
    }

    /// Creates a fresh declaration for a field type, seeded from the catalog
    /// and assigned a new short id.
    ///
    /// The name key is minted from the id (`name_{id}`) so repeated picks of
    /// the same palette type stay unique across the document. New fields
    /// start with `required` and `disabled` explicitly `false`, matching
    /// the edit dialog's initial toggles.
    ///
    /// Unknown types (a catalog missing an entry) fall back to a bare
    /// declaration named after the type rather than failing.
    pub fn new_field(&self, field_type: FieldType) -> FieldDeclaration {
        let id = short_id();
        let name = format!("name_{id}");
        let mut field = match self.entries.get(&field_type) {
            Some(seed) => {
                let mut field = FieldDeclaration::new(
                    id,
                    field_type,
                    seed.field_label.clone(),
                    name,
                    seed.label.clone(),
                );
                field.description = seed.description.clone();
                field.placeholder = seed.placeholder.clone();
                field.input_type = seed.input_type.clone();
                field.options = seed.options.clone();
                field.max_length = seed.max_length;
                field
            }
            None => FieldDeclaration::new(
                id,
                field_type,
                field_type.as_str(),
                name,
                field_type.as_str(),
            ),
        };
        field.required = Some(false);
        field.disabled = Some(false);
        field
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
