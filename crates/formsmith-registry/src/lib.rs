//! # formsmith-registry
//!
//! The field-renderer component registry: for each [`FieldType`] the file
//! name and component name of the renderer the generated code imports.
//!
//! The registry is an explicit immutable value passed into the pipeline
//! (and to the view-source endpoints), not module-level shared state, so
//! tests can run against fixture registries. All three target libraries
//! share renderer file naming; the target only changes which component
//! folder the import path points into, which the import resolver handles.

use std::collections::HashMap;

use serde::Serialize;

use formsmith_schema::FieldType;

/// Where a field type's renderer component lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentInfo {
    /// The renderer's file name, including extension
    /// (e.g. `checkbox-form-field.tsx`).
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// The registry key the component is catalogued under.
    #[serde(rename = "componentName")]
    pub component_name: String,
}

impl ComponentInfo {
    /// Creates a new component entry.
    pub fn new(file_name: impl Into<String>, component_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            component_name: component_name.into(),
        }
    }

    /// Returns the file name without its extension, as used in import paths.
    pub fn file_stem(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map_or(self.file_name.as_str(), |(stem, _)| stem)
    }
}

/// The component registry, keyed by field type.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    entries: HashMap<FieldType, ComponentInfo>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the built-in registry covering every field type, using the
    /// `<field-type>-form-field.tsx` naming convention.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        for ft in FieldType::ALL {
            entries.insert(
                ft,
                ComponentInfo::new(format!("{}-form-field.tsx", ft.as_str()), ft.as_str()),
            );
        }
        Self { entries }
    }

    /// Registers (or replaces) a component entry.
    pub fn register(&mut self, field_type: FieldType, info: ComponentInfo) {
        self.entries.insert(field_type, info);
    }

    /// Returns the component entry for a field type, if registered.
    pub fn get(&self, field_type: FieldType) -> Option<&ComponentInfo> {
        self.entries.get(&field_type)
    }

    /// Returns the registered component file names, in palette order.
    pub fn file_names(&self) -> Vec<&str> {
        FieldType::ALL
            .into_iter()
            .filter_map(|ft| self.entries.get(&ft).map(|i| i.file_name.as_str()))
            .collect()
    }

    /// Returns the number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
