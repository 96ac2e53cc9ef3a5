//! Import resolution for generated forms.
//!
//! Builds the deduplicated import block: a common base, the target
//! library's hook and validation imports, and one renderer-component import
//! per distinct field type present in the form. [`ImportSet`] keeps
//! insertion order so repeated generation runs produce byte-identical
//! output.

use formsmith_registry::ComponentRegistry;
use formsmith_schema::FieldDeclaration;

use crate::target::TargetLibrary;

/// Import lines common to every target.
const BASE_IMPORTS: [&str; 2] = [r#""use client""#, r#"import { useState } from "react""#];

/// UI-wrapper imports common to every target.
const UI_IMPORTS: [&str; 3] = [
    r#"import { cn } from "@/lib/utils""#,
    r#"import { Button } from "@/components/ui/button""#,
    r#"import { Form } from "@/components/ui/form""#,
];

/// A set of import lines with stable insertion order.
///
/// Duplicates are suppressed by exact line text; iteration order is the
/// order lines were first inserted, so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    lines: Vec<String>,
}

impl ImportSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a line unless an identical line is already present.
    /// Returns `true` if the line was added.
    pub fn insert(&mut self, line: impl Into<String>) -> bool {
        let line = line.into();
        if self.lines.contains(&line) {
            return false;
        }
        self.lines.push(line);
        true
    }

    /// Returns `true` if the set contains the exact line.
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Joins the lines into one newline-separated import block.
    pub fn join(&self) -> String {
        self.lines.join("\n")
    }
}

/// Resolves the full import set for a field list and target library.
///
/// The base set is seeded first (framework hook, validation library,
/// styling helper, button and form wrappers, then the target's own hook and
/// adapter imports), followed by one import per distinct field type whose
/// renderer is registered. Two fields of the same type share one import
/// line; field types missing from the registry are skipped rather than
/// producing a dangling import.
pub fn resolve_imports(
    fields: &[FieldDeclaration],
    target: TargetLibrary,
    registry: &ComponentRegistry,
) -> ImportSet {
    let mut imports = ImportSet::new();
    let descriptor = target.descriptor();

    for line in BASE_IMPORTS {
        imports.insert(line);
    }
    imports.insert(descriptor.schema_import);
    for line in UI_IMPORTS {
        imports.insert(line);
    }
    for line in descriptor.form_imports {
        imports.insert(*line);
    }

    for field in fields {
        if let Some(info) = registry.get(field.field_type) {
            imports.insert(format!(
                r#"import {{ {} }} from "@/components/ui/{}/{}""#,
                field.component_name(),
                target.as_str(),
                info.file_stem()
            ));
        }
    }

    imports
}
