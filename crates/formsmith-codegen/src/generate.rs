//! The form assembler.
//!
//! [`generate`] is the single entry point of the pipeline: it validates the
//! document, resolves imports, builds the validation-schema block in the
//! target's flavor, derives default values, renders the field markup, and
//! substitutes everything into the target's wrapper template. Given the
//! same document and target the output is byte-identical on every run.

use formsmith_core::logging::generation_span;
use formsmith_core::FormsmithResult;
use formsmith_registry::ComponentRegistry;
use formsmith_schema::{FieldDeclaration, FormDocument};

use crate::defaults::defaults_block;
use crate::imports::resolve_imports;
use crate::markup::markup_block;
use crate::target::{TargetLibrary, ValidatorFlavor};
use crate::templates;
use crate::validator::{validator_for, yup_expression, zod_expression};

/// Indent for defaults entries inside the wrapper templates.
const DEFAULTS_INDENT: &str = "      ";

/// Builds the `const formSchema = ...` block for a field list in the
/// target's validation flavor, one entry per field in declaration order.
pub fn schema_source(fields: &[FieldDeclaration], target: TargetLibrary) -> String {
    match target.flavor() {
        ValidatorFlavor::Zod => {
            let entries = fields
                .iter()
                .map(|field| {
                    format!("  {}: {}", field.name, zod_expression(&validator_for(field)))
                })
                .collect::<Vec<_>>()
                .join(",\n");
            format!("const formSchema = z.object({{\n{entries}\n}});")
        }
        ValidatorFlavor::Yup => {
            let entries = fields
                .iter()
                .map(|field| format!("  {}: {}", field.name, yup_expression(field)))
                .collect::<Vec<_>>()
                .join(",\n");
            format!("const formSchema = Yup.object().shape({{\n{entries}\n}});")
        }
    }
}

/// Generates the complete source code for a form document and target
/// library.
///
/// Fails only when the document violates its invariants (duplicate names,
/// optionless choice fields, bad one-time-code length); generation itself
/// is total, including over an empty document, which yields a valid empty
/// form.
pub fn generate(
    document: &FormDocument,
    target: TargetLibrary,
    registry: &ComponentRegistry,
) -> FormsmithResult<String> {
    document.validate()?;

    let span = generation_span(target.as_str(), document.len());
    let _guard = span.enter();

    let imports = resolve_imports(&document.fields, target, registry);
    let schema = schema_source(&document.fields, target);
    let defaults = defaults_block(&document.fields, DEFAULTS_INDENT);
    let markup = markup_block(&document.fields);
    let wrapper = templates::wrapper(target, &defaults, &markup);

    tracing::debug!(imports = imports.len(), "assembled form code");

    Ok(format!("{}\n\n{schema}\n\n{wrapper}", imports.join()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_schema::{FieldDeclaration, FieldType};

    fn doc(fields: Vec<FieldDeclaration>) -> FormDocument {
        FormDocument::from_fields(fields)
    }

    #[test]
    fn test_zod_schema_source_order() {
        let fields = vec![
            FieldDeclaration::new("a", FieldType::Checkbox, "Checkbox", "agree", "Agree")
                .required(true),
            FieldDeclaration::new("b", FieldType::Input, "Input", "email", "Email")
                .input_type("email"),
        ];
        assert_eq!(
            schema_source(&fields, TargetLibrary::ReactHookForm),
            "const formSchema = z.object({\n  agree: z.boolean(),\n  email: z.string().email().optional()\n});"
        );
    }

    #[test]
    fn test_yup_schema_source() {
        let fields = vec![
            FieldDeclaration::new("a", FieldType::Switch, "Switch", "notify", "Notify")
                .required(true),
        ];
        assert_eq!(
            schema_source(&fields, TargetLibrary::Formik),
            "const formSchema = Yup.object().shape({\n  notify: Yup.boolean().required()\n});"
        );
    }

    #[test]
    fn test_generate_rejects_duplicate_names() {
        let registry = ComponentRegistry::builtin();
        let document = doc(vec![
            FieldDeclaration::new("a", FieldType::Input, "Input", "email", "Email"),
            FieldDeclaration::new("b", FieldType::Input, "Input", "email", "Email"),
        ]);
        let err = generate(&document, TargetLibrary::ReactHookForm, &registry).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate field name: email");
    }

    #[test]
    fn test_generate_sections_separated_by_blank_lines() {
        let registry = ComponentRegistry::builtin();
        let document = doc(vec![FieldDeclaration::new(
            "a",
            FieldType::Checkbox,
            "Checkbox",
            "agree",
            "Agree",
        )]);
        let code = generate(&document, TargetLibrary::ReactHookForm, &registry).unwrap();

        let schema_at = code.find("const formSchema").unwrap();
        let wrapper_at = code.find("export default function MyForm()").unwrap();
        assert!(schema_at < wrapper_at);
        assert!(code.starts_with(r#""use client""#));
    }
}
