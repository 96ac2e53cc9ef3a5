//! Field-markup rendering.
//!
//! Each field becomes one line of component-invocation markup: the
//! component name derived from the palette label plus its serialized
//! props. Bookkeeping keys (`fieldType`, `fieldLabel`, `id`) never appear
//! as props, absent optionals are omitted entirely, and prop order follows
//! the declaration's own key order so regeneration is reproducible.

use serde::Serialize;

use formsmith_schema::FieldDeclaration;

/// The indent markup lines carry inside the wrapper template.
const MARKUP_INDENT: &str = "        ";

/// JSON-encodes a prop value.
///
/// Serialization of plain declaration data cannot fail; should a value ever
/// resist encoding it degrades to `null` rather than aborting generation.
fn json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Renders one field's invocation markup line.
///
/// ```text
///         <CheckboxFormField name={"agree"} label={"Agree"} required={true} />
/// ```
pub fn render_field_markup(field: &FieldDeclaration) -> String {
    let mut props: Vec<String> = Vec::new();

    props.push(format!("name={{{}}}", json(&field.name)));
    props.push(format!("label={{{}}}", json(&field.label)));
    if let Some(description) = &field.description {
        props.push(format!("description={{{}}}", json(description)));
    }
    if let Some(placeholder) = &field.placeholder {
        props.push(format!("placeholder={{{}}}", json(placeholder)));
    }
    if let Some(input_type) = &field.input_type {
        props.push(format!("type={{{}}}", json(input_type)));
    }
    if let Some(options) = &field.options {
        props.push(format!("options={{{}}}", json(options)));
    }
    if let Some(required) = field.required {
        props.push(format!("required={{{required}}}"));
    }
    if let Some(disabled) = field.disabled {
        props.push(format!("disabled={{{disabled}}}"));
    }
    if let Some(max_length) = field.max_length {
        props.push(format!("maxLength={{{max_length}}}"));
    }

    format!(
        "{MARKUP_INDENT}<{} {} />",
        field.component_name(),
        props.join(" ")
    )
}

/// Renders the markup block for a field list: one line per field in
/// declaration order, blank-line separated.
pub fn markup_block(fields: &[FieldDeclaration]) -> String {
    fields
        .iter()
        .map(render_field_markup)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_schema::{FieldOption, FieldType};

    #[test]
    fn test_minimal_field_markup() {
        let field = FieldDeclaration::new("a1", FieldType::Checkbox, "Checkbox", "agree", "Agree")
            .required(true);
        assert_eq!(
            render_field_markup(&field),
            r#"        <CheckboxFormField name={"agree"} label={"Agree"} required={true} />"#
        );
    }

    #[test]
    fn test_bookkeeping_keys_never_rendered() {
        let field = FieldDeclaration::new("a1", FieldType::Switch, "Switch", "notify", "Notify");
        let line = render_field_markup(&field);
        assert!(!line.contains("fieldType"));
        assert!(!line.contains("fieldLabel"));
        assert!(!line.contains("id="));
    }

    #[test]
    fn test_absent_optionals_omitted() {
        let field = FieldDeclaration::new("a1", FieldType::Textarea, "Textarea", "bio", "Bio");
        let line = render_field_markup(&field);
        assert!(!line.contains("description="));
        assert!(!line.contains("placeholder="));
        assert!(!line.contains("undefined"));
    }

    #[test]
    fn test_prop_order_follows_declaration() {
        let field = FieldDeclaration::new("a1", FieldType::Input, "Input", "age", "Age")
            .description("Your age.")
            .placeholder("18")
            .input_type("number")
            .required(false)
            .max_length(3);
        assert_eq!(
            render_field_markup(&field),
            r#"        <InputFormField name={"age"} label={"Age"} description={"Your age."} placeholder={"18"} type={"number"} required={false} maxLength={3} />"#
        );
    }

    #[test]
    fn test_options_json_encoded() {
        let field = FieldDeclaration::new("a1", FieldType::Select, "Select", "role", "Role")
            .options(vec![FieldOption::new("Admin", "admin")]);
        let line = render_field_markup(&field);
        assert!(line.contains(r#"options={[{"label":"Admin","value":"admin"}]}"#));
    }

    #[test]
    fn test_markup_block_blank_line_separated() {
        let fields = vec![
            FieldDeclaration::new("a", FieldType::Checkbox, "Checkbox", "agree", "Agree"),
            FieldDeclaration::new("b", FieldType::Switch, "Switch", "notify", "Notify"),
        ];
        let block = markup_block(&fields);
        let parts: Vec<&str> = block.split("\n\n").collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].contains("CheckboxFormField"));
        assert!(parts[1].contains("SwitchFormField"));
    }

    #[test]
    fn test_markup_block_empty() {
        assert_eq!(markup_block(&[]), "");
    }
}
