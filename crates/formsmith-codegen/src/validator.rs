//! The abstract validator model and its per-target serializers.
//!
//! [`ValidatorNode`] is a library-agnostic tagged union describing one
//! field's validation rule. [`validator_for`] maps a field declaration onto
//! a node, and [`zod_expression`] serializes a node into Zod source text
//! with an exhaustive match. The Yup flavor skips the intermediate node and
//! goes straight from the declaration to source text via
//! [`yup_expression`], matching how the formik target wires validation.
//!
//! Serialization never fails: shapes with no Zod counterpart degrade to a
//! `z.unknown()` placeholder the user can hand-edit.

use serde_json::Value;

use formsmith_schema::{FieldDeclaration, FieldType};

/// A library-agnostic validation rule for a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatorNode {
    /// A true/false value.
    Boolean,
    /// A string, optionally length-constrained.
    String {
        /// Minimum length.
        min: Option<u32>,
        /// Maximum length.
        max: Option<u32>,
    },
    /// A number, optionally range-constrained.
    Number {
        /// Minimum value.
        min: Option<i64>,
        /// Maximum value.
        max: Option<i64>,
    },
    /// An email-formatted string.
    Email,
    /// A date, coerced from its input representation.
    Date,
    /// A non-empty list of the inner rule.
    Array(Box<ValidatorNode>),
    /// A keyed object of rules, insertion order preserved.
    Object(Vec<(String, ValidatorNode)>),
    /// The inner rule, made optional.
    Optional(Box<ValidatorNode>),
    /// The inner rule with a default value.
    Default {
        /// The wrapped rule.
        inner: Box<ValidatorNode>,
        /// The default, emitted JSON-serialized.
        value: Value,
    },
    /// A shape the mapper could not classify.
    Unknown,
}

/// Maps a field declaration onto its abstract validation rule.
///
/// - checkbox / switch map to [`ValidatorNode::Boolean`]
/// - the generic input maps to email, number, or string depending on its
///   HTML `type`
/// - every other field type falls back to a plain string
///
/// Fields not explicitly marked `required: true` are wrapped in
/// [`ValidatorNode::Optional`]. Total over the field-type enumeration.
pub fn validator_for(field: &FieldDeclaration) -> ValidatorNode {
    let base = match field.field_type {
        FieldType::Checkbox | FieldType::Switch => ValidatorNode::Boolean,
        FieldType::Input => match field.input_type.as_deref() {
            Some("email") => ValidatorNode::Email,
            Some("number") => ValidatorNode::Number {
                min: None,
                max: None,
            },
            _ => ValidatorNode::String {
                min: None,
                max: None,
            },
        },
        _ => ValidatorNode::String {
            min: None,
            max: None,
        },
    };

    if field.is_required() {
        base
    } else {
        ValidatorNode::Optional(Box::new(base))
    }
}

/// Serializes a validator node into Zod source text.
///
/// Object entries are emitted in insertion order, one per line, so the
/// generated schema reads in the same order the form renders.
pub fn zod_expression(node: &ValidatorNode) -> String {
    match node {
        ValidatorNode::Boolean => "z.boolean()".to_string(),
        ValidatorNode::String { min, max } => {
            let mut expr = "z.string()".to_string();
            if let Some(min) = min {
                expr.push_str(&format!(".min({min})"));
            }
            if let Some(max) = max {
                expr.push_str(&format!(".max({max})"));
            }
            expr
        }
        ValidatorNode::Number { min, max } => {
            let mut expr = "z.number()".to_string();
            if let Some(min) = min {
                expr.push_str(&format!(".min({min})"));
            }
            if let Some(max) = max {
                expr.push_str(&format!(".max({max})"));
            }
            expr
        }
        ValidatorNode::Email => "z.string().email()".to_string(),
        ValidatorNode::Date => "z.coerce.date()".to_string(),
        ValidatorNode::Array(inner) => {
            format!("z.array({}).nonempty()", zod_expression(inner))
        }
        ValidatorNode::Object(entries) => {
            let body = entries
                .iter()
                .map(|(key, value)| format!("  {key}: {}", zod_expression(value)))
                .collect::<Vec<_>>()
                .join(",\n");
            format!("z.object({{\n{body}\n}})")
        }
        ValidatorNode::Optional(inner) => format!("{}.optional()", zod_expression(inner)),
        ValidatorNode::Default { inner, value } => {
            format!("{}.default({value})", zod_expression(inner))
        }
        ValidatorNode::Unknown => "z.unknown()".to_string(),
    }
}

/// Serializes a field declaration directly into Yup source text.
///
/// The Yup flavor builds its expression from the declaration itself rather
/// than walking a node: booleans become `Yup.boolean()`, number inputs
/// `Yup.number()`, email inputs `Yup.string().email()`, everything else
/// `Yup.string()`, with `.required()` appended for required fields.
pub fn yup_expression(field: &FieldDeclaration) -> String {
    let mut expr = if field.field_type.is_boolean() {
        "Yup.boolean()".to_string()
    } else if field.field_type == FieldType::Input {
        match field.input_type.as_deref() {
            Some("number") => "Yup.number()".to_string(),
            Some("email") => "Yup.string().email()".to_string(),
            _ => "Yup.string()".to_string(),
        }
    } else {
        "Yup.string()".to_string()
    };

    if field.is_required() {
        expr.push_str(".required()");
    }
    expr
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(name: &str, input_type: Option<&str>, required: bool) -> FieldDeclaration {
        let mut field = FieldDeclaration::new("id", FieldType::Input, "Input", name, "Label");
        field.input_type = input_type.map(String::from);
        field.required = Some(required);
        field
    }

    #[test]
    fn test_boolean_mapping() {
        let checkbox = FieldDeclaration::new("a", FieldType::Checkbox, "Checkbox", "agree", "Agree")
            .required(true);
        assert_eq!(validator_for(&checkbox), ValidatorNode::Boolean);

        let switch = FieldDeclaration::new("b", FieldType::Switch, "Switch", "on", "On");
        assert_eq!(
            validator_for(&switch),
            ValidatorNode::Optional(Box::new(ValidatorNode::Boolean))
        );
    }

    #[test]
    fn test_input_refinement() {
        assert_eq!(validator_for(&input("e", Some("email"), true)), ValidatorNode::Email);
        assert_eq!(
            validator_for(&input("n", Some("number"), true)),
            ValidatorNode::Number { min: None, max: None }
        );
        assert_eq!(
            validator_for(&input("t", Some("text"), true)),
            ValidatorNode::String { min: None, max: None }
        );
        assert_eq!(
            validator_for(&input("u", None, true)),
            ValidatorNode::String { min: None, max: None }
        );
    }

    #[test]
    fn test_fallback_to_string() {
        let slider = FieldDeclaration::new("s", FieldType::Slider, "Slider", "n", "N").required(true);
        assert_eq!(
            validator_for(&slider),
            ValidatorNode::String { min: None, max: None }
        );
    }

    #[test]
    fn test_optional_wrapping() {
        // Absent `required` behaves the same as `required: false`.
        let absent = FieldDeclaration::new("a", FieldType::Textarea, "Textarea", "bio", "Bio");
        assert!(matches!(validator_for(&absent), ValidatorNode::Optional(_)));

        let explicit = absent.clone().required(false);
        assert!(matches!(validator_for(&explicit), ValidatorNode::Optional(_)));

        let required = absent.required(true);
        assert!(!matches!(validator_for(&required), ValidatorNode::Optional(_)));
    }

    #[test]
    fn test_zod_leaf_expressions() {
        assert_eq!(zod_expression(&ValidatorNode::Boolean), "z.boolean()");
        assert_eq!(zod_expression(&ValidatorNode::Email), "z.string().email()");
        assert_eq!(zod_expression(&ValidatorNode::Date), "z.coerce.date()");
        assert_eq!(zod_expression(&ValidatorNode::Unknown), "z.unknown()");
    }

    #[test]
    fn test_zod_checks_chain() {
        let node = ValidatorNode::String {
            min: Some(2),
            max: Some(64),
        };
        assert_eq!(zod_expression(&node), "z.string().min(2).max(64)");

        let node = ValidatorNode::Number {
            min: Some(0),
            max: None,
        };
        assert_eq!(zod_expression(&node), "z.number().min(0)");
    }

    #[test]
    fn test_zod_wrappers() {
        let optional = ValidatorNode::Optional(Box::new(ValidatorNode::Email));
        assert_eq!(zod_expression(&optional), "z.string().email().optional()");

        let array = ValidatorNode::Array(Box::new(ValidatorNode::String {
            min: None,
            max: None,
        }));
        assert_eq!(zod_expression(&array), "z.array(z.string()).nonempty()");

        let defaulted = ValidatorNode::Default {
            inner: Box::new(ValidatorNode::Boolean),
            value: json!(false),
        };
        assert_eq!(zod_expression(&defaulted), "z.boolean().default(false)");
    }

    #[test]
    fn test_zod_object_preserves_insertion_order() {
        let node = ValidatorNode::Object(vec![
            ("zulu".to_string(), ValidatorNode::Boolean),
            ("alpha".to_string(), ValidatorNode::Email),
        ]);
        assert_eq!(
            zod_expression(&node),
            "z.object({\n  zulu: z.boolean(),\n  alpha: z.string().email()\n})"
        );
    }

    #[test]
    fn test_yup_expressions() {
        let checkbox = FieldDeclaration::new("a", FieldType::Checkbox, "Checkbox", "agree", "Agree")
            .required(true);
        assert_eq!(yup_expression(&checkbox), "Yup.boolean().required()");

        assert_eq!(yup_expression(&input("n", Some("number"), false)), "Yup.number()");
        assert_eq!(
            yup_expression(&input("e", Some("email"), true)),
            "Yup.string().email().required()"
        );

        let tags = FieldDeclaration::new("t", FieldType::TagsInput, "Tags Input", "tags", "Tags");
        assert_eq!(yup_expression(&tags), "Yup.string()");
    }
}
