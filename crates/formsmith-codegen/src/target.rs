//! Target library selection and descriptors.
//!
//! A [`TargetLibrary`] names one of the three client-side form-handling
//! conventions the generator can emit code for. Everything that varies
//! between targets — import lines, validation-schema flavor, wrapper
//! template — hangs off this enum as data, so the pipeline itself is a
//! single parameterized path rather than three near-duplicate generators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use formsmith_core::FormsmithError;

/// The closed set of supported target libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetLibrary {
    /// react-hook-form with a Zod schema and `zodResolver`.
    ReactHookForm,
    /// TanStack Form with a Zod schema and the `zodValidator` adapter.
    TanstackForm,
    /// Formik with a Yup validation schema.
    Formik,
}

/// Which validation-schema dialect a target emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorFlavor {
    /// Zod schema object, serialized from [`ValidatorNode`](crate::validator::ValidatorNode)s.
    Zod,
    /// Yup schema, serialized directly per field.
    Yup,
}

/// The per-target import lines the resolver seeds beyond the common base.
#[derive(Debug, Clone, Copy)]
pub struct TargetDescriptor {
    /// The validation-library import (`z` for Zod targets, `Yup` for formik).
    pub schema_import: &'static str,
    /// The target's "build a form" hook and resolver/adapter glue imports.
    pub form_imports: &'static [&'static str],
}

impl TargetLibrary {
    /// All targets, in selector order.
    pub const ALL: [Self; 3] = [Self::ReactHookForm, Self::TanstackForm, Self::Formik];

    /// Returns the kebab-case wire identifier of this target.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReactHookForm => "react-hook-form",
            Self::TanstackForm => "tanstack-form",
            Self::Formik => "formik",
        }
    }

    /// Returns the validation-schema dialect this target emits.
    pub const fn flavor(self) -> ValidatorFlavor {
        match self {
            Self::ReactHookForm | Self::TanstackForm => ValidatorFlavor::Zod,
            Self::Formik => ValidatorFlavor::Yup,
        }
    }

    /// Returns the target-specific import lines.
    pub const fn descriptor(self) -> TargetDescriptor {
        match self {
            Self::ReactHookForm => TargetDescriptor {
                schema_import: r#"import * as z from "zod""#,
                form_imports: &[
                    r#"import { useForm } from "react-hook-form""#,
                    r#"import { zodResolver } from "@hookform/resolvers/zod""#,
                ],
            },
            Self::TanstackForm => TargetDescriptor {
                schema_import: r#"import * as z from "zod""#,
                form_imports: &[
                    r#"import { useForm } from "@tanstack/react-form""#,
                    r#"import { zodValidator } from "@tanstack/zod-form-adapter""#,
                ],
            },
            Self::Formik => TargetDescriptor {
                schema_import: r#"import * as Yup from "yup""#,
                form_imports: &[r#"import { useFormik } from "formik""#],
            },
        }
    }
}

impl fmt::Display for TargetLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetLibrary {
    type Err = FormsmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FormsmithError::UnknownTarget(s.to_string()))
    }
}
