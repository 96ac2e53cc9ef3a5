//! # formsmith-codegen
//!
//! The code-generation pipeline: turns an ordered list of field
//! declarations into copy-pasteable form source code for one of three
//! client-side form libraries (react-hook-form, TanStack Form, formik).
//!
//! The pipeline is a single parameterized path. Four pure branches feed the
//! assembler:
//!
//! - [`validator`] - field declaration -> abstract validator node -> Zod
//!   source text (or the direct Yup path for formik)
//! - [`defaults`] - field declaration -> default runtime value
//! - [`imports`] - field list + target -> deduplicated import block
//! - [`markup`] - field declaration -> one line of invocation markup
//!
//! [`generate`](generate::generate) combines them with the target's
//! [wrapper template](templates) into one string. Every step is
//! deterministic and side-effect free; the only failure mode is a document
//! that violates its own invariants.

pub mod defaults;
pub mod generate;
pub mod imports;
pub mod markup;
pub mod target;
pub mod templates;
pub mod validator;

// Re-export the primary pipeline surface at the crate root.
pub use defaults::default_value;
pub use generate::{generate, schema_source};
pub use imports::{resolve_imports, ImportSet};
pub use markup::render_field_markup;
pub use target::{TargetLibrary, ValidatorFlavor};
pub use validator::{validator_for, yup_expression, zod_expression, ValidatorNode};
