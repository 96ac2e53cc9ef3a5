//! # formsmith
//!
//! A visual form-builder code generator: declarative field schemas in,
//! ready-to-paste form source code out, for react-hook-form, TanStack
//! Form, and formik.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. You can depend on `formsmith` to get the whole toolkit, or
//! depend on individual crates for finer-grained control.
//!
//! ```
//! use formsmith::codegen::{generate, TargetLibrary};
//! use formsmith::registry::ComponentRegistry;
//! use formsmith::schema::{FieldCatalog, FieldType, FormDocument};
//!
//! let catalog = FieldCatalog::builtin();
//! let mut document = FormDocument::new();
//! document.push(catalog.new_field(FieldType::Checkbox));
//!
//! let registry = ComponentRegistry::builtin();
//! let code = generate(&document, TargetLibrary::ReactHookForm, &registry).unwrap();
//! assert!(code.contains("const formSchema = z.object({"));
//! ```

/// Core types: errors, settings, and logging.
pub use formsmith_core as core;

/// Field declarations, form documents, and the palette catalog.
pub use formsmith_schema as schema;

/// The field-renderer component registry.
pub use formsmith_registry as registry;

/// The code-generation pipeline.
pub use formsmith_codegen as codegen;

/// HTTP endpoints (generation, component listing, view source).
#[cfg(feature = "server")]
pub use formsmith_server as server;

/// Management commands (CLI).
#[cfg(feature = "cli")]
pub use formsmith_cli as cli;
