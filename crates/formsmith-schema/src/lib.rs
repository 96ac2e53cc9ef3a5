//! # formsmith-schema
//!
//! The declarative data model for formsmith. A form is an ordered sequence
//! of [`FieldDeclaration`]s, each describing one field (type, name, label,
//! validation flags, per-type options). The model is pure data: everything
//! that *does* something with it lives in the codegen crate.
//!
//! ## Modules
//!
//! - [`fields`] - Field types, options, and declarations
//! - [`document`] - The ordered form document and its edit operations
//! - [`catalog`] - The palette catalog seeding new fields with defaults
//! - [`ids`] - Short opaque field identifiers

pub mod catalog;
pub mod document;
pub mod fields;
pub mod ids;

// Re-export primary types at the crate root for convenience.
pub use catalog::{FieldCatalog, FieldSeed};
pub use document::FormDocument;
pub use fields::{FieldDeclaration, FieldOption, FieldType};
