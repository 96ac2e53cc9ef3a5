//! # formsmith-core
//!
//! Core types for the formsmith form-builder toolkit. This crate has no
//! dependency on the schema or generation crates and provides the foundation
//! they all share.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Toolkit settings and configuration loading
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;

// Re-export the most commonly used types at the crate root.
pub use error::{FormsmithError, FormsmithResult};
pub use settings::Settings;
