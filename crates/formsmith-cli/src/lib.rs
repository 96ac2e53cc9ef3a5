//! # formsmith-cli
//!
//! Management commands CLI for the formsmith toolkit.
//!
//! Commands are defined through the [`ManagementCommand`] trait and
//! dispatched by a [`CommandRegistry`]. Built-ins:
//!
//! - `generate` - form document JSON in, generated form source out
//! - `runserver` - start the HTTP server
//! - `fields` - print the field-type palette
//! - `components` - print the renderer component paths for a target
//!
//! ## Quick Start
//!
//! ```rust
//! use formsmith_cli::command::CommandRegistry;
//! use formsmith_cli::commands::register_builtin_commands;
//!
//! let mut registry = CommandRegistry::new();
//! register_builtin_commands(&mut registry);
//!
//! let names = registry.list_commands();
//! assert!(names.contains(&"generate"));
//! assert!(names.contains(&"runserver"));
//! ```

pub mod command;
pub mod commands;

// Re-export primary types at the crate root for convenience.
pub use command::{CommandRegistry, ManagementCommand};
pub use commands::register_builtin_commands;
