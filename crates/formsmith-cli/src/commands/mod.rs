//! Built-in management commands.

mod components;
mod fields;
mod generate;
mod runserver;

pub use components::ComponentsCommand;
pub use fields::FieldsCommand;
pub use generate::GenerateCommand;
pub use runserver::RunserverCommand;

use crate::command::CommandRegistry;

/// Registers all built-in commands into the given registry.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(GenerateCommand));
    registry.register(Box::new(RunserverCommand));
    registry.register(Box::new(FieldsCommand));
    registry.register(Box::new(ComponentsCommand));
}
