//! The formsmith CLI entry point.

use formsmith_cli::command::CommandRegistry;
use formsmith_cli::commands::register_builtin_commands;
use formsmith_core::logging::setup_logging;
use formsmith_core::Settings;

/// The settings file looked up in the working directory.
const SETTINGS_FILE: &str = "formsmith.toml";

#[tokio::main]
async fn main() {
    let settings = if std::path::Path::new(SETTINGS_FILE).exists() {
        match Settings::from_file(SETTINGS_FILE) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    } else {
        Settings::default()
    };
    setup_logging(&settings);

    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);

    let matches = registry.build_cli().get_matches();
    if let Err(err) = registry.execute(&matches, &settings).await {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
