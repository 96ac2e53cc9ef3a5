//! The `runserver` management command.
//!
//! Starts the formsmith HTTP server on a configurable host and port.

use async_trait::async_trait;

use formsmith_core::{FormsmithError, Settings};

use crate::command::ManagementCommand;

/// Starts the HTTP server.
///
/// By default, the server binds to the address from settings
/// (`127.0.0.1:8000`). The address and port can be overridden via the
/// `--host` and `--port` options.
pub struct RunserverCommand;

#[async_trait]
impl ManagementCommand for RunserverCommand {
    fn name(&self) -> &'static str {
        "runserver"
    }

    fn help(&self) -> &'static str {
        "Starts the formsmith HTTP server"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("host")
                .long("host")
                .help("Host to bind to (overrides settings)"),
        )
        .arg(
            clap::Arg::new("port")
                .long("port")
                .help("Port to bind to (overrides settings)"),
        )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), FormsmithError> {
        let mut settings = settings.clone();
        if let Some(host) = matches.get_one::<String>("host") {
            settings.host = host.clone();
        }
        if let Some(port) = matches.get_one::<String>("port") {
            settings.port = port.parse().map_err(|_| {
                FormsmithError::ConfigurationError(format!("Invalid port: {port}"))
            })?;
        }

        tracing::info!(
            "Starting formsmith server at http://{}/ (debug={})",
            settings.addr(),
            settings.debug
        );
        formsmith_server::run(settings).await
    }
}
