//! The `components` management command.
//!
//! Prints the renderer component files the generator imports for a target
//! library.

use std::str::FromStr;

use async_trait::async_trait;

use formsmith_codegen::TargetLibrary;
use formsmith_core::{FormsmithError, Settings};
use formsmith_registry::ComponentRegistry;

use crate::command::ManagementCommand;

/// Lists the renderer component import paths for a target.
pub struct ComponentsCommand;

/// Formats one import path line per registered component.
pub fn component_listing(registry: &ComponentRegistry, target: TargetLibrary) -> String {
    registry
        .file_names()
        .into_iter()
        .map(|file_name| {
            let stem = file_name.strip_suffix(".tsx").unwrap_or(file_name);
            format!("@/components/ui/{}/{stem}", target.as_str())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl ManagementCommand for ComponentsCommand {
    fn name(&self) -> &'static str {
        "components"
    }

    fn help(&self) -> &'static str {
        "List the renderer components for a target library"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("target")
                .long("target")
                .default_value("react-hook-form")
                .help("Target library: react-hook-form, tanstack-form, or formik"),
        )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        _settings: &Settings,
    ) -> Result<(), FormsmithError> {
        let target_str = matches
            .get_one::<String>("target")
            .map_or("react-hook-form", String::as_str);
        let target = TargetLibrary::from_str(target_str)?;

        println!("{}", component_listing(&ComponentRegistry::builtin(), target));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_schema::FieldType;

    #[test]
    fn test_component_listing() {
        let listing = component_listing(&ComponentRegistry::builtin(), TargetLibrary::Formik);
        assert_eq!(listing.lines().count(), FieldType::ALL.len());
        assert!(listing.contains("@/components/ui/formik/checkbox-form-field"));
        assert!(!listing.contains(".tsx"));
    }
}
