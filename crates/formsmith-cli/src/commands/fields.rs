//! The `fields` management command.
//!
//! Prints the field-type palette: every field type the builder supports and
//! its display label.

use async_trait::async_trait;

use formsmith_core::{FormsmithError, Settings};
use formsmith_schema::FieldCatalog;

use crate::command::ManagementCommand;

/// Lists the available field types.
pub struct FieldsCommand;

/// Formats the palette as one `name  label` line per field type.
pub fn palette_listing(catalog: &FieldCatalog) -> String {
    catalog
        .palette()
        .into_iter()
        .map(|(ft, label)| format!("{:<15} {label}", ft.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl ManagementCommand for FieldsCommand {
    fn name(&self) -> &'static str {
        "fields"
    }

    fn help(&self) -> &'static str {
        "List the supported field types"
    }

    async fn handle(
        &self,
        _matches: &clap::ArgMatches,
        _settings: &Settings,
    ) -> Result<(), FormsmithError> {
        println!("{}", palette_listing(&FieldCatalog::builtin()));
        Ok(())
    }
}
