//! The `generate` management command.
//!
//! Reads a form document from a JSON file and prints (or writes) the
//! generated form source code for a target library.

use std::str::FromStr;

use async_trait::async_trait;

use formsmith_codegen::TargetLibrary;
use formsmith_core::{FormsmithError, Settings};
use formsmith_registry::ComponentRegistry;
use formsmith_schema::{FieldDeclaration, FormDocument};

use crate::command::ManagementCommand;

/// Generates form source code from a document file.
///
/// The input file holds either a full form document (`{"fields": [...]}`)
/// or a bare field array. Output goes to stdout unless `--output` names a
/// file.
pub struct GenerateCommand;

/// Parses a document from raw JSON, accepting either the document shape or
/// a bare field array.
pub fn parse_document(raw: &str) -> Result<FormDocument, FormsmithError> {
    if let Ok(document) = serde_json::from_str::<FormDocument>(raw) {
        return Ok(document);
    }
    let fields: Vec<FieldDeclaration> = serde_json::from_str(raw)?;
    Ok(FormDocument::from_fields(fields))
}

#[async_trait]
impl ManagementCommand for GenerateCommand {
    fn name(&self) -> &'static str {
        "generate"
    }

    fn help(&self) -> &'static str {
        "Generate form source code from a document file"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("input")
                .required(true)
                .help("Path to the form document JSON file"),
        )
        .arg(
            clap::Arg::new("target")
                .long("target")
                .default_value("react-hook-form")
                .help("Target library: react-hook-form, tanstack-form, or formik"),
        )
        .arg(
            clap::Arg::new("output")
                .long("output")
                .help("Write the generated code to a file instead of stdout"),
        )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        _settings: &Settings,
    ) -> Result<(), FormsmithError> {
        let input = matches
            .get_one::<String>("input")
            .ok_or_else(|| FormsmithError::BadRequest("Missing input path".to_string()))?;
        let target_str = matches
            .get_one::<String>("target")
            .map_or("react-hook-form", String::as_str);
        let target = TargetLibrary::from_str(target_str)?;

        let raw = tokio::fs::read_to_string(input).await?;
        let document = parse_document(&raw)?;

        let registry = ComponentRegistry::builtin();
        let code = formsmith_codegen::generate(&document, target, &registry)?;

        match matches.get_one::<String>("output") {
            Some(path) => {
                tokio::fs::write(path, &code).await?;
                tracing::info!("Generated {target} form code written to {path}");
            }
            None => println!("{code}"),
        }

        Ok(())
    }
}
