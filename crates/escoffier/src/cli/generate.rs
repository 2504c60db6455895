//! Generate command handler.

use super::OutputFormat;
use crate::settings::{Settings, resolve_credential};
use escoffier_core::{Cuisine, ExportFormat, GenerationRequest, GenerationResult, MenuStyle};
use escoffier_models::{ClientConfig, completion_handle};
use escoffier_pipeline::{GenerationPipeline, display_list, export_document, export_file_name};
use std::path::PathBuf;

/// Handles the generate command: one pipeline invocation per run.
///
/// # Errors
///
/// Fails on missing credentials, invalid temperature, any pipeline failure,
/// or an unwritable export path.
#[tracing::instrument(skip_all, fields(cuisine = %cuisine, temperature))]
pub async fn handle_generate_command(
    cuisine: Cuisine,
    temperature: f32,
    style: MenuStyle,
    format: ExportFormat,
    api_key: Option<String>,
    output: OutputFormat,
    out: Option<Option<PathBuf>>,
) -> anyhow::Result<()> {
    let settings = Settings::load()?;
    let credential = resolve_credential(api_key.as_deref(), &settings)?;
    let request = GenerationRequest::new(cuisine, temperature)?;

    let mut config = ClientConfig::builder();
    config.api_key(credential).temperature(temperature);
    if let Some(model) = &settings.model {
        config.model(model.clone());
    }
    if let Some(base_url) = &settings.base_url {
        config.base_url(base_url.clone());
    }
    let client_config = config.build()?;

    let pipeline = GenerationPipeline::new(completion_handle(&client_config));
    let result = pipeline.generate(&request).await?;

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => print_human(&result, style),
    }

    if let Some(out) = out {
        let path = out.unwrap_or_else(|| {
            PathBuf::from(export_file_name(result.restaurant_name(), format))
        });
        std::fs::write(&path, export_document(&result, format))?;
        println!("\nExported to {}", path.display());
    }

    Ok(())
}

fn print_human(result: &GenerationResult, style: MenuStyle) {
    println!("{}", result.restaurant_name());
    if !result.slogan().is_empty() {
        println!("{}", result.slogan());
    }
    if !result.description().is_empty() {
        println!("\n{}", result.description());
    }

    println!("\nMenu Items");
    println!("{}", display_list(result.menu_items(), style));

    println!("\nDrinks");
    if result.drink_items().is_empty() {
        println!("No drinks returned. Try again or adjust temperature.");
    } else {
        println!("{}", display_list(result.drink_items(), style));
    }
}
