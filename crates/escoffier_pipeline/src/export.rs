//! Export and display formatting.

use escoffier_core::{ExportFormat, GenerationResult, MenuStyle};

/// Placeholder rendered when a drink list is empty.
const NONE_PLACEHOLDER: &str = "(none)";

/// Renders a generation result as a flat text document.
///
/// Pure and total; both styles trim the final assembled string.
pub fn export_document(result: &GenerationResult, format: ExportFormat) -> String {
    match format {
        ExportFormat::Markdown => export_markdown(result),
        ExportFormat::Text => export_text(result),
    }
}

fn export_markdown(result: &GenerationResult) -> String {
    let mut parts = Vec::new();
    parts.push(format!("## {}", result.restaurant_name()));
    if !result.slogan().is_empty() {
        parts.push(format!("*{}*", result.slogan()));
    }
    if !result.description().is_empty() {
        parts.push(result.description().clone());
    }

    parts.push("\n### Menu Items".to_string());
    parts.push(bulleted(result.menu_items()));

    parts.push("\n### Drinks".to_string());
    if result.drink_items().is_empty() {
        parts.push(format!("_{NONE_PLACEHOLDER}_"));
    } else {
        parts.push(bulleted(result.drink_items()));
    }

    parts.join("\n\n").trim().to_string()
}

fn export_text(result: &GenerationResult) -> String {
    let mut parts = vec![result.restaurant_name().clone()];
    if !result.slogan().is_empty() {
        parts.push(result.slogan().clone());
    }
    if !result.description().is_empty() {
        parts.push(result.description().clone());
    }

    parts.push("\nMenu Items".to_string());
    parts.extend(result.menu_items().iter().cloned());

    parts.push("\nDrinks".to_string());
    if result.drink_items().is_empty() {
        parts.push(NONE_PLACEHOLDER.to_string());
    } else {
        parts.extend(result.drink_items().iter().cloned());
    }

    parts.join("\n").trim().to_string()
}

fn bulleted(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders an ordered list of strings for on-screen display.
///
/// # Examples
///
/// ```
/// use escoffier_core::MenuStyle;
/// use escoffier_pipeline::display_list;
///
/// let items = vec!["Tacos".to_string(), "Elote".to_string()];
/// assert_eq!(display_list(&items, MenuStyle::Numbered), "1. Tacos\n2. Elote");
/// ```
pub fn display_list(items: &[String], style: MenuStyle) -> String {
    match style {
        MenuStyle::Bullets => bulleted(items),
        MenuStyle::Numbered => items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item))
            .collect::<Vec<_>>()
            .join("\n"),
        MenuStyle::Plain => items.join("\n"),
    }
}

/// File name for an exported document: the cleaned restaurant name with
/// spaces replaced by underscores, plus the format's extension.
pub fn export_file_name(restaurant_name: &str, format: ExportFormat) -> String {
    format!(
        "{}.{}",
        restaurant_name.replace(' ', "_"),
        format.extension()
    )
}
