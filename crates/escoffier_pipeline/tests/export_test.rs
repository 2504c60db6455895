use escoffier_core::{ExportFormat, GenerationResult, MenuStyle};
use escoffier_pipeline::{display_list, export_document, export_file_name};

fn casa_verde() -> GenerationResult {
    GenerationResult::new(
        "Casa Verde",
        vec!["Tacos".to_string(), "Elote".to_string()],
        vec!["Horchata".to_string(), "Agua Fresca".to_string()],
        "Fresh. Bold. Mexican.",
        "A lively spot...",
    )
}

fn casa_verde_without_extras() -> GenerationResult {
    GenerationResult::new(
        "Casa Verde",
        vec!["Tacos".to_string(), "Elote".to_string()],
        vec![],
        "",
        "",
    )
}

#[test]
fn markdown_export_renders_all_sections() {
    let output = export_document(&casa_verde(), ExportFormat::Markdown);

    assert!(output.starts_with("## Casa Verde"));
    assert!(output.contains("*Fresh. Bold. Mexican.*"));
    assert!(output.contains("A lively spot..."));
    assert!(output.contains("### Menu Items"));
    assert!(output.contains("- Tacos"));
    assert!(output.contains("### Drinks"));
    assert!(output.contains("- Horchata"));
}

#[test]
fn markdown_export_with_empty_drinks_uses_placeholder() {
    let output = export_document(&casa_verde_without_extras(), ExportFormat::Markdown);

    assert!(output.contains("### Drinks"));
    assert!(output.contains("(none)"));
    assert!(!output.contains("*Fresh"));
}

#[test]
fn plain_export_renders_labels_and_items() {
    let output = export_document(&casa_verde(), ExportFormat::Text);

    assert!(output.starts_with("Casa Verde"));
    assert!(output.contains("Menu Items\nTacos\nElote"));
    assert!(output.contains("Drinks\nHorchata\nAgua Fresca"));
}

#[test]
fn plain_export_with_empty_drinks_uses_placeholder() {
    let output = export_document(&casa_verde_without_extras(), ExportFormat::Text);

    assert!(output.contains("Drinks\n(none)"));
}

#[test]
fn plain_export_omits_empty_slogan_and_description_lines() {
    let output = export_document(&casa_verde_without_extras(), ExportFormat::Text);

    assert!(output.starts_with("Casa Verde\n"));
    let second_line = output.lines().nth(1).unwrap();
    assert!(second_line.is_empty() || second_line == "Menu Items");
}

#[test]
fn export_has_no_leading_or_trailing_whitespace() {
    for format in [ExportFormat::Text, ExportFormat::Markdown] {
        let output = export_document(&casa_verde(), format);
        assert_eq!(output, output.trim());
    }
}

#[test]
fn display_list_styles() {
    let items = vec!["Tacos".to_string(), "Elote".to_string()];

    assert_eq!(display_list(&items, MenuStyle::Bullets), "- Tacos\n- Elote");
    assert_eq!(
        display_list(&items, MenuStyle::Numbered),
        "1. Tacos\n2. Elote"
    );
    assert_eq!(display_list(&items, MenuStyle::Plain), "Tacos\nElote");
    assert_eq!(display_list(&[], MenuStyle::Bullets), "");
}

#[test]
fn export_file_name_replaces_spaces_and_picks_extension() {
    assert_eq!(
        export_file_name("Casa Verde", ExportFormat::Markdown),
        "Casa_Verde.md"
    );
    assert_eq!(
        export_file_name("Casa Verde", ExportFormat::Text),
        "Casa_Verde.txt"
    );
    assert_eq!(
        export_file_name("La Bonne Table", ExportFormat::Text),
        "La_Bonne_Table.txt"
    );
}
