use clap::Parser;
use escoffier::cli::{Cli, Commands, OutputFormat};
use escoffier_core::{Cuisine, ExportFormat, MenuStyle};
use std::path::PathBuf;

#[test]
fn generate_defaults_match_the_original_ui() {
    let cli = Cli::try_parse_from(["escoffier", "generate"]).unwrap();

    match cli.command {
        Commands::Generate {
            cuisine,
            temperature,
            style,
            format,
            api_key,
            output,
            out,
        } => {
            assert_eq!(cuisine, Cuisine::Mexican);
            assert!((temperature - 0.7).abs() < f32::EPSILON);
            assert_eq!(style, MenuStyle::Bullets);
            assert_eq!(format, ExportFormat::Text);
            assert_eq!(api_key, None);
            assert_eq!(output, OutputFormat::Human);
            assert_eq!(out, None);
        }
        other => panic!("expected generate, got {other:?}"),
    }
}

#[test]
fn generate_accepts_case_insensitive_enums() {
    let cli = Cli::try_parse_from([
        "escoffier",
        "generate",
        "--cuisine",
        "thai",
        "--style",
        "NUMBERED",
        "--format",
        "Markdown",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            cuisine,
            style,
            format,
            ..
        } => {
            assert_eq!(cuisine, Cuisine::Thai);
            assert_eq!(style, MenuStyle::Numbered);
            assert_eq!(format, ExportFormat::Markdown);
        }
        other => panic!("expected generate, got {other:?}"),
    }
}

#[test]
fn unknown_cuisine_is_rejected_at_parse_time() {
    let result = Cli::try_parse_from(["escoffier", "generate", "--cuisine", "martian"]);
    assert!(result.is_err());
}

#[test]
fn out_flag_distinguishes_default_and_explicit_paths() {
    let cli = Cli::try_parse_from(["escoffier", "generate", "--out"]).unwrap();
    match cli.command {
        Commands::Generate { out, .. } => assert_eq!(out, Some(None)),
        other => panic!("expected generate, got {other:?}"),
    }

    let cli = Cli::try_parse_from(["escoffier", "generate", "--out", "menu.md"]).unwrap();
    match cli.command {
        Commands::Generate { out, .. } => {
            assert_eq!(out, Some(Some(PathBuf::from("menu.md"))));
        }
        other => panic!("expected generate, got {other:?}"),
    }
}

#[test]
fn cuisines_subcommand_parses() {
    let cli = Cli::try_parse_from(["escoffier", "cuisines"]).unwrap();
    assert!(matches!(cli.command, Commands::Cuisines));
}
