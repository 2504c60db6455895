//! Display and export style enums.

use serde::{Deserialize, Serialize};

/// On-screen rendering style for menu and drink lists.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum MenuStyle {
    #[default]
    Bullets,
    Numbered,
    Plain,
}

/// Flat-text encoding for the exported document.
///
/// # Examples
///
/// ```
/// use escoffier_core::ExportFormat;
///
/// assert_eq!(ExportFormat::Markdown.extension(), "md");
/// assert_eq!(ExportFormat::Text.mime(), "text/plain");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum ExportFormat {
    #[default]
    Text,
    Markdown,
}

impl ExportFormat {
    /// File extension for an exported document.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Markdown => "md",
        }
    }

    /// MIME type for an exported document.
    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Markdown => "text/markdown",
        }
    }
}
