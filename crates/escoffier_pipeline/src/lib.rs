//! Generation pipeline for the Escoffier restaurant branding generator.
//!
//! Contains the prompt template set, the text normalizer applied to raw
//! model output, the two-stage generation pipeline, and the export and
//! display formatters.

mod export;
mod normalize;
mod pipeline;
mod templates;

pub use export::{display_list, export_document, export_file_name};
pub use normalize::{MAX_LIST_ITEMS, clean_restaurant_name, normalize_lines};
pub use pipeline::GenerationPipeline;
pub use templates::{PromptTemplate, Stage};
