pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod providers;
pub mod record;
pub mod render;
pub mod transcript;

use std::path::{Path, PathBuf};

pub use builder::{ImportOutput, InputSource, Provider, RecipeImporter, RecipeImporterBuilder};
pub use config::{OutputFormat, PipelineConfig};
pub use error::ImportError;
pub use model::{IngredientEntry, Recipe, RecipeSections, SectionKind};

/// Split generated recipe text into ingredients, preparation, steps and notes.
///
/// Never fails: text without recognizable sections yields empty sections.
///
/// # Example
/// ```
/// let sections = video_recipe::parse_sections("1. Ingredients\nFlour | 2 | cups\n");
/// assert_eq!(sections.ingredients[0].quantity, "2 | cups");
/// ```
pub fn parse_sections(response_text: &str) -> RecipeSections {
    parser::parse(response_text)
}

/// Run the full pipeline for a video using `config.toml` and the environment.
///
/// Returns the path of the written document.
pub async fn import_from_url(url: &str) -> Result<PathBuf, ImportError> {
    let output = RecipeImporter::builder().url(url).build().await?;
    Ok(output.document_path)
}

/// Render a saved recipe record into `output_dir` without calling any external service.
///
/// Returns the path of the written document.
pub async fn render_record(
    record_path: &Path,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<PathBuf, ImportError> {
    let output = RecipeImporter::builder()
        .record(record_path)
        .config(PipelineConfig::default())
        .output_dir(output_dir)
        .format(format)
        .build()
        .await?;
    Ok(output.document_path)
}
