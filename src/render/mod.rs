//! Document renderers for parsed recipes.

mod html;
mod markdown;

pub use html::HtmlRenderer;
pub use markdown::MarkdownRenderer;

use crate::config::OutputFormat;
use crate::model::{IngredientEntry, Recipe};
use crate::ImportError;
use log::info;
use std::path::{Path, PathBuf};

/// Number of columns in the ingredient grid.
pub const INGREDIENT_COLUMNS: usize = 3;

/// Turns a recipe into a printable document.
pub trait Renderer: Send + Sync {
    /// File extension of the produced document, without the dot
    fn extension(&self) -> &'static str;

    fn render(&self, recipe: &Recipe) -> String;
}

/// Renderer for the configured output format
pub fn renderer_for(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Markdown => Box::new(MarkdownRenderer),
        OutputFormat::Html => Box::new(HtmlRenderer),
    }
}

/// Render `recipe` and write it to `path`, creating parent directories as needed.
pub async fn write_document(
    renderer: &dyn Renderer,
    recipe: &Recipe,
    path: &Path,
) -> Result<(), ImportError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, renderer.render(recipe)).await?;
    info!("Rendered recipe '{}' to {}", recipe.title, path.display());
    Ok(())
}

/// Document path inside `output_dir` derived from the recipe title.
pub fn document_path(output_dir: &Path, recipe: &Recipe, renderer: &dyn Renderer) -> PathBuf {
    output_dir.join(format!("{}.{}", slugify(&recipe.title), renderer.extension()))
}

/// File-name friendly version of a title: lowercase alphanumeric words joined by `_`.
pub fn slugify(title: &str) -> String {
    let slug = title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_");

    if slug.is_empty() {
        "recipe".to_string()
    } else {
        slug
    }
}

/// Lay out ingredients in a grid filled column by column, like a printed recipe card.
pub(crate) fn ingredient_grid(ingredients: &[IngredientEntry]) -> Vec<Vec<Option<&IngredientEntry>>> {
    let rows = ingredients.len().div_ceil(INGREDIENT_COLUMNS);
    (0..rows)
        .map(|row| {
            (0..INGREDIENT_COLUMNS)
                .map(|col| ingredients.get(row + col * rows))
                .collect()
        })
        .collect()
}
