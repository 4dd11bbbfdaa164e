//! JSON persistence for parsed recipes.
//!
//! A saved record can be rendered again later without fetching the transcript or calling
//! the generation model.

use crate::model::Recipe;
use crate::ImportError;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Extension used for persisted recipe records.
pub const RECORD_EXTENSION: &str = "json";

/// Write `recipe` to `path` as pretty-printed JSON.
pub async fn save(recipe: &Recipe, path: &Path) -> Result<(), ImportError> {
    let json = serde_json::to_string_pretty(recipe)?;
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, json).await?;
    info!("Saved recipe record to {}", path.display());
    Ok(())
}

/// Read a recipe previously written by [`save`].
pub async fn load(path: &Path) -> Result<Recipe, ImportError> {
    let json = tokio::fs::read_to_string(path).await?;
    let recipe = from_json(&json)?;
    debug!("Loaded recipe '{}' from {}", recipe.title, path.display());
    Ok(recipe)
}

pub fn from_json(json: &str) -> Result<Recipe, ImportError> {
    Ok(serde_json::from_str(json)?)
}

/// The record path that sits next to a rendered document.
pub fn record_path_for(document_path: &Path) -> PathBuf {
    document_path.with_extension(RECORD_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IngredientEntry, RecipeSections};

    #[test]
    fn test_record_path_for() {
        assert_eq!(
            record_path_for(Path::new("recipes/pancakes.html")),
            Path::new("recipes/pancakes.json")
        );
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = from_json("{ not json").unwrap_err();
        assert!(matches!(err, ImportError::RecordError(_)));
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records").join("stew.json");
        let recipe = Recipe::new(
            "Stew",
            "Chef",
            RecipeSections {
                ingredients: vec![
                    IngredientEntry::new("Beef", "1kg"),
                    IngredientEntry::new("Beef", "1kg"),
                    IngredientEntry::new("Thyme", "N/A"),
                ],
                steps: vec!["Simmer for 3 hours".to_string()],
                ..Default::default()
            },
        );

        save(&recipe, &path).await.unwrap();
        assert_eq!(load(&path).await.unwrap(), recipe);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.json")).await.unwrap_err();
        assert!(matches!(err, ImportError::IoError(_)));
    }
}
