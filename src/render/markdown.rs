use super::{ingredient_grid, Renderer, INGREDIENT_COLUMNS};
use crate::model::{IngredientEntry, Recipe, SectionKind};
use std::fmt::Write;

/// Renders a recipe as a Markdown document.
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, recipe: &Recipe) -> String {
        let sections = &recipe.sections;
        let mut out = String::new();

        let _ = writeln!(out, "# {}\n", recipe.title);
        let _ = writeln!(out, "*by {}*\n", recipe.author);

        let _ = writeln!(out, "## {}\n", SectionKind::Ingredients);
        if !sections.ingredients.is_empty() {
            let header = vec![" "; INGREDIENT_COLUMNS].join("|");
            let rule = vec!["---"; INGREDIENT_COLUMNS].join("|");
            let _ = writeln!(out, "|{}|\n|{}|", header, rule);
            for row in ingredient_grid(&sections.ingredients) {
                let cells: Vec<String> = row
                    .into_iter()
                    .map(|cell| cell.map(ingredient_cell).unwrap_or_default())
                    .collect();
                let _ = writeln!(out, "| {} |", cells.join(" | "));
            }
            out.push('\n');
        }

        let _ = writeln!(out, "## {}\n", SectionKind::Preparation);
        for step in &sections.preparation {
            let _ = writeln!(out, "- {}", step);
        }
        out.push('\n');

        let _ = writeln!(out, "## {}\n", SectionKind::Steps);
        for (number, step) in sections.steps.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", number + 1, step);
        }
        out.push('\n');

        let _ = writeln!(out, "## {}\n", SectionKind::Notes);
        for note in &sections.notes {
            let _ = writeln!(out, "- {}", note);
        }

        out
    }
}

fn ingredient_cell(entry: &IngredientEntry) -> String {
    let mut cell = format!("**{}**", escape_cell(&entry.ingredient));
    if let Some(quantity) = entry.stated_quantity() {
        cell.push_str(": ");
        cell.push_str(&escape_cell(quantity));
    }
    cell
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
