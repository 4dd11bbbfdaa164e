use super::{ingredient_grid, Renderer};
use crate::model::{IngredientEntry, Recipe, SectionKind};
use html_escape::encode_text;
use std::fmt::Write;

const STYLE: &str = "\
body { font-family: Helvetica, Arial, sans-serif; margin: 1cm; }
h1 { text-align: center; margin-bottom: 4px; }
hr.title { width: 40%; border: 0; border-top: 1px solid black; }
p.author { text-align: center; font-style: italic; color: grey; font-size: 10pt; }
h2 { margin-top: 12px; margin-bottom: 6px; }
hr.section { border: 0; border-top: 1px solid grey; }
table.ingredients { width: 100%; table-layout: fixed; background: wheat; border-collapse: collapse; }
table.ingredients td { padding: 6px 15px; vertical-align: top; height: 1.2cm; }
";

/// Renders a recipe as a standalone, print-ready HTML page.
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, recipe: &Recipe) -> String {
        let sections = &recipe.sections;
        let title = encode_text(&recipe.title);
        let mut out = String::new();

        let _ = writeln!(out, "<!DOCTYPE html>");
        let _ = writeln!(out, "<html>\n<head>\n<meta charset=\"utf-8\">");
        let _ = writeln!(out, "<title>{}</title>", title);
        let _ = writeln!(out, "<style>\n{}</style>\n</head>\n<body>", STYLE);
        let _ = writeln!(out, "<h1>{}</h1>", title);
        let _ = writeln!(out, "<hr class=\"title\">");
        let _ = writeln!(out, "<p class=\"author\">by {}</p>", encode_text(&recipe.author));

        let _ = writeln!(out, "<h2>{}</h2>", SectionKind::Ingredients);
        if !sections.ingredients.is_empty() {
            let _ = writeln!(out, "<table class=\"ingredients\">");
            for row in ingredient_grid(&sections.ingredients) {
                out.push_str("<tr>");
                for cell in row {
                    let _ = write!(out, "<td>{}</td>", cell.map(ingredient_cell).unwrap_or_default());
                }
                out.push_str("</tr>\n");
            }
            let _ = writeln!(out, "</table>");
        }

        push_list(&mut out, SectionKind::Preparation, "ul", &sections.preparation);
        push_list(&mut out, SectionKind::Steps, "ol", &sections.steps);
        push_list(&mut out, SectionKind::Notes, "ul", &sections.notes);

        let _ = writeln!(out, "</body>\n</html>");
        out
    }
}

fn ingredient_cell(entry: &IngredientEntry) -> String {
    let mut cell = format!("<b>{}</b>", encode_text(&entry.ingredient));
    if let Some(quantity) = entry.stated_quantity() {
        cell.push_str(": ");
        cell.push_str(&encode_text(quantity));
    }
    cell
}

fn push_list(out: &mut String, kind: SectionKind, tag: &str, items: &[String]) {
    let _ = writeln!(out, "<h2>{}</h2>\n<hr class=\"section\">", kind);
    let _ = writeln!(out, "<{}>", tag);
    for item in items {
        let _ = writeln!(out, "<li>{}</li>", encode_text(item));
    }
    let _ = writeln!(out, "</{}>", tag);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecipeSections;
    use scraper::{Html, Selector};

    fn texts(document: &Html, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        document
            .select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    #[test]
    fn test_render_structure() {
        let recipe = Recipe::new(
            "Fish & Chips",
            "<Chef>",
            RecipeSections {
                ingredients: vec![
                    IngredientEntry::new("Cod", "2 fillets"),
                    IngredientEntry::new("Salt", "N/A"),
                ],
                preparation: vec!["Cut potatoes".to_string()],
                steps: vec!["Fry chips".to_string(), "Fry fish".to_string()],
                notes: vec!["Use a thermometer".to_string()],
            },
        );

        let html = HtmlRenderer.render(&recipe);
        assert!(html.contains("<h1>Fish &amp; Chips</h1>"));
        assert!(html.contains("by &lt;Chef&gt;"));

        let document = Html::parse_document(&html);
        assert_eq!(texts(&document, "h1"), vec!["Fish & Chips"]);
        assert_eq!(
            texts(&document, "table.ingredients td"),
            vec!["Cod: 2 fillets", "Salt", ""]
        );
        assert_eq!(texts(&document, "ol li"), vec!["Fry chips", "Fry fish"]);
        assert_eq!(
            texts(&document, "ul li"),
            vec!["Cut potatoes", "Use a thermometer"]
        );
        assert_eq!(
            texts(&document, "h2"),
            vec!["Ingredients", "Preparation", "Steps", "Notes"]
        );
    }
}
