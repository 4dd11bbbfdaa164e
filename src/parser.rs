//! Section parser for generated recipe text.
//!
//! The generation prompt asks the model for four numbered sections:
//!
//! ```text
//! 1. Ingredients
//! Flour | 200g
//!
//! 2. Preparation required before cooking
//! Preheat the oven to 180C
//!
//! 3. Recipe Instructions
//! Whisk everything together
//!
//! 4. Notes
//! Keeps for two days
//! ```
//!
//! Model output only loosely follows that shape, so the parser is a single pass over the
//! lines with a small state machine rather than a strict grammar. Malformed input never
//! fails; it just yields fewer entries.

use crate::model::{IngredientEntry, RecipeSections, SectionKind};
use log::debug;

/// Separator between the ingredient name and its quantity.
pub const INGREDIENT_SEPARATOR: char = '|';

/// Characters that end a line. `\r\n` counts as a single break.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// Parse generated text into its four recipe sections.
///
/// # Example
/// ```
/// use video_recipe::parser::parse;
///
/// let sections = parse("1. Ingredients\nFlour | 200g\n2. Preparation required before cooking\nPreheat oven\n");
/// assert_eq!(sections.ingredients[0].ingredient, "Flour");
/// assert_eq!(sections.preparation, vec!["Preheat oven"]);
/// ```
pub fn parse(response_text: &str) -> RecipeSections {
    let mut parser = SectionParser::default();
    for line in split_lines(response_text) {
        parser.feed(line);
    }
    parser.finish()
}

/// Working state for one parse call.
#[derive(Debug, Default)]
struct SectionParser {
    current: Option<SectionKind>,
    sections: RecipeSections,
}

impl SectionParser {
    fn feed(&mut self, raw: &str) {
        let line = raw.trim();

        // A boundary closes the open section. The same line may still open the next one.
        let closed = self.current.is_some() && is_boundary(line);
        if closed {
            self.current = None;
        }

        if let Some(kind) = header_of(line) {
            self.current = Some(kind);
            return;
        }

        if closed {
            return;
        }

        match self.current {
            None => {}
            Some(SectionKind::Ingredients) => {
                if let Some(entry) = split_ingredient(line) {
                    self.sections.ingredients.push(entry);
                }
            }
            Some(SectionKind::Preparation) => self.sections.preparation.push(line.to_string()),
            Some(SectionKind::Steps) => self.sections.steps.push(line.to_string()),
            Some(SectionKind::Notes) => self.sections.notes.push(line.to_string()),
        }
    }

    fn finish(self) -> RecipeSections {
        for kind in SectionKind::ALL {
            debug!("{}: {} entries", kind, self.sections.len_of(kind));
        }
        self.sections
    }
}

/// Split on every line break, including a lone `\r` and the Unicode line and paragraph
/// separators. A trailing break does not produce an extra empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(LINE_BREAKS) {
            Some(at) => {
                let (line, tail) = rest.split_at(at);
                let width = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(0, char::len_utf8)
                };
                rest = &tail[width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Section opened by `line`, if it starts with one of the known markers.
fn header_of(line: &str) -> Option<SectionKind> {
    SectionKind::ALL
        .into_iter()
        .find(|kind| line.starts_with(kind.marker()))
}

/// Blank lines and anything shaped like a numbered header (`<digits>. `) end a section.
fn is_boundary(line: &str) -> bool {
    line.is_empty() || starts_with_numbered_label(line)
}

/// Digits may come from any script, so `"٣. "` opens a label too.
fn starts_with_numbered_label(line: &str) -> bool {
    let rest = line.trim_start_matches(char::is_numeric);
    if rest.len() == line.len() {
        return false;
    }
    let mut chars = rest.chars();
    chars.next() == Some('.') && chars.next().is_some_and(char::is_whitespace)
}

/// Split `ingredient | quantity` on the first separator. Lines without one are skipped.
fn split_ingredient(line: &str) -> Option<IngredientEntry> {
    let (ingredient, quantity) = line.split_once(INGREDIENT_SEPARATOR)?;
    Some(IngredientEntry::new(ingredient.trim(), quantity.trim()))
}
