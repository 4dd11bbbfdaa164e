use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantity token the generation prompt uses when a video never states an amount.
pub const NO_QUANTITY: &str = "N/A";

/// The four sections a generated recipe is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Ingredients,
    Preparation,
    Steps,
    Notes,
}

impl SectionKind {
    /// All sections in the order the generation prompt asks for them.
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Ingredients,
        SectionKind::Preparation,
        SectionKind::Steps,
        SectionKind::Notes,
    ];

    /// Literal line prefix that opens this section in generated text.
    pub fn marker(&self) -> &'static str {
        match self {
            SectionKind::Ingredients => "1. Ingredients",
            SectionKind::Preparation => "2. Preparation required before cooking",
            SectionKind::Steps => "3. Recipe Instructions",
            SectionKind::Notes => "4. Notes",
        }
    }

    pub fn ordinal(&self) -> u8 {
        match self {
            SectionKind::Ingredients => 1,
            SectionKind::Preparation => 2,
            SectionKind::Steps => 3,
            SectionKind::Notes => 4,
        }
    }

    /// Heading used when rendering the section into a document.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Ingredients => "Ingredients",
            SectionKind::Preparation => "Preparation",
            SectionKind::Steps => "Steps",
            SectionKind::Notes => "Notes",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A single `ingredient | quantity` line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientEntry {
    pub ingredient: String,
    pub quantity: String,
}

impl IngredientEntry {
    pub fn new(ingredient: impl Into<String>, quantity: impl Into<String>) -> Self {
        IngredientEntry {
            ingredient: ingredient.into(),
            quantity: quantity.into(),
        }
    }

    /// The quantity, unless it is empty or the `N/A` placeholder.
    pub fn stated_quantity(&self) -> Option<&str> {
        if self.quantity.is_empty() || self.quantity == NO_QUANTITY {
            None
        } else {
            Some(&self.quantity)
        }
    }
}

/// Structured output of the section parser.
///
/// Every field is always present; a section missing from the source text is simply empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSections {
    #[serde(default)]
    pub ingredients: Vec<IngredientEntry>,
    #[serde(default)]
    pub preparation: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl RecipeSections {
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
            && self.preparation.is_empty()
            && self.steps.is_empty()
            && self.notes.is_empty()
    }

    /// Number of entries collected for a section.
    pub fn len_of(&self, kind: SectionKind) -> usize {
        match kind {
            SectionKind::Ingredients => self.ingredients.len(),
            SectionKind::Preparation => self.preparation.len(),
            SectionKind::Steps => self.steps.len(),
            SectionKind::Notes => self.notes.len(),
        }
    }
}

/// Parsed sections merged with the video metadata; this is what gets rendered and persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub author: String,
    #[serde(flatten)]
    pub sections: RecipeSections,
}

impl Recipe {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        sections: RecipeSections,
    ) -> Self {
        Recipe {
            title: title.into(),
            author: author.into(),
            sections,
        }
    }
}
