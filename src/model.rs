/// One parsed ingredient line.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    /// Trimmed ingredient name, non-empty
    pub name: String,
    /// Leading numeric token of the source line
    pub quantity: f64,
    /// Canonical unit abbreviation, or empty when the line carried no unit
    pub unit: String,
    /// Preparation note from a trailing parenthesis, e.g. "fine dice"
    pub processing: Option<String>,
}

/// One recipe document with its ingredient lines already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub title: String,
    pub servings: u32,
    /// Source order, duplicates permitted
    pub tags: Vec<String>,
    pub steps: Vec<String>,
    /// Source order among lines that matched the grammar
    pub ingredients: Vec<Ingredient>,
}
