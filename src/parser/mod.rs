//! Recipe document parsing.
//!
//! A recipe document is a YAML mapping with `title` and `servings` required
//! and `tags`, `steps`, and `ingredients` optional. Each ingredient entry is
//! a free-text line like "1 medium onion (fine dice)" that gets decomposed
//! into quantity, unit, name, and an optional processing note.

pub mod units;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::config::UnparseablePolicy;
use crate::error::CookbookError;
use crate::model::{Ingredient, Recipe};

pub use units::normalize_unit;

/// Grammar for one ingredient line: a leading decimal quantity, an optional
/// unit token, the name, and an optional trailing parenthesized note.
///
/// The unit group is greedy: any line of the form `<qty> <word> <rest>`
/// assigns `<word>` to the unit, never backtracking into the name ("2 fresh
/// basil leaves" yields unit "fresh"). The group only stays empty when
/// nothing but the name follows the quantity ("2 eggs"), because the
/// mandatory whitespace-plus-name tail could not match otherwise. Downstream
/// content depends on this exact behavior.
static INGREDIENT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<quantity>\d+(?:\.\d+)?)\s*(?P<unit>\w+)?\s+(?P<name>[^(]+?)(?:\s*\((?P<processing>[^)]+)\))?\s*$",
    )
    .unwrap()
});

/// Parse one free-text ingredient line.
///
/// Returns `None` when the line does not match the grammar (most commonly a
/// missing leading quantity, e.g. "a pinch of salt").
pub fn parse_ingredient_line(line: &str) -> Option<Ingredient> {
    let caps = INGREDIENT_LINE.captures(line)?;
    let quantity: f64 = caps["quantity"].parse().ok()?;

    Some(Ingredient {
        name: caps["name"].trim().to_string(),
        quantity,
        unit: normalize_unit(caps.name("unit").map(|m| m.as_str())),
        processing: caps.name("processing").map(|m| m.as_str().to_string()),
    })
}

/// Raw document shape as it appears in YAML, before ingredient lines are
/// parsed. Missing `title` or `servings` surfaces as a deserialization error.
#[derive(Debug, Deserialize)]
struct RawRecipe {
    title: String,
    servings: u32,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    steps: Vec<String>,
    #[serde(default)]
    ingredients: Vec<String>,
}

/// A parsed document together with any per-line warnings the configured
/// policy collected. `warnings` is always empty under the default `skip`
/// policy.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub recipe: Recipe,
    pub warnings: Vec<String>,
}

/// Parses recipe documents, applying one [`UnparseablePolicy`] to ingredient
/// lines that do not match the grammar.
#[derive(Debug, Clone, Default)]
pub struct RecipeParser {
    policy: UnparseablePolicy,
}

impl RecipeParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: UnparseablePolicy) -> Self {
        Self { policy }
    }

    /// Parse one YAML recipe document.
    ///
    /// Ingredient entries that fail the line grammar are handled per the
    /// policy: dropped silently (`Skip`), dropped with a collected warning
    /// (`Warn`), or fatal for the document (`Fail`). Order is preserved
    /// among surviving ingredients.
    pub fn parse(&self, input: &str) -> Result<ParsedDocument, CookbookError> {
        let raw: RawRecipe = serde_yaml::from_str(input)?;

        let mut ingredients = Vec::with_capacity(raw.ingredients.len());
        let mut warnings = Vec::new();
        for line in &raw.ingredients {
            match parse_ingredient_line(line) {
                Some(ingredient) => ingredients.push(ingredient),
                None => match self.policy {
                    UnparseablePolicy::Skip => {
                        debug!("dropping unparseable ingredient line: {line:?}");
                    }
                    UnparseablePolicy::Warn => {
                        log::warn!("unparseable ingredient line: {line:?}");
                        warnings.push(format!("unparseable ingredient line: {line}"));
                    }
                    UnparseablePolicy::Fail => {
                        return Err(CookbookError::UnparseableLine(line.clone()));
                    }
                },
            }
        }

        Ok(ParsedDocument {
            recipe: Recipe {
                title: raw.title,
                servings: raw.servings,
                tags: raw.tags,
                steps: raw.steps,
                ingredients,
            },
            warnings,
        })
    }
}
