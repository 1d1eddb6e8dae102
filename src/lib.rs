//! cookbook-gen turns YAML recipe documents into static HTML pages.
//!
//! The interesting part is the ingredient-line parser: a free-text line like
//! "1 medium onion (fine dice)" is decomposed into a quantity, a normalized
//! unit, a name, and an optional processing note. Everything else is glue:
//! template substitution, an index page, and filename slugs.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

use std::path::Path;

pub use config::{SiteConfig, UnparseablePolicy};
pub use error::CookbookError;
pub use model::{Ingredient, Recipe};
pub use parser::{normalize_unit, parse_ingredient_line, ParsedDocument, RecipeParser};
pub use render::{
    highlight_ingredients, html_filename, render_index, render_recipe, SiteGenerator, SiteReport,
    Template,
};

/// Parse one YAML recipe document with the default (skip) policy.
pub fn parse_recipe(input: &str) -> Result<Recipe, CookbookError> {
    Ok(RecipeParser::new().parse(input)?.recipe)
}

/// Parse one YAML recipe file with the default (skip) policy.
pub fn parse_recipe_file(path: &Path) -> Result<Recipe, CookbookError> {
    parse_recipe(&std::fs::read_to_string(path)?)
}
