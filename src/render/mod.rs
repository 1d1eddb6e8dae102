//! HTML fragment assembly for recipe and index pages.
//!
//! Fragments are joined with newlines and substituted into the page
//! templates. Tag and title text is emitted as-is: the reference generator
//! performed no HTML escaping and no URL-encoding of tag query parameters,
//! and that output is preserved byte for byte.

pub mod highlight;
pub mod site;
pub mod template;

use std::collections::{BTreeSet, HashMap};

use crate::error::CookbookError;
use crate::model::{Ingredient, Recipe};

pub use highlight::highlight_ingredients;
pub use site::{html_filename, SiteGenerator, SiteReport};
pub use template::Template;

/// Format a quantity the way the reference output does: integral values
/// keep a trailing ".0" ("2.0"), fractional values print as-is ("0.75").
fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{quantity:.1}")
    } else {
        quantity.to_string()
    }
}

fn ingredient_fragment(ing: &Ingredient) -> String {
    let processing = match &ing.processing {
        Some(p) => format!(r#"<span class="processing"> ({p})</span>"#),
        None => String::new(),
    };
    format!(
        r#"<li><span class="qty">{}</span><span class="unit">{}</span><span class="ingredient">{}{}</span></li>"#,
        format_quantity(ing.quantity),
        ing.unit,
        ing.name,
        processing,
    )
}

/// Render one recipe page.
///
/// The template placeholders are `title`, `servings`, `time` (always the
/// literal "N/A"), `tags`, `ingredients`, and `steps`.
pub fn render_recipe(template: &Template, recipe: &Recipe) -> Result<String, CookbookError> {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(ingredient_fragment)
        .collect::<Vec<_>>()
        .join("\n");

    let steps = recipe
        .steps
        .iter()
        .map(|step| {
            format!(
                "<li>{}</li>",
                highlight_ingredients(step, &recipe.ingredients)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let tags = recipe
        .tags
        .iter()
        .map(|tag| format!(r#"<a href="index.html?tag={tag}" class="tag-chip">{tag}</a>"#))
        .collect::<Vec<_>>()
        .join("\n");

    template.substitute(&HashMap::from([
        ("title", recipe.title.clone()),
        ("servings", recipe.servings.to_string()),
        ("time", "N/A".to_string()),
        ("tags", tags),
        ("ingredients", ingredients),
        ("steps", steps),
    ]))
}

/// Render the index page from all recipes.
///
/// The template placeholders are `all_tags` (sorted unique tag chips) and
/// `recipes` (one link per recipe, in input order).
pub fn render_index(template: &Template, recipes: &[Recipe]) -> Result<String, CookbookError> {
    let all_tags: BTreeSet<&str> = recipes
        .iter()
        .flat_map(|recipe| recipe.tags.iter().map(String::as_str))
        .collect();

    let tags = all_tags
        .iter()
        .map(|tag| format!(r#"<span class="tag-chip" data-tag="{tag}">{tag}</span>"#))
        .collect::<Vec<_>>()
        .join("\n");

    let links = recipes
        .iter()
        .map(|recipe| {
            format!(
                r#"<a href="{}" class="recipe-item" data-tags="{}">{}</a>"#,
                html_filename(&recipe.title),
                recipe.tags.join(","),
                recipe.title,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    template.substitute(&HashMap::from([("all_tags", tags), ("recipes", links)]))
}
