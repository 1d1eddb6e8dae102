use log::debug;
use regex::{NoExpand, RegexBuilder};

use crate::model::Ingredient;

/// Wrap ingredient-name occurrences in step text with a highlight span.
///
/// Names are processed longest-first so "heavy cream" wins over "cream";
/// each pass is a case-insensitive whole-word replacement, and the matched
/// text is replaced with the ingredient's canonical spelling. Passes run
/// sequentially over the accumulated result, so a shorter name that occurs
/// inside an already-wrapped longer one still gets its own nested span.
pub fn highlight_ingredients(text: &str, ingredients: &[Ingredient]) -> String {
    let mut names: Vec<&str> = ingredients.iter().map(|ing| ing.name.trim()).collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut result = text.to_string();
    for name in names {
        if name.is_empty() {
            continue;
        }
        let pattern = format!(r"\b{}\b", regex::escape(name));
        let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => regex,
            Err(err) => {
                debug!("skipping highlight for {name:?}: {err}");
                continue;
            }
        };
        let replacement = format!(r#"<span class="step-ingredient">{name}</span>"#);
        result = regex
            .replace_all(&result, NoExpand(&replacement))
            .into_owned();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            quantity: 1.0,
            unit: String::new(),
            processing: None,
        }
    }

    #[test]
    fn test_whole_word_match() {
        let out = highlight_ingredients("Add the bacon now", &[ingredient("bacon")]);
        assert_eq!(
            out,
            r#"Add the <span class="step-ingredient">bacon</span> now"#
        );
    }

    #[test]
    fn test_case_insensitive_replacement_uses_canonical_name() {
        let out = highlight_ingredients("Add Bacon.", &[ingredient("bacon")]);
        assert_eq!(out, r#"Add <span class="step-ingredient">bacon</span>."#);
    }

    #[test]
    fn test_longest_name_first() {
        let out = highlight_ingredients(
            "Add heavy cream",
            &[ingredient("cream"), ingredient("heavy cream")],
        );
        // The full span is wrapped first; the shorter name then matches
        // inside it and nests.
        assert_eq!(
            out,
            r#"Add <span class="step-ingredient">heavy <span class="step-ingredient">cream</span></span>"#
        );
    }

    #[test]
    fn test_no_partial_word_match() {
        let out = highlight_ingredients("Creamy texture", &[ingredient("cream")]);
        assert_eq!(out, "Creamy texture");
    }
}
