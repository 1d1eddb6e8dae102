//! Site generation: reads recipe documents, writes one page per recipe and
//! an optional index page.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::CookbookError;
use crate::model::Recipe;
use crate::parser::RecipeParser;
use crate::render::{render_index, render_recipe, Template};

/// Derive the output filename for a recipe title: lowercase, spaces become
/// hyphens, "&" becomes "and". No other characters are sanitized.
pub fn html_filename(title: &str) -> String {
    let slug = title.to_lowercase().replace(' ', "-").replace('&', "and");
    format!("{slug}.html")
}

/// What a generation run produced.
#[derive(Debug, Default)]
pub struct SiteReport {
    /// Paths of all pages written, in order
    pub pages: Vec<PathBuf>,
    /// Per-line parser warnings, prefixed with the source document path
    pub warnings: Vec<String>,
}

/// Drives the parse-render-write pipeline for a set of recipe documents.
///
/// Each document is processed independently; a failure aborts the run at
/// that document but pages already written stay on disk.
#[derive(Debug)]
pub struct SiteGenerator {
    recipe_template: Template,
    index_template: Option<Template>,
    output_dir: PathBuf,
    parser: RecipeParser,
}

impl SiteGenerator {
    pub fn new(recipe_template: Template, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            recipe_template,
            index_template: None,
            output_dir: output_dir.into(),
            parser: RecipeParser::new(),
        }
    }

    /// Also generate `index.html` from this template.
    pub fn index_template(mut self, template: Template) -> Self {
        self.index_template = Some(template);
        self
    }

    /// Replace the default (skip-policy) parser.
    pub fn parser(mut self, parser: RecipeParser) -> Self {
        self.parser = parser;
        self
    }

    /// Generate pages for every document in `paths`.
    pub fn generate(&self, paths: &[PathBuf]) -> Result<SiteReport, CookbookError> {
        fs::create_dir_all(&self.output_dir)?;

        let mut report = SiteReport::default();
        let mut recipes: Vec<Recipe> = Vec::with_capacity(paths.len());

        for path in paths {
            let document = fs::read_to_string(path)?;
            let parsed = self.parser.parse(&document)?;
            report.warnings.extend(
                parsed
                    .warnings
                    .into_iter()
                    .map(|warning| format!("{}: {warning}", path.display())),
            );

            let page = render_recipe(&self.recipe_template, &parsed.recipe)?;
            let out_path = self.output_dir.join(html_filename(&parsed.recipe.title));
            fs::write(&out_path, page)?;
            info!("wrote {}", out_path.display());

            report.pages.push(out_path);
            recipes.push(parsed.recipe);
        }

        if let Some(index_template) = &self.index_template {
            let index = render_index(index_template, &recipes)?;
            let index_path = self.output_dir.join("index.html");
            fs::write(&index_path, index)?;
            info!("wrote {}", index_path.display());
            report.pages.push(index_path);
        }

        Ok(report)
    }
}

/// Read a template file into a [`Template`].
pub fn load_template(path: &Path) -> Result<Template, CookbookError> {
    Ok(Template::new(fs::read_to_string(path)?))
}
