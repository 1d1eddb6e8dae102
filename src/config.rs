use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// What to do with an ingredient line that does not match the grammar.
///
/// The reference behavior is a silent drop; `Warn` and `Fail` make the
/// data-loss visible without changing the default output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum UnparseablePolicy {
    /// Drop the line with no diagnostic (reference behavior)
    #[default]
    Skip,
    /// Drop the line and collect a warning
    #[serde(alias = "collect_warning")]
    #[value(alias = "collect_warning")]
    Warn,
    /// Abort the document on the first unmatched line
    Fail,
}

/// Site generation settings
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Directory scanned for *.yaml recipe documents when no paths are given
    #[serde(default = "default_recipes_dir")]
    pub recipes_dir: String,
    /// Template for individual recipe pages
    #[serde(default = "default_recipe_template")]
    pub recipe_template: String,
    /// Template for the index page
    #[serde(default = "default_index_template")]
    pub index_template: String,
    /// Directory generated pages are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Policy for ingredient lines that fail the grammar
    #[serde(default)]
    pub on_unparseable_line: UnparseablePolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            recipes_dir: default_recipes_dir(),
            recipe_template: default_recipe_template(),
            index_template: default_index_template(),
            output_dir: default_output_dir(),
            on_unparseable_line: UnparseablePolicy::default(),
        }
    }
}

// Default value functions
fn default_recipes_dir() -> String {
    "recipes".to_string()
}

fn default_recipe_template() -> String {
    "templates/recipe.html".to_string()
}

fn default_index_template() -> String {
    "templates/index.html".to_string()
}

fn default_output_dir() -> String {
    "www".to_string()
}

impl SiteConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKBOOK__ prefix
    /// 2. cookbook.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COOKBOOK__OUTPUT_DIR
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("cookbook").required(false))
            .add_source(
                Environment::with_prefix("COOKBOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
