use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;

use cookbook_gen::render::site::load_template;
use cookbook_gen::{CookbookError, RecipeParser, SiteConfig, SiteGenerator, UnparseablePolicy};

#[derive(Parser)]
#[command(name = "cookbook-gen", about = "A simple cookbook site generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate recipe pages from YAML files using a template
    Gen {
        /// Paths to recipe YAML files (defaults to the configured recipes directory)
        paths: Vec<PathBuf>,

        /// Path to the recipe template file
        #[arg(short = 't', long = "template")]
        template: Option<PathBuf>,

        /// Path to the index page template file
        #[arg(long = "index-template")]
        index_template: Option<PathBuf>,

        /// Directory to save generated pages
        #[arg(short = 'o', long = "output-dir")]
        output_dir: Option<PathBuf>,

        /// What to do with ingredient lines that fail to parse
        #[arg(long = "on-unparseable-line", value_enum)]
        on_unparseable_line: Option<UnparseablePolicy>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = SiteConfig::load()?;

    match cli.command {
        Command::Gen {
            paths,
            template,
            index_template,
            output_dir,
            on_unparseable_line,
        } => {
            let template_path =
                template.unwrap_or_else(|| PathBuf::from(&config.recipe_template));
            let index_path =
                index_template.unwrap_or_else(|| PathBuf::from(&config.index_template));
            let output_dir = output_dir.unwrap_or_else(|| PathBuf::from(&config.output_dir));
            let policy = on_unparseable_line.unwrap_or(config.on_unparseable_line);

            let paths = if paths.is_empty() {
                recipe_paths(&config.recipes_dir)?
            } else {
                paths
            };
            debug!("generating {} recipe page(s)", paths.len());

            let mut generator = SiteGenerator::new(load_template(&template_path)?, output_dir)
                .parser(RecipeParser::with_policy(policy));
            // The index page is optional; skip it when its template is absent
            if index_path.is_file() {
                generator = generator.index_template(load_template(&index_path)?);
            }

            let report = generator.generate(&paths)?;
            for warning in &report.warnings {
                eprintln!("warning: {warning}");
            }
            println!("{} page(s) written", report.pages.len());
        }
    }

    Ok(())
}

/// All *.yaml / *.yml files under the recipes directory, sorted so the index
/// page order is deterministic.
fn recipe_paths(recipes_dir: &str) -> Result<Vec<PathBuf>, CookbookError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(recipes_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("yaml") | Some("yml")
            )
        })
        .collect();
    paths.sort();
    Ok(paths)
}
