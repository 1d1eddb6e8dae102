use thiserror::Error;

/// Errors that can occur while parsing recipe documents or generating pages
#[derive(Error, Debug)]
pub enum CookbookError {
    /// Failed to deserialize a recipe document (missing required keys,
    /// malformed YAML). Fatal for that one document.
    #[error("Failed to read recipe document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Failed to read an input file or write an output page
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An ingredient line did not match the grammar and the parser was
    /// configured with the `fail` policy
    #[error("Unparseable ingredient line: {0:?}")]
    UnparseableLine(String),

    /// A template referenced a placeholder no value was supplied for
    #[error("Template placeholder has no value: `{0}`")]
    MissingPlaceholder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
