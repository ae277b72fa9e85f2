use thiserror::Error;

/// Failures a command can surface to the user.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog/translation/listing loading failed
    #[error("{0}")]
    Catalog(#[from] xenon_catalog::CatalogError),

    /// Database could not be opened or created
    #[error("Database error: {0}")]
    Schema(#[from] xenon_db::SchemaError),

    /// Database operation failed
    #[error("Database error: {0}")]
    Operation(#[from] xenon_db::OperationError),

    /// Filter generation failed
    #[error("{0}")]
    Filter(#[from] xenon_filters::FilterError),
}
