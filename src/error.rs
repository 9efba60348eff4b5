use thiserror::Error;

/// The primary error type for the commons-metadata crate.
#[derive(Error, Debug)]
pub enum CommonsMetadataError {
    // --- Client construction ---
    #[error("failed to initialize the HTTP client")]
    ClientInit(#[source] reqwest::Error),

    // --- Remote lookups ---
    #[error("Commons API query failed: {0}")]
    Query(#[from] crate::query::QueryError),
}
