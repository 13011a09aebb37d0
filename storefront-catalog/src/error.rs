//! Catalog ingestion errors

use thiserror::Error;

/// Errors from decoding a raw catalog payload.
///
/// Only the top-level payload shape can fail; malformed records below it
/// are dropped during parsing.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog payload: {0}")]
    Payload(#[from] serde_json::Error),
}
