use thiserror::Error;

/// Fatal error conditions of the interface search.
///
/// A failed standardization is not represented here: such candidates are
/// dropped locally, and an exhausted search is an empty result rather than
/// an error.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("degenerate cell: {0}")]
    DegenerateCell(String),

    #[error("incompatible layers: {0}")]
    IncompatibleLayers(String),
}
