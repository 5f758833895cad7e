use thiserror::Error;

/// Raised when a listing page lacks information the parser treats as mandatory.
///
/// A failed pass produces no partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    #[error("Listing name heading is missing or empty")]
    MissingName,

    #[error("Embedded structured data block not found")]
    MissingStructuredData,

    #[error("Embedded structured data is malformed: {0}")]
    MalformedStructuredData(String),
}
