//! App listing metadata extraction
//!
//! Reads a fixed set of fields from a parsed app store listing page:
//! - name, artwork, description, genres and price from the page markup
//! - rating, rating count, canonical URL and author from the embedded JSON-LD block
//!
//! Fetching the page is left to the caller.

pub mod document;
pub mod error;
pub mod listing;
pub mod normalize;
pub mod parser;
pub mod readers;
pub mod sanitize;
pub mod selectors;
pub mod structured_data;

pub use document::Document;
pub use error::ParsingError;
pub use listing::{ExtractionResult, FieldValue};
pub use parser::AppParser;
pub use readers::{Field, UnknownField};
pub use selectors::ListingSelectors;
