//! Field readers
//!
//! Each field has one reader, registered in [`READERS`] in extraction order.
//! A reader sees only what its [`Source`] variant hands it: the caller's id,
//! the document, or the shared structured-data cache. Readers never see each
//! other's results.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::document::Document;
use crate::error::ParsingError;
use crate::listing::FieldValue;
use crate::normalize::{scalar_text, strip_thousands_separators, with_scheme};
use crate::sanitize::sanitize_fragment;
use crate::selectors::ListingSelectors;
use crate::structured_data::StructuredData;

/// Field of an extracted listing, in extraction order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Id,
    Name,
    Artwork,
    Description,
    CurrentRating,
    RatingCount,
    GenreNames,
    Url,
    Price,
    Author,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Id,
        Field::Name,
        Field::Artwork,
        Field::Description,
        Field::CurrentRating,
        Field::RatingCount,
        Field::GenreNames,
        Field::Url,
        Field::Price,
        Field::Author,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Artwork => "artwork",
            Field::Description => "description",
            Field::CurrentRating => "current_rating",
            Field::RatingCount => "rating_count",
            Field::GenreNames => "genre_names",
            Field::Url => "url",
            Field::Price => "price",
            Field::Author => "author",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown listing field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

type MarkupReader = fn(&dyn Document, &ListingSelectors) -> Result<FieldValue, ParsingError>;
type StructuredReader = fn(&StructuredData<'_>) -> Result<FieldValue, ParsingError>;

/// What a reader is allowed to look at
#[derive(Clone, Copy)]
pub(crate) enum Source {
    /// The identifier handed in by the caller
    Caller,
    /// The document, through the configured selectors
    Markup(MarkupReader),
    /// The embedded structured data of the pass
    Structured(StructuredReader),
}

pub(crate) const READERS: [(Field, Source); 10] = [
    (Field::Id, Source::Caller),
    (Field::Name, Source::Markup(read_name)),
    (Field::Artwork, Source::Markup(read_artwork)),
    (Field::Description, Source::Markup(read_description)),
    (Field::CurrentRating, Source::Structured(read_current_rating)),
    (Field::RatingCount, Source::Structured(read_rating_count)),
    (Field::GenreNames, Source::Markup(read_genre_names)),
    (Field::Url, Source::Structured(read_url)),
    (Field::Price, Source::Markup(read_price)),
    (Field::Author, Source::Structured(read_author)),
];

fn read_name(
    document: &dyn Document,
    selectors: &ListingSelectors,
) -> Result<FieldValue, ParsingError> {
    // Only the span keeps the bare app name; the heading may carry extra text.
    let name = document.select_text(&selectors.name).concat();

    if name.is_empty() {
        return Err(ParsingError::MissingName);
    }
    Ok(FieldValue::Text(name))
}

fn read_artwork(
    document: &dyn Document,
    selectors: &ListingSelectors,
) -> Result<FieldValue, ParsingError> {
    let url = document
        .select_attr(&selectors.artwork, "src")
        .map(|src| src.trim().to_string())
        .filter(|src| !src.is_empty())
        .map(|src| with_scheme(&src))
        .unwrap_or_default();

    Ok(FieldValue::Text(url))
}

fn read_description(
    document: &dyn Document,
    selectors: &ListingSelectors,
) -> Result<FieldValue, ParsingError> {
    let description = document
        .select_inner_html(&selectors.description)
        .map(|markup| {
            sanitize_fragment(markup.trim(), &selectors.description_allowed_tags)
                .trim()
                .to_string()
        })
        .unwrap_or_default();

    Ok(FieldValue::Text(description))
}

fn read_current_rating(data: &StructuredData<'_>) -> Result<FieldValue, ParsingError> {
    let rating = data.text_or_empty(&["aggregateRating", "ratingValue"]);
    Ok(FieldValue::Text(rating.trim().to_string()))
}

fn read_rating_count(data: &StructuredData<'_>) -> Result<FieldValue, ParsingError> {
    let count = data.text_or_empty(&["aggregateRating", "ratingCount"]);
    Ok(FieldValue::Text(strip_thousands_separators(&count)))
}

fn read_genre_names(
    document: &dyn Document,
    selectors: &ListingSelectors,
) -> Result<FieldValue, ParsingError> {
    Ok(FieldValue::List(document.select_text(&selectors.genre)))
}

/// The canonical URL needs the structured-data block itself: a missing or
/// malformed block fails the pass, a block without `url` yields `""`.
fn read_url(data: &StructuredData<'_>) -> Result<FieldValue, ParsingError> {
    let url = data
        .lookup(&["url"])?
        .and_then(scalar_text)
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .map(|url| with_scheme(&url))
        .unwrap_or_default();

    Ok(FieldValue::Text(url))
}

fn read_price(
    document: &dyn Document,
    selectors: &ListingSelectors,
) -> Result<FieldValue, ParsingError> {
    let price = document
        .select_attr(&selectors.price, "content")
        .map(|content| content.trim().to_string())
        .unwrap_or_default();

    Ok(FieldValue::Text(price))
}

fn read_author(data: &StructuredData<'_>) -> Result<FieldValue, ParsingError> {
    let author = data.text_or_empty(&["author", "name"]);
    Ok(FieldValue::Text(author.trim().to_string()))
}
