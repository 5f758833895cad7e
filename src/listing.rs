//! Extraction result

use std::collections::BTreeMap;

use serde::Serialize;

use crate::readers::Field;

/// Value produced by one field reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            FieldValue::Text(_) => None,
        }
    }
}

/// Immutable attribute bag of one listing, keyed by field.
///
/// Every [`Field`] is present: optional fields that were absent from the page
/// hold `""` (or an empty list for genres).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractionResult {
    fields: BTreeMap<Field, FieldValue>,
}

impl ExtractionResult {
    /// Only the parser builds results, after every reader has run.
    pub(crate) fn from_fields(fields: BTreeMap<Field, FieldValue>) -> Self {
        debug_assert_eq!(fields.len(), Field::ALL.len());
        Self { fields }
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    /// Fields and values in extraction order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.fields.iter().map(|(field, value)| (*field, value))
    }

    fn text(&self, field: Field) -> &str {
        self.get(field).and_then(FieldValue::as_text).unwrap_or_default()
    }

    pub fn id(&self) -> &str {
        self.text(Field::Id)
    }

    pub fn name(&self) -> &str {
        self.text(Field::Name)
    }

    pub fn artwork(&self) -> &str {
        self.text(Field::Artwork)
    }

    pub fn description(&self) -> &str {
        self.text(Field::Description)
    }

    pub fn current_rating(&self) -> &str {
        self.text(Field::CurrentRating)
    }

    pub fn rating_count(&self) -> &str {
        self.text(Field::RatingCount)
    }

    pub fn genre_names(&self) -> &[String] {
        self.get(Field::GenreNames)
            .and_then(FieldValue::as_list)
            .unwrap_or_default()
    }

    pub fn url(&self) -> &str {
        self.text(Field::Url)
    }

    pub fn price(&self) -> &str {
        self.text(Field::Price)
    }

    pub fn author(&self) -> &str {
        self.text(Field::Author)
    }
}
