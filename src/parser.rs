//! Listing parser
//!
//! Runs every reader of [`READERS`] once, in order, against one document and
//! assembles the results. The structured-data cache lives for exactly one pass.

use std::collections::BTreeMap;

use scraper::Html;

use crate::document::Document;
use crate::error::ParsingError;
use crate::listing::{ExtractionResult, FieldValue};
use crate::readers::{Source, READERS};
use crate::selectors::ListingSelectors;
use crate::structured_data::StructuredData;

/// Extracts listing metadata from parsed pages
#[derive(Debug, Clone, Default)]
pub struct AppParser {
    selectors: ListingSelectors,
}

impl AppParser {
    pub fn with_selectors(selectors: ListingSelectors) -> Self {
        Self { selectors }
    }

    /// Extract every field of the listing `id` from `document`.
    ///
    /// `id` is passed through untouched. Fails with [`ParsingError`] when the
    /// name heading is missing or empty, or when the canonical URL cannot be
    /// read because the structured-data block is missing or malformed.
    pub fn parse(
        &self,
        id: &str,
        document: &dyn Document,
    ) -> Result<ExtractionResult, ParsingError> {
        tracing::debug!(id, "extracting listing");

        let data = StructuredData::new(document, &self.selectors.structured_data);
        let mut fields = BTreeMap::new();

        for (field, source) in READERS {
            let value = match source {
                Source::Caller => Ok(FieldValue::Text(id.to_string())),
                Source::Markup(read) => read(document, &self.selectors),
                Source::Structured(read) => read(&data),
            };

            let value = value.map_err(|err| {
                tracing::debug!(id, %field, error = %err, "listing extraction failed");
                err
            })?;

            tracing::debug!(id, %field, value = ?value, "read field");
            fields.insert(field, value);
        }

        Ok(ExtractionResult::from_fields(fields))
    }

    /// Parse raw page markup, then extract from it
    pub fn parse_html(&self, id: &str, html: &str) -> Result<ExtractionResult, ParsingError> {
        let document = Html::parse_document(html);
        self.parse(id, &document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readers::Field;
    use pretty_assertions::assert_eq;

    const LISTING: &str = r#"
    <html>
    <head>
        <meta itemprop="price" content="Free">
        <script type="application/ld+json">
        {"url": "m.example.com/id1", "author": {"name": "Dev Co"},
         "aggregateRating": {"ratingValue": "4.5", "ratingCount": "1,234"}}
        </script>
    </head>
    <body>
        <h1><span itemprop="name">SuperApp</span></h1>
        <img itemprop="image" src="//img.example/x.png">
        <div itemprop="genre">Arcade</div>
        <div itemprop="genre">Action</div>
        <div data-g-id="description"><b>Fun</b> game</div>
    </body>
    </html>
    "#;

    #[test]
    fn test_parse_listing() {
        let result = AppParser::default().parse_html("com.example.superapp", LISTING).unwrap();

        assert_eq!(result.id(), "com.example.superapp");
        assert_eq!(result.name(), "SuperApp");
        assert_eq!(result.artwork(), "http://img.example/x.png");
        assert_eq!(result.description(), "Fun game");
        assert_eq!(result.current_rating(), "4.5");
        assert_eq!(result.rating_count(), "1234");
        assert_eq!(result.genre_names(), ["Arcade".to_string(), "Action".to_string()]);
        assert_eq!(result.url(), "http://m.example.com/id1");
        assert_eq!(result.price(), "Free");
        assert_eq!(result.author(), "Dev Co");
    }

    #[test]
    fn test_missing_name_fails_whole_pass() {
        let html = LISTING.replace(r#"<span itemprop="name">SuperApp</span>"#, "SuperApp");
        assert_eq!(
            AppParser::default().parse_html("id", &html).unwrap_err(),
            ParsingError::MissingName
        );
    }

    #[test]
    fn test_malformed_structured_data_fails_whole_pass() {
        let html = LISTING.replace(r#""url": "m.example.com/id1","#, r#""url": "#);
        assert!(matches!(
            AppParser::default().parse_html("id", &html),
            Err(ParsingError::MalformedStructuredData(_))
        ));
    }

    #[test]
    fn test_custom_selectors() {
        let selectors = ListingSelectors {
            genre: r#"a[itemprop="genre"]"#.to_string(),
            description_allowed_tags: vec!["b".to_string()],
            ..ListingSelectors::default()
        };
        let html = LISTING.replace(
            r#"<div itemprop="genre">Action</div>"#,
            r#"<a itemprop="genre">Puzzle</a>"#,
        );

        let result = AppParser::with_selectors(selectors).parse_html("id", &html).unwrap();

        assert_eq!(result.genre_names(), ["Puzzle".to_string()]);
        assert_eq!(result.description(), "<b>Fun</b> game");
        assert_eq!(result.get(Field::Name), Some(&FieldValue::Text("SuperApp".into())));
    }
}
