//! Embedded JSON-LD access
//!
//! The `<script type="application/ld+json">` block is parsed at most once per
//! extraction pass. Readers that need it share one [`StructuredData`] and get
//! the cached object, or the cached failure, on every access.

use once_cell::unsync::OnceCell;
use serde_json::Value;

use crate::document::Document;
use crate::error::ParsingError;
use crate::normalize::scalar_text;

/// Lazily parsed structured-data block of one document
pub struct StructuredData<'d> {
    document: &'d dyn Document,
    selector: &'d str,
    parsed: OnceCell<Result<Value, ParsingError>>,
}

impl<'d> StructuredData<'d> {
    pub fn new(document: &'d dyn Document, selector: &'d str) -> Self {
        Self {
            document,
            selector,
            parsed: OnceCell::new(),
        }
    }

    /// The parsed JSON object, parsing it on first access
    pub fn get(&self) -> Result<&Value, ParsingError> {
        self.parsed
            .get_or_init(|| self.parse())
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Follow `path` through nested objects.
    ///
    /// `Ok(None)` means the block parsed but the path is absent.
    pub fn lookup(&self, path: &[&str]) -> Result<Option<&Value>, ParsingError> {
        let mut current = self.get()?;
        for segment in path {
            match current.get(segment) {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// Scalar text at `path`, or `""` when the path or the whole block is unavailable.
    ///
    /// A full [`AppParser`](crate::AppParser) pass still fails on a missing or
    /// malformed block because the `url` reader requires it; the empty value
    /// only surfaces when an optional reader runs on its own.
    pub fn text_or_empty(&self, path: &[&str]) -> String {
        match self.lookup(path) {
            Ok(value) => value.and_then(scalar_text).unwrap_or_default(),
            Err(err) => {
                tracing::debug!(path = %path.join("."), error = %err, "no structured data at path");
                String::new()
            }
        }
    }

    fn parse(&self) -> Result<Value, ParsingError> {
        let text = self
            .document
            .select_text(self.selector)
            .into_iter()
            .next()
            .ok_or(ParsingError::MissingStructuredData)?;

        // Strip CDATA markers if present
        let content = text
            .trim()
            .trim_start_matches("<![CDATA[")
            .trim_end_matches("]]>")
            .trim();

        let value: Value = serde_json::from_str(content)
            .map_err(|e| ParsingError::MalformedStructuredData(e.to_string()))?;

        if !value.is_object() {
            return Err(ParsingError::MalformedStructuredData(
                "top-level value is not an object".to_string(),
            ));
        }

        tracing::debug!(bytes = content.len(), "parsed embedded structured data");
        Ok(value)
    }
}
