//! Markup locations queried by the field readers
//!
//! Listing pages change their markup over time, so every location is a plain
//! CSS selector that can be overridden from JSON without touching the readers.

use serde::{Deserialize, Serialize};

/// Selector configuration for one kind of listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSelectors {
    /// Heading span(s) holding the app name; texts of all matches are joined
    pub name: String,
    /// Artwork image element, read through its `src` attribute
    pub artwork: String,
    /// Block whose inner markup is the description
    pub description: String,
    /// Tags kept by the description sanitizer. Empty strips all markup.
    pub description_allowed_tags: Vec<String>,
    /// Every block naming one genre
    pub genre: String,
    /// Meta element read through its `content` attribute
    pub price: String,
    /// Script element carrying the embedded JSON-LD block
    pub structured_data: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            name: r#"h1 span[itemprop="name"]"#.to_string(),
            artwork: r#"img[itemprop="image"]"#.to_string(),
            description: r#"div[data-g-id="description"]"#.to_string(),
            description_allowed_tags: vec![],
            genre: r#"div[itemprop="genre"]"#.to_string(),
            price: r#"meta[itemprop="price"]"#.to_string(),
            structured_data: r#"script[type="application/ld+json"]"#.to_string(),
        }
    }
}

impl ListingSelectors {
    /// Load selectors from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
