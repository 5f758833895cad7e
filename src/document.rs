//! Selector-based queries over a parsed page
//!
//! The parser only ever reads the page through this trait, so any markup tree
//! that can answer CSS selector queries can be handed to it.

use scraper::{Html, Selector};

/// Read-only view of a parsed listing page.
pub trait Document {
    /// Text content of every element matching `selector`, in document order
    fn select_text(&self, selector: &str) -> Vec<String>;

    /// Attribute value of the first element matching `selector`
    fn select_attr(&self, selector: &str, attr_name: &str) -> Option<String>;

    /// Inner markup of the first element matching `selector`
    fn select_inner_html(&self, selector: &str) -> Option<String>;
}

/// Parse a selector, logging and discarding it when invalid.
fn parse_selector(selector_str: &str) -> Option<Selector> {
    match Selector::parse(selector_str) {
        Ok(s) => Some(s),
        Err(err) => {
            tracing::warn!(selector = selector_str, error = ?err, "invalid selector matches nothing");
            None
        }
    }
}

impl Document for Html {
    fn select_text(&self, selector: &str) -> Vec<String> {
        let Some(selector) = parse_selector(selector) else {
            return vec![];
        };

        self.select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    fn select_attr(&self, selector: &str, attr_name: &str) -> Option<String> {
        let selector = parse_selector(selector)?;

        self.select(&selector)
            .next()
            .and_then(|el| el.value().attr(attr_name).map(String::from))
    }

    fn select_inner_html(&self, selector: &str) -> Option<String> {
        let selector = parse_selector(selector)?;

        self.select(&selector).next().map(|el| el.inner_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_text_keeps_order_and_duplicates() {
        let html = Html::parse_document(
            r#"
            <div itemprop="genre">Arcade</div>
            <div itemprop="genre">Action</div>
            <div itemprop="genre">Arcade</div>
            "#,
        );

        assert_eq!(
            html.select_text(r#"[itemprop="genre"]"#),
            vec!["Arcade", "Action", "Arcade"]
        );
    }

    #[test]
    fn test_select_attr_uses_first_match() {
        let html = Html::parse_document(
            r#"
            <img itemprop="image" src="//a.example/1.png">
            <img itemprop="image" src="//a.example/2.png">
            "#,
        );

        assert_eq!(
            html.select_attr(r#"img[itemprop="image"]"#, "src").unwrap(),
            "//a.example/1.png"
        );
        assert!(html.select_attr(r#"img[itemprop="image"]"#, "alt").is_none());
    }

    #[test]
    fn test_select_inner_html() {
        let html = Html::parse_document(r#"<div data-g-id="description"><b>Fun</b> game</div>"#);

        assert_eq!(
            html.select_inner_html(r#"div[data-g-id="description"]"#).unwrap(),
            "<b>Fun</b> game"
        );
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let html = Html::parse_document("<p>text</p>");

        assert!(html.select_text("p[[").is_empty());
        assert!(html.select_attr("p[[", "class").is_none());
        assert!(html.select_inner_html("p[[").is_none());
    }
}
