use serde::{Deserialize, Serialize};

use crate::text::split_list;

/// Product attributes one listing is generated from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub brand: String,
    pub product_type: String,
    /// Comma-split, trimmed, blanks dropped.
    pub attributes: Vec<String>,
    pub current_description: String,
    /// Pipe-split existing bullets. Carried through, never used for generation.
    pub current_bullets: Vec<String>,
    pub keywords: Vec<String>,
}

impl ProductInput {
    /// Build an input from raw cells; `attributes` is a comma-delimited list.
    pub fn new(
        brand: impl Into<String>,
        product_type: impl Into<String>,
        attributes: &str,
        current_description: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            product_type: product_type.into(),
            attributes: split_list(attributes, ','),
            current_description: current_description.into(),
            current_bullets: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Set keywords from a comma-delimited cell.
    pub fn with_keywords(mut self, keywords: &str) -> Self {
        self.keywords = split_list(keywords, ',');
        self
    }

    /// Set existing bullets from a pipe-delimited cell.
    pub fn with_current_bullets(mut self, bullets: &str) -> Self {
        self.current_bullets = split_list(bullets, '|');
        self
    }

    pub fn attribute(&self, index: usize) -> Option<&str> {
        self.attributes.get(index).map(String::as_str)
    }

    pub fn keyword(&self, index: usize) -> Option<&str> {
        self.keywords.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_delimited_cells() {
        let input = ProductInput::new("Acme", "Lamp", "Brass, , Dimmable", "desc")
            .with_keywords("lighting,  desk ")
            .with_current_bullets("Old one|Old two");

        assert_eq!(input.attributes, vec!["Brass", "Dimmable"]);
        assert_eq!(input.keywords, vec!["lighting", "desk"]);
        assert_eq!(input.current_bullets, vec!["Old one", "Old two"]);
        assert_eq!(input.attribute(1), Some("Dimmable"));
        assert_eq!(input.keyword(2), None);
    }
}
