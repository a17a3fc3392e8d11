//! Header search box with product suggestions.

use tahaqiq_core::ProductId;

use super::CatalogSource;
use crate::models::Product;

/// Default number of suggestions shown under the search box.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Search term and the suggestion panel beneath it.
///
/// State is local to the header: it survives navigation and is not shared
/// with any store.
#[derive(Debug, Clone)]
pub struct SearchBox {
    term: String,
    suggestions: Vec<Product>,
    limit: usize,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTION_LIMIT)
    }
}

impl SearchBox {
    /// An empty search box showing at most `limit` suggestions.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            term: String::new(),
            suggestions: Vec::new(),
            limit,
        }
    }

    /// Current input text.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Suggestions currently shown; empty when the panel is closed.
    #[must_use]
    pub fn suggestions(&self) -> &[Product] {
        &self.suggestions
    }

    /// Whether the suggestion panel is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Update the input and recompute suggestions.
    ///
    /// Matches are case-insensitive substrings of the product name or brand,
    /// in catalog order. A blank term closes the panel.
    pub fn set_term(&mut self, term: &str, catalog: &dyn CatalogSource) {
        term.clone_into(&mut self.term);
        self.suggestions = suggest(term, catalog, self.limit);
        tracing::debug!(term, matches = self.suggestions.len(), "Search suggestions");
    }

    /// Close the panel (e.g. on a click outside it), keeping the term.
    pub fn dismiss(&mut self) {
        self.suggestions.clear();
    }

    /// Pick a suggestion, clearing the box.
    ///
    /// Returns the product to navigate to, or `None` if `id` is not among the
    /// current suggestions.
    pub fn select(&mut self, id: ProductId) -> Option<Product> {
        let product = self.suggestions.iter().find(|p| p.id == id).cloned()?;
        self.term.clear();
        self.suggestions.clear();
        Some(product)
    }
}

/// Products whose name or brand contains `term`, ignoring case.
#[must_use]
pub fn suggest(term: &str, catalog: &dyn CatalogSource, limit: usize) -> Vec<Product> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    catalog
        .list_products()
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.brand.to_lowercase().contains(&needle)
        })
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::catalog::tests::{category, product};

    fn catalog() -> StaticCatalog {
        let products = (1..=8)
            .map(|i| product(i, "phones", if i % 2 == 0 { "Apple" } else { "Samsung" }, 100))
            .collect();
        StaticCatalog::from_parts(products, vec![category("phones", "Phones")]).unwrap()
    }

    #[test]
    fn test_suggestions_match_brand_case_insensitively() {
        let catalog = catalog();
        let mut search = SearchBox::default();
        search.set_term("aPpLe", &catalog);

        assert!(search.is_open());
        let ids: Vec<i32> = search.suggestions().iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_suggestions_are_limited() {
        let catalog = catalog();
        let mut search = SearchBox::default();
        search.set_term("model", &catalog);
        assert_eq!(search.suggestions().len(), DEFAULT_SUGGESTION_LIMIT);
    }

    #[test]
    fn test_blank_term_closes_panel() {
        let catalog = catalog();
        let mut search = SearchBox::default();
        search.set_term("apple", &catalog);
        search.set_term("   ", &catalog);
        assert!(!search.is_open());
    }

    #[test]
    fn test_dismiss_keeps_term() {
        let catalog = catalog();
        let mut search = SearchBox::default();
        search.set_term("samsung", &catalog);
        search.dismiss();
        assert!(!search.is_open());
        assert_eq!(search.term(), "samsung");
    }

    #[test]
    fn test_select_clears_box() {
        let catalog = catalog();
        let mut search = SearchBox::default();
        search.set_term("samsung", &catalog);

        assert!(search.select(ProductId::new(2)).is_none());
        let picked = search.select(ProductId::new(3)).unwrap();
        assert_eq!(picked.brand, "Samsung");
        assert_eq!(search.term(), "");
        assert!(!search.is_open());
    }
}
