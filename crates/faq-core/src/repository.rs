use std::collections::HashSet;

use crate::error::FaqError;
use crate::model::{CatalogStats, CategorySummary, FaqCategory, FaqItem, Icon};

/// Read-only view over an ordered set of FAQ categories.
///
/// Category order and item order within a category are display order and are
/// preserved by every accessor.
#[derive(Debug, Clone)]
pub struct FaqRepository {
    categories: Vec<FaqCategory>,
}

impl FaqRepository {
    /// Builds a repository after checking id uniqueness and keyword casing.
    pub fn new(categories: Vec<FaqCategory>) -> Result<Self, FaqError> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    /// For compile-time data covered by tests.
    pub(crate) fn from_trusted(categories: Vec<FaqCategory>) -> Self {
        debug_assert!(validate(&categories).is_ok());
        Self { categories }
    }

    pub fn list_categories(&self) -> &[FaqCategory] {
        &self.categories
    }

    /// Every item, category order first, then item order.
    pub fn all_items(&self) -> Vec<&FaqItem> {
        self.categories.iter().flat_map(|c| c.items.iter()).collect()
    }

    pub fn category(&self, id: &str) -> Option<&FaqCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn item(&self, id: &str) -> Option<&FaqItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| item.id == id)
    }

    pub fn category_of(&self, item_id: &str) -> Option<&FaqCategory> {
        self.categories
            .iter()
            .find(|c| c.items.iter().any(|item| item.id == item_id))
    }

    pub fn summaries(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .map(|c| CategorySummary {
                id: c.id.clone(),
                title: c.title.clone(),
                icon: Icon::for_category(&c.id),
                count: c.items.len(),
            })
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            articles: self.categories.iter().map(|c| c.items.len()).sum(),
            categories: self.categories.len(),
        }
    }
}

fn validate(categories: &[FaqCategory]) -> Result<(), FaqError> {
    let mut category_ids = HashSet::new();
    let mut item_ids = HashSet::new();

    for category in categories {
        if !category_ids.insert(category.id.as_str()) {
            return Err(FaqError::InvalidCatalog(format!(
                "duplicate category id '{}'",
                category.id
            )));
        }
        for item in &category.items {
            if !item_ids.insert(item.id.as_str()) {
                return Err(FaqError::InvalidCatalog(format!(
                    "duplicate item id '{}'",
                    item.id
                )));
            }
            if let Some(keyword) = item.keywords.iter().find(|k| k.to_lowercase() != **k) {
                return Err(FaqError::InvalidCatalog(format!(
                    "keyword '{keyword}' on item '{}' is not lowercase",
                    item.id
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::Answer;

    pub(crate) fn item(id: &str, question: &str, keywords: &[&str]) -> FaqItem {
        FaqItem {
            id: id.to_string(),
            question: question.to_string(),
            answer: Answer::default(),
            icon: None,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub(crate) fn category(id: &str, title: &str, items: Vec<FaqItem>) -> FaqCategory {
        FaqCategory {
            id: id.to_string(),
            title: title.to_string(),
            items,
        }
    }

    fn sample() -> FaqRepository {
        FaqRepository::new(vec![
            category(
                "a",
                "Alpha",
                vec![item("a-1", "First?", &["one"]), item("a-2", "Second?", &["two"])],
            ),
            category("b", "Beta", vec![item("b-1", "Third?", &["three"])]),
        ])
        .expect("valid sample")
    }

    #[test]
    fn all_items_flattens_in_display_order() {
        let repo = sample();
        let ids: Vec<&str> = repo.all_items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a-1", "a-2", "b-1"]);
    }

    #[test]
    fn lookups_by_id() {
        let repo = sample();
        assert_eq!(repo.category("b").map(|c| c.title.as_str()), Some("Beta"));
        assert!(repo.category("B").is_none());
        assert_eq!(repo.item("a-2").map(|i| i.question.as_str()), Some("Second?"));
        assert_eq!(repo.category_of("b-1").map(|c| c.id.as_str()), Some("b"));
        assert!(repo.item("zzz").is_none());
    }

    #[test]
    fn summaries_and_stats() {
        let repo = sample();
        let summaries = repo.summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].count, 2);
        assert_eq!(summaries[1].icon, Icon::Package);
        assert_eq!(
            repo.stats(),
            CatalogStats {
                articles: 3,
                categories: 2
            }
        );
    }

    #[test]
    fn rejects_duplicate_item_ids_across_categories() {
        let err = FaqRepository::new(vec![
            category("a", "Alpha", vec![item("x", "Q1", &[])]),
            category("b", "Beta", vec![item("x", "Q2", &[])]),
        ])
        .unwrap_err();
        assert!(matches!(err, FaqError::InvalidCatalog(_)));
    }

    #[test]
    fn rejects_duplicate_category_ids() {
        let err = FaqRepository::new(vec![
            category("a", "Alpha", vec![]),
            category("a", "Again", vec![]),
        ])
        .unwrap_err();
        assert!(matches!(err, FaqError::InvalidCatalog(_)));
    }

    #[test]
    fn rejects_uppercase_keywords() {
        let err = FaqRepository::new(vec![category("a", "Alpha", vec![item("a-1", "Q", &["Pay"])])])
            .unwrap_err();
        assert!(matches!(err, FaqError::InvalidCatalog(_)));
    }
}
