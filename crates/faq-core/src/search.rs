use tracing::debug;

use crate::model::FaqItem;
use crate::repository::FaqRepository;

/// Substring filter over a repository.
///
/// No ranking: results always come back in catalog order.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    repo: &'a FaqRepository,
}

impl<'a> SearchEngine<'a> {
    pub fn new(repo: &'a FaqRepository) -> Self {
        Self { repo }
    }

    /// A blank query returns every item. Otherwise an item matches when its
    /// question contains the query (case-insensitive) or one of its keywords
    /// contains the query.
    pub fn search(&self, query: &str) -> Vec<&'a FaqItem> {
        if is_blank(query) {
            return self.repo.all_items();
        }

        // Only the case is normalised; surrounding whitespace stays part of the needle.
        let needle = query.to_lowercase();
        let results: Vec<&'a FaqItem> = self
            .repo
            .all_items()
            .into_iter()
            .filter(|item| matches(item, &needle))
            .collect();
        debug!(query, matches = results.len(), "faq search");
        results
    }

    pub fn outcome(&self, query: &str) -> SearchOutcome<'a> {
        if is_blank(query) {
            return SearchOutcome::Browse;
        }
        let items = self.search(query);
        if items.is_empty() {
            SearchOutcome::NoResults {
                query: query.to_string(),
            }
        } else {
            SearchOutcome::Results {
                query: query.to_string(),
                items,
            }
        }
    }
}

/// Search mode is on whenever the trimmed query is non-empty.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

fn matches(item: &FaqItem, needle: &str) -> bool {
    item.question.to_lowercase().contains(needle)
        || item.keywords.iter().any(|keyword| keyword.contains(needle))
}

/// What the results area shows for a query.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    /// No query; the page shows categories instead.
    Browse,
    Results { query: String, items: Vec<&'a FaqItem> },
    NoResults { query: String },
}

impl<'a> SearchOutcome<'a> {
    pub fn items(&self) -> &[&'a FaqItem] {
        match self {
            SearchOutcome::Results { items, .. } => items,
            _ => &[],
        }
    }

    /// Header line, e.g. `2 results for "refund"`.
    pub fn summary(&self) -> Option<String> {
        match self {
            SearchOutcome::Browse => None,
            SearchOutcome::Results { query, items } => Some(result_summary(items.len(), query)),
            SearchOutcome::NoResults { query } => Some(format!(
                "We couldn't find any questions matching \"{query}\". Try a different search term or browse categories."
            )),
        }
    }
}

pub fn result_summary(count: usize, query: &str) -> String {
    let noun = if count == 1 { "result" } else { "results" };
    format!("{count} {noun} for \"{query}\"")
}
