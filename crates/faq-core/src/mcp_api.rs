use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::feedback::FeedbackVote;
use crate::model::{CatalogStats, CategorySummary};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchFaqParams {
    /// Free text matched against questions and keywords. Blank returns every item.
    pub query: String,
    /// Maximum number of results to return (default: 10).
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFaqItemParams {
    /// Item id such as "delivery-2".
    pub item_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListCategoryParams {
    /// Category id such as "payment" or "warranty".
    pub category: String,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct BrowsePageParams {
    /// Category to jump to before the query is applied.
    pub category: Option<String>,
    /// Search box contents.
    pub query: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RecordFeedbackParams {
    pub item_id: String,
    /// true for "yes, this helped".
    pub helpful: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ItemSummary {
    pub id: String,
    pub category: String,
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<CategorySummary>,
    pub stats: CatalogStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryDetailResponse {
    pub category: CategorySummary,
    pub items: Vec<ItemSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchFaqResponse {
    pub query: String,
    /// Matches before the limit was applied.
    pub total: usize,
    pub results: Vec<ItemSummary>,
    /// Absent for a blank query.
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FaqItemDetailResponse {
    pub id: String,
    pub category: String,
    pub question: String,
    pub answer_markdown: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PageSection {
    pub category: CategorySummary,
    pub items: Vec<ItemSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PageMode {
    Browse,
    Results,
    NoResults,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PageResponse {
    pub mode: PageMode,
    pub active_category: Option<String>,
    pub nav_label: String,
    pub stats: CatalogStats,
    /// Category sections, populated in browse mode.
    pub sections: Vec<PageSection>,
    /// Matching items, populated in results mode.
    pub results: Vec<ItemSummary>,
    /// Result count line or the empty-state message.
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FeedbackResponse {
    pub item_id: String,
    pub vote: FeedbackVote,
    pub message: String,
}
