use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tokio::sync::Mutex;

use faq_core::feedback::{FeedbackBoard, FeedbackVote};
use faq_core::mcp_api::{
    BrowsePageParams, CategoriesResponse, CategoryDetailResponse, FaqItemDetailResponse,
    FeedbackResponse, GetFaqItemParams, ItemSummary, ListCategoryParams, PageMode, PageResponse,
    PageSection, RecordFeedbackParams, SearchFaqParams, SearchFaqResponse,
};
use faq_core::model::FaqItem;
use faq_core::page::{FaqPage, ItemView, PageView};
use faq_core::repository::FaqRepository;
use faq_core::search::{SearchEngine, SearchOutcome};

use crate::config::Config;

#[derive(Clone)]
pub struct ApplianceFaqServer {
    repo: &'static FaqRepository,
    feedback: Arc<Mutex<FeedbackBoard>>,
    config: Config,
    tool_router: ToolRouter<ApplianceFaqServer>,
}

impl ApplianceFaqServer {
    pub fn new(repo: &'static FaqRepository, config: Config) -> Self {
        Self {
            repo,
            feedback: Arc::new(Mutex::new(FeedbackBoard::new())),
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Same catalog and config, empty feedback board.
    pub fn fresh_session(&self) -> Self {
        Self::new(self.repo, self.config.clone())
    }

    fn summarize(&self, item: &FaqItem) -> ItemSummary {
        ItemSummary {
            id: item.id.clone(),
            category: self
                .repo
                .category_of(&item.id)
                .map(|c| c.id.clone())
                .unwrap_or_default(),
            question: item.question.clone(),
        }
    }

    fn summarize_views(&self, views: &[ItemView<'_>]) -> Vec<ItemSummary> {
        views.iter().map(|v| self.summarize(v.item)).collect()
    }
}

#[tool_router]
impl ApplianceFaqServer {
    #[tool(description = "List FAQ categories in display order with their question counts.")]
    async fn list_categories(&self) -> Result<Json<CategoriesResponse>, String> {
        Ok(Json(CategoriesResponse {
            categories: self.repo.summaries(),
            stats: self.repo.stats(),
        }))
    }

    #[tool(description = "List the questions in one FAQ category (e.g. 'delivery', 'payment').")]
    async fn list_category(
        &self,
        Parameters(params): Parameters<ListCategoryParams>,
    ) -> Result<Json<CategoryDetailResponse>, String> {
        let key = params.category.trim().to_string();
        if key.is_empty() {
            return Err("category must not be empty".to_string());
        }

        let summaries = self.repo.summaries();
        let Some(summary) = summaries.iter().find(|c| c.id.eq_ignore_ascii_case(&key)) else {
            let available: Vec<&str> = summaries.iter().map(|c| c.id.as_str()).collect();
            return Err(format!(
                "unknown category: '{key}'. Available categories: {}",
                available.join(", ")
            ));
        };

        let items = self
            .repo
            .category(&summary.id)
            .map(|c| c.items.iter().map(|item| self.summarize(item)).collect())
            .unwrap_or_default();

        Ok(Json(CategoryDetailResponse {
            category: summary.clone(),
            items,
        }))
    }

    #[tool(description = "Search FAQ questions and keywords by substring. A blank query returns every question.")]
    async fn search_faq(
        &self,
        Parameters(params): Parameters<SearchFaqParams>,
    ) -> Result<Json<SearchFaqResponse>, String> {
        let limit = self.config.effective_limit(params.limit);
        let outcome = SearchEngine::new(self.repo).outcome(&params.query);
        let matched = match &outcome {
            SearchOutcome::Browse => self.repo.all_items(),
            _ => outcome.items().to_vec(),
        };

        Ok(Json(SearchFaqResponse {
            total: matched.len(),
            results: matched
                .iter()
                .take(limit)
                .map(|item| self.summarize(item))
                .collect(),
            summary: outcome.summary(),
            query: params.query,
        }))
    }

    #[tool(description = "Get the full answer for an FAQ item by id (e.g. 'issues-2').")]
    async fn get_faq_item(
        &self,
        Parameters(params): Parameters<GetFaqItemParams>,
    ) -> Result<Json<FaqItemDetailResponse>, String> {
        let item_id = params.item_id.trim().to_string();
        if item_id.is_empty() {
            return Err("item_id must not be empty".to_string());
        }

        let item = self
            .repo
            .item(&item_id)
            .ok_or_else(|| format!("FAQ item not found: {item_id}"))?;

        Ok(Json(FaqItemDetailResponse {
            id: item.id.clone(),
            category: self.summarize(item).category,
            question: item.question.clone(),
            answer_markdown: item.answer.to_markdown(),
            keywords: item.keywords.clone(),
        }))
    }

    #[tool(description = "Render the FAQ page state: optionally jump to a category, then apply a search query.")]
    async fn browse_page(
        &self,
        Parameters(params): Parameters<BrowsePageParams>,
    ) -> Result<Json<PageResponse>, String> {
        let mut page = FaqPage::new(self.repo);
        if let Some(category) = params.category.as_deref() {
            page.select_category(category.trim())
                .map_err(|e| e.to_string())?;
        }
        if let Some(query) = params.query.as_deref() {
            page.set_query(query);
        }

        let mut response = PageResponse {
            mode: PageMode::Browse,
            active_category: page.active_category().map(str::to_string),
            nav_label: page.nav_label().to_string(),
            stats: self.repo.stats(),
            sections: Vec::new(),
            results: Vec::new(),
            message: None,
        };

        match page.view() {
            PageView::Browse { sections } => {
                response.sections = sections
                    .iter()
                    .map(|s| PageSection {
                        category: s.category.clone(),
                        items: self.summarize_views(&s.items),
                    })
                    .collect();
            }
            PageView::Results { summary, items } => {
                response.mode = PageMode::Results;
                response.results = self.summarize_views(&items);
                response.message = Some(summary);
            }
            PageView::NoResults { message, .. } => {
                response.mode = PageMode::NoResults;
                response.message = Some(message);
            }
        }

        Ok(Json(response))
    }

    #[tool(description = "Answer 'was this helpful?' for an FAQ item. One vote per item per session; nothing is stored.")]
    async fn record_feedback(
        &self,
        Parameters(params): Parameters<RecordFeedbackParams>,
    ) -> Result<Json<FeedbackResponse>, String> {
        let vote = FeedbackVote::from_helpful(params.helpful);
        let ack = self
            .feedback
            .lock()
            .await
            .record(self.repo, params.item_id.trim(), vote)
            .map_err(|e| e.to_string())?;

        Ok(Json(FeedbackResponse {
            item_id: ack.item_id,
            vote: ack.vote,
            message: ack.message,
        }))
    }
}

#[tool_handler]
impl ServerHandler for ApplianceFaqServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "appliance-faq".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Customer FAQ for an electronics and appliance retailer. Use list_categories and \
                 list_category to browse, search_faq for substring search over questions and \
                 keywords, get_faq_item for a full answer, browse_page to see the page as a \
                 customer would, and record_feedback to acknowledge a helpful/unhelpful vote."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use faq_core::catalog::catalog;

    use super::*;

    fn server() -> ApplianceFaqServer {
        ApplianceFaqServer::new(catalog(), Config::default())
    }

    #[test]
    fn tools_publish_output_schemas() {
        let tools = ApplianceFaqServer::tool_router().list_all();
        for name in [
            "list_categories",
            "list_category",
            "search_faq",
            "get_faq_item",
            "browse_page",
            "record_feedback",
        ] {
            let tool = tools
                .iter()
                .find(|t| t.name == name)
                .unwrap_or_else(|| panic!("missing tool: {name}"));
            assert!(
                tool.output_schema.is_some(),
                "tool {name} should publish output_schema"
            );
        }
    }

    #[tokio::test]
    async fn search_applies_limit_after_matching() {
        let Json(response) = server()
            .search_faq(Parameters(SearchFaqParams {
                query: "   ".to_string(),
                limit: Some(3),
            }))
            .await
            .expect("search");
        assert_eq!(response.total, 12);
        assert_eq!(response.results.len(), 3);
        assert_eq!(response.results[0].id, "products-1");
        assert!(response.summary.is_none());
    }

    #[tokio::test]
    async fn zero_limit_falls_back_to_default() {
        let Json(response) = server()
            .search_faq(Parameters(SearchFaqParams {
                query: String::new(),
                limit: Some(0),
            }))
            .await
            .expect("search");
        assert_eq!(response.total, 12);
        assert_eq!(response.results.len(), 10);
    }

    #[tokio::test]
    async fn search_reports_matches_with_categories() {
        let Json(response) = server()
            .search_faq(Parameters(SearchFaqParams {
                query: "Refund".to_string(),
                limit: None,
            }))
            .await
            .expect("search");
        let ids: Vec<&str> = response.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["issues-2", "issues-3"]);
        assert!(response.results.iter().all(|r| r.category == "issues"));
        assert_eq!(response.summary.as_deref(), Some("2 results for \"Refund\""));
    }

    #[tokio::test]
    async fn list_category_is_case_insensitive_and_reports_unknowns() {
        let server = server();
        let Json(response) = server
            .list_category(Parameters(ListCategoryParams {
                category: "DELIVERY".to_string(),
            }))
            .await
            .expect("known");
        assert_eq!(response.category.id, "delivery");
        assert_eq!(response.items.len(), 4);

        let Err(err) = server
            .list_category(Parameters(ListCategoryParams {
                category: "gift-cards".to_string(),
            }))
            .await
        else {
            panic!("expected unknown category error");
        };
        assert!(err.contains("Available categories: products, delivery"));
    }

    #[tokio::test]
    async fn get_item_renders_answer() {
        let Json(response) = server()
            .get_faq_item(Parameters(GetFaqItemParams {
                item_id: "payment-1".to_string(),
            }))
            .await
            .expect("known item");
        assert_eq!(response.category, "payment");
        assert!(response.answer_markdown.contains("- **Cash:**"));

        assert!(server()
            .get_faq_item(Parameters(GetFaqItemParams {
                item_id: "payment-9".to_string(),
            }))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn browse_page_selects_then_searches() {
        let server = server();
        let Json(page) = server
            .browse_page(Parameters(BrowsePageParams {
                category: Some("warranty".to_string()),
                query: None,
            }))
            .await
            .expect("page");
        assert!(matches!(page.mode, PageMode::Browse));
        assert_eq!(page.active_category.as_deref(), Some("warranty"));
        assert_eq!(page.nav_label, "Warranties");
        assert_eq!(page.sections.len(), 6);

        let Json(page) = server
            .browse_page(Parameters(BrowsePageParams {
                category: Some("warranty".to_string()),
                query: Some("xyz123notfound".to_string()),
            }))
            .await
            .expect("page");
        assert!(matches!(page.mode, PageMode::NoResults));
        assert_eq!(page.active_category.as_deref(), Some("warranty"));
        assert!(page.results.is_empty());

        let json = serde_json::to_value(&page).expect("serialize");
        assert_eq!(json["mode"], "no_results");
        assert_eq!(json["stats"]["articles"], 12);
    }

    #[tokio::test]
    async fn sessions_do_not_share_feedback() {
        let first = server();
        let params = || {
            Parameters(RecordFeedbackParams {
                item_id: "warranty-1".to_string(),
                helpful: false,
            })
        };
        first.record_feedback(params()).await.expect("vote");
        assert!(first.fresh_session().record_feedback(params()).await.is_ok());
        assert!(first.clone().record_feedback(params()).await.is_err());
    }

    #[tokio::test]
    async fn feedback_is_one_vote_per_item() {
        let server = server();
        let params = || {
            Parameters(RecordFeedbackParams {
                item_id: "support-1".to_string(),
                helpful: true,
            })
        };
        let Json(ack) = server.record_feedback(params()).await.expect("first vote");
        assert_eq!(ack.message, "Thanks for your feedback!");
        assert!(matches!(ack.vote, FeedbackVote::Helpful));

        let Err(err) = server.record_feedback(params()).await else {
            panic!("expected second vote to be rejected");
        };
        assert!(err.contains("already recorded"));
    }
}
