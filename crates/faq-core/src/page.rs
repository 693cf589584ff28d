//! Page controller: owns the query and the per-page UI state and composes the
//! repository, search engine and coordinator into a renderable view.

use std::collections::HashMap;

use crate::accordion::Accordion;
use crate::coordinator::{CategoryCoordinator, ScrollRequest, SectionLayout};
use crate::error::FaqError;
use crate::feedback::{Acknowledgement, FeedbackBoard, FeedbackState, FeedbackVote};
use crate::model::{CategorySummary, FaqItem};
use crate::repository::FaqRepository;
use crate::search::{is_blank, SearchEngine, SearchOutcome};

const NAV_PLACEHOLDER: &str = "Browse Categories";
const NAV_FALLBACK: &str = "All Categories";

#[derive(Debug, Clone, PartialEq)]
pub struct ItemView<'a> {
    pub item: &'a FaqItem,
    pub open: bool,
    /// Only meaningful while `open`; a collapsed question shows no prompt.
    pub feedback: FeedbackState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView<'a> {
    pub category: CategorySummary,
    pub items: Vec<ItemView<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView<'a> {
    Browse { sections: Vec<SectionView<'a>> },
    Results { summary: String, items: Vec<ItemView<'a>> },
    NoResults { query: String, message: String },
}

/// Each rendered list has its own accordion: one per category section while
/// browsing, one for the result list while searching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ListKey {
    Section(String),
    Results,
}

pub struct FaqPage<'a> {
    repo: &'a FaqRepository,
    query: String,
    coordinator: CategoryCoordinator,
    accordions: HashMap<ListKey, Accordion>,
    feedback: FeedbackBoard,
    sections: Vec<SectionLayout>,
    nav_open: bool,
}

impl<'a> FaqPage<'a> {
    pub fn new(repo: &'a FaqRepository) -> Self {
        Self {
            repo,
            query: String::new(),
            coordinator: CategoryCoordinator::new(),
            accordions: HashMap::new(),
            feedback: FeedbackBoard::new(),
            sections: Vec::new(),
            nav_open: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        !is_blank(&self.query)
    }

    pub fn active_category(&self) -> Option<&str> {
        self.coordinator.active_category()
    }

    pub fn set_query(&mut self, query: &str) {
        let was_searching = self.is_searching();
        self.query = query.to_string();
        let searching = self.is_searching();
        self.coordinator.set_search_active(searching);
        if was_searching != searching {
            self.remount();
        } else if searching {
            // questions filtered out of the result list unmount their prompts
            let visible = SearchEngine::new(self.repo).search(&self.query);
            self.feedback
                .retain(|id| visible.iter().any(|item| item.id == id));
        }
    }

    pub fn clear_search(&mut self) {
        self.set_query("");
    }

    /// Host-measured section extents, replaced wholesale after each layout pass.
    pub fn set_layout(&mut self, sections: Vec<SectionLayout>) {
        self.sections = sections;
    }

    pub fn select_category(&mut self, category_id: &str) -> Result<Option<ScrollRequest>, FaqError> {
        let request = self.coordinator.select(self.repo, category_id, &self.sections)?;
        self.nav_open = false;
        if self.is_searching() {
            self.remount();
        }
        self.query.clear();
        Ok(request)
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.coordinator.on_scroll(self.repo, scroll_y, &self.sections);
    }

    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    pub fn is_nav_open(&self) -> bool {
        self.nav_open
    }

    pub fn nav_label(&self) -> &str {
        match self.coordinator.active_category() {
            None => NAV_PLACEHOLDER,
            Some(id) => self
                .repo
                .category(id)
                .map(|c| c.title.as_str())
                .unwrap_or(NAV_FALLBACK),
        }
    }

    pub fn is_open(&self, item_id: &str) -> bool {
        self.list_of(item_id)
            .ok()
            .and_then(|key| self.accordions.get(&key))
            .is_some_and(|acc| acc.is_open(item_id))
    }

    /// Expands or collapses a displayed question. Whatever gets collapsed,
    /// including a sibling closed by the expansion, loses its feedback prompt.
    pub fn toggle_item(&mut self, item_id: &str) -> Result<(), FaqError> {
        let key = self.list_of(item_id)?;
        let collapsed = self.accordions.entry(key).or_default().toggle(item_id);
        if let Some(collapsed) = collapsed {
            self.feedback.forget(&collapsed);
        }
        Ok(())
    }

    /// Votes are only possible on an expanded question.
    pub fn record_feedback(
        &mut self,
        item_id: &str,
        vote: FeedbackVote,
    ) -> Result<Acknowledgement, FaqError> {
        if !self.is_open(item_id) {
            return Err(match self.repo.item(item_id) {
                None => FaqError::UnknownItem(item_id.to_string()),
                Some(_) => FaqError::FeedbackNotShown(item_id.to_string()),
            });
        }
        self.feedback.record(self.repo, item_id, vote)
    }

    pub fn view(&self) -> PageView<'a> {
        match SearchEngine::new(self.repo).outcome(&self.query) {
            SearchOutcome::Browse => PageView::Browse {
                sections: self
                    .repo
                    .summaries()
                    .into_iter()
                    .zip(self.repo.list_categories())
                    .map(|(category, c)| {
                        let key = ListKey::Section(c.id.clone());
                        SectionView {
                            category,
                            items: c.items.iter().map(|item| self.item_view(&key, item)).collect(),
                        }
                    })
                    .collect(),
            },
            outcome @ SearchOutcome::Results { .. } => PageView::Results {
                summary: outcome.summary().unwrap_or_default(),
                items: outcome
                    .items()
                    .iter()
                    .copied()
                    .map(|item| self.item_view(&ListKey::Results, item))
                    .collect(),
            },
            outcome @ SearchOutcome::NoResults { .. } => PageView::NoResults {
                query: self.query.clone(),
                message: outcome.summary().unwrap_or_default(),
            },
        }
    }

    fn item_view(&self, key: &ListKey, item: &'a FaqItem) -> ItemView<'a> {
        ItemView {
            item,
            open: self
                .accordions
                .get(key)
                .is_some_and(|acc| acc.is_open(&item.id)),
            feedback: self.feedback.state(&item.id),
        }
    }

    /// The list currently rendering `item_id`.
    fn list_of(&self, item_id: &str) -> Result<ListKey, FaqError> {
        let Some(category) = self.repo.category_of(item_id) else {
            return Err(FaqError::UnknownItem(item_id.to_string()));
        };
        if !self.is_searching() {
            return Ok(ListKey::Section(category.id.clone()));
        }
        let shown = SearchEngine::new(self.repo)
            .search(&self.query)
            .iter()
            .any(|item| item.id == item_id);
        if shown {
            Ok(ListKey::Results)
        } else {
            Err(FaqError::ItemNotDisplayed(item_id.to_string()))
        }
    }

    /// Browse and search render different lists; switching drops per-question state.
    fn remount(&mut self) {
        self.accordions.clear();
        self.feedback.reset();
    }
}
