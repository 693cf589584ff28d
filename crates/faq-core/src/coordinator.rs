//! Keeps the highlighted navigation category in step with explicit selection
//! and with the section currently under the viewport reference point.

use serde::{Deserialize, Serialize};

use crate::error::FaqError;
use crate::repository::FaqRepository;

/// Distance below the scroll offset that decides which section is "in view".
pub const SCROLL_LOOKAHEAD: f64 = 150.0;
/// Gap left above a section when scrolling to it, to clear the sticky header.
pub const SCROLL_TARGET_OFFSET: f64 = 100.0;

/// Vertical extent of one category's section, in layout units from the page top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    pub category_id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionLayout {
    pub fn new(category_id: impl Into<String>, offset_top: f64, height: f64) -> Self {
        Self {
            category_id: category_id.into(),
            offset_top,
            height,
        }
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, point: f64) -> bool {
        point >= self.offset_top && point < self.offset_top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Smooth,
}

/// Command for the host to scroll the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    /// May be negative; clamping is up to the host.
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Single writer of the active category.
#[derive(Debug, Clone, Default)]
pub struct CategoryCoordinator {
    active: Option<String>,
    search_active: bool,
}

impl CategoryCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_search_active(&self) -> bool {
        self.search_active
    }

    /// Mirrors the query state. Entering search does not clear the active category.
    pub fn set_search_active(&mut self, active: bool) {
        self.search_active = active;
    }

    /// Explicit navigation click. Ends search mode and returns where to scroll, if
    /// the target section has been laid out.
    pub fn select(
        &mut self,
        repo: &FaqRepository,
        category_id: &str,
        sections: &[SectionLayout],
    ) -> Result<Option<ScrollRequest>, FaqError> {
        if repo.category(category_id).is_none() {
            return Err(FaqError::UnknownCategory(category_id.to_string()));
        }

        self.active = Some(category_id.to_string());
        self.search_active = false;

        Ok(sections
            .iter()
            .find(|s| s.category_id == category_id)
            .map(|s| ScrollRequest {
                top: s.offset_top - SCROLL_TARGET_OFFSET,
                behavior: ScrollBehavior::Smooth,
            }))
    }

    /// Scroll signal. Ignored during search; leaves the active category alone when
    /// no section contains the reference point. Sections are scanned in catalog
    /// order and the first hit wins.
    pub fn on_scroll(&mut self, repo: &FaqRepository, scroll_y: f64, sections: &[SectionLayout]) {
        if self.search_active {
            return;
        }

        let reference = scroll_y + SCROLL_LOOKAHEAD;
        let hit = repo.list_categories().iter().find_map(|category| {
            sections
                .iter()
                .find(|s| s.category_id == category.id)
                .filter(|s| s.contains(reference))
                .map(|_| category.id.clone())
        });

        if let Some(id) = hit {
            self.active = Some(id);
        }
    }
}
