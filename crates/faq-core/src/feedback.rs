use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::FaqError;
use crate::repository::FaqRepository;

pub const THANK_YOU: &str = "Thanks for your feedback!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackVote {
    Helpful,
    NotHelpful,
}

impl FeedbackVote {
    pub fn from_helpful(helpful: bool) -> Self {
        if helpful {
            FeedbackVote::Helpful
        } else {
            FeedbackVote::NotHelpful
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "vote", rename_all = "snake_case")]
pub enum FeedbackState {
    #[default]
    Idle,
    Voted(FeedbackVote),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub item_id: String,
    pub vote: FeedbackVote,
    pub message: String,
}

/// "Was this helpful?" prompt for one mounted question. One vote, then done.
#[derive(Debug, Clone)]
pub struct Feedback {
    item_id: String,
    state: FeedbackState,
}

impl Feedback {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            state: FeedbackState::Idle,
        }
    }

    pub fn state(&self) -> FeedbackState {
        self.state
    }

    pub fn record(&mut self, vote: FeedbackVote) -> Result<Acknowledgement, FaqError> {
        if self.state != FeedbackState::Idle {
            return Err(FaqError::FeedbackAlreadyRecorded(self.item_id.clone()));
        }
        self.state = FeedbackState::Voted(vote);
        info!(item_id = %self.item_id, ?vote, "faq feedback recorded");
        Ok(Acknowledgement {
            item_id: self.item_id.clone(),
            vote,
            message: THANK_YOU.to_string(),
        })
    }
}

/// Feedback prompts for every question currently mounted. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct FeedbackBoard {
    entries: HashMap<String, Feedback>,
}

impl FeedbackBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, item_id: &str) -> FeedbackState {
        self.entries
            .get(item_id)
            .map(Feedback::state)
            .unwrap_or_default()
    }

    pub fn record(
        &mut self,
        repo: &FaqRepository,
        item_id: &str,
        vote: FeedbackVote,
    ) -> Result<Acknowledgement, FaqError> {
        if repo.item(item_id).is_none() {
            return Err(FaqError::UnknownItem(item_id.to_string()));
        }
        self.entries
            .entry(item_id.to_string())
            .or_insert_with(|| Feedback::new(item_id))
            .record(vote)
    }

    /// Unmount one prompt.
    pub fn forget(&mut self, item_id: &str) {
        self.entries.remove(item_id);
    }

    /// Keep only prompts whose question is still shown.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.entries.retain(|id, _| keep(id));
    }

    /// Unmount everything.
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    #[test]
    fn first_vote_is_acknowledged() {
        let mut feedback = Feedback::new("payment-1");
        assert_eq!(feedback.state(), FeedbackState::Idle);

        let ack = feedback.record(FeedbackVote::Helpful).expect("first vote");
        assert_eq!(ack.message, THANK_YOU);
        assert_eq!(ack.item_id, "payment-1");
        assert_eq!(feedback.state(), FeedbackState::Voted(FeedbackVote::Helpful));
    }

    #[test]
    fn vote_is_terminal() {
        let mut feedback = Feedback::new("payment-1");
        feedback.record(FeedbackVote::NotHelpful).expect("first vote");
        let err = feedback.record(FeedbackVote::Helpful).unwrap_err();
        assert_eq!(err, FaqError::FeedbackAlreadyRecorded("payment-1".to_string()));
        assert_eq!(feedback.state(), FeedbackState::Voted(FeedbackVote::NotHelpful));
    }

    #[test]
    fn board_tracks_items_independently() {
        let mut board = FeedbackBoard::new();
        board
            .record(catalog(), "delivery-1", FeedbackVote::Helpful)
            .expect("vote");
        assert_eq!(board.state("delivery-2"), FeedbackState::Idle);
        board
            .record(catalog(), "delivery-2", FeedbackVote::NotHelpful)
            .expect("vote");
        assert!(board
            .record(catalog(), "delivery-1", FeedbackVote::NotHelpful)
            .is_err());
    }

    #[test]
    fn board_rejects_unknown_items() {
        let mut board = FeedbackBoard::new();
        let err = board
            .record(catalog(), "nope-9", FeedbackVote::Helpful)
            .unwrap_err();
        assert_eq!(err, FaqError::UnknownItem("nope-9".to_string()));
    }

    #[test]
    fn reset_returns_prompts_to_idle() {
        let mut board = FeedbackBoard::new();
        board
            .record(catalog(), "support-1", FeedbackVote::Helpful)
            .expect("vote");
        board.reset();
        assert_eq!(board.state("support-1"), FeedbackState::Idle);
        assert!(board
            .record(catalog(), "support-1", FeedbackVote::Helpful)
            .is_ok());
    }

    #[test]
    fn forget_and_retain_drop_prompts() {
        let mut board = FeedbackBoard::new();
        for id in ["delivery-1", "delivery-2", "delivery-3"] {
            board.record(catalog(), id, FeedbackVote::Helpful).expect("vote");
        }
        board.forget("delivery-1");
        board.retain(|id| id != "delivery-2");
        assert_eq!(board.state("delivery-1"), FeedbackState::Idle);
        assert_eq!(board.state("delivery-2"), FeedbackState::Idle);
        assert_eq!(
            board.state("delivery-3"),
            FeedbackState::Voted(FeedbackVote::Helpful)
        );
    }

    #[test]
    fn vote_from_flag() {
        assert_eq!(FeedbackVote::from_helpful(true), FeedbackVote::Helpful);
        assert_eq!(FeedbackVote::from_helpful(false), FeedbackVote::NotHelpful);
    }
}
