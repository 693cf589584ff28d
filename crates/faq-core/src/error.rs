/// Errors raised by the FAQ knowledge base.
///
/// Search never fails; an empty result is a normal outcome. These variants cover
/// lookups by id and the one-shot feedback rule.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FaqError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown FAQ item: {0}")]
    UnknownItem(String),

    #[error("FAQ item is not displayed: {0}")]
    ItemNotDisplayed(String),

    #[error("no feedback prompt is shown for {0}; expand it first")]
    FeedbackNotShown(String),

    #[error("feedback already recorded for {0}")]
    FeedbackAlreadyRecorded(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}
