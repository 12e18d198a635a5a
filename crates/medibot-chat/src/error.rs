//! Error types for the response engine.
//!
//! Both variants describe defects in the engine's own tables, not bad user
//! input. The composer logs them and answers with a generic response.

use medibot_core::{Category, ParseCategoryError, SubTopic};

/// Errors from the chat engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("invalid category: {0}")]
    InvalidCategory(String),
    #[error("no template for {category}/{}", sub_topic.map(|t| t.as_str()).unwrap_or("default"))]
    MissingTemplate {
        category: Category,
        sub_topic: Option<SubTopic>,
    },
}

impl From<ParseCategoryError> for ChatError {
    fn from(err: ParseCategoryError) -> Self {
        ChatError::InvalidCategory(err.0)
    }
}
