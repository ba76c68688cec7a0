use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::history::model::QuestionRecord;

/// Upper bound on how many history entries a single read returns.
pub const MAX_RECENT_QUESTIONS: usize = 50;

pub struct GetRecentQuestionsParams {
    pub limit: usize,
}

impl Default for GetRecentQuestionsParams {
    fn default() -> Self {
        Self {
            limit: MAX_RECENT_QUESTIONS,
        }
    }
}

#[async_trait]
pub trait GetRecentQuestionsUseCase: Send + Sync {
    /// Returns the last `min(limit, MAX_RECENT_QUESTIONS)` stored
    /// questions, most recently appended first.
    async fn execute(
        &self,
        params: GetRecentQuestionsParams,
    ) -> Result<Vec<QuestionRecord>, RepositoryError>;
}
