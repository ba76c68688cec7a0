use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::history::model::QuestionRecord;
use crate::domain::history::repository::QuestionHistoryRepository;
use crate::domain::history::use_cases::get_recent::{
    GetRecentQuestionsParams, GetRecentQuestionsUseCase, MAX_RECENT_QUESTIONS,
};
use crate::domain::logger::Logger;

pub struct GetRecentQuestionsUseCaseImpl {
    pub repository: Arc<dyn QuestionHistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecentQuestionsUseCase for GetRecentQuestionsUseCaseImpl {
    async fn execute(
        &self,
        params: GetRecentQuestionsParams,
    ) -> Result<Vec<QuestionRecord>, RepositoryError> {
        let limit = params.limit.min(MAX_RECENT_QUESTIONS);

        let records = self.repository.read_all().await?;

        self.logger
            .debug(&format!("History read: {} stored records", records.len()));

        // Last `limit` appended records, newest first.
        let start = records.len().saturating_sub(limit);
        let mut recent: Vec<QuestionRecord> = records[start..].to_vec();
        recent.reverse();

        Ok(recent)
    }
}
