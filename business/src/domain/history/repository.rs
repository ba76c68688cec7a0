use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::history::model::QuestionRecord;

/// Repository port for the append-only question log.
///
/// Insertion order is the only ordering the store guarantees; reads
/// return every historical record regardless of expiration date.
#[async_trait]
pub trait QuestionHistoryRepository: Send + Sync {
    async fn append(&self, record: &QuestionRecord) -> Result<(), RepositoryError>;
    async fn read_all(&self) -> Result<Vec<QuestionRecord>, RepositoryError>;
}
