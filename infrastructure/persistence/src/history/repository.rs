use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use business::domain::errors::RepositoryError;
use business::domain::history::model::QuestionRecord;
use business::domain::history::repository::QuestionHistoryRepository;

use super::entity::{QuestionRow, parse_rows};

/// CSV-file question log.
///
/// The file is opened in append mode for every write and read in full
/// for every read; no handle is kept open and no locking is done.
/// Single-process operation is assumed: concurrent writers from
/// separate processes may interleave rows.
pub struct QuestionHistoryCsv {
    path: PathBuf,
}

impl QuestionHistoryCsv {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionHistoryRepository for QuestionHistoryCsv {
    async fn append(&self, record: &QuestionRecord) -> Result<(), RepositoryError> {
        let line = QuestionRow::from_domain(record).encode();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                tracing::warn!("could not open history file {:?}: {}", self.path, e);
                RepositoryError::WriteFailed
            })?;

        file.write_all(line.as_bytes()).await.map_err(|e| {
            tracing::warn!("could not append to history file {:?}: {}", self.path, e);
            RepositoryError::WriteFailed
        })?;

        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<QuestionRecord>, RepositoryError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            // A log that has never been written to reads as empty.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => {
                tracing::warn!("could not read history file {:?}: {}", self.path, e);
                return Err(RepositoryError::ReadFailed);
            }
        };

        let mut records = Vec::new();
        for row in parse_rows(&content) {
            if row.len() != 2 {
                tracing::warn!("skipping malformed history row with {} columns", row.len());
                continue;
            }
            let mut row = row.into_iter();
            let entity = QuestionRow {
                question: row.next().unwrap_or_default(),
                expires_on: row.next().unwrap_or_default(),
            };
            match entity.into_domain() {
                Some(record) => records.push(record),
                None => tracing::warn!("skipping history row with unparseable date"),
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn repo_in(dir: &TempDir) -> QuestionHistoryCsv {
        QuestionHistoryCsv::new(dir.path().join("question_history.csv"))
    }

    #[tokio::test]
    async fn should_read_empty_when_file_does_not_exist() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        let records = repo.read_all().await.unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn should_append_then_read_back_in_insertion_order() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        let now = Utc::now();

        repo.append(&QuestionRecord::new("first", now)).await.unwrap();
        repo.append(&QuestionRecord::new("second", now)).await.unwrap();

        let records = repo.read_all().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].question, "first");
        assert_eq!(records[1].question, "second");
        assert_eq!(records[1].expires_on, (now + Duration::days(7)).date_naive());
    }

    #[tokio::test]
    async fn should_preserve_questions_with_commas_and_quotes() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        let tricky = "fever, chills and a \"weird\" rash\nsince monday";
        repo.append(&QuestionRecord::new(tricky, Utc::now()))
            .await
            .unwrap();

        let records = repo.read_all().await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, tricky);
    }

    #[tokio::test]
    async fn should_store_duplicate_questions_as_separate_rows() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        let now = Utc::now();

        repo.append(&QuestionRecord::new("same", now)).await.unwrap();
        repo.append(&QuestionRecord::new("same", now)).await.unwrap();

        let records = repo.read_all().await.unwrap();

        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn should_skip_malformed_rows_on_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("question_history.csv");
        tokio::fs::write(
            &path,
            "good question,2024-03-17\nonly-one-column\nbad date,whenever\nanother,2024-03-18\n",
        )
        .await
        .unwrap();

        let repo = QuestionHistoryCsv::new(&path);
        let records = repo.read_all().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].question, "good question");
        assert_eq!(records[1].question, "another");
    }

    #[tokio::test]
    async fn should_keep_expired_rows_on_read() {
        // Expiration is advisory metadata: reads never filter by it.
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("question_history.csv");
        tokio::fs::write(&path, "ancient question,2019-01-08\n")
            .await
            .unwrap();

        let repo = QuestionHistoryCsv::new(&path);
        let records = repo.read_all().await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "ancient question");
    }
}
