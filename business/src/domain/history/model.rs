use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// How long a stored question is considered current. The date is stored
/// alongside the question as advisory metadata; nothing filters or
/// deletes by it.
pub const RETENTION_DAYS: i64 = 7;

/// A single submitted question with its advisory expiration date.
/// Records are append-only and immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub expires_on: NaiveDate,
}

impl QuestionRecord {
    /// Creates a record for a question submitted at `asked_at`, expiring
    /// `RETENTION_DAYS` later at date granularity.
    pub fn new(question: impl Into<String>, asked_at: DateTime<Utc>) -> Self {
        Self {
            question: question.into(),
            expires_on: (asked_at + Duration::days(RETENTION_DAYS)).date_naive(),
        }
    }

    /// Rebuilds a record read back from storage.
    pub fn from_storage(question: String, expires_on: NaiveDate) -> Self {
        Self {
            question,
            expires_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_expire_seven_days_after_submission() {
        let asked_at = Utc.with_ymd_and_hms(2024, 3, 10, 14, 30, 0).unwrap();
        let record = QuestionRecord::new("What is anemia?", asked_at);

        assert_eq!(record.question, "What is anemia?");
        assert_eq!(
            record.expires_on,
            NaiveDate::from_ymd_opt(2024, 3, 17).unwrap()
        );
    }

    #[test]
    fn should_truncate_expiration_to_date_granularity() {
        // Late-evening submissions still expire on the calendar date a
        // week out, not at a time of day.
        let asked_at = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let record = QuestionRecord::new("q", asked_at);

        assert_eq!(
            record.expires_on,
            NaiveDate::from_ymd_opt(2025, 1, 7).unwrap()
        );
    }

    #[test]
    fn should_allow_duplicate_questions_as_distinct_records() {
        let asked_at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let first = QuestionRecord::new("same question", asked_at);
        let second = QuestionRecord::new("same question", asked_at);

        assert_eq!(first, second);
    }
}
