use chrono::NaiveDate;
use poem_openapi::Object;

use business::domain::history::model::QuestionRecord;

#[derive(Debug, Clone, Object)]
pub struct QuestionRecordResponse {
    /// The question text as originally submitted
    pub question: String,
    /// Advisory expiration date (submission date + 7 days)
    pub expires_on: NaiveDate,
}

impl From<QuestionRecord> for QuestionRecordResponse {
    fn from(record: QuestionRecord) -> Self {
        Self {
            question: record.question,
            expires_on: record.expires_on,
        }
    }
}
