use chrono::NaiveDate;

use business::domain::history::model::QuestionRecord;

/// Date column format in the history file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of the history file: question text plus ISO expiration date.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionRow {
    pub question: String,
    pub expires_on: String,
}

impl QuestionRow {
    pub fn from_domain(record: &QuestionRecord) -> Self {
        Self {
            question: record.question.clone(),
            expires_on: record.expires_on.format(DATE_FORMAT).to_string(),
        }
    }

    /// Converts back to a domain record. Returns None when the date
    /// column does not parse; callers skip such rows.
    pub fn into_domain(self) -> Option<QuestionRecord> {
        let expires_on = NaiveDate::parse_from_str(&self.expires_on, DATE_FORMAT).ok()?;
        Some(QuestionRecord::from_storage(self.question, expires_on))
    }

    /// Encodes the row as one newline-terminated CSV line.
    pub fn encode(&self) -> String {
        format!(
            "{},{}\n",
            escape_field(&self.question),
            escape_field(&self.expires_on)
        )
    }
}

/// Quotes a field when it contains a delimiter, quote, or line break,
/// doubling embedded quotes. Matches what the original log writer
/// produced, so existing files stay readable.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Parses the whole file content into rows of fields. Quoted fields may
/// span lines; blank lines between rows are skipped.
pub fn parse_rows(content: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = content.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            ',' => {
                fields.push(std::mem::take(&mut field));
                // An empty trailing field still counts as a column.
            }
            '\r' => {}
            '\n' => {
                if !field.is_empty() || !fields.is_empty() {
                    fields.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut fields));
                }
            }
            _ => field.push(ch),
        }
    }

    // Final row without a trailing newline.
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        rows.push(fields);
    }

    rows
}
