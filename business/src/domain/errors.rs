/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("history.write_failed")]
    WriteFailed,
    #[error("history.read_failed")]
    ReadFailed,
}
