#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("credential.missing")]
    Missing,
    #[error("credential.configuration_failed")]
    ConfigurationFailed,
    #[error("credential.validation_failed: {0}")]
    ValidationFailed(String),
    #[error("credential.compromised")]
    Compromised,
}

impl CredentialError {
    /// Classifies a failed validation call from its error text.
    ///
    /// A `403` status or the word `leaked` anywhere in the message marks
    /// the credential as revoked/compromised. Substring matching is a
    /// documented heuristic for wording-based upstream responses; the
    /// Gemini adapter also folds the numeric HTTP status into the message
    /// so a real 403 always lands here regardless of wording.
    pub fn from_validation_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("403") || message.to_lowercase().contains("leaked") {
            CredentialError::Compromised
        } else {
            CredentialError::ValidationFailed(message)
        }
    }

    pub fn is_compromised(&self) -> bool {
        matches!(self, CredentialError::Compromised)
    }
}
