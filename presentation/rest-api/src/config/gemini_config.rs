use business::domain::credential::value_objects::ApiKey;

/// Configuration for Gemini API access.
///
/// A missing key is not a startup error: the credential status endpoint
/// must still serve so the front end can show the warning state.
pub struct GeminiConfig {
    pub api_key: ApiKey,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        let api_key = ApiKey::from_env_value(std::env::var("GOOGLE_API_KEY").ok());
        if api_key.is_empty() {
            tracing::warn!("GOOGLE_API_KEY is not set; inference calls will fail");
        }
        Self { api_key }
    }
}
