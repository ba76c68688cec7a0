use reqwest::Client;

/// Model identifier used for every completion request.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Shared Gemini HTTP client configuration.
///
/// One handle is constructed at startup and injected into the adapters;
/// there is no process-global client state.
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

/// Builds the HTTP client the handle wraps. Exposed separately so the
/// diagnostic binary can report a client-construction failure as its
/// own condition instead of masking it.
pub fn build_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        let client = build_http_client().unwrap_or_default();
        Self::with_client(client, api_key)
    }

    pub fn with_client(client: Client, api_key: String) -> Self {
        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Returns the generateContent endpoint URL for the fixed model.
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, GEMINI_MODEL, self.api_key
        )
    }

    /// Returns the read-only model listing endpoint URL.
    pub fn list_models_url(&self) -> String {
        format!("{}/models?key={}", self.base_url, self.api_key)
    }
}
