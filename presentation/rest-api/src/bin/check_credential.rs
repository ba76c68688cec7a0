//! Quick tester for the Gemini API credential.
//!
//! Usage: check-credential
//!
//! Loads `GOOGLE_API_KEY` from the environment (or .env), performs the
//! read-only model-listing call, and prints actionable guidance when a
//! 403/leaked-key response is received.
//!
//! Exit codes:
//! - 0: key valid, models listed
//! - 1: no key configured
//! - 2: HTTP client could not be constructed (missing TLS backend)
//! - 3: client configuration error
//! - 4: leaked/revoked key detected
//! - 5: any other validation failure

use dotenvy::dotenv;

use business::domain::credential::errors::CredentialError;
use business::domain::credential::services::ModelCatalogService;
use business::domain::credential::value_objects::ApiKey;
use gemini::client::{GeminiClient, build_http_client};
use gemini::model_catalog::ModelCatalogGemini;

const EXIT_OK: i32 = 0;
const EXIT_MISSING_KEY: i32 = 1;
const EXIT_MISSING_DEPENDENCY: i32 = 2;
const EXIT_CONFIGURATION_ERROR: i32 = 3;
const EXIT_LEAKED_KEY: i32 = 4;
const EXIT_OTHER_FAILURE: i32 = 5;

const MODELS_TO_SHOW: usize = 10;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let key = ApiKey::from_env_value(std::env::var("GOOGLE_API_KEY").ok());
    println!("GOOGLE_API_KEY present: {}", !key.is_empty());
    println!("Masked value: {}", key.masked());

    if key.is_empty() {
        println!(
            "No API key found in environment. Please set GOOGLE_API_KEY in your .env or environment."
        );
        std::process::exit(EXIT_MISSING_KEY);
    }

    let http_client = match build_http_client() {
        Ok(client) => client,
        Err(e) => {
            println!("Could not construct the HTTP client: {}", e);
            std::process::exit(EXIT_MISSING_DEPENDENCY);
        }
    };

    let catalog = ModelCatalogGemini::new(GeminiClient::with_client(
        http_client,
        key.as_str().to_string(),
    ));

    match catalog.list_models().await {
        Ok(models) => {
            println!(
                "Retrieved {} models. Showing up to first {}:",
                models.len(),
                MODELS_TO_SHOW
            );
            for model in models.iter().take(MODELS_TO_SHOW) {
                println!(" - {}", model.name);
            }
            println!("Key appears valid for listing models.");
            std::process::exit(EXIT_OK);
        }
        Err(err) => {
            let classified = match err {
                CredentialError::ValidationFailed(message) => {
                    println!("Request failed: {}", message);
                    CredentialError::from_validation_message(message)
                }
                other => other,
            };

            match classified {
                CredentialError::Compromised => {
                    println!();
                    println!("Detected a 403/leaked-key response. Actions to take:");
                    println!(
                        "1) Immediately revoke or delete the compromised API key in the Google Cloud Console."
                    );
                    println!(
                        "2) Create a new API key and restrict it: specify allowed IPs, referrers, and limit which APIs it can call."
                    );
                    println!(
                        "3) Update your local .env with the new key and do NOT commit it to version control."
                    );
                    println!(
                        "4) If the old key was committed to git, remove it from history and rotate any other secrets that were exposed."
                    );
                    println!("5) Re-run this diagnostic to confirm the new key validates.");
                    std::process::exit(EXIT_LEAKED_KEY);
                }
                CredentialError::ConfigurationFailed => {
                    println!("Error configuring the Gemini client.");
                    std::process::exit(EXIT_CONFIGURATION_ERROR);
                }
                CredentialError::Missing => {
                    // Already handled above; kept for exhaustiveness.
                    std::process::exit(EXIT_MISSING_KEY);
                }
                CredentialError::ValidationFailed(_) => {
                    std::process::exit(EXIT_OTHER_FAILURE);
                }
            }
        }
    }
}
