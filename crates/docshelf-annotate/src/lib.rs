//! Docshelf Annotate — document category and summary via external LLM APIs.
//!
//! Two backends satisfy the same contract: a free-form inference endpoint
//! (Hugging Face style) and a chat-completions endpoint (OpenAI style),
//! selected by configuration. Annotation never fails the caller — network
//! errors, non-2xx statuses, and malformed payloads all degrade to fixed
//! fallback strings so a flaky external dependency degrades metadata
//! quality rather than blocking ingestion.

pub mod config;
pub mod providers;
pub mod types;

pub use config::{AnnotateConfig, Backend};

use reqwest::Client;
use tracing::debug;

/// Fallback category when the endpoint yields nothing usable.
pub const FALLBACK_CATEGORY: &str = "other";
/// Fallback summary when the endpoint yields nothing usable.
pub const FALLBACK_SUMMARY: &str = "No summary available.";

/// Document annotator backed by an external text-generation endpoint.
pub struct Annotator {
    client: Client,
    config: AnnotateConfig,
}

impl Annotator {
    pub fn new(config: AnnotateConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Produce a short category label for the document text. Degrades to
    /// `"other"` on any failure.
    pub async fn categorize(&self, text: &str) -> String {
        let answer = match self.config.backend {
            Backend::Inference => {
                let prompt = providers::category_prompt(text);
                providers::generate(&self.client, &self.config, &prompt, 20).await
            }
            Backend::Chat => {
                providers::chat(
                    &self.client,
                    &self.config,
                    "You are a helpful assistant that categorizes documents.",
                    &format!(
                        "Categorize the following document content into one of these \
                         categories: Invoice, Contract, Report, or Other. Content: {}",
                        text
                    ),
                    10,
                )
                .await
            }
        };

        match answer {
            Some(label) => {
                debug!("categorized document as {:?}", label);
                label
            }
            None => FALLBACK_CATEGORY.to_string(),
        }
    }

    /// Produce a one-sentence summary of the document text. Degrades to
    /// `"No summary available."` on any failure.
    pub async fn summarize(&self, text: &str) -> String {
        let answer = match self.config.backend {
            Backend::Inference => {
                let prompt = providers::summary_prompt(text);
                providers::generate(&self.client, &self.config, &prompt, 50).await
            }
            Backend::Chat => {
                providers::chat(
                    &self.client,
                    &self.config,
                    "You are a helpful assistant that summarizes documents.",
                    &format!(
                        "Summarize the following document content in one sentence: {}",
                        text
                    ),
                    50,
                )
                .await
            }
        };

        answer.unwrap_or_else(|| FALLBACK_SUMMARY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config(backend: Backend) -> AnnotateConfig {
        AnnotateConfig {
            backend,
            // Nothing listens here; requests fail with connection refused.
            base_url: "http://127.0.0.1:1".to_string(),
            api_token: None,
            model: "test-model".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unreachable_inference_endpoint_falls_back() {
        let annotator = Annotator::new(unreachable_config(Backend::Inference));
        assert_eq!(annotator.categorize("").await, FALLBACK_CATEGORY);
        assert_eq!(annotator.summarize("").await, FALLBACK_SUMMARY);
    }

    #[tokio::test]
    async fn test_unreachable_chat_endpoint_falls_back() {
        let annotator = Annotator::new(unreachable_config(Backend::Chat));
        assert_eq!(annotator.categorize("some text").await, FALLBACK_CATEGORY);
        assert_eq!(annotator.summarize("some text").await, FALLBACK_SUMMARY);
    }
}
