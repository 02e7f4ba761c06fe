//! Annotator configuration and backend selection.

pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_INFERENCE_MODEL: &str = "google/flan-t5-large";

pub const DEFAULT_CHAT_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Which external endpoint style the annotator talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Free-form prompt to `{base_url}/{model}`, Hugging Face Inference style.
    Inference,
    /// System/user message pair to `{base_url}/chat/completions`, OpenAI style.
    Chat,
}

/// Annotator configuration, read from the process environment at startup.
#[derive(Debug, Clone)]
pub struct AnnotateConfig {
    pub backend: Backend,
    pub base_url: String,
    /// Bearer credential. Absence never crashes the process; unauthenticated
    /// calls simply degrade to the fallback strings.
    pub api_token: Option<String>,
    pub model: String,
}

impl AnnotateConfig {
    /// Build configuration from environment variables and defaults.
    pub fn from_env() -> Self {
        let backend = match std::env::var("DOCSHELF_LLM_BACKEND").as_deref() {
            Ok("chat") => Backend::Chat,
            _ => Backend::Inference,
        };

        let (base_url, api_token, default_model) = match backend {
            Backend::Inference => (
                std::env::var("HUGGING_FACE_API_URL")
                    .unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string()),
                std::env::var("HUGGING_FACE_API_TOKEN").ok(),
                DEFAULT_INFERENCE_MODEL,
            ),
            Backend::Chat => (
                std::env::var("OPENAI_API_URL").unwrap_or_else(|_| DEFAULT_CHAT_URL.to_string()),
                std::env::var("OPENAI_API_KEY").ok(),
                DEFAULT_CHAT_MODEL,
            ),
        };

        let model =
            std::env::var("DOCSHELF_LLM_MODEL").unwrap_or_else(|_| default_model.to_string());

        Self {
            backend,
            base_url,
            api_token,
            model,
        }
    }
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Inference,
            base_url: DEFAULT_INFERENCE_URL.to_string(),
            api_token: None,
            model: DEFAULT_INFERENCE_MODEL.to_string(),
        }
    }
}
