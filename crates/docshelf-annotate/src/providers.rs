//! External endpoint calls for the two annotation backends.
//!
//! Both return `Option<String>`: `Some(line)` with a cleaned single-line
//! answer, or `None` when the call failed or produced nothing usable. The
//! caller substitutes the fallback constants — errors never propagate.

use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

use crate::config::{AnnotateConfig, Backend};
use crate::types::{first_generated_text, ChatCompletionResponse};

/// Instruction for the category label, embedding the full document text.
pub fn category_prompt(content: &str) -> String {
    format!(
        "Analyze the following document content and suggest a category label that \
         best describes it. The category should be a single word or a short phrase. \
         Respond with only the category label and nothing else. \
         Document Content: {}",
        content
    )
}

/// Instruction for the one-sentence summary.
pub fn summary_prompt(content: &str) -> String {
    format!(
        "Summarize the following document content in one sentence. \
         Respond with only the summary and nothing else. \
         Document Content: {}",
        content
    )
}

/// Query the free-form inference endpoint with a prompt.
pub async fn generate(
    client: &Client,
    config: &AnnotateConfig,
    prompt: &str,
    max_length: usize,
) -> Option<String> {
    debug_assert_eq!(config.backend, Backend::Inference);

    let url = format!("{}/{}", config.base_url.trim_end_matches('/'), config.model);
    let body = json!({
        "inputs": prompt,
        "parameters": { "max_length": max_length },
    });

    let mut request = client.post(&url).json(&body);
    if let Some(token) = &config.api_token {
        request = request.header("Authorization", format!("Bearer {}", token));
    }

    let response = match request.send().await {
        Ok(r) => r,
        Err(e) => {
            warn!("inference request failed: {}", e);
            return None;
        }
    };

    if !response.status().is_success() {
        warn!("inference endpoint returned {}", response.status());
        // Fall through: a JSON error body decodes as malformed and yields
        // the same empty result as an empty candidate list.
    }

    let text = response.text().await.unwrap_or_default();
    let generated = first_generated_text(&text);
    clean_output(&generated, prompt)
}

/// Query the chat-completions endpoint with a system/user message pair.
pub async fn chat(
    client: &Client,
    config: &AnnotateConfig,
    system: &str,
    user: &str,
    max_tokens: usize,
) -> Option<String> {
    debug_assert_eq!(config.backend, Backend::Chat);

    let url = format!(
        "{}/chat/completions",
        config.base_url.trim_end_matches('/')
    );
    let body = json!({
        "model": config.model,
        "messages": [
            { "role": "system", "content": system },
            { "role": "user", "content": user },
        ],
        "max_tokens": max_tokens,
    });

    let mut request = client.post(&url).json(&body);
    if let Some(token) = &config.api_token {
        request = request.header("Authorization", format!("Bearer {}", token));
    }

    let response = match request.send().await {
        Ok(r) => r,
        Err(e) => {
            warn!("chat request failed: {}", e);
            return None;
        }
    };

    if !response.status().is_success() {
        warn!("chat endpoint returned {}", response.status());
        return None;
    }

    let parsed: ChatCompletionResponse = match response.json().await {
        Ok(p) => p,
        Err(e) => {
            debug!("chat response did not parse: {}", e);
            return None;
        }
    };

    let content = parsed.choices.into_iter().next()?.message.content;
    let content = content.trim();
    if content.is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}

/// Strip any verbatim echo of the instruction from the model output, trim,
/// and take the first line. `None` when nothing remains.
pub fn clean_output(generated: &str, prompt: &str) -> Option<String> {
    let stripped = generated.replace(prompt, "");
    let line = stripped.trim().lines().next().unwrap_or("").trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_output_takes_first_line() {
        assert_eq!(
            clean_output("Invoice\nSome extra explanation", "prompt"),
            Some("Invoice".to_string())
        );
    }

    #[test]
    fn test_clean_output_strips_prompt_echo() {
        let prompt = category_prompt("Quarterly results were strong.");
        let echoed = format!("{}\nReport", prompt);
        assert_eq!(clean_output(&echoed, &prompt), Some("Report".to_string()));
    }

    #[test]
    fn test_clean_output_empty_yields_none() {
        let prompt = "whatever";
        assert_eq!(clean_output("", prompt), None);
        assert_eq!(clean_output("   \n  ", prompt), None);
        assert_eq!(clean_output(prompt, prompt), None);
    }

    #[test]
    fn test_prompts_embed_content() {
        let p = summary_prompt("Hello World");
        assert!(p.ends_with("Document Content: Hello World"));
    }
}
