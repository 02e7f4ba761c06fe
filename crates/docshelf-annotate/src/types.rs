//! Wire types for the external endpoints.

use serde::Deserialize;

/// One generated result from the inference endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub generated_text: String,
}

/// The inference endpoint replies either with a sequence of candidates or a
/// single candidate object. Anything else (error payload, wrong shape) is
/// treated as malformed and yields an empty string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Sequence(Vec<Candidate>),
    Single(Candidate),
}

/// Pull the first candidate's generated text from a response body. An empty
/// sequence or a malformed payload yields an empty string.
pub fn first_generated_text(body: &str) -> String {
    match serde_json::from_str::<GenerateResponse>(body) {
        Ok(GenerateResponse::Sequence(candidates)) => candidates
            .into_iter()
            .next()
            .map(|c| c.generated_text)
            .unwrap_or_default(),
        Ok(GenerateResponse::Single(candidate)) => candidate.generated_text,
        Err(_) => String::new(),
    }
}

/// Chat-completions response, the subset we read.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: String,
}
