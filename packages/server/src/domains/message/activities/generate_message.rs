use thiserror::Error;
use tracing::{debug, warn};

use crate::common::{enforce_length, exceeds_limit};
use crate::domains::instagram::CanonicalPost;
use crate::domains::message::prompts::{rewrite_prompt, SYSTEM_PROMPT};
use crate::kernel::ServerDeps;

pub const NO_DATA_MESSAGE: &str = "No data available to analyze.";

/// Generation failed. `Display` keeps the "Error during analysis: ..." wording
/// that HTTP clients see in the `analysis` field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error("Error during analysis: LLM API key not configured")]
    Configuration,

    #[error("Error during analysis: {0}")]
    Backend(String),
}

/// Rewrite a post into a message of at most 280 characters.
///
/// An absent or failed (`ok=false`) post yields [`NO_DATA_MESSAGE`] without
/// calling the model. A fetched post is always sent, even with a blank caption.
pub async fn generate_message(
    post: Option<&CanonicalPost>,
    deps: &ServerDeps,
) -> Result<String, GenerateError> {
    let post = match post {
        Some(post) if post.ok => post,
        _ => return Ok(NO_DATA_MESSAGE.to_string()),
    };

    let ai = deps.ai.as_ref().ok_or(GenerateError::Configuration)?;

    let completion = ai
        .complete(SYSTEM_PROMPT, &rewrite_prompt(post))
        .await
        .map_err(|e| {
            warn!(error = %e, "Message generation failed");
            GenerateError::Backend(e.to_string())
        })?;

    let text = completion.trim();
    if exceeds_limit(text) {
        debug!(chars = text.chars().count(), "Generated message over limit, truncating");
    }

    Ok(enforce_length(text))
}
