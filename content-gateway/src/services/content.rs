use std::sync::Arc;

use serde_json::{Map, Value};

use crate::dtos::content::{ContentResult, ContentStatus};
use crate::services::providers::{CompletionOptions, TextProvider};

/// Content provider adapter.
///
/// Every operation returns a [`ContentResult`] and never fails at the
/// call level: provider failures are folded into a `status=error`
/// envelope carrying the failure's description as `content`. The
/// dispatcher returns both forms with HTTP 200.
#[derive(Clone)]
pub struct ContentService {
    provider: Arc<dyn TextProvider>,
    temperature: f32,
}

impl ContentService {
    pub fn new(provider: Arc<dyn TextProvider>, temperature: f32) -> Self {
        Self {
            provider,
            temperature,
        }
    }

    /// Generate text through the completion provider.
    ///
    /// Generation is truncated at the first literal period via a stop
    /// sequence, so multi-sentence output is impossible by
    /// construction. A crude rule, but part of the contract.
    pub async fn generate_text(
        &self,
        prompt: &str,
        parameters: Option<&Map<String, Value>>,
    ) -> ContentResult {
        let final_prompt = match parameters.and_then(|p| p.get("context")) {
            Some(context) => format!(
                "Context: {}\n\nPrompt: {}",
                display_value(context),
                prompt
            ),
            None => prompt.to_string(),
        };

        let options = CompletionOptions {
            temperature: self.temperature,
            stop: vec![".".to_string()],
        };

        let echoed = parameters.cloned().unwrap_or_default();

        match self.provider.complete(&final_prompt, &options).await {
            Ok(output) => ContentResult {
                status: ContentStatus::Success,
                content: output,
                parameters: echoed,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Completion provider call failed");
                ContentResult {
                    status: ContentStatus::Error,
                    content: e.to_string(),
                    parameters: echoed,
                }
            }
        }
    }

    /// Placeholder: echoes the prompt without any provider call.
    // TODO: wire up a real audio backend once one is chosen.
    pub fn generate_audio(
        &self,
        prompt: &str,
        parameters: Option<&Map<String, Value>>,
    ) -> ContentResult {
        ContentResult {
            status: ContentStatus::Success,
            content: format!("Generated audio for prompt: {}", prompt),
            parameters: parameters.cloned().unwrap_or_default(),
        }
    }

    /// Placeholder: echoes the prompt without any provider call.
    // TODO: wire up a real video backend once one is chosen.
    pub fn generate_video(
        &self,
        prompt: &str,
        parameters: Option<&Map<String, Value>>,
    ) -> ContentResult {
        ContentResult {
            status: ContentStatus::Success,
            content: format!("Generated video for prompt: {}", prompt),
            parameters: parameters.cloned().unwrap_or_default(),
        }
    }
}

/// Render a JSON parameter the way it should read inside a prompt:
/// strings bare, everything else as JSON.
fn display_value(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
