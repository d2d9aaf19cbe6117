//! Mock provider implementations for testing.

use super::{CompletionOptions, ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Scripted text provider.
///
/// Returns a fixed response (or a fixed failure) and counts
/// invocations so tests can assert that the stub content paths never
/// reach a provider. Stop sequences are honored the way the real
/// runtime applies them: output is cut before the first match.
pub struct MockTextProvider {
    response: String,
    fail_with: Option<String>,
    calls: Arc<AtomicUsize>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl MockTextProvider {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            fail_with: None,
            calls: Arc::new(AtomicUsize::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    /// A provider that fails every call with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new("")
        }
    }

    /// Shared call counter; clone before handing the provider off.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Shared view of the most recently submitted prompt.
    pub fn prompt_recorder(&self) -> Arc<Mutex<Option<String>>> {
        Arc::clone(&self.last_prompt)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().expect("prompt recorder poisoned") = Some(prompt.to_string());

        if let Some(message) = &self.fail_with {
            return Err(ProviderError::ApiError(message.clone()));
        }

        let mut output = self.response.clone();
        let cut = options
            .stop
            .iter()
            .filter_map(|s| output.find(s.as_str()))
            .min();
        if let Some(idx) = cut {
            output.truncate(idx);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stop_sequence_truncates_output() {
        let provider = MockTextProvider::new("Hello. World");
        let options = CompletionOptions {
            temperature: 0.0,
            stop: vec![".".to_string()],
        };

        let out = provider.complete("x", &options).await.unwrap();
        assert_eq!(out, "Hello");
    }

    #[tokio::test]
    async fn no_stop_returns_full_response() {
        let provider = MockTextProvider::new("Hello. World");
        let out = provider
            .complete("x", &CompletionOptions::default())
            .await
            .unwrap();
        assert_eq!(out, "Hello. World");
    }

    #[tokio::test]
    async fn failing_provider_counts_calls() {
        let provider = MockTextProvider::failing("connection refused");
        let calls = provider.call_counter();

        let err = provider
            .complete("x", &CompletionOptions::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
