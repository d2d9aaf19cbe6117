//! Completion provider abstraction and implementations.
//!
//! A trait seam over the external text-completion runtime so the
//! adapter can be exercised against a mock in tests.

pub mod mock;
pub mod ollama;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Decoding options passed with every completion call.
#[derive(Debug, Clone, Default)]
pub struct CompletionOptions {
    /// Sampling temperature; zero means greedy/deterministic decoding.
    pub temperature: f32,

    /// Stop sequences. Output is truncated before the first match.
    pub stop: Vec<String>,
}

/// A text-completion backend.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, ProviderError>;
}
