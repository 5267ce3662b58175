//! Generative provider abstraction layer.
//!
//! This module provides a trait-based abstraction for generative text
//! providers, so the analysis pipeline can be exercised against a stub
//! backend while production talks to Gemini.

mod gemini;
mod provider;

pub use gemini::{
    GeminiProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GEMINI_API_KEY_ENV,
};
pub use provider::{GenerationOptions, GenerativeProvider, ProviderError};
