//! Gemini REST client for repair analysis.
//!
//! Provides prompt construction, the HTTP wrapper around the Gemini
//! `generateContent` endpoints, and helpers for digging JSON out of
//! model replies that arrive wrapped in markdown fences or prose.

pub mod client;
pub mod extract;
pub mod prompts;

pub use client::{GeminiClient, GeminiConfig, GeminiError};
