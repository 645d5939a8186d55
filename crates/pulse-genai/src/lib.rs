//! Typed HTTP client for the generative-model REST API.
//!
//! Wraps `reqwest` with endpoint construction, API-key header handling, and
//! typed request/response bodies for `models/{model}:generateContent`.
//! Supports structured-output schemas, search grounding, inline image
//! payloads, and multi-turn chat sessions. No retry: a failed call surfaces
//! immediately and the next user action is the retry.

pub mod chat;
pub mod client;
pub mod error;
pub mod types;

pub use chat::ChatSession;
pub use client::GenAiClient;
pub use error::GenAiError;
pub use types::{
    Candidate, Content, GenerateRequest, GenerateResponse, GenerationConfig, InlineData, Part,
};
