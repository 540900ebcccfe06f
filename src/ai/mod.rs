//! Request/response client for the hosted generative-model endpoint.
//!
//! The wire shapes, prompt templates and parsers live in [`protocol`] and are
//! pure; [`client`] adds the single outbound fetch per operation and only
//! exists on wasm targets.

pub mod error;
pub mod protocol;

#[cfg(target_arch = "wasm32")]
pub mod client;

pub use error::AiError;
pub use protocol::{CuratorReply, SpaceAnalysis, CHAT_FALLBACK};

#[cfg(target_arch = "wasm32")]
pub use client::GeminiClient;
