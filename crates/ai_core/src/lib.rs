//! AI Core - LLM inference for weather narratives
//!
//! Provides abstractions for LLM inference against an Ollama-compatible
//! server. The dashboard only ever needs short single-turn completions,
//! so the API is non-streaming.

pub mod config;
pub mod error;
pub mod ollama;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use ollama::OllamaInferenceEngine;
pub use ports::{InferenceEngine, InferenceRequest, InferenceResponse, TokenUsage};
