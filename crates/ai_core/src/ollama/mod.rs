//! Ollama inference engine

mod client;

pub use client::OllamaInferenceEngine;
