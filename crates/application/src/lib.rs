//! Application layer - Use cases and orchestration
//!
//! Contains the port definitions the adapters implement and the
//! dashboard orchestration built on top of the domain aggregator.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
