//! Error types for the Vitrine library.
//!
//! This crate provides the foundation error types used throughout the Vitrine
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vitrine_error::{ConfigError, VitrineResult};
//!
//! fn load_credential() -> VitrineResult<String> {
//!     Err(ConfigError::new("GEMINI_API_KEY environment variable not set"))?
//! }
//!
//! match load_credential() {
//!     Ok(key) => println!("Got key of length {}", key.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod provider;

pub use config::ConfigError;
pub use error::{VitrineError, VitrineErrorKind, VitrineResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use provider::{ProviderError, ProviderErrorKind};
