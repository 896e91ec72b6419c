//! # lyricfind-core
//!
//! Core models and error handling for the `LyricFind` lyrics client.

pub mod de;
pub mod error;
pub mod types;

pub use error::{Error, ProviderError, Result, ValidationError};
pub use types::*;
