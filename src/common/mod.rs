//! Common types and utilities shared across the crate.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The key validity contract ([`IndexKey`])

pub mod config;
pub mod error;
mod key;

pub use error::{Error, Result};
pub use key::IndexKey;
