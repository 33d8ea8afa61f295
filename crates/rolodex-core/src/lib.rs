//! Core types and trait definitions for the Rolodex contact store.
//!
//! This crate is deliberately free of HTTP and runtime dependencies.
//! All other crates depend on it.

pub mod contact;
pub mod error;
pub mod store;

pub use error::{Error, Result};
